//! Error types

use std::path::PathBuf;
use thiserror::Error;

use crate::mode::ColorScheme;

/// Error returned by a theme's extend hook
pub type ExtendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Theme engine errors
#[derive(Debug, Error)]
pub enum ThemeError {
    /// An operation that needs registered themes ran before `setup`
    #[error("themer is not configured: call setup() or setup_universal() first")]
    NotConfigured,

    /// `setup` ran a second time; themes are fixed once configured
    #[error("themer is already configured; themes cannot be replaced after setup")]
    AlreadyConfigured,

    /// The extend hook of the theme being applied failed
    #[error("extend hook of theme '{theme}' ({scheme}) failed: {source}")]
    Extend {
        theme: String,
        scheme: ColorScheme,
        #[source]
        source: ExtendError,
    },
}

/// Settings store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid themer config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
