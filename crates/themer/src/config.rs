//! Engine configuration
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! store_key = "themer_user_theme_key"
//! default_mode = "follow-system"
//! fallback_scheme = "light"
//! settings_path = "settings.toml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::mode::{ColorScheme, ThemeMode};

/// Settings key the mode ordinal is stored under by default
pub const DEFAULT_STORE_KEY: &str = "themer_user_theme_key";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemerConfig {
    /// Key of the persisted mode ordinal
    pub store_key: String,
    /// Mode used when nothing valid is persisted
    pub default_mode: ThemeMode,
    /// Scheme used when the host cannot report the system appearance
    pub fallback_scheme: ColorScheme,
    /// File for [`TomlFileStore`](crate::store::TomlFileStore), if file-backed
    pub settings_path: Option<PathBuf>,
}

impl Default for ThemerConfig {
    fn default() -> Self {
        Self {
            store_key: DEFAULT_STORE_KEY.to_string(),
            default_mode: ThemeMode::FollowSystem,
            fallback_scheme: ColorScheme::Light,
            settings_path: None,
        }
    }
}

impl ThemerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("ThemerConfig::load - loaded {}", path.display());
        Ok(config)
    }

    pub fn with_store_key(mut self, key: impl Into<String>) -> Self {
        self.store_key = key.into();
        self
    }

    pub fn with_default_mode(mut self, mode: ThemeMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn with_fallback_scheme(mut self, scheme: ColorScheme) -> Self {
        self.fallback_scheme = scheme;
        self
    }

    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }
}
