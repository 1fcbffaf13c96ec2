//! Themer
//!
//! A theme application engine: applications define light and dark themes as
//! per-widget-category style sets, and the engine applies them across every
//! live widget, follows the OS appearance when asked to, and remembers the
//! user's choice between runs.
//!
//! # Overview
//!
//! - **Style sets**: per-category records of optional attributes
//!   ([`ButtonStyle`], [`LabelStyle`], ...) with override-wins merging
//! - **Bundles and themes**: one set per category plus custom styles, and an
//!   optional extend hook for cross-widget rules
//! - **Registry**: the category → active style mapping widgets read from
//! - **Coordinator**: mode tracking, system resolution, persistence and
//!   change notification
//!
//! # Quick Start
//!
//! ```rust
//! use themer::{
//!     ButtonStyle, HeadlessHost, MemoryStore, StyleBundle, StyleProperty, Theme,
//!     ThemeCoordinator, ThemeMode, WidgetCategory,
//! };
//! use themer_core::Color;
//!
//! let light = Theme::new(
//!     "Light",
//!     StyleBundle::new().with_button(ButtonStyle::new().with_button_color(Color::BLUE)),
//! );
//! let dark = Theme::new(
//!     "Dark",
//!     StyleBundle::new().with_button(ButtonStyle::new().with_button_color(Color::ORANGE)),
//! );
//!
//! let mut coordinator = ThemeCoordinator::new(HeadlessHost::new(), MemoryStore::new());
//! coordinator.setup(light, dark)?;
//! coordinator.apply(ThemeMode::Dark)?;
//!
//! let registry = coordinator.context().registry();
//! assert_eq!(
//!     registry.color(&WidgetCategory::Button, StyleProperty::BackgroundColor),
//!     Some(Color::ORANGE)
//! );
//! # Ok::<(), themer::ThemeError>(())
//! ```
//!
//! # Merge versus activation
//!
//! Merging keeps every base value the override leaves unset. Activation
//! writes every declared attribute, resetting unset ones to their zero
//! value, so switching themes never leaves stale attributes behind.
//!
//! # Observers
//!
//! Widgets that hold scheme-specific state subscribe through the
//! [`ThemeContext`]. Observers are held weakly and are notified before the
//! new bundle is activated; they read the applied scheme from the context.

pub mod animation;
pub mod bundle;
pub mod category;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod error;
pub mod host;
pub mod image;
pub mod mode;
pub mod observer;
#[cfg(feature = "system-detect")]
pub mod platform;
pub mod registry;
pub mod store;
pub mod style;
pub mod theme;

pub use animation::AnimationSettings;
pub use bundle::{CustomStyle, StyleBundle};
pub use category::WidgetCategory;
pub use config::{ThemerConfig, DEFAULT_STORE_KEY};
pub use context::ThemeContext;
pub use coordinator::ThemeCoordinator;
pub use error::{ConfigError, ExtendError, Result, StoreError, ThemeError};
pub use host::{HeadlessHost, Host, SystemEvent};
pub use image::ThemedImage;
pub use mode::{ColorScheme, ThemeMode, ThemeTarget};
pub use observer::{ObserverHub, ObserverId, Subscription, ThemeObserver};
#[cfg(feature = "system-detect")]
pub use platform::{detect_system_color_scheme, SystemHost};
pub use registry::{StyleRegistry, Themable};
pub use store::{MemoryStore, SettingsStore, TomlFileStore};
pub use style::{
    BarAppearance, ButtonStyle, CollectionCellStyle, CollectionViewStyle, ImageViewStyle, LabelStyle,
    NavigationBarStyle, ResolvedStyle, StyleAttributeSet, StyleProperty, StyleValue, SwitchStyle,
    TableCellStyle, TableViewStyle, ViewStyle,
};
pub use theme::{ExtendHook, Theme};
