//! Image references

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A named bitmap owned and decoded by the host toolkit.
///
/// Handles are cheap to clone; equality is by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    name: Arc<str>,
    /// Render as a template (tinted by the widget's tint color)
    #[serde(default)]
    template: bool,
}

impl ImageHandle {
    pub fn named(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            template: false,
        }
    }

    /// A template image, recolored with the owning widget's tint
    pub fn template(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            template: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_template(&self) -> bool {
        self.template
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
