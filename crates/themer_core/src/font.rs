//! Font descriptors

use serde::{Deserialize, Serialize};

/// Font weight, mirroring the common 100..900 scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Numeric weight on the CSS/OpenType scale
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// A font request resolved by the host toolkit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name; `None` selects the platform system font
    pub family: Option<String>,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    /// The platform system font at `size` points
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn is_system(&self) -> bool {
        self.family.is_none()
    }
}
