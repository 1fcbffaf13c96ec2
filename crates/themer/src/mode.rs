//! Theme modes and color schemes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete light or dark scheme, after any system resolution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        })
    }
}

/// The user's theming policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    FollowSystem,
}

impl ThemeMode {
    /// Stable ordinal written to the settings store
    pub fn ordinal(self) -> i64 {
        match self {
            ThemeMode::Light => 1,
            ThemeMode::Dark => 2,
            ThemeMode::FollowSystem => 3,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal); unknown values yield `None`
    pub fn from_ordinal(value: i64) -> Option<Self> {
        match value {
            1 => Some(ThemeMode::Light),
            2 => Some(ThemeMode::Dark),
            3 => Some(ThemeMode::FollowSystem),
            _ => None,
        }
    }

    /// The scheme this mode pins, or `None` for `FollowSystem`
    pub fn fixed_scheme(self) -> Option<ColorScheme> {
        match self {
            ThemeMode::Light => Some(ColorScheme::Light),
            ThemeMode::Dark => Some(ColorScheme::Dark),
            ThemeMode::FollowSystem => None,
        }
    }
}

impl From<ColorScheme> for ThemeMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::FollowSystem => "follow-system",
        })
    }
}

/// Which registered theme(s) an operation targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeTarget {
    Light,
    Dark,
    Both,
}

impl ThemeTarget {
    pub fn includes(self, scheme: ColorScheme) -> bool {
        match self {
            ThemeTarget::Both => true,
            ThemeTarget::Light => scheme == ColorScheme::Light,
            ThemeTarget::Dark => scheme == ColorScheme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(ThemeMode::Light.ordinal(), 1);
        assert_eq!(ThemeMode::Dark.ordinal(), 2);
        assert_eq!(ThemeMode::FollowSystem.ordinal(), 3);
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::FollowSystem] {
            assert_eq!(ThemeMode::from_ordinal(mode.ordinal()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_ordinals_are_rejected() {
        assert_eq!(ThemeMode::from_ordinal(0), None);
        assert_eq!(ThemeMode::from_ordinal(4), None);
        assert_eq!(ThemeMode::from_ordinal(-1), None);
    }

    #[test]
    fn test_default_mode_follows_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::FollowSystem);
        assert_eq!(ThemeMode::FollowSystem.fixed_scheme(), None);
        assert_eq!(ThemeMode::Dark.fixed_scheme(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_target_includes() {
        assert!(ThemeTarget::Both.includes(ColorScheme::Dark));
        assert!(ThemeTarget::Light.includes(ColorScheme::Light));
        assert!(!ThemeTarget::Light.includes(ColorScheme::Dark));
    }
}
