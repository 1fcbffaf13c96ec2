//! OS appearance detection
//!
//! Available with the `system-detect` feature.

use dark_light::Mode;

use crate::animation::AnimationSettings;
use crate::host::Host;
use crate::mode::ColorScheme;

/// Query the desktop's light/dark preference
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    let scheme = match dark_light::detect() {
        Mode::Dark => ColorScheme::Dark,
        Mode::Light => ColorScheme::Light,
    };
    tracing::trace!("detect_system_color_scheme - {}", scheme);
    Some(scheme)
}

type RefreshCallback = Box<dyn Fn(Option<&AnimationSettings>) + Send + Sync>;

/// [`Host`] that reads the OS appearance and forwards refreshes to a callback
pub struct SystemHost {
    refresh: RefreshCallback,
}

impl SystemHost {
    /// `refresh` runs whenever the engine asks for a visual refresh
    pub fn new<F>(refresh: F) -> Self
    where
        F: Fn(Option<&AnimationSettings>) + Send + Sync + 'static,
    {
        Self {
            refresh: Box::new(refresh),
        }
    }
}

impl Host for SystemHost {
    fn system_color_scheme(&self) -> Option<ColorScheme> {
        detect_system_color_scheme()
    }

    fn refresh_visual_tree(&self, transition: Option<&AnimationSettings>) {
        (self.refresh)(transition)
    }
}

impl std::fmt::Debug for SystemHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemHost").finish_non_exhaustive()
    }
}
