//! Host application contract
//!
//! The engine never talks to a windowing system directly. The host reports
//! the OS appearance, forwards lifecycle signals as [`SystemEvent`]s and
//! re-renders its live widgets when asked.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::animation::AnimationSettings;
use crate::mode::ColorScheme;

/// Lifecycle signals that may change the effective system appearance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemEvent {
    /// The application returned to the foreground
    Foregrounded,
    /// The OS appearance changed while the application was in front
    AppearanceChanged,
}

/// Services the engine consumes from the surrounding UI code
pub trait Host: Send + Sync {
    /// Current OS appearance; `None` when there is no window to ask
    fn system_color_scheme(&self) -> Option<ColorScheme>;

    /// Make every live widget re-read its style from the registry.
    ///
    /// `transition` is set when the switch should be animated.
    fn refresh_visual_tree(&self, transition: Option<&AnimationSettings>);

    /// Start forwarding [`SystemEvent`]s; called once by split-theme setup
    fn install_system_observers(&self) {}
}

impl<T: Host + ?Sized> Host for Arc<T> {
    fn system_color_scheme(&self) -> Option<ColorScheme> {
        (**self).system_color_scheme()
    }

    fn refresh_visual_tree(&self, transition: Option<&AnimationSettings>) {
        (**self).refresh_visual_tree(transition)
    }

    fn install_system_observers(&self) {
        (**self).install_system_observers()
    }
}

#[derive(Debug, Default)]
struct HeadlessState {
    scheme: Option<ColorScheme>,
    refreshes: Vec<Option<AnimationSettings>>,
    observers_installed: usize,
}

/// Host without a display, for tests and command-line tools.
///
/// The reported system scheme is set by the caller and every refresh request
/// is recorded.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    state: Mutex<HeadlessState>,
}

impl HeadlessHost {
    /// A host with no window, so no system scheme
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(scheme: ColorScheme) -> Self {
        let host = Self::default();
        host.set_system_scheme(Some(scheme));
        host
    }

    fn state(&self) -> MutexGuard<'_, HeadlessState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_system_scheme(&self, scheme: Option<ColorScheme>) {
        self.state().scheme = scheme;
    }

    pub fn refresh_count(&self) -> usize {
        self.state().refreshes.len()
    }

    /// Transition passed to the most recent refresh
    pub fn last_transition(&self) -> Option<AnimationSettings> {
        self.state().refreshes.last().cloned().flatten()
    }

    pub fn observers_installed(&self) -> usize {
        self.state().observers_installed
    }
}

impl Host for HeadlessHost {
    fn system_color_scheme(&self) -> Option<ColorScheme> {
        self.state().scheme
    }

    fn refresh_visual_tree(&self, transition: Option<&AnimationSettings>) {
        self.state().refreshes.push(transition.cloned());
    }

    fn install_system_observers(&self) {
        self.state().observers_installed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_headless_host_records_refreshes() {
        let host = HeadlessHost::new();
        assert_eq!(host.system_color_scheme(), None);

        let settings = AnimationSettings::new(Duration::from_millis(250));
        host.refresh_visual_tree(None);
        host.refresh_visual_tree(Some(&settings));

        assert_eq!(host.refresh_count(), 2);
        assert_eq!(host.last_transition(), Some(settings));
    }

    #[test]
    fn test_shared_host_forwards_calls() {
        let host = Arc::new(HeadlessHost::with_scheme(ColorScheme::Dark));
        let shared: Box<dyn Host> = Box::new(host.clone());

        assert_eq!(shared.system_color_scheme(), Some(ColorScheme::Dark));
        shared.install_system_observers();
        shared.refresh_visual_tree(None);
        assert_eq!(host.observers_installed(), 1);
        assert_eq!(host.refresh_count(), 1);
        assert_eq!(host.last_transition(), None);
    }
}
