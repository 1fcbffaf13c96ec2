//! Shared theme context
//!
//! [`ThemeContext`] is the handle the host constructs once at startup and
//! passes to every collaborator that needs theme state. Cloning it is cheap
//! and every clone points at the same registry, observer hub and status.

use std::sync::{Arc, PoisonError, RwLock};

use crate::mode::{ColorScheme, ThemeMode};
use crate::observer::{ObserverHub, Subscription, ThemeObserver};
use crate::registry::{StyleRegistry, Themable};

#[derive(Clone, Copy, Debug, Default)]
struct Status {
    mode: ThemeMode,
    applied: Option<ColorScheme>,
}

#[derive(Debug, Default)]
struct Shared {
    registry: StyleRegistry,
    observers: Arc<ObserverHub>,
    status: RwLock<Status>,
}

/// Cloneable handle onto the live theme state
#[derive(Clone, Debug, Default)]
pub struct ThemeContext {
    shared: Arc<Shared>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.shared.registry
    }

    pub fn observers(&self) -> &Arc<ObserverHub> {
        &self.shared.observers
    }

    /// Register `observer` until the returned guard is dropped
    pub fn subscribe<O>(&self, observer: &Arc<O>) -> Subscription
    where
        O: ThemeObserver + 'static,
    {
        let id = self.shared.observers.register(observer);
        Subscription::new(&self.shared.observers, id)
    }

    /// The user's current theming policy
    pub fn mode(&self) -> ThemeMode {
        self.status().mode
    }

    /// The concrete scheme of the last applied theme, if any
    pub fn applied_scheme(&self) -> Option<ColorScheme> {
        self.status().applied
    }

    /// `true` once a dark theme has been applied
    pub fn is_dark(&self) -> bool {
        self.applied_scheme().is_some_and(ColorScheme::is_dark)
    }

    /// Re-read `widget`'s style from the registry
    pub fn restyle(&self, widget: &mut dyn Themable) {
        self.shared.registry.restyle(widget);
    }

    /// Whether two handles share the same state
    pub fn ptr_eq(&self, other: &ThemeContext) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    fn status(&self) -> Status {
        *self
            .shared
            .status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_mode(&self, mode: ThemeMode) {
        self.shared
            .status
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .mode = mode;
    }

    pub(crate) fn set_applied(&self, scheme: ColorScheme) {
        self.shared
            .status
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .applied = Some(scheme);
    }
}
