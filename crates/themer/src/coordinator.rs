//! Theme coordinator
//!
//! The coordinator owns the registered themes and drives every switch:
//!
//! 1. record the applied scheme on the context
//! 2. notify observers
//! 3. activate the theme's bundle and run its extend hook
//! 4. persist the mode
//! 5. ask the host to refresh its visual tree
//!
//! `apply` short-circuits on the exact mode, not on the visible result:
//! applying `FollowSystem` while already following the system does nothing
//! even if the OS appearance changed since. Those changes arrive through
//! [`ThemeCoordinator::handle_system_event`].
//!
//! Switching or adding styles before `setup` is a programming error. Debug
//! builds panic on it; release builds log it and return
//! [`ThemeError::NotConfigured`].

use crate::animation::AnimationSettings;
use crate::bundle::CustomStyle;
use crate::config::ThemerConfig;
use crate::context::ThemeContext;
use crate::error::{Result, ThemeError};
use crate::host::{Host, SystemEvent};
use crate::mode::{ColorScheme, ThemeMode, ThemeTarget};
use crate::store::{MemoryStore, SettingsStore, TomlFileStore};
use crate::theme::Theme;

#[derive(Debug)]
enum ThemeSlots {
    /// One theme serves both schemes
    Universal(Theme),
    Split { light: Theme, dark: Theme },
}

impl ThemeSlots {
    fn get(&self, scheme: ColorScheme) -> &Theme {
        match (self, scheme) {
            (ThemeSlots::Universal(theme), _) => theme,
            (ThemeSlots::Split { light, .. }, ColorScheme::Light) => light,
            (ThemeSlots::Split { dark, .. }, ColorScheme::Dark) => dark,
        }
    }
}

/// Owns the registered themes and applies them on mode changes
pub struct ThemeCoordinator {
    context: ThemeContext,
    host: Box<dyn Host>,
    store: Box<dyn SettingsStore>,
    config: ThemerConfig,
    slots: Option<ThemeSlots>,
    animation: Option<AnimationSettings>,
    watching_system: bool,
}

impl ThemeCoordinator {
    pub fn new(host: impl Host + 'static, store: impl SettingsStore + 'static) -> Self {
        Self::with_config(host, store, ThemerConfig::default())
    }

    pub fn with_config(
        host: impl Host + 'static,
        store: impl SettingsStore + 'static,
        config: ThemerConfig,
    ) -> Self {
        let context = ThemeContext::new();
        context.set_mode(config.default_mode);
        Self {
            context,
            host: Box::new(host),
            store: Box::new(store),
            config,
            slots: None,
            animation: None,
            watching_system: false,
        }
    }

    /// Build with the store `config` names: a [`TomlFileStore`] when
    /// `settings_path` is set, otherwise a [`MemoryStore`]
    pub fn from_config(host: impl Host + 'static, config: ThemerConfig) -> Self {
        match config.settings_path.clone() {
            Some(path) => Self::with_config(host, TomlFileStore::new(path), config),
            None => Self::with_config(host, MemoryStore::new(), config),
        }
    }

    // ========== Setup ==========

    /// Use one theme for both schemes and apply it right away.
    ///
    /// System appearance events are not watched: both branches are the
    /// same theme.
    pub fn setup_universal(&mut self, theme: Theme) -> Result<()> {
        self.ensure_unconfigured()?;
        tracing::debug!("ThemeCoordinator::setup_universal - '{}'", theme.name());
        self.slots = Some(ThemeSlots::Universal(theme));

        let mode = self.context.mode();
        self.resolve(mode, None)
    }

    /// Register distinct light and dark themes, restore the persisted mode
    /// and apply it.
    pub fn setup(&mut self, light: Theme, dark: Theme) -> Result<()> {
        self.ensure_unconfigured()?;
        tracing::debug!(
            "ThemeCoordinator::setup - light '{}', dark '{}'",
            light.name(),
            dark.name()
        );
        self.slots = Some(ThemeSlots::Split { light, dark });
        self.watching_system = true;
        self.host.install_system_observers();

        let mode = self.stored_mode().unwrap_or(self.config.default_mode);
        self.context.set_mode(mode);
        self.resolve(mode, None)
    }

    // ========== Switching ==========

    /// Switch to `mode`; a no-op when `mode` is already current
    pub fn apply(&mut self, mode: ThemeMode) -> Result<()> {
        self.switch(mode, None)
    }

    /// [`apply`](Self::apply) with an animated commit.
    ///
    /// The settings are remembered and reused for switches triggered by
    /// system appearance events.
    pub fn apply_animated(&mut self, mode: ThemeMode, settings: AnimationSettings) -> Result<()> {
        self.animation = Some(settings.clone());
        self.switch(mode, Some(&settings))
    }

    /// React to a host lifecycle signal.
    ///
    /// Re-reads the persisted mode, since another part of the application may
    /// have changed it. A stored explicit choice that differs from the
    /// current mode is applied as is; otherwise the system appearance is
    /// re-resolved when following it. An explicit light or dark choice is
    /// never overridden by the system. Ignored unless distinct light and
    /// dark themes are registered.
    pub fn handle_system_event(&mut self, event: SystemEvent) -> Result<()> {
        if !self.watching_system {
            tracing::trace!("ThemeCoordinator::handle_system_event - ignoring {:?}", event);
            return Ok(());
        }

        let current = self.context.mode();
        let mode = self.stored_mode().unwrap_or(current);
        let transition = self.animation.clone();
        if mode != current {
            tracing::debug!(
                "ThemeCoordinator::handle_system_event - stored mode {} replaces {}",
                mode,
                current
            );
            self.context.set_mode(mode);
            if let Some(scheme) = mode.fixed_scheme() {
                if self.context.applied_scheme() == Some(scheme) {
                    return Ok(());
                }
                return self.activate(scheme, transition.as_ref());
            }
        }
        if mode != ThemeMode::FollowSystem {
            return Ok(());
        }

        tracing::trace!("ThemeCoordinator::handle_system_event - {:?}", event);
        self.follow_system(transition.as_ref()).map(|_| ())
    }

    /// Append a custom style to the targeted theme(s).
    ///
    /// A style added to the live theme is activated immediately; one added
    /// to the inactive theme waits for that theme's next activation. A
    /// universal theme receives the style once whatever the target.
    pub fn add_custom_style(&mut self, target: ThemeTarget, custom: CustomStyle) -> Result<()> {
        debug_assert!(
            self.slots.is_some(),
            "ThemeCoordinator::add_custom_style called before setup"
        );
        let ctx = self.context.clone();
        let applied = ctx.applied_scheme();
        let Some(slots) = self.slots.as_mut() else {
            tracing::error!("ThemeCoordinator::add_custom_style - called before setup");
            return Err(ThemeError::NotConfigured);
        };

        tracing::debug!(
            "ThemeCoordinator::add_custom_style - {} ({:?})",
            custom.category(),
            target
        );
        match slots {
            ThemeSlots::Universal(theme) => match applied {
                Some(_) => theme.add_custom(custom, ctx.registry()),
                None => theme.push_custom(custom),
            },
            ThemeSlots::Split { light, dark } => {
                for (scheme, theme) in [(ColorScheme::Light, light), (ColorScheme::Dark, dark)] {
                    if !target.includes(scheme) {
                        continue;
                    }
                    if applied == Some(scheme) {
                        theme.add_custom(custom.clone(), ctx.registry());
                    } else {
                        theme.push_custom(custom.clone());
                    }
                }
            }
        }
        Ok(())
    }

    // ========== Accessors ==========

    pub fn mode(&self) -> ThemeMode {
        self.context.mode()
    }

    pub fn applied_scheme(&self) -> Option<ColorScheme> {
        self.context.applied_scheme()
    }

    /// The theme behind the applied scheme
    pub fn current_theme(&self) -> Option<&Theme> {
        let scheme = self.applied_scheme()?;
        self.theme(scheme)
    }

    /// The theme registered for `scheme`
    pub fn theme(&self, scheme: ColorScheme) -> Option<&Theme> {
        self.slots.as_ref().map(|slots| slots.get(scheme))
    }

    pub fn animation_settings(&self) -> Option<&AnimationSettings> {
        self.animation.as_ref()
    }

    pub fn context(&self) -> &ThemeContext {
        &self.context
    }

    pub fn config(&self) -> &ThemerConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.slots.is_some()
    }

    // ========== Internals ==========

    fn ensure_unconfigured(&self) -> Result<()> {
        if self.slots.is_some() {
            tracing::error!("ThemeCoordinator - setup called twice");
            return Err(ThemeError::AlreadyConfigured);
        }
        Ok(())
    }

    fn switch(&mut self, mode: ThemeMode, transition: Option<&AnimationSettings>) -> Result<()> {
        debug_assert!(
            self.slots.is_some(),
            "ThemeCoordinator::apply called before setup"
        );
        if self.slots.is_none() {
            tracing::error!("ThemeCoordinator::apply - {} requested before setup", mode);
            return Err(ThemeError::NotConfigured);
        }

        let current = self.context.mode();
        if mode == current {
            tracing::trace!("ThemeCoordinator::apply - already {}", mode);
            return Ok(());
        }
        tracing::debug!("ThemeCoordinator::apply - {} -> {}", current, mode);
        self.context.set_mode(mode);
        self.resolve(mode, transition)
    }

    fn resolve(&self, mode: ThemeMode, transition: Option<&AnimationSettings>) -> Result<()> {
        match mode.fixed_scheme() {
            Some(scheme) => self.activate(scheme, transition),
            None => {
                if !self.follow_system(transition)? {
                    // The scheme did not change but the mode did
                    self.persist_mode();
                }
                Ok(())
            }
        }
    }

    /// Apply the scheme the OS reports; `false` if it is already applied
    fn follow_system(&self, transition: Option<&AnimationSettings>) -> Result<bool> {
        let scheme = self.system_scheme();
        if self.context.applied_scheme() == Some(scheme) {
            tracing::trace!("ThemeCoordinator::follow_system - {} already applied", scheme);
            return Ok(false);
        }
        self.activate(scheme, transition)?;
        Ok(true)
    }

    fn system_scheme(&self) -> ColorScheme {
        self.host.system_color_scheme().unwrap_or_else(|| {
            tracing::warn!(
                "ThemeCoordinator - system appearance unavailable, using {}",
                self.config.fallback_scheme
            );
            self.config.fallback_scheme
        })
    }

    fn activate(&self, scheme: ColorScheme, transition: Option<&AnimationSettings>) -> Result<()> {
        let theme = self
            .slots
            .as_ref()
            .map(|slots| slots.get(scheme))
            .ok_or(ThemeError::NotConfigured)?;
        tracing::debug!(
            "ThemeCoordinator::activate - '{}' for {}",
            theme.name(),
            scheme
        );

        let ctx = &self.context;
        ctx.set_applied(scheme);
        ctx.observers().notify(ctx);

        theme.activate(ctx.registry()).map_err(|source| {
            tracing::error!(
                "ThemeCoordinator::activate - extend hook of '{}' failed: {}",
                theme.name(),
                source
            );
            ThemeError::Extend {
                theme: theme.name().to_string(),
                scheme,
                source,
            }
        })?;

        self.persist_mode();
        self.host.refresh_visual_tree(transition);
        Ok(())
    }

    /// Persisted mode, if one is stored and valid
    fn stored_mode(&self) -> Option<ThemeMode> {
        let value = self.store.get_int(&self.config.store_key)?;
        let mode = ThemeMode::from_ordinal(value);
        if mode.is_none() {
            tracing::warn!(
                "ThemeCoordinator - ignoring unknown stored mode ordinal {}",
                value
            );
        }
        mode
    }

    fn persist_mode(&self) {
        let mode = self.context.mode();
        if let Err(e) = self.store.set_int(&self.config.store_key, mode.ordinal()) {
            tracing::warn!("ThemeCoordinator - failed to persist mode {}: {}", mode, e);
        }
    }
}

impl std::fmt::Debug for ThemeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeCoordinator")
            .field("mode", &self.mode())
            .field("applied", &self.applied_scheme())
            .field("slots", &self.slots)
            .field("animation", &self.animation)
            .field("watching_system", &self.watching_system)
            .finish_non_exhaustive()
    }
}
