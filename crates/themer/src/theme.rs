//! Theme definitions

use std::fmt;
use std::sync::Arc;

use crate::bundle::{CustomStyle, StyleBundle};
use crate::error::ExtendError;
use crate::registry::StyleRegistry;

/// Side-effecting customization run after a theme's bundle is activated.
///
/// Hooks typically install containment rules ("buttons inside X get Y") or
/// extra custom styles on the registry.
pub type ExtendHook = Arc<dyn Fn(&StyleRegistry) -> Result<(), ExtendError> + Send + Sync>;

/// A complete visual configuration: a style bundle plus an optional hook
#[derive(Clone)]
pub struct Theme {
    name: String,
    bundle: StyleBundle,
    extend: Option<ExtendHook>,
}

impl Theme {
    pub fn new(name: impl Into<String>, bundle: StyleBundle) -> Self {
        Self {
            name: name.into(),
            bundle,
            extend: None,
        }
    }

    /// Set the extend hook, replacing any existing one
    pub fn with_extend<F>(mut self, hook: F) -> Self
    where
        F: Fn(&StyleRegistry) -> Result<(), ExtendError> + Send + Sync + 'static,
    {
        let hook: ExtendHook = Arc::new(hook);
        self.extend = Some(hook);
        self
    }

    /// Add a hook that runs after the existing one
    pub fn and_extend<F>(mut self, hook: F) -> Self
    where
        F: Fn(&StyleRegistry) -> Result<(), ExtendError> + Send + Sync + 'static,
    {
        let composed: ExtendHook = match self.extend.take() {
            Some(first) => Arc::new(move |registry: &StyleRegistry| {
                first(registry)?;
                hook(registry)
            }),
            None => Arc::new(hook),
        };
        self.extend = Some(composed);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bundle(&self) -> &StyleBundle {
        &self.bundle
    }

    pub fn has_extend(&self) -> bool {
        self.extend.is_some()
    }

    /// A new theme whose bundle is `self.bundle` merged with `overrides`.
    ///
    /// The base hook is kept; chain [`and_extend`](Self::and_extend) to run
    /// more customization after it.
    pub fn merged_with(&self, overrides: &StyleBundle) -> Theme {
        Theme {
            name: self.name.clone(),
            bundle: self.bundle.merged_with(overrides),
            extend: self.extend.clone(),
        }
    }

    /// Activate the bundle, then run the extend hook.
    ///
    /// Containment rules and custom styles of the previous theme are reset
    /// first, except custom categories this bundle writes again. A failing
    /// hook leaves the bundle activated.
    pub fn activate(&self, registry: &StyleRegistry) -> Result<(), ExtendError> {
        registry.clear_contained();
        registry.retire_custom(self.bundle.custom().iter().map(CustomStyle::category));
        self.bundle.activate_all(registry);
        if let Some(hook) = &self.extend {
            hook(registry)?;
        }
        Ok(())
    }

    pub(crate) fn add_custom(&mut self, custom: CustomStyle, registry: &StyleRegistry) {
        self.bundle.add_custom(custom, registry);
    }

    pub(crate) fn push_custom(&mut self, custom: CustomStyle) {
        self.bundle.push_custom(custom);
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("bundle", &self.bundle)
            .field("extend", &self.extend.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::WidgetCategory;
    use crate::style::{ButtonStyle, StyleProperty, ViewStyle};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use themer_core::Color;

    fn ocean() -> Theme {
        Theme::new(
            "Ocean",
            StyleBundle::new().with_button(ButtonStyle::new().with_button_color(Color::BLUE)),
        )
    }

    #[test]
    fn test_activate_runs_hook_after_bundle() {
        let registry = StyleRegistry::new();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        let theme = ocean().with_extend(move |registry| {
            *seen_clone.lock().unwrap() =
                registry.color(&WidgetCategory::Button, StyleProperty::BackgroundColor);
            Ok(())
        });

        theme.activate(&registry).unwrap();
        assert_eq!(*seen.lock().unwrap(), Some(Color::BLUE));
    }

    #[test]
    fn test_hook_failure_leaves_bundle_active() {
        let registry = StyleRegistry::new();
        let theme = ocean().with_extend(|_| Err("boom".into()));

        let err = theme.activate(&registry).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(
            registry.color(&WidgetCategory::Button, StyleProperty::BackgroundColor),
            Some(Color::BLUE)
        );
    }

    #[test]
    fn test_activation_resets_containment_rules() {
        let registry = StyleRegistry::new();
        let container = WidgetCategory::custom("Card");
        registry.set_contained_set(
            &WidgetCategory::Button,
            &container,
            &ButtonStyle::new().with_button_color(Color::RED),
        );

        ocean().activate(&registry).unwrap();
        let style = registry.style_for(&WidgetCategory::Button, &[container]);
        assert_eq!(
            style.color(StyleProperty::BackgroundColor),
            Some(Color::BLUE)
        );
    }

    #[test]
    fn test_activation_resets_custom_styles_the_theme_does_not_define() {
        let registry = StyleRegistry::new();
        let pill = WidgetCategory::custom("Pill");
        let chip = WidgetCategory::custom("Chip");
        let coral = Theme::new(
            "Coral",
            StyleBundle::new()
                .with_custom(CustomStyle::new(
                    pill.clone(),
                    ViewStyle::new()
                        .with_background_color(Color::GREEN)
                        .with_corner_radius(9.0),
                ))
                .with_custom(CustomStyle::new(
                    chip.clone(),
                    ViewStyle::new().with_corner_radius(3.0),
                )),
        );
        let hook_chip = chip.clone();
        let reef = ocean().with_extend(move |registry| {
            registry.activate_set(&hook_chip, &ViewStyle::new().with_corner_radius(5.0));
            Ok(())
        });

        coral.activate(&registry).unwrap();
        reef.activate(&registry).unwrap();
        assert_eq!(registry.color(&pill, StyleProperty::BackgroundColor), None);
        assert_eq!(registry.scalar(&pill, StyleProperty::CornerRadius), None);
        assert_eq!(registry.revision(&pill), 2);
        assert_eq!(registry.scalar(&chip, StyleProperty::CornerRadius), Some(5.0));

        // Hook-written styles are themed too
        ocean().activate(&registry).unwrap();
        assert_eq!(registry.scalar(&chip, StyleProperty::CornerRadius), None);
    }

    #[test]
    fn test_merged_with_keeps_base_hook_and_and_extend_composes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (a, b) = (calls.clone(), calls.clone());
        let base = ocean().with_extend(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let merged = base
            .merged_with(&StyleBundle::new().with_view(ViewStyle::new().with_corner_radius(4.0)))
            .and_extend(move |_| {
                b.fetch_add(10, Ordering::SeqCst);
                Ok(())
            });

        let registry = StyleRegistry::new();
        merged.activate(&registry).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 11);
        assert_eq!(merged.bundle().button.button_color, Some(Color::BLUE));
        assert_eq!(merged.bundle().view.corner_radius, Some(4.0));
    }

    #[test]
    fn test_composed_hook_stops_at_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let theme = ocean()
            .with_extend(|_| Err("first".into()))
            .and_extend(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        assert!(theme.activate(&StyleRegistry::new()).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
