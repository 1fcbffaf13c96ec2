//! Style registry
//!
//! The registry maps each widget category to the style most recently
//! activated for it. Widgets read from it when they are created or re-rendered
//! instead of relying on a class-wide mutable default.
//!
//! Each activation replaces a category's style in a single write and bumps the
//! category revision, so a reader never observes a half-written style and
//! callers can detect whether a category was touched.
//!
//! Containment rules and custom-category styles belong to the active theme.
//! A theme activation drops the rules and resets every custom category the
//! incoming theme does not write itself.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use themer_core::Color;

use crate::category::WidgetCategory;
use crate::style::{BarAppearance, ResolvedStyle, StyleAttributeSet, StyleProperty, StyleValue};

/// A widget that re-reads its visual attributes from the registry
pub trait Themable {
    fn category(&self) -> WidgetCategory;

    /// Enclosing categories, innermost first, for containment rules
    fn containers(&self) -> &[WidgetCategory] {
        &[]
    }

    fn restyle(&mut self, style: &ResolvedStyle);
}

#[derive(Debug, Default)]
struct Entry {
    style: ResolvedStyle,
    revision: u64,
}

#[derive(Clone, Debug)]
struct ContainedRule {
    container: WidgetCategory,
    style: ResolvedStyle,
}

#[derive(Debug, Default)]
struct Inner {
    entries: FxHashMap<WidgetCategory, Entry>,
    contained: FxHashMap<WidgetCategory, SmallVec<[ContainedRule; 2]>>,
    /// Custom categories written since the last theme activation
    live_custom: FxHashSet<WidgetCategory>,
    /// Navigation bar overlays; absent states show the standard style
    bar_overlays: FxHashMap<BarAppearance, ResolvedStyle>,
}

impl Inner {
    fn store(&mut self, category: &WidgetCategory, style: ResolvedStyle) -> &Entry {
        if category.is_custom() {
            self.live_custom.insert(category.clone());
        }
        let entry = self.entries.entry(category.clone()).or_default();
        entry.style = style;
        entry.revision += 1;
        entry
    }
}

/// Category → active style mapping shared with every widget
#[derive(Debug, Default)]
pub struct StyleRegistry {
    inner: RwLock<Inner>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the active style of `category`
    pub fn activate(&self, category: &WidgetCategory, style: ResolvedStyle) {
        let mut inner = self.write();
        let entry = inner.store(category, style);
        tracing::trace!(
            "StyleRegistry::activate - {} (revision {}, {} properties)",
            category,
            entry.revision,
            entry.style.len()
        );
    }

    /// Resolve `set` and make it the active style of `category`
    pub fn activate_set<S: StyleAttributeSet>(&self, category: &WidgetCategory, set: &S) {
        self.activate(category, set.resolve());
    }

    /// Active style of `category`, without containment rules
    pub fn style(&self, category: &WidgetCategory) -> Option<ResolvedStyle> {
        self.read().entries.get(category).map(|e| e.style.clone())
    }

    pub fn get(&self, category: &WidgetCategory, property: StyleProperty) -> Option<StyleValue> {
        self.read()
            .entries
            .get(category)
            .and_then(|e| e.style.get(property).cloned())
    }

    pub fn color(&self, category: &WidgetCategory, property: StyleProperty) -> Option<Color> {
        self.get(category, property)
            .and_then(|v| v.as_color())
    }

    pub fn scalar(&self, category: &WidgetCategory, property: StyleProperty) -> Option<f32> {
        self.get(category, property)
            .and_then(|v| v.as_scalar())
    }

    /// Number of activations `category` has received; 0 if never activated
    pub fn revision(&self, category: &WidgetCategory) -> u64 {
        self.read()
            .entries
            .get(category)
            .map(|e| e.revision)
            .unwrap_or(0)
    }

    /// Style values of every activated category
    pub fn snapshot(&self) -> FxHashMap<WidgetCategory, ResolvedStyle> {
        self.read()
            .entries
            .iter()
            .map(|(category, entry)| (category.clone(), entry.style.clone()))
            .collect()
    }

    pub fn categories(&self) -> Vec<WidgetCategory> {
        let mut categories: Vec<_> = self.read().entries.keys().cloned().collect();
        categories.sort();
        categories
    }

    // ========== Containment Rules ==========

    /// Override properties of `category` widgets placed inside `container`.
    ///
    /// Only properties present in `style` are overridden. A second rule for
    /// the same pair replaces the first.
    pub fn set_contained(
        &self,
        category: &WidgetCategory,
        container: &WidgetCategory,
        style: ResolvedStyle,
    ) {
        let mut inner = self.write();
        let rules = inner.contained.entry(category.clone()).or_default();
        match rules.iter_mut().find(|r| &r.container == container) {
            Some(rule) => rule.style = style,
            None => rules.push(ContainedRule {
                container: container.clone(),
                style,
            }),
        }
        tracing::trace!(
            "StyleRegistry::set_contained - {} inside {}",
            category,
            container
        );
    }

    /// [`set_contained`](Self::set_contained) from the set fields of `set`
    pub fn set_contained_set<S: StyleAttributeSet>(
        &self,
        category: &WidgetCategory,
        container: &WidgetCategory,
        set: &S,
    ) {
        self.set_contained(category, container, set.partial());
    }

    /// Drop every containment rule
    pub fn clear_contained(&self) {
        self.write().contained.clear();
    }

    // ========== Navigation Bar Appearances ==========

    /// Set or clear the navigation bar style for `appearance`.
    ///
    /// `Standard` replaces the navigation bar category itself; clearing it
    /// writes an empty style.
    pub fn set_bar_appearance(&self, appearance: BarAppearance, style: Option<ResolvedStyle>) {
        match appearance {
            BarAppearance::Standard => {
                self.activate(&WidgetCategory::NavigationBar, style.unwrap_or_default())
            }
            overlay => {
                let mut inner = self.write();
                match style {
                    Some(style) => {
                        inner.bar_overlays.insert(overlay, style);
                    }
                    None => {
                        inner.bar_overlays.remove(&overlay);
                    }
                }
            }
        }
    }

    /// Navigation bar style shown in `appearance`
    pub fn bar_appearance(&self, appearance: BarAppearance) -> ResolvedStyle {
        let inner = self.read();
        inner
            .bar_overlays
            .get(&appearance)
            .or_else(|| {
                inner
                    .entries
                    .get(&WidgetCategory::NavigationBar)
                    .map(|e| &e.style)
            })
            .cloned()
            .unwrap_or_default()
    }

    // ========== Custom Categories ==========

    /// Reset every custom category written since the last call, except those
    /// in `keep`, to an empty style. Returns how many were reset.
    pub fn retire_custom<'a, I>(&self, keep: I) -> usize
    where
        I: IntoIterator<Item = &'a WidgetCategory>,
    {
        let keep: FxHashSet<&WidgetCategory> = keep.into_iter().collect();
        let mut inner = self.write();
        let live = std::mem::take(&mut inner.live_custom);
        let mut retired = 0;
        for category in live {
            if keep.contains(&category) {
                inner.live_custom.insert(category);
                continue;
            }
            inner.store(&category, ResolvedStyle::new());
            inner.live_custom.remove(&category);
            tracing::trace!("StyleRegistry::retire_custom - reset {}", category);
            retired += 1;
        }
        retired
    }

    /// Effective style for a widget of `category` nested in `containers`
    /// (innermost first). The innermost matching rule wins.
    pub fn style_for(
        &self,
        category: &WidgetCategory,
        containers: &[WidgetCategory],
    ) -> ResolvedStyle {
        let inner = self.read();
        let mut style = inner
            .entries
            .get(category)
            .map(|e| e.style.clone())
            .unwrap_or_default();

        if let Some(rules) = inner.contained.get(category) {
            for container in containers.iter().rev() {
                for rule in rules.iter().filter(|r| &r.container == container) {
                    style = style.overlay(&rule.style);
                }
            }
        }
        style
    }

    /// Push the effective style into `widget`
    pub fn restyle(&self, widget: &mut dyn Themable) {
        let style = self.style_for(&widget.category(), widget.containers());
        widget.restyle(&style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ButtonStyle, ViewStyle};
    use themer_core::Offset;

    struct Swatch {
        containers: Vec<WidgetCategory>,
        fill: Option<Color>,
        radius: f32,
    }

    impl Themable for Swatch {
        fn category(&self) -> WidgetCategory {
            WidgetCategory::Button
        }

        fn containers(&self) -> &[WidgetCategory] {
            &self.containers
        }

        fn restyle(&mut self, style: &ResolvedStyle) {
            self.fill = style.color(StyleProperty::BackgroundColor);
            self.radius = style.scalar(StyleProperty::CornerRadius).unwrap_or_default();
        }
    }

    #[test]
    fn test_activation_replaces_and_clears_stale_attributes() {
        let registry = StyleRegistry::new();
        let shadowed = ViewStyle::new()
            .with_shadow_color(Color::PURPLE)
            .with_shadow_offset(Offset::new(10.0, 20.0))
            .with_shadow_opacity(1.0);
        registry.activate_set(&WidgetCategory::View, &shadowed);
        assert_eq!(
            registry.color(&WidgetCategory::View, StyleProperty::ShadowColor),
            Some(Color::PURPLE)
        );

        registry.activate_set(&WidgetCategory::View, &ViewStyle::new());
        assert_eq!(
            registry.color(&WidgetCategory::View, StyleProperty::ShadowColor),
            None
        );
        assert_eq!(
            registry.scalar(&WidgetCategory::View, StyleProperty::ShadowOpacity),
            Some(0.0)
        );
        assert_eq!(registry.revision(&WidgetCategory::View), 2);
    }

    #[test]
    fn test_categories_are_independent() {
        let registry = StyleRegistry::new();
        registry.activate_set(
            &WidgetCategory::Button,
            &ButtonStyle::new().with_button_color(Color::BLUE),
        );
        registry.activate_set(
            &WidgetCategory::View,
            &ViewStyle::new().with_background_color(Color::RED),
        );

        assert_eq!(
            registry.color(&WidgetCategory::Button, StyleProperty::BackgroundColor),
            Some(Color::BLUE)
        );
        assert_eq!(registry.revision(&WidgetCategory::Button), 1);
        assert_eq!(registry.revision(&WidgetCategory::Label), 0);
        assert_eq!(
            registry.categories(),
            vec![WidgetCategory::View, WidgetCategory::Button]
        );
    }

    #[test]
    fn test_contained_rules_apply_to_nested_widgets_only() {
        let registry = StyleRegistry::new();
        let custom_view = WidgetCategory::custom("CustomThemedView");
        registry.activate_set(
            &WidgetCategory::Button,
            &ButtonStyle::new()
                .with_button_color(Color::BLUE)
                .with_corner_radius(16.0),
        );
        registry.set_contained_set(
            &WidgetCategory::Button,
            &custom_view,
            &ButtonStyle::new().with_button_color(Color::ORANGE),
        );

        let mut loose = Swatch {
            containers: vec![WidgetCategory::View],
            fill: None,
            radius: 0.0,
        };
        let mut nested = Swatch {
            containers: vec![WidgetCategory::TableCell, custom_view.clone()],
            fill: None,
            radius: 0.0,
        };
        registry.restyle(&mut loose);
        registry.restyle(&mut nested);

        assert_eq!(loose.fill, Some(Color::BLUE));
        assert_eq!(nested.fill, Some(Color::ORANGE));
        assert_eq!(nested.radius, 16.0);

        registry.clear_contained();
        registry.restyle(&mut nested);
        assert_eq!(nested.fill, Some(Color::BLUE));
    }

    #[test]
    fn test_retire_custom_resets_only_unkept_custom_categories() {
        let registry = StyleRegistry::new();
        let pill = WidgetCategory::custom("Pill");
        let chip = WidgetCategory::custom("Chip");
        let fill = ResolvedStyle::new().with(StyleProperty::BackgroundColor, Color::GREEN);
        registry.activate(&pill, fill.clone());
        registry.activate(&chip, fill.clone());
        registry.activate(&WidgetCategory::Button, fill);

        assert_eq!(registry.retire_custom([&chip]), 1);
        assert_eq!(registry.color(&pill, StyleProperty::BackgroundColor), None);
        assert_eq!(registry.revision(&pill), 2);
        assert_eq!(
            registry.color(&chip, StyleProperty::BackgroundColor),
            Some(Color::GREEN)
        );
        assert_eq!(
            registry.color(&WidgetCategory::Button, StyleProperty::BackgroundColor),
            Some(Color::GREEN)
        );

        // A reset category stays reset until written again
        assert_eq!(registry.retire_custom([&chip]), 0);
        assert_eq!(registry.revision(&pill), 2);
    }

    #[test]
    fn test_innermost_container_wins() {
        let registry = StyleRegistry::new();
        registry.set_contained(
            &WidgetCategory::Label,
            &WidgetCategory::View,
            ResolvedStyle::new().with(StyleProperty::TextColor, Color::RED),
        );
        registry.set_contained(
            &WidgetCategory::Label,
            &WidgetCategory::TableCell,
            ResolvedStyle::new().with(StyleProperty::TextColor, Color::GREEN),
        );

        let style = registry.style_for(
            &WidgetCategory::Label,
            &[WidgetCategory::TableCell, WidgetCategory::View],
        );
        assert_eq!(style.color(StyleProperty::TextColor), Some(Color::GREEN));
    }
}
