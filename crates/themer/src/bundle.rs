//! Style bundles
//!
//! A bundle carries one style set per canonical category plus an ordered list
//! of custom styles for application-defined widgets.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use crate::category::WidgetCategory;
use crate::registry::StyleRegistry;
use crate::style::*;

/// Object-safe view of a [`StyleAttributeSet`]
pub trait ErasedStyle: Debug + Send + Sync {
    fn resolve_erased(&self) -> ResolvedStyle;
    fn as_any(&self) -> &dyn Any;
}

impl<S: StyleAttributeSet> ErasedStyle for S {
    fn resolve_erased(&self) -> ResolvedStyle {
        self.resolve()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A style attached to an application-defined widget category
#[derive(Clone, Debug)]
pub struct CustomStyle {
    category: WidgetCategory,
    style: Arc<dyn ErasedStyle>,
}

impl CustomStyle {
    pub fn new<S: StyleAttributeSet>(category: WidgetCategory, style: S) -> Self {
        Self {
            category,
            style: Arc::new(style),
        }
    }

    pub fn category(&self) -> &WidgetCategory {
        &self.category
    }

    /// The concrete set, if it is an `S`
    pub fn downcast<S: StyleAttributeSet>(&self) -> Option<&S> {
        self.style.as_any().downcast_ref::<S>()
    }

    pub fn resolve(&self) -> ResolvedStyle {
        self.style.resolve_erased()
    }

    /// Write this style to the registry
    pub fn activate(&self, registry: &StyleRegistry) {
        registry.activate(&self.category, self.style.resolve_erased());
    }
}

/// One style set per canonical category plus custom styles
#[derive(Clone, Debug, Default)]
pub struct StyleBundle {
    pub view: ViewStyle,
    pub button: ButtonStyle,
    pub image_view: ImageViewStyle,
    pub switch: SwitchStyle,
    pub table_view: TableViewStyle,
    pub table_cell: TableCellStyle,
    pub navigation_bar: NavigationBarStyle,
    /// Overlay on `navigation_bar` while content touches the bar's edge
    pub navigation_bar_scroll_edge: Option<NavigationBarStyle>,
    /// Overlay on `navigation_bar` at compact height
    pub navigation_bar_compact: Option<NavigationBarStyle>,
    pub label: LabelStyle,
    pub collection_view: CollectionViewStyle,
    pub collection_cell: CollectionCellStyle,
    custom: Vec<CustomStyle>,
}

impl StyleBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, style: ViewStyle) -> Self {
        self.view = style;
        self
    }

    pub fn with_button(mut self, style: ButtonStyle) -> Self {
        self.button = style;
        self
    }

    pub fn with_image_view(mut self, style: ImageViewStyle) -> Self {
        self.image_view = style;
        self
    }

    pub fn with_switch(mut self, style: SwitchStyle) -> Self {
        self.switch = style;
        self
    }

    pub fn with_table_view(mut self, style: TableViewStyle) -> Self {
        self.table_view = style;
        self
    }

    pub fn with_table_cell(mut self, style: TableCellStyle) -> Self {
        self.table_cell = style;
        self
    }

    pub fn with_navigation_bar(mut self, style: NavigationBarStyle) -> Self {
        self.navigation_bar = style;
        self
    }

    pub fn with_navigation_bar_scroll_edge(mut self, style: NavigationBarStyle) -> Self {
        self.navigation_bar_scroll_edge = Some(style);
        self
    }

    pub fn with_navigation_bar_compact(mut self, style: NavigationBarStyle) -> Self {
        self.navigation_bar_compact = Some(style);
        self
    }

    pub fn with_label(mut self, style: LabelStyle) -> Self {
        self.label = style;
        self
    }

    pub fn with_collection_view(mut self, style: CollectionViewStyle) -> Self {
        self.collection_view = style;
        self
    }

    pub fn with_collection_cell(mut self, style: CollectionCellStyle) -> Self {
        self.collection_cell = style;
        self
    }

    /// Append a custom style at construction time
    pub fn with_custom(mut self, custom: CustomStyle) -> Self {
        self.custom.push(custom);
        self
    }

    /// Custom styles in registration order
    pub fn custom(&self) -> &[CustomStyle] {
        &self.custom
    }

    /// Resolved style of a canonical category; `None` for custom categories
    pub fn resolve(&self, category: &WidgetCategory) -> Option<ResolvedStyle> {
        let style = match category {
            WidgetCategory::View => self.view.resolve(),
            WidgetCategory::Button => self.button.resolve(),
            WidgetCategory::ImageView => self.image_view.resolve(),
            WidgetCategory::Switch => self.switch.resolve(),
            WidgetCategory::TableView => self.table_view.resolve(),
            WidgetCategory::TableCell => self.table_cell.resolve(),
            WidgetCategory::NavigationBar => self.navigation_bar.resolve(),
            WidgetCategory::Label => self.label.resolve(),
            WidgetCategory::CollectionView => self.collection_view.resolve(),
            WidgetCategory::CollectionCell => self.collection_cell.resolve(),
            WidgetCategory::Custom(_) => return None,
        };
        Some(style)
    }

    /// Navigation bar overlay for `appearance`; `None` for `Standard`
    pub fn bar_overlay(&self, appearance: BarAppearance) -> Option<&NavigationBarStyle> {
        match appearance {
            BarAppearance::Standard => None,
            BarAppearance::ScrollEdge => self.navigation_bar_scroll_edge.as_ref(),
            BarAppearance::Compact => self.navigation_bar_compact.as_ref(),
        }
    }

    /// Navigation bar style shown in `appearance`, overlay merged onto the
    /// standard style
    pub fn bar_appearance(&self, appearance: BarAppearance) -> NavigationBarStyle {
        match self.bar_overlay(appearance) {
            Some(overlay) => self.navigation_bar.merge(overlay),
            None => self.navigation_bar.clone(),
        }
    }

    /// Write every canonical category and the navigation bar overlays, then
    /// every custom style in order
    pub fn activate_all(&self, registry: &StyleRegistry) {
        for category in WidgetCategory::CANONICAL.iter() {
            if let Some(style) = self.resolve(category) {
                registry.activate(category, style);
            }
        }
        for appearance in BarAppearance::OVERLAYS {
            let style = self
                .bar_overlay(appearance)
                .map(|_| self.bar_appearance(appearance).resolve());
            registry.set_bar_appearance(appearance, style);
        }
        for custom in &self.custom {
            custom.activate(registry);
        }
    }

    /// Append a custom style and activate it immediately
    pub fn add_custom(&mut self, custom: CustomStyle, registry: &StyleRegistry) {
        custom.activate(registry);
        self.custom.push(custom);
    }

    /// Append a custom style without touching the registry
    pub fn push_custom(&mut self, custom: CustomStyle) {
        self.custom.push(custom);
    }

    /// Per-category merge with `overrides` winning where set.
    ///
    /// Custom styles are unioned: base entries whose category the override
    /// does not define keep their order, followed by the override entries.
    pub fn merged_with(&self, overrides: &StyleBundle) -> StyleBundle {
        let mut custom: Vec<CustomStyle> = self
            .custom
            .iter()
            .filter(|base| {
                !overrides
                    .custom
                    .iter()
                    .any(|o| o.category == base.category)
            })
            .cloned()
            .collect();
        custom.extend(overrides.custom.iter().cloned());

        StyleBundle {
            view: self.view.merge(&overrides.view),
            button: self.button.merge(&overrides.button),
            image_view: self.image_view.merge(&overrides.image_view),
            switch: self.switch.merge(&overrides.switch),
            table_view: self.table_view.merge(&overrides.table_view),
            table_cell: self.table_cell.merge(&overrides.table_cell),
            navigation_bar: self.navigation_bar.merge(&overrides.navigation_bar),
            navigation_bar_scroll_edge: merge_overlay(
                &self.navigation_bar_scroll_edge,
                &overrides.navigation_bar_scroll_edge,
            ),
            navigation_bar_compact: merge_overlay(
                &self.navigation_bar_compact,
                &overrides.navigation_bar_compact,
            ),
            label: self.label.merge(&overrides.label),
            collection_view: self.collection_view.merge(&overrides.collection_view),
            collection_cell: self.collection_cell.merge(&overrides.collection_cell),
            custom,
        }
    }
}

fn merge_overlay(
    base: &Option<NavigationBarStyle>,
    overrides: &Option<NavigationBarStyle>,
) -> Option<NavigationBarStyle> {
    match (base, overrides) {
        (Some(base), Some(overrides)) => Some(base.merge(overrides)),
        (base, overrides) => overrides.clone().or_else(|| base.clone()),
    }
}
