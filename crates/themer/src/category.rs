//! Widget categories

use std::borrow::Cow;
use std::fmt;

/// Identifies the family of widgets a style applies to
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetCategory {
    View,
    Button,
    ImageView,
    Switch,
    TableView,
    TableCell,
    NavigationBar,
    Label,
    CollectionView,
    CollectionCell,
    /// An application-defined widget family
    Custom(Cow<'static, str>),
}

impl WidgetCategory {
    /// Canonical categories in bundle activation order
    pub const CANONICAL: [WidgetCategory; 10] = [
        WidgetCategory::View,
        WidgetCategory::Button,
        WidgetCategory::ImageView,
        WidgetCategory::Switch,
        WidgetCategory::TableView,
        WidgetCategory::TableCell,
        WidgetCategory::NavigationBar,
        WidgetCategory::Label,
        WidgetCategory::CollectionView,
        WidgetCategory::CollectionCell,
    ];

    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        WidgetCategory::Custom(name.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, WidgetCategory::Custom(_))
    }

    pub fn name(&self) -> &str {
        match self {
            WidgetCategory::View => "view",
            WidgetCategory::Button => "button",
            WidgetCategory::ImageView => "image-view",
            WidgetCategory::Switch => "switch",
            WidgetCategory::TableView => "table-view",
            WidgetCategory::TableCell => "table-cell",
            WidgetCategory::NavigationBar => "navigation-bar",
            WidgetCategory::Label => "label",
            WidgetCategory::CollectionView => "collection-view",
            WidgetCategory::CollectionCell => "collection-cell",
            WidgetCategory::Custom(name) => name,
        }
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
