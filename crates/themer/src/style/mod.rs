//! Style attribute sets
//!
//! A style attribute set is the per-category record of optional visual
//! attributes. Two operations with deliberately different semantics:
//!
//! - **merge**: `merge(base, over).attr = over.attr ?? base.attr`. Unset
//!   attributes never erase values.
//! - **resolve** (what activation writes): every declared attribute is
//!   written, `value ?? zero`. A set without shadow fields clears the shadow.

mod property;

pub use property::{ResolvedStyle, StyleProperty, StyleValue};

use std::fmt::Debug;

/// A per-category set of optional style attributes
pub trait StyleAttributeSet: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Every property this shape declares, in activation order
    const PROPERTIES: &'static [StyleProperty];

    /// The value set for `property`, if any
    fn get(&self, property: StyleProperty) -> Option<StyleValue>;

    /// Field-wise merge where `overrides` wins when present
    fn merge(&self, overrides: &Self) -> Self;

    /// Concrete values to write on activation
    fn resolve(&self) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::new();
        for &property in Self::PROPERTIES {
            if let Some(value) = self.get(property).or_else(|| property.zero()) {
                resolved.set(property, value);
            }
        }
        resolved
    }

    /// Only the properties that are actually set, without zero defaults
    fn partial(&self) -> ResolvedStyle {
        let mut partial = ResolvedStyle::new();
        for &property in Self::PROPERTIES {
            if let Some(value) = self.get(property) {
                partial.set(property, value);
            }
        }
        partial
    }

    fn is_empty(&self) -> bool {
        Self::PROPERTIES.iter().all(|p| self.get(*p).is_none())
    }
}

/// Declare a style attribute set.
///
/// Each field is `name / builder: Type => StyleProperty`. The macro emits the
/// struct with `Option` fields, fluent builders and the
/// [`StyleAttributeSet`] impl.
///
/// ```rust
/// use themer::style_set;
/// use themer::style::StyleAttributeSet;
/// use themer_core::Color;
///
/// style_set! {
///     /// Style for a badge widget
///     BadgeStyle {
///         fill / with_fill: Color => BackgroundColor,
///         radius / with_radius: f32 => CornerRadius,
///     }
/// }
///
/// let badge = BadgeStyle::new().with_fill(Color::RED);
/// assert_eq!(badge.resolve().scalar(themer::style::StyleProperty::CornerRadius), Some(0.0));
/// ```
#[macro_export]
macro_rules! style_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident / $with:ident : $ty:ty => $prop:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $with(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*
        }

        impl $crate::style::StyleAttributeSet for $name {
            const PROPERTIES: &'static [$crate::style::StyleProperty] =
                &[$($crate::style::StyleProperty::$prop),*];

            fn get(
                &self,
                property: $crate::style::StyleProperty,
            ) -> Option<$crate::style::StyleValue> {
                match property {
                    $(
                        $crate::style::StyleProperty::$prop => {
                            self.$field.clone().map($crate::style::StyleValue::from)
                        }
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }

            fn merge(&self, overrides: &Self) -> Self {
                Self {
                    $(
                        $field: overrides.$field.clone().or_else(|| self.$field.clone()),
                    )*
                }
            }
        }
    };
}

// Declared after the macro so the canonical sets can use it.
mod sets;

pub use sets::{
    BarAppearance, ButtonStyle, CollectionCellStyle, CollectionViewStyle, ImageViewStyle, LabelStyle,
    NavigationBarStyle, SwitchStyle, TableCellStyle, TableViewStyle, ViewStyle,
};
