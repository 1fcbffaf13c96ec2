//! Style properties, values and resolved styles

use rustc_hash::FxHashMap;
use themer_core::{Color, Font, ImageHandle, Offset};

/// A visual attribute a style set can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    BackgroundColor,
    TextColor,
    TitleColor,
    TintColor,
    ThumbTintColor,
    OnTintColor,
    Font,
    CornerRadius,
    BorderColor,
    BorderWidth,
    ShadowColor,
    ShadowOffset,
    ShadowRadius,
    ShadowOpacity,
    OnImage,
    OffImage,
}

impl StyleProperty {
    /// Value written on activation when a set leaves this property unset.
    ///
    /// Colors, fonts and images reset to absent (toolkit default); geometry
    /// resets to zero. Activation always writes, so stale values never
    /// survive a theme switch.
    pub fn zero(self) -> Option<StyleValue> {
        match self {
            StyleProperty::CornerRadius
            | StyleProperty::BorderWidth
            | StyleProperty::ShadowRadius
            | StyleProperty::ShadowOpacity => Some(StyleValue::Scalar(0.0)),
            StyleProperty::ShadowOffset => Some(StyleValue::Offset(Offset::ZERO)),
            _ => None,
        }
    }

    /// Stable kebab-case name, used in logs
    pub fn name(self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::TextColor => "text-color",
            StyleProperty::TitleColor => "title-color",
            StyleProperty::TintColor => "tint-color",
            StyleProperty::ThumbTintColor => "thumb-tint-color",
            StyleProperty::OnTintColor => "on-tint-color",
            StyleProperty::Font => "font",
            StyleProperty::CornerRadius => "corner-radius",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::BorderWidth => "border-width",
            StyleProperty::ShadowColor => "shadow-color",
            StyleProperty::ShadowOffset => "shadow-offset",
            StyleProperty::ShadowRadius => "shadow-radius",
            StyleProperty::ShadowOpacity => "shadow-opacity",
            StyleProperty::OnImage => "on-image",
            StyleProperty::OffImage => "off-image",
        }
    }
}

/// A typed style value
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Font(Font),
    Scalar(f32),
    Offset(Offset),
    Image(ImageHandle),
}

impl StyleValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            StyleValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_offset(&self) -> Option<Offset> {
        match self {
            StyleValue::Offset(o) => Some(*o),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&Font> {
        match self {
            StyleValue::Font(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageHandle> {
        match self {
            StyleValue::Image(i) => Some(i),
            _ => None,
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Color(color)
    }
}

impl From<Font> for StyleValue {
    fn from(font: Font) -> Self {
        StyleValue::Font(font)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Scalar(value)
    }
}

impl From<Offset> for StyleValue {
    fn from(offset: Offset) -> Self {
        StyleValue::Offset(offset)
    }
}

impl From<ImageHandle> for StyleValue {
    fn from(image: ImageHandle) -> Self {
        StyleValue::Image(image)
    }
}

/// The concrete attribute values a category carries after activation.
///
/// Properties that resolved to "absent" are simply not present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    values: FxHashMap<StyleProperty, StyleValue>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
        self.values.insert(property, value.into());
    }

    pub fn with(mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.values.remove(&property)
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    pub fn color(&self, property: StyleProperty) -> Option<Color> {
        self.get(property).and_then(StyleValue::as_color)
    }

    pub fn scalar(&self, property: StyleProperty) -> Option<f32> {
        self.get(property).and_then(StyleValue::as_scalar)
    }

    pub fn offset(&self, property: StyleProperty) -> Option<Offset> {
        self.get(property).and_then(StyleValue::as_offset)
    }

    pub fn font(&self, property: StyleProperty) -> Option<&Font> {
        self.get(property).and_then(StyleValue::as_font)
    }

    pub fn image(&self, property: StyleProperty) -> Option<&ImageHandle> {
        self.get(property).and_then(StyleValue::as_image)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.values.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    /// Copy of `self` with every property present in `top` replaced
    pub fn overlay(&self, top: &ResolvedStyle) -> ResolvedStyle {
        let mut merged = self.clone();
        for (property, value) in top.iter() {
            merged.values.insert(property, value.clone());
        }
        merged
    }
}
