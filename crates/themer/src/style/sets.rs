//! Canonical style sets, one per widget category

use themer_core::{Color, Font, ImageHandle, Offset};

crate::style_set! {
    /// Style for plain container views
    ViewStyle {
        background_color / with_background_color: Color => BackgroundColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
    }
}

crate::style_set! {
    /// Style for buttons
    ButtonStyle {
        button_color / with_button_color: Color => BackgroundColor,
        title_color / with_title_color: Color => TitleColor,
        font / with_font: Font => Font,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
    }
}

crate::style_set! {
    /// Style for text labels
    LabelStyle {
        color / with_color: Color => TextColor,
        font / with_font: Font => Font,
        background_color / with_background_color: Color => BackgroundColor,
    }
}

crate::style_set! {
    /// Style for image views
    ImageViewStyle {
        background_color / with_background_color: Color => BackgroundColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
        /// Recolors template images
        tint_color / with_tint_color: Color => TintColor,
    }
}

crate::style_set! {
    /// Style for on/off switches
    SwitchStyle {
        background_color / with_background_color: Color => BackgroundColor,
        on_image / with_on_image: ImageHandle => OnImage,
        off_image / with_off_image: ImageHandle => OffImage,
        thumb_tint_color / with_thumb_tint_color: Color => ThumbTintColor,
        on_tint_color / with_on_tint_color: Color => OnTintColor,
    }
}

crate::style_set! {
    /// Style for table views
    TableViewStyle {
        background_color / with_background_color: Color => BackgroundColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
    }
}

crate::style_set! {
    /// Style for table rows
    TableCellStyle {
        background_color / with_background_color: Color => BackgroundColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
    }
}

crate::style_set! {
    /// Style for collection (grid) views
    CollectionViewStyle {
        background_color / with_background_color: Color => BackgroundColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
    }
}

crate::style_set! {
    /// Style for collection cells
    CollectionCellStyle {
        background_color / with_background_color: Color => BackgroundColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
        shadow_color / with_shadow_color: Color => ShadowColor,
        shadow_offset / with_shadow_offset: Offset => ShadowOffset,
        shadow_radius / with_shadow_radius: f32 => ShadowRadius,
        shadow_opacity / with_shadow_opacity: f32 => ShadowOpacity,
    }
}

crate::style_set! {
    /// Style for navigation bars
    NavigationBarStyle {
        background_color / with_background_color: Color => BackgroundColor,
        title_color / with_title_color: Color => TitleColor,
        title_font / with_title_font: Font => Font,
        tint_color / with_tint_color: Color => TintColor,
        corner_radius / with_corner_radius: f32 => CornerRadius,
        border_color / with_border_color: Color => BorderColor,
        border_width / with_border_width: f32 => BorderWidth,
    }
}

/// Bar states that can carry their own navigation bar style.
///
/// `ScrollEdge` and `Compact` are overlays on `Standard`; a state without an
/// overlay shows the standard style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarAppearance {
    Standard,
    /// Content scrolled to the bar's edge
    ScrollEdge,
    /// Compact height, e.g. landscape phones
    Compact,
}

impl BarAppearance {
    /// States that may override the standard style
    pub const OVERLAYS: [BarAppearance; 2] = [BarAppearance::ScrollEdge, BarAppearance::Compact];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleAttributeSet, StyleProperty};
    use pretty_assertions::assert_eq;

    fn full_button() -> ButtonStyle {
        ButtonStyle::new()
            .with_button_color(Color::BLUE)
            .with_title_color(Color::WHITE)
            .with_font(Font::system(28.0))
            .with_corner_radius(16.0)
            .with_border_color(Color::RED)
            .with_border_width(4.0)
            .with_shadow_color(Color::ORANGE)
            .with_shadow_offset(Offset::new(10.0, 20.0))
            .with_shadow_radius(8.0)
            .with_shadow_opacity(0.8)
    }

    #[test]
    fn test_merge_override_wins_when_present() {
        let base = full_button();
        let over = ButtonStyle::new()
            .with_button_color(Color::BLACK)
            .with_corner_radius(80.0);

        let merged = base.merge(&over);
        for &property in ButtonStyle::PROPERTIES {
            let expected = over.get(property).or_else(|| base.get(property));
            assert_eq!(merged.get(property), expected, "{}", property.name());
        }
        assert_eq!(merged.button_color, Some(Color::BLACK));
        assert_eq!(merged.border_width, Some(4.0));
    }

    #[test]
    fn test_merge_never_loses_base_only_values() {
        let base = LabelStyle::new().with_font(Font::system(48.0));
        let over = LabelStyle::new().with_color(Color::ORANGE);

        let merged = base.merge(&over);
        assert_eq!(merged.font, Some(Font::system(48.0)));
        assert_eq!(merged.color, Some(Color::ORANGE));
        assert_eq!(merged.background_color, None);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let base = full_button();
        assert_eq!(base.merge(&ButtonStyle::default()), base);
        assert_eq!(ButtonStyle::default().merge(&base), base);
    }

    #[test]
    fn test_resolve_writes_zero_for_unset_geometry() {
        let resolved = ViewStyle::new().with_background_color(Color::RED).resolve();

        assert_eq!(
            resolved.color(StyleProperty::BackgroundColor),
            Some(Color::RED)
        );
        assert_eq!(resolved.scalar(StyleProperty::CornerRadius), Some(0.0));
        assert_eq!(resolved.scalar(StyleProperty::ShadowOpacity), Some(0.0));
        assert_eq!(
            resolved.offset(StyleProperty::ShadowOffset),
            Some(Offset::ZERO)
        );
        assert_eq!(resolved.color(StyleProperty::ShadowColor), None);
    }

    #[test]
    fn test_partial_skips_zero_defaults() {
        let partial = ViewStyle::new().with_background_color(Color::RED).partial();
        assert_eq!(partial.len(), 1);
    }

    #[test]
    fn test_switch_declares_only_its_own_properties() {
        let switch = SwitchStyle::new()
            .with_on_image(ImageHandle::named("on"))
            .with_on_tint_color(Color::GREEN);

        let resolved = switch.resolve();
        assert_eq!(
            resolved.image(StyleProperty::OnImage),
            Some(&ImageHandle::named("on"))
        );
        assert!(!resolved.contains(StyleProperty::CornerRadius));
        assert_eq!(switch.get(StyleProperty::CornerRadius), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(NavigationBarStyle::default().is_empty());
        assert!(!NavigationBarStyle::new()
            .with_tint_color(Color::BLUE)
            .is_empty());
    }
}
