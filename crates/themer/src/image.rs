//! Scheme-dependent images

use std::sync::{Arc, PoisonError, RwLock};
use themer_core::ImageHandle;

use crate::context::ThemeContext;
use crate::mode::ColorScheme;
use crate::observer::{Subscription, ThemeObserver};

/// An image with one bitmap per color scheme.
///
/// Subscribed to a [`ThemeContext`], it swaps its current bitmap whenever a
/// concrete theme is applied.
#[derive(Debug)]
pub struct ThemedImage {
    light: ImageHandle,
    dark: ImageHandle,
    current: RwLock<ImageHandle>,
}

impl ThemedImage {
    pub fn new(light: ImageHandle, dark: ImageHandle) -> Self {
        Self {
            current: RwLock::new(light.clone()),
            light,
            dark,
        }
    }

    /// Create the image, pick the bitmap for the applied scheme and subscribe
    pub fn attach(
        ctx: &ThemeContext,
        light: ImageHandle,
        dark: ImageHandle,
    ) -> (Arc<Self>, Subscription) {
        let image = Arc::new(Self::new(light, dark));
        image.theme_changed(ctx);
        let subscription = ctx.subscribe(&image);
        (image, subscription)
    }

    pub fn image_for(&self, scheme: ColorScheme) -> &ImageHandle {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn current(&self) -> ImageHandle {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ThemeObserver for ThemedImage {
    fn theme_changed(&self, ctx: &ThemeContext) {
        let scheme = ctx.applied_scheme().unwrap_or_default();
        let next = self.image_for(scheme).clone();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
