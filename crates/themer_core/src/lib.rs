//! Themer Core
//!
//! Toolkit-agnostic primitives shared by the theming engine and the widgets
//! that consume it:
//!
//! - [`Color`]: RGBA color in linear 0..1 components
//! - [`Offset`]: 2D offset used for shadows
//! - [`Font`]: font family, point size and weight
//! - [`ImageHandle`]: named reference to a bitmap owned by the host
//! - [`Easing`]: transition curves for animated theme switches
//!
//! Nothing in this crate knows about themes; it only describes values.

pub mod color;
pub mod easing;
pub mod font;
pub mod geometry;
pub mod image;

pub use color::Color;
pub use easing::Easing;
pub use font::{Font, FontWeight};
pub use geometry::Offset;
pub use image::ImageHandle;
