//! Paint model shared between the canvas and painters.
//!
//! Scope:
//! - color representation (straight-alpha linear RGBA)
//! - blend factor pairs
//! - flip bitmask
//! - gradient direction
//!
//! Geometry types remain in `coords`.

mod blend;
mod color;
mod flip;
mod gradient;
mod style;

pub use blend::{Blend, BlendFactor};
pub use color::Color;
pub use flip::Flip;
pub use gradient::GradientDirection;
pub use style::PaintStyle;
