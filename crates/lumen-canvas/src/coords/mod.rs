//! Coordinate and geometry types shared across the canvas and painters.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! All geometry stored in requests is final screen space; the canvas bakes
//! the context translation in at record time.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
