//! Lumen canvas crate.
//!
//! A frame-scoped deferred drawing pipeline: game code records typed
//! drawing requests all frame, then `render()` stable-sorts them by layer
//! and dispatches each to a [`Painter`] backend in one batch pass.

pub mod arena;
pub mod canvas;
pub mod context;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod painter;
pub mod request;
pub mod surface;
pub mod text;

pub use canvas::{Canvas, Filter};
pub use context::{DrawingState, Transform};
pub use painter::Painter;
pub use request::{Layer, PixelCell};
