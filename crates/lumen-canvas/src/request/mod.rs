//! Drawing-request records.
//!
//! Responsibilities:
//! - define the closed set of request payloads
//! - provide deterministic ordering (layer + submission order)
//! - keep per-kind canvas construction methods isolated per payload file
//!
//! Requests are immutable once recorded: geometry is already final screen
//! space, colors already carry the context alpha, and the render pass never
//! mutates them.

mod fill_rect;
mod get_pixel;
mod gradient;
mod inverse_ellipse;
mod key;
mod kind;
mod layer;
mod line;
mod texture;
mod triangle;

pub use fill_rect::FillRectRequest;
pub use get_pixel::{GetPixelRequest, PixelCell};
pub use gradient::GradientRequest;
pub use inverse_ellipse::InverseEllipseRequest;
pub use key::SortKey;
pub use kind::RequestKind;
pub use layer::Layer;
pub use line::LineRequest;
pub use texture::{RectList, TextureRequest};
pub use triangle::TriangleRequest;

use crate::paint::{Blend, Flip};

/// One recorded drawing operation.
///
/// The common fields apply to every kind; the payload carries the
/// kind-specific geometry and colors.
#[derive(Debug, Clone)]
pub struct DrawingRequest {
    pub key: SortKey,
    pub flip: Flip,
    pub alpha: f32,
    pub blend: Blend,
    pub kind: RequestKind,
}

impl DrawingRequest {
    #[inline]
    pub fn layer(&self) -> Layer {
        self.key.layer
    }
}
