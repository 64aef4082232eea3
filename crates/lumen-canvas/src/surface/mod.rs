//! Texture resource views consumed by the canvas.
//!
//! The canvas never manages texture memory; it only reads a surface's
//! region, intrinsic flip, and backend handle when baking a request.

use crate::coords::{Rect, Vec2};
use crate::paint::Flip;

/// Opaque handle to a backend texture.
///
/// Painters resolve this against their own resource tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

/// View into a backend texture: a source region plus draw metadata.
///
/// Several surfaces may reference the same texture (sprite sheets, glyph
/// atlases).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface {
    texture: TextureId,
    region: Rect,
    flip: Flip,
}

impl Surface {
    #[inline]
    pub const fn new(texture: TextureId, region: Rect) -> Self {
        Self {
            texture,
            region,
            flip: Flip::NONE,
        }
    }

    /// Same surface with an intrinsic flip applied.
    ///
    /// The flip is XOR'd with the context flip at draw time.
    #[inline]
    pub fn with_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    #[inline]
    pub fn region(&self) -> Rect {
        self.region
    }

    #[inline]
    pub fn flip(&self) -> Flip {
        self.flip
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.region.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.region.height()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.region.size
    }
}
