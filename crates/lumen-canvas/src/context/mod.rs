//! Drawing-context state read by the canvas when recording requests.
//!
//! A transform stack outside this crate pushes and pops `Transform` values;
//! the canvas only ever reads the current snapshot.

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::{Blend, Flip};

/// Current accumulated transform applied to every recorded draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// Camera translation, subtracted from draw positions.
    pub translation: Vec2,
    pub flip: Flip,
    pub alpha: f32,
    pub blend: Blend,
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self {
            translation: Vec2::zero(),
            flip: Flip::NONE,
            alpha: 1.0,
            blend: Blend::default(),
        }
    }
}

/// Snapshot of the enclosing drawing context.
///
/// `clip_rect` lives in the same pre-translate space as draw positions;
/// culling compares against it before the translation is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawingState {
    pub transform: Transform,
    pub clip_rect: Rect,
    pub viewport: Viewport,
}

impl DrawingState {
    /// Fresh state for a viewport: identity transform, clip spanning the
    /// full logical area.
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            transform: Transform::default(),
            clip_rect: Rect::new(0.0, 0.0, viewport.width(), viewport.height()),
            viewport,
        }
    }

    /// Logical width of the context, used for centered text.
    #[inline]
    pub fn width(&self) -> f32 {
        self.viewport.width()
    }
}
