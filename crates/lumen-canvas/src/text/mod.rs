//! Text drawing seam.
//!
//! Fonts are collaborators: the canvas hands them the string and they
//! decompose it into textured draws against the same canvas. There is no
//! text request kind.

mod glyph_font;

pub use glyph_font::{FontError, GlyphFont};

use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::Color;
use crate::request::Layer;

/// Horizontal anchoring of a text draw relative to its position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FontAlignment {
    Left,
    Center,
    Right,
}

/// A font that can lay out and record text on a canvas.
pub trait Font {
    /// Decomposes `text` into draw calls against `canvas`.
    fn draw_text(
        &self,
        canvas: &mut Canvas,
        text: &str,
        pos: Vec2,
        alignment: FontAlignment,
        layer: Layer,
        color: Color,
    );

    /// Bounding size of the laid-out string in logical pixels.
    fn measure(&self, text: &str) -> Vec2;
}
