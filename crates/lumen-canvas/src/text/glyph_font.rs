use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::request::Layer;
use crate::surface::Surface;

use super::{Font, FontAlignment};

/// Error returned by [`GlyphFont::new`].
#[derive(Debug, Clone, Error)]
pub enum FontError {
    #[error("font parse error: {0}")]
    Parse(String),
    #[error("font size must be positive, got {0}")]
    InvalidSize(f32),
}

/// Atlas-backed font.
///
/// Layout and metrics come from the parsed font; pixels come from a glyph
/// atlas rasterized elsewhere. `glyphs` maps glyph indices to their atlas
/// regions. Each text draw becomes a single batched texture request, which
/// is what keeps HUD-heavy frames at a handful of dispatch calls.
pub struct GlyphFont {
    font: fontdue::Font,
    size: f32,
    atlas: Surface,
    glyphs: HashMap<u16, Rect>,
}

impl GlyphFont {
    /// Parses a TrueType/OpenType font and pairs it with its atlas.
    pub fn new(
        bytes: &[u8],
        size: f32,
        atlas: Surface,
        glyphs: HashMap<u16, Rect>,
    ) -> Result<Self, FontError> {
        if size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }

        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;

        Ok(Self {
            font,
            size,
            atlas,
            glyphs,
        })
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    fn layout(&self, text: &str) -> Vec<fontdue::layout::GlyphPosition> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, self.size, 0));
        layout.glyphs().clone()
    }

    fn alignment_offset(&self, text: &str, alignment: FontAlignment) -> f32 {
        match alignment {
            FontAlignment::Left => 0.0,
            FontAlignment::Center => -self.measure(text).x / 2.0,
            FontAlignment::Right => -self.measure(text).x,
        }
    }
}

impl Font for GlyphFont {
    fn draw_text(
        &self,
        canvas: &mut Canvas,
        text: &str,
        pos: Vec2,
        alignment: FontAlignment,
        layer: Layer,
        color: Color,
    ) {
        let origin = pos + Vec2::new(self.alignment_offset(text, alignment), 0.0);

        let mut srcrects = Vec::new();
        let mut dstrects = Vec::new();

        for glyph in self.layout(text) {
            let Some(&region) = self.glyphs.get(&glyph.key.glyph_index) else {
                // Whitespace carries no bitmap; anything else is an atlas gap.
                if !glyph.parent.is_whitespace() {
                    log::debug!("no atlas region for glyph {:?}", glyph.parent);
                }
                continue;
            };

            srcrects.push(region);
            dstrects.push(Rect::new(
                origin.x + glyph.x,
                origin.y + glyph.y,
                glyph.width as f32,
                glyph.height as f32,
            ));
        }

        if srcrects.is_empty() {
            return;
        }

        canvas.draw_surface_batch(&self.atlas, srcrects, dstrects, color, layer);
    }

    fn measure(&self, text: &str) -> Vec2 {
        let glyphs = self.layout(text);
        if glyphs.is_empty() {
            return Vec2::new(0.0, self.size * 1.2);
        }

        // Width uses the pen position after each glyph (bitmap left edge
        // backed out, advance added) rather than the bitmap right edge, so
        // trailing spaces and lightweight glyphs measure correctly.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, self.size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(self.size, f32::max);

        Vec2::new(w, h)
    }
}
