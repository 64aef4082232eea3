use super::{Blend, Color};

/// Style bundle for region/scaled texture draws.
///
/// `alpha` multiplies on top of the context's transform alpha; `color` tints
/// the texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintStyle {
    pub color: Color,
    pub alpha: f32,
    pub blend: Blend,
}

impl PaintStyle {
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    #[inline]
    pub fn with_blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }
}

impl Default for PaintStyle {
    #[inline]
    fn default() -> Self {
        Self {
            color: Color::white(),
            alpha: 1.0,
            blend: Blend::default(),
        }
    }
}
