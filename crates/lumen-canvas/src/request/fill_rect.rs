use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::Color;

use super::RequestKind;
use super::layer::Layer;

/// Filled-rectangle payload.
#[derive(Debug, Clone)]
pub struct FillRectRequest {
    pub rect: Rect,
    /// Fill color; alpha already carries the context alpha.
    pub color: Color,
    /// Corner radius; `0.0` draws square corners.
    pub radius: f32,
}

impl Canvas {
    /// Records a filled rectangle.
    #[inline]
    pub fn draw_filled_rect(&mut self, rect: Rect, color: Color, layer: Layer) {
        self.draw_rounded_rect(rect, color, 0.0, layer);
    }

    /// Records a filled rectangle with rounded corners.
    pub fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32, layer: Layer) {
        let transform = self.state().transform;

        self.push(
            layer,
            transform.flip,
            transform.alpha,
            transform.blend,
            RequestKind::FillRect(FillRectRequest {
                rect: Rect::from_origin_size(self.apply_translate(rect.origin), rect.size),
                color: color.with_alpha_scaled(transform.alpha),
                radius,
            }),
        );
    }
}
