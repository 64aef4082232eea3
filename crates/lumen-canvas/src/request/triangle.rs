use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::Color;

use super::RequestKind;
use super::layer::Layer;

/// Filled-triangle payload.
#[derive(Debug, Clone)]
pub struct TriangleRequest {
    pub pos1: Vec2,
    pub pos2: Vec2,
    pub pos3: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records a filled triangle.
    pub fn draw_triangle(&mut self, pos1: Vec2, pos2: Vec2, pos3: Vec2, color: Color, layer: Layer) {
        let transform = self.state().transform;

        self.push(
            layer,
            transform.flip,
            transform.alpha,
            transform.blend,
            RequestKind::Triangle(TriangleRequest {
                pos1: self.apply_translate(pos1),
                pos2: self.apply_translate(pos2),
                pos3: self.apply_translate(pos3),
                color: color.with_alpha_scaled(transform.alpha),
            }),
        );
    }
}
