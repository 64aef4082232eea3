use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::Color;

use super::RequestKind;
use super::layer::Layer;

/// Line-segment payload.
#[derive(Debug, Clone)]
pub struct LineRequest {
    pub pos: Vec2,
    pub dest: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records a line from `pos1` to `pos2`.
    pub fn draw_line(&mut self, pos1: Vec2, pos2: Vec2, color: Color, layer: Layer) {
        let transform = self.state().transform;

        self.push(
            layer,
            transform.flip,
            transform.alpha,
            transform.blend,
            RequestKind::Line(LineRequest {
                pos: self.apply_translate(pos1),
                dest: self.apply_translate(pos2),
                color: color.with_alpha_scaled(transform.alpha),
            }),
        );
    }
}
