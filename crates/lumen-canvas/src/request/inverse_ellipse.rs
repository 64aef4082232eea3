use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::Color;

use super::RequestKind;
use super::layer::Layer;

/// Inverse-ellipse payload: fills everything *outside* the ellipse.
///
/// Used for iris-in/iris-out style screen wipes.
#[derive(Debug, Clone)]
pub struct InverseEllipseRequest {
    /// Ellipse center in screen space.
    pub pos: Vec2,
    /// Full width/height of the ellipse.
    pub size: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records an inverse ellipse centered at `pos`.
    pub fn draw_inverse_ellipse(&mut self, pos: Vec2, size: Vec2, color: Color, layer: Layer) {
        let transform = self.state().transform;

        self.push(
            layer,
            transform.flip,
            transform.alpha,
            transform.blend,
            RequestKind::InverseEllipse(InverseEllipseRequest {
                pos: self.apply_translate(pos),
                size,
                color: color.with_alpha_scaled(transform.alpha),
            }),
        );
    }
}
