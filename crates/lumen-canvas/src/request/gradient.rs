use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::{Blend, Color, GradientDirection};

use super::RequestKind;
use super::layer::Layer;

/// Two-color gradient payload.
#[derive(Debug, Clone)]
pub struct GradientRequest {
    pub top: Color,
    pub bottom: Color,
    pub direction: GradientDirection,
    /// Screen-space region the gradient fills, both corners translated.
    pub region: Rect,
}

impl Canvas {
    /// Records a gradient fill over `region`.
    pub fn draw_gradient(
        &mut self,
        top: Color,
        bottom: Color,
        layer: Layer,
        direction: GradientDirection,
        region: Rect,
        blend: Blend,
    ) {
        let transform = self.state().transform;

        let p1 = self.apply_translate(region.origin);
        let p2 = self.apply_translate(region.origin + region.size);

        self.push(
            layer,
            transform.flip,
            transform.alpha,
            blend,
            RequestKind::Gradient(GradientRequest {
                top,
                bottom,
                direction,
                region: Rect::from_corners(p1, p2),
            }),
        );
    }
}
