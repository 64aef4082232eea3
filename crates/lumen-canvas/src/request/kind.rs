use super::fill_rect::FillRectRequest;
use super::get_pixel::GetPixelRequest;
use super::gradient::GradientRequest;
use super::inverse_ellipse::InverseEllipseRequest;
use super::line::LineRequest;
use super::texture::TextureRequest;
use super::triangle::TriangleRequest;

/// Closed set of drawing-request payloads.
///
/// Extending the canvas:
/// - add a payload module under `request::*`
/// - add a variant here
/// - implement the `draw_*` method inside that payload module
/// - add a matching entry point on [`Painter`]
///
/// [`Painter`]: crate::painter::Painter
#[derive(Debug, Clone)]
pub enum RequestKind {
    Texture(TextureRequest),
    Gradient(GradientRequest),
    FillRect(FillRectRequest),
    InverseEllipse(InverseEllipseRequest),
    Line(LineRequest),
    Triangle(TriangleRequest),
    GetPixel(GetPixelRequest),
}
