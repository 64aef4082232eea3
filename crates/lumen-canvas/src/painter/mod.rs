//! Backend dispatch interface.

use crate::request::{
    DrawingRequest, FillRectRequest, GetPixelRequest, GradientRequest, InverseEllipseRequest,
    LineRequest, TextureRequest, TriangleRequest,
};

/// One draw entry point per request kind.
///
/// The canvas dispatches sorted, filtered requests here during `render()`.
/// Each method receives the common request record (layer, flip, alpha,
/// blend) plus the kind-specific payload; geometry is final screen space
/// and must not be transformed further.
///
/// Implementations must resolve the sink of every [`GetPixelRequest`] they
/// receive — callers read it after `render()` returns.
pub trait Painter {
    fn draw_texture(&mut self, request: &DrawingRequest, texture: &TextureRequest);
    fn draw_gradient(&mut self, request: &DrawingRequest, gradient: &GradientRequest);
    fn draw_filled_rect(&mut self, request: &DrawingRequest, fill_rect: &FillRectRequest);
    fn draw_inverse_ellipse(&mut self, request: &DrawingRequest, ellipse: &InverseEllipseRequest);
    fn draw_line(&mut self, request: &DrawingRequest, line: &LineRequest);
    fn draw_triangle(&mut self, request: &DrawingRequest, triangle: &TriangleRequest);
    fn get_pixel(&mut self, request: &DrawingRequest, get_pixel: &GetPixelRequest);
}
