//! Deferred drawing canvas.
//!
//! Responsibilities:
//! - bake final screen-space geometry into requests as draws are recorded
//! - keep deterministic paint order (layer + submission order)
//! - sort, filter, and dispatch the frame's requests to a painter
//!
//! The per-kind `draw_*` construction methods live next to their payloads
//! under `request::*`; this module owns the frame lifecycle.

mod filter;

pub use filter::Filter;

use crate::arena::{RequestArena, RequestId};
use crate::context::DrawingState;
use crate::coords::Vec2;
use crate::paint::{Blend, Color, Flip};
use crate::painter::Painter;
use crate::request::{DrawingRequest, Layer, RequestKind, SortKey};
use crate::text::{Font, FontAlignment};

/// Accumulates drawing requests for one frame, then renders them in a
/// single sorted batch pass.
///
/// Lifecycle per frame: any number of `draw_*` calls, one or more
/// `render()` passes, then exactly one [`clear`](Canvas::clear) before the
/// next frame starts recording.
pub struct Canvas {
    state: DrawingState,
    arena: RequestArena,
    requests: Vec<RequestId>,
    next_order: u32,
}

impl Canvas {
    pub fn new(state: DrawingState) -> Self {
        Self {
            state,
            arena: RequestArena::new(),
            requests: Vec::new(),
            next_order: 0,
        }
    }

    /// Context snapshot read while recording.
    #[inline]
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Mutable context access for the enclosing transform stack.
    #[inline]
    pub fn state_mut(&mut self) -> &mut DrawingState {
        &mut self.state
    }

    /// Number of requests recorded so far this frame.
    #[inline]
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Sorts pending requests by layer (submission order within a layer)
    /// and dispatches every request admitted by `filter` to `painter`.
    ///
    /// Non-destructive: nothing is removed or mutated, so the same frame
    /// can be rendered multiple times with different filters.
    pub fn render(&mut self, painter: &mut dyn Painter, filter: Filter) {
        // A regular frame carries a few hundred requests after batching
        // (thousands before). Sorting ids rather than records keeps the
        // moves small; SortKey makes the layer sort stable.
        let arena = &self.arena;
        self.requests
            .sort_by(|&a, &b| arena.get(a).key.cmp(&arena.get(b).key));

        log::trace!(
            "render: {} requests, filter {:?}",
            self.requests.len(),
            filter
        );

        for &id in &self.requests {
            let request = self.arena.get(id);

            if !filter.admits(request.layer()) {
                continue;
            }

            match &request.kind {
                RequestKind::Texture(texture) => painter.draw_texture(request, texture),
                RequestKind::Gradient(gradient) => painter.draw_gradient(request, gradient),
                RequestKind::FillRect(fill_rect) => painter.draw_filled_rect(request, fill_rect),
                RequestKind::InverseEllipse(ellipse) => {
                    painter.draw_inverse_ellipse(request, ellipse);
                }
                RequestKind::Line(line) => painter.draw_line(request, line),
                RequestKind::Triangle(triangle) => painter.draw_triangle(request, triangle),
                RequestKind::GetPixel(get_pixel) => painter.get_pixel(request, get_pixel),
            }
        }
    }

    /// Drops every pending request and readies the canvas for the next
    /// frame. Arena capacity is retained.
    pub fn clear(&mut self) {
        self.requests.clear();
        self.next_order = 0;
        self.arena.reset();
    }

    /// Records a text draw by delegating to `font`, which decomposes the
    /// string into texture draws against this canvas.
    pub fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        pos: Vec2,
        alignment: FontAlignment,
        layer: Layer,
        color: Color,
    ) {
        font.draw_text(self, text, pos, alignment, layer, color);
    }

    /// Records text centered on the context's logical width.
    pub fn draw_center_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        pos: Vec2,
        layer: Layer,
        color: Color,
    ) {
        let centered = Vec2::new(pos.x + self.state.width() / 2.0, pos.y);
        self.draw_text(font, text, centered, FontAlignment::Center, layer, color);
    }

    /// Maps a pre-translate position into final screen space: camera
    /// translation out (snapped to whole pixels), viewport origin in.
    pub(crate) fn apply_translate(&self, pos: Vec2) -> Vec2 {
        let translation = self.state.transform.translation.floored();
        (pos - translation) + self.state.viewport.origin
    }

    /// Records one request with the next submission index.
    pub(crate) fn push(&mut self, layer: Layer, flip: Flip, alpha: f32, blend: Blend, kind: RequestKind) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        let id = self.arena.alloc(DrawingRequest {
            key: SortKey::new(layer, order),
            flip,
            alpha,
            blend,
            kind,
        });
        self.requests.push(id);
    }
}
