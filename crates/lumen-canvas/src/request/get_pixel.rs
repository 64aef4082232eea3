use std::cell::Cell;
use std::rc::Rc;

use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::{Blend, Color, Flip};

use super::RequestKind;
use super::layer::Layer;

/// Deferred output cell for a pixel readback.
///
/// The caller keeps one handle and hands the other to [`Canvas::get_pixel`].
/// The painter resolves the cell while the readback request is dispatched;
/// [`get`](PixelCell::get) stays `None` until then. Reading before
/// `render()` has returned yields `None`, never a stale color from the
/// running frame.
#[derive(Debug, Clone, Default)]
pub struct PixelCell {
    inner: Rc<Cell<Option<Color>>>,
}

impl PixelCell {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the sampled color. Called by painters during dispatch, or by
    /// the canvas itself for off-viewport reads.
    #[inline]
    pub fn resolve(&self, color: Color) {
        self.inner.set(Some(color));
    }

    /// The sampled color, once resolved.
    #[inline]
    pub fn get(&self) -> Option<Color> {
        self.inner.get()
    }

    /// Clears the cell so the handle can be reused next frame.
    #[inline]
    pub fn reset(&self) {
        self.inner.set(None);
    }
}

/// Pixel-readback payload.
#[derive(Debug, Clone)]
pub struct GetPixelRequest {
    /// Sample position in screen space.
    pub pos: Vec2,
    pub sink: PixelCell,
}

impl Canvas {
    /// Requests the composited color at `position`, resolved into `sink`
    /// during the next `render()`.
    ///
    /// Positions outside the viewport resolve to black immediately and
    /// record nothing; there is no light offscreen.
    pub fn get_pixel(&mut self, position: Vec2, sink: &PixelCell) {
        let pos = self.apply_translate(position);

        if !self.state().viewport.contains_local(pos) {
            sink.resolve(Color::black());
            return;
        }

        self.push(
            Layer::GET_PIXEL,
            Flip::NONE,
            1.0,
            Blend::default(),
            RequestKind::GetPixel(GetPixelRequest {
                pos,
                sink: sink.clone(),
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_starts_unresolved() {
        assert_eq!(PixelCell::new().get(), None);
    }

    #[test]
    fn resolve_then_get() {
        let cell = PixelCell::new();
        cell.resolve(Color::rgb(0.5, 0.25, 0.0));
        assert_eq!(cell.get(), Some(Color::rgb(0.5, 0.25, 0.0)));
    }

    #[test]
    fn clones_share_the_cell() {
        let cell = PixelCell::new();
        let other = cell.clone();
        other.resolve(Color::white());
        assert_eq!(cell.get(), Some(Color::white()));
    }

    #[test]
    fn reset_clears() {
        let cell = PixelCell::new();
        cell.resolve(Color::white());
        cell.reset();
        assert_eq!(cell.get(), None);
    }
}
