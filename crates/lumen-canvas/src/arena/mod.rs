//! Frame-scoped request storage.
//!
//! Requests live exactly one frame: recorded at draw time, read during
//! dispatch, dropped wholesale at `reset()`. The backing buffer is kept
//! across frames so steady-state rendering stops allocating once warmed.

use crate::request::DrawingRequest;

/// Index of a request within the arena's current frame.
///
/// Ids are invalidated by [`RequestArena::reset`]; holding one across a
/// frame boundary is a caller bug.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RequestId(usize);

/// Bulk store owning one frame's drawing requests by value.
///
/// There is no per-request deallocation; the whole frame is dropped at once.
/// The store grows on demand, so recording cannot fail.
#[derive(Debug, Default)]
pub struct RequestArena {
    slots: Vec<DrawingRequest>,
}

impl RequestArena {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `request` and returns its id for this frame.
    #[inline]
    pub fn alloc(&mut self, request: DrawingRequest) -> RequestId {
        let id = RequestId(self.slots.len());
        self.slots.push(request);
        id
    }

    /// Borrows a stored request.
    ///
    /// # Panics
    /// Panics if `id` predates the last [`reset`](Self::reset).
    #[inline]
    pub fn get(&self, id: RequestId) -> &DrawingRequest {
        &self.slots[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every stored request and invalidates all ids.
    ///
    /// Capacity is retained; the next frame reuses the same allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Blend, Color, Flip};
    use crate::request::{FillRectRequest, Layer, RequestKind, SortKey};
    use crate::coords::Rect;

    fn request(order: u32) -> DrawingRequest {
        DrawingRequest {
            key: SortKey::new(Layer::new(0), order),
            flip: Flip::NONE,
            alpha: 1.0,
            blend: Blend::default(),
            kind: RequestKind::FillRect(FillRectRequest {
                rect: Rect::new(0.0, 0.0, 1.0, 1.0),
                color: Color::white(),
                radius: 0.0,
            }),
        }
    }

    #[test]
    fn alloc_then_get() {
        let mut arena = RequestArena::new();
        let a = arena.alloc(request(0));
        let b = arena.alloc(request(1));
        assert_eq!(arena.get(a).key.order, 0);
        assert_eq!(arena.get(b).key.order, 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn reset_empties_and_restarts_ids() {
        let mut arena = RequestArena::new();
        arena.alloc(request(0));
        arena.alloc(request(1));

        arena.reset();
        assert!(arena.is_empty());

        let id = arena.alloc(request(7));
        assert_eq!(arena.get(id).key.order, 7);
        assert_eq!(arena.len(), 1);
    }
}
