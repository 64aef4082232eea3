use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::{Blend, Color, PaintStyle};
use crate::surface::{Surface, TextureId};

use super::RequestKind;
use super::layer::Layer;

/// Rect list for batched quads.
///
/// Single-quad draws are by far the common case; one inline slot keeps them
/// off the heap.
pub type RectList = SmallVec<[Rect; 1]>;

/// Textured-quad payload.
///
/// `srcrects` and `dstrects` are parallel: entry *i* of each describes one
/// quad. Batching many quads into one request is the draw-call reduction
/// this whole pipeline exists for.
#[derive(Debug, Clone)]
pub struct TextureRequest {
    pub texture: TextureId,
    pub srcrects: RectList,
    pub dstrects: RectList,
    pub color: Color,
    /// Clockwise rotation in degrees around each quad's center.
    pub angle: f32,
}

impl Canvas {
    /// Records a surface draw at `position` (its top-left corner).
    ///
    /// This is the sole culling point: a destination entirely outside the
    /// clip rectangle records nothing. Both `position` and the clip
    /// rectangle are in pre-translate space here; the translation is only
    /// applied afterwards.
    pub fn draw_surface(&mut self, surface: &Surface, position: Vec2, layer: Layer) {
        self.draw_surface_rotated(surface, position, 0.0, Color::white(), Blend::default(), layer);
    }

    /// Records a surface draw with rotation, tint, and explicit blend.
    pub fn draw_surface_rotated(
        &mut self,
        surface: &Surface,
        position: Vec2,
        angle: f32,
        color: Color,
        blend: Blend,
        layer: Layer,
    ) {
        let clip = self.state().clip_rect;
        if position.x > clip.right()
            || position.y > clip.bottom()
            || position.x + surface.width() < clip.left()
            || position.y + surface.height() < clip.top()
        {
            return;
        }

        let transform = self.state().transform;
        let dst = Rect::from_origin_size(self.apply_translate(position), surface.size());

        let mut srcrects = RectList::new();
        let mut dstrects = RectList::new();
        srcrects.push(surface.region());
        dstrects.push(dst);

        self.push(
            layer,
            transform.flip ^ surface.flip(),
            transform.alpha,
            blend,
            RequestKind::Texture(TextureRequest {
                texture: surface.texture(),
                srcrects,
                dstrects,
                color,
                angle,
            }),
        );
    }

    /// Records the whole surface stretched into `dstrect`.
    pub fn draw_surface_scaled(
        &mut self,
        surface: &Surface,
        dstrect: Rect,
        layer: Layer,
        style: PaintStyle,
    ) {
        self.draw_surface_part(surface, surface.region(), dstrect, layer, style);
    }

    /// Records a sub-region of `surface` stretched into `dstrect`.
    pub fn draw_surface_part(
        &mut self,
        surface: &Surface,
        srcrect: Rect,
        dstrect: Rect,
        layer: Layer,
        style: PaintStyle,
    ) {
        let transform = self.state().transform;

        let mut srcrects = RectList::new();
        let mut dstrects = RectList::new();
        srcrects.push(srcrect);
        dstrects.push(Rect::from_origin_size(
            self.apply_translate(dstrect.origin),
            dstrect.size,
        ));

        self.push(
            layer,
            transform.flip ^ surface.flip(),
            transform.alpha * style.alpha,
            style.blend,
            RequestKind::Texture(TextureRequest {
                texture: surface.texture(),
                srcrects,
                dstrects,
                color: style.color,
                angle: 0.0,
            }),
        );
    }

    /// Records many quads of one surface as a single request.
    ///
    /// `srcrects` and `dstrects` must have equal length; each destination is
    /// translated independently.
    ///
    /// # Panics
    /// Panics if the two lists differ in length.
    pub fn draw_surface_batch(
        &mut self,
        surface: &Surface,
        srcrects: Vec<Rect>,
        dstrects: Vec<Rect>,
        color: Color,
        layer: Layer,
    ) {
        assert_eq!(
            srcrects.len(),
            dstrects.len(),
            "draw_surface_batch: src/dst rect counts differ"
        );

        let transform = self.state().transform;

        let srcrects = RectList::from_vec(srcrects);
        let mut dstrects = RectList::from_vec(dstrects);
        for dst in &mut dstrects {
            *dst = Rect::from_origin_size(self.apply_translate(dst.origin), dst.size);
        }

        self.push(
            layer,
            transform.flip ^ surface.flip(),
            transform.alpha,
            Blend::default(),
            RequestKind::Texture(TextureRequest {
                texture: surface.texture(),
                srcrects,
                dstrects,
                color,
                angle: 0.0,
            }),
        );
    }
}
