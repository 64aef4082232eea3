use core::cmp::Ordering;

/// Compositing-order key for drawing requests.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Layer(pub i32);

impl Layer {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Canonical compositing bands.
///
/// Game code is free to use any value in between; these just name the
/// conventional slots.
impl Layer {
    pub const BACKGROUND: Layer = Layer(-300);
    pub const TILES: Layer = Layer(0);
    pub const OBJECTS: Layer = Layer(50);
    pub const FOREGROUND: Layer = Layer(300);
    /// The lightmap sits above all scene content; [`Filter`] thresholds
    /// conventionally split around this value.
    ///
    /// [`Filter`]: crate::canvas::Filter
    pub const LIGHTMAP: Layer = Layer(450);
    /// Pixel readbacks sample here, after the scene is fully composited
    /// but before HUD overlays.
    pub const GET_PIXEL: Layer = Layer(498);
    pub const HUD: Layer = Layer(500);
    pub const GUI: Layer = Layer(600);
}

impl Ord for Layer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Layer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
