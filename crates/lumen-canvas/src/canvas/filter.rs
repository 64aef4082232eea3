use crate::request::Layer;

/// Render-time layer predicate.
///
/// Filtering is evaluated per `render()` call and never removes requests;
/// the same canvas can be rendered below and above a threshold in two
/// passes (scene first, then lightmap-composited overlays).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Filter {
    /// Dispatch everything.
    All,
    /// Dispatch only requests strictly below the threshold layer.
    Below(Layer),
    /// Dispatch only requests strictly above the threshold layer.
    Above(Layer),
}

impl Filter {
    /// Whether a request at `layer` survives this filter.
    #[inline]
    pub fn admits(self, layer: Layer) -> bool {
        match self {
            Filter::All => true,
            Filter::Below(threshold) => layer < threshold,
            Filter::Above(threshold) => layer > threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_admits_everything() {
        assert!(Filter::All.admits(Layer::new(i32::MIN)));
        assert!(Filter::All.admits(Layer::new(i32::MAX)));
    }

    #[test]
    fn below_excludes_threshold_and_above() {
        let f = Filter::Below(Layer::LIGHTMAP);
        assert!(f.admits(Layer::new(449)));
        assert!(!f.admits(Layer::LIGHTMAP));
        assert!(!f.admits(Layer::new(451)));
    }

    #[test]
    fn above_excludes_threshold_and_below() {
        let f = Filter::Above(Layer::LIGHTMAP);
        assert!(!f.admits(Layer::new(449)));
        assert!(!f.admits(Layer::LIGHTMAP));
        assert!(f.admits(Layer::new(451)));
    }
}
