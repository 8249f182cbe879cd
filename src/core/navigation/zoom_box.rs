use crate::core::data::normalized_point::NormalizedPoint;

/// A square in normalized window coordinates, y growing upward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomBox {
    pub center: NormalizedPoint,
    pub half_extent: f64,
}

impl ZoomBox {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.x - self.half_extent
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.center.x + self.half_extent
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.y - self.half_extent
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.center.y + self.half_extent
    }
}
