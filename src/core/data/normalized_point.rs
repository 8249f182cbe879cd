/// A pointer position normalized to `[0, 1) × [0, 1)`.
///
/// `y` grows upward: `(0, 0)` is the bottom-left corner of the canvas, matching
/// the orientation of the complex plane rather than the raster.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts a window-space position (origin top-left, `y` grows downward)
    /// into a normalized point. Returns `None` for an empty window.
    #[must_use]
    pub fn from_window_position(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self {
            x: (x / width).clamp(0.0, 1.0),
            y: (1.0 - y / height).clamp(0.0, 1.0),
        })
    }
}
