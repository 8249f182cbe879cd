use log::{debug, warn};

use crate::core::data::complex::Complex;
use crate::core::data::normalized_point::NormalizedPoint;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::pan_direction::PanDirection;
use crate::core::navigation::zoom_box::ZoomBox;
use crate::core::navigation::zoom_factor::ZoomFactor;
use crate::core::util::pixel_to_complex_coords::{
    complex_to_pixel_coords, normalized_to_complex_coords, pixel_to_complex_coords,
};

/// The current view of the complex plane and the zoom step applied by clicks.
///
/// All mutations keep the viewport valid: recentring only moves the centre and
/// zooming only divides the size by a factor of at least
/// [`MIN_ZOOM_FACTOR`](crate::core::navigation::zoom_factor::MIN_ZOOM_FACTOR).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportModel {
    viewport: Viewport,
    zoom_factor: ZoomFactor,
}

impl ViewportModel {
    #[must_use]
    pub fn new(viewport: Viewport, zoom_factor: ZoomFactor) -> Self {
        Self {
            viewport,
            zoom_factor,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn zoom_factor(&self) -> ZoomFactor {
        self.zoom_factor
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, canvas_size: u32) -> Complex {
        pixel_to_complex_coords(pixel, canvas_size, &self.viewport)
    }

    #[must_use]
    pub fn normalized_to_complex(&self, point: NormalizedPoint) -> Complex {
        normalized_to_complex_coords(point, &self.viewport)
    }

    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex, canvas_size: u32) -> Option<Point> {
        complex_to_pixel_coords(point, canvas_size, &self.viewport)
    }

    /// Centres the view on the clicked point, then divides the size by the
    /// zoom factor.
    pub fn zoom_at(&mut self, click: NormalizedPoint) {
        let center = self.normalized_to_complex(click);

        self.viewport.recentre(center);
        self.viewport.shrink(self.zoom_factor.value());

        debug!(
            "zoomed to centre ({}, {}) size {}",
            center.real,
            center.imag,
            self.viewport.size()
        );
    }

    /// Moves the centre by `size * shift_percentage` in `direction`.
    pub fn pan(&mut self, direction: PanDirection, shift_percentage: f64) {
        let (dx, dy) = direction.unit_offset();
        let step = self.viewport.size() * shift_percentage;
        let center = self.viewport.center();
        let moved = Complex::new(center.real + dx * step, center.imag + dy * step);

        self.viewport.recentre(moved);

        debug!(
            "panned {direction:?} to centre ({}, {})",
            moved.real, moved.imag
        );
    }

    pub fn increase_zoom(&mut self) {
        self.zoom_factor.increase();
        debug!("zoom factor increased to {}", self.zoom_factor.value());
    }

    /// Returns `false` when the factor was already at its floor.
    pub fn decrease_zoom(&mut self) -> bool {
        if self.zoom_factor.decrease() {
            debug!("zoom factor decreased to {}", self.zoom_factor.value());
            return true;
        }

        warn!(
            "zoom factor {} is at its floor, ignoring decrease",
            self.zoom_factor.value()
        );
        false
    }

    /// The region of the window a click at `pointer` would zoom into.
    #[must_use]
    pub fn zoom_box(&self, pointer: NormalizedPoint) -> ZoomBox {
        ZoomBox {
            center: pointer,
            half_extent: 1.0 / (2.0 * self.zoom_factor.value()),
        }
    }
}

impl Default for ViewportModel {
    fn default() -> Self {
        Self::new(Viewport::default(), ZoomFactor::default())
    }
}
