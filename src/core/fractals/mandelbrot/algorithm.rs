use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Beyond this magnitude the orbit of `z ← z² + c` is guaranteed to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Runs the escape-time recurrence `z ← z² + c` starting from `z = c`.
///
/// Returns the number of iterations still remaining when the orbit left the
/// escape radius, counting down from `max_iterations`. A point that escapes
/// before the first step therefore yields `max_iterations`. Returns `0` when
/// the orbit stayed bounded for the whole budget, i.e. the point is treated as
/// inside the set. A zero budget is always `0`.
#[must_use]
pub fn escape_countdown(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for remaining in (1..=max_iterations).rev() {
        if z.magnitude() > ESCAPE_RADIUS {
            return remaining;
        }
        z = z * z + c;
    }

    0
}

/// Evaluates [`escape_countdown`] for every pixel of a square canvas viewed
/// through a [`Viewport`].
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    canvas_size: u32,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, canvas_size: u32, max_iterations: u32) -> Self {
        Self {
            viewport,
            canvas_size,
            max_iterations,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.canvas_size, &self.viewport);
        escape_countdown(c, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_outside_radius_escapes_on_first_probe() {
        assert_eq!(escape_countdown(Complex::new(3.0, 0.0), 255), 255);
        assert_eq!(escape_countdown(Complex::new(0.0, -2.5), 10), 10);
        assert_eq!(escape_countdown(Complex::new(2.0, 2.0), 1), 1);
    }

    #[test]
    fn test_origin_never_escapes() {
        for max in [1, 2, 10, 255, 1000] {
            assert_eq!(escape_countdown(Complex::ZERO, max), 0);
        }
    }

    #[test]
    fn test_zero_budget_is_in_set() {
        assert_eq!(escape_countdown(Complex::ZERO, 0), 0);
        assert_eq!(escape_countdown(Complex::new(3.0, 0.0), 0), 0);
        assert_eq!(escape_countdown(Complex::new(-100.0, 100.0), 0), 0);
    }

    #[test]
    fn test_countdown_reports_iterations_remaining() {
        // z: 1 -> 2 -> 5, escaping on the third probe
        assert_eq!(escape_countdown(Complex::new(1.0, 0.0), 255), 253);
        assert_eq!(escape_countdown(Complex::new(1.0, 0.0), 3), 1);
        assert_eq!(escape_countdown(Complex::new(1.0, 0.0), 2), 0);
    }

    #[test]
    fn test_radius_boundary_is_exclusive() {
        // |z| == 2 does not count as escaped; c = -2 is a fixed point on the boundary
        assert_eq!(escape_countdown(Complex::new(-2.0, 0.0), 50), 0);
    }

    #[test]
    fn test_known_interior_points() {
        assert_eq!(escape_countdown(Complex::new(-0.5, 0.0), 255), 0);
        assert_eq!(escape_countdown(Complex::new(-1.0, 0.0), 255), 0);
        assert_eq!(escape_countdown(Complex::new(0.0, 1.0), 255), 0);
    }

    #[test]
    fn test_result_never_exceeds_budget() {
        let samples = [
            Complex::new(0.3, 0.5),
            Complex::new(-0.75, 0.1),
            Complex::new(0.26, 0.0),
            Complex::new(-1.8, 0.01),
        ];

        for c in samples {
            assert!(escape_countdown(c, 100) <= 100);
        }
    }

    #[test]
    fn test_algorithm_classifies_default_center_pixel_in_set() {
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), 500, 255);

        assert_eq!(algorithm.compute(Point { x: 250, y: 250 }), 0);
    }

    #[test]
    fn test_algorithm_corner_pixel_escapes() {
        // top-left of the default view is (-1.5, ~1.0), outside the set
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), 500, 255);

        assert!(algorithm.compute(Point { x: 0, y: 0 }) > 0);
    }
}
