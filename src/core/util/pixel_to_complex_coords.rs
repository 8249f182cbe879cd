use crate::core::data::complex::Complex;
use crate::core::data::normalized_point::NormalizedPoint;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a canvas pixel to its point in the complex plane.
///
/// Columns grow to the right along the real axis. Rows grow downward while the
/// imaginary axis grows upward, so row `0` maps to the top of the viewport and
/// row `canvas_size - 1` to its bottom edge.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, canvas_size: u32, viewport: &Viewport) -> Complex {
    let canvas = f64::from(canvas_size);
    let column = f64::from(pixel.x);
    let flipped_row = f64::from(canvas_size) - 1.0 - f64::from(pixel.y);

    Complex {
        real: viewport.left() + (viewport.size() * column) / canvas,
        imag: viewport.bottom() + (viewport.size() * flipped_row) / canvas,
    }
}

/// Maps a normalized pointer position through the viewport bounds.
#[must_use]
pub fn normalized_to_complex_coords(point: NormalizedPoint, viewport: &Viewport) -> Complex {
    Complex {
        real: viewport.left() + viewport.size() * point.x,
        imag: viewport.bottom() + viewport.size() * point.y,
    }
}

/// Inverse of [`pixel_to_complex_coords`], rounding to the nearest pixel.
///
/// Returns `None` when the point falls outside the canvas.
#[must_use]
pub fn complex_to_pixel_coords(
    point: Complex,
    canvas_size: u32,
    viewport: &Viewport,
) -> Option<Point> {
    let canvas = f64::from(canvas_size);
    let column = ((point.real - viewport.left()) * canvas / viewport.size()).round();
    let flipped_row = ((point.imag - viewport.bottom()) * canvas / viewport.size()).round();

    if !(0.0..canvas).contains(&column) || !(0.0..canvas).contains(&flipped_row) {
        return None;
    }

    Some(Point {
        x: column as u32,
        y: canvas_size - 1 - flipped_row as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() < EPSILON
                && (actual.imag - expected.imag).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn unit_viewport() -> Viewport {
        Viewport::new(Complex::ZERO, 2.0).unwrap()
    }

    #[test]
    fn test_top_left_pixel_maps_to_top_left_corner() {
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, 100, &unit_viewport());

        // the top row sits one pixel below the open upper edge
        assert_close(result, Complex::new(-1.0, 0.98));
    }

    #[test]
    fn test_bottom_left_pixel_maps_to_bottom_left_corner() {
        let result = pixel_to_complex_coords(Point { x: 0, y: 99 }, 100, &unit_viewport());

        assert_close(result, Complex::new(-1.0, -1.0));
    }

    #[test]
    fn test_increasing_row_decreases_imaginary_part() {
        let viewport = unit_viewport();
        let upper = pixel_to_complex_coords(Point { x: 10, y: 10 }, 100, &viewport);
        let lower = pixel_to_complex_coords(Point { x: 10, y: 11 }, 100, &viewport);

        assert!(lower.imag < upper.imag);
        assert_eq!(lower.real, upper.real);
    }

    #[test]
    fn test_default_view_center_pixel() {
        let result = pixel_to_complex_coords(Point { x: 250, y: 250 }, 500, &Viewport::default());

        assert!((result.real - -0.5).abs() < EPSILON);
        assert!(result.imag.abs() < 0.01);
    }

    #[test]
    fn test_normalized_corners() {
        let viewport = unit_viewport();

        assert_close(
            normalized_to_complex_coords(NormalizedPoint::new(0.0, 0.0), &viewport),
            Complex::new(-1.0, -1.0),
        );
        assert_close(
            normalized_to_complex_coords(NormalizedPoint::CENTER, &viewport),
            Complex::ZERO,
        );
        assert_close(
            normalized_to_complex_coords(NormalizedPoint::new(0.75, 0.25), &viewport),
            Complex::new(0.5, -0.5),
        );
    }

    #[test]
    fn test_round_trip_recovers_every_pixel() {
        let viewport = Viewport::new(Complex::new(-0.7436, 0.1318), 0.003).unwrap();
        let canvas_size = 64;

        for y in 0..canvas_size {
            for x in 0..canvas_size {
                let pixel = Point { x, y };
                let point = pixel_to_complex_coords(pixel, canvas_size, &viewport);

                assert_eq!(
                    complex_to_pixel_coords(point, canvas_size, &viewport),
                    Some(pixel)
                );
            }
        }
    }

    #[test]
    fn test_points_outside_viewport_have_no_pixel() {
        let viewport = unit_viewport();

        assert_eq!(complex_to_pixel_coords(Complex::new(1.5, 0.0), 100, &viewport), None);
        assert_eq!(complex_to_pixel_coords(Complex::new(0.0, -1.5), 100, &viewport), None);
        assert_eq!(complex_to_pixel_coords(Complex::new(0.0, 0.999), 100, &viewport), None);
    }
}
