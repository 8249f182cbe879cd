use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("viewport size must be positive and finite: {size}")]
    InvalidSize { size: f64 },

    #[error("viewport center must be finite: ({}, {})", .center.real, .center.imag)]
    InvalidCenter { center: Complex },
}

/// The square region of the complex plane mapped onto the canvas.
///
/// Always holds a finite centre and a strictly positive, finite size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    size: f64,
}

impl Viewport {
    pub fn new(center: Complex, size: f64) -> Result<Self, ViewportError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ViewportError::InvalidSize { size });
        }

        if !center.real.is_finite() || !center.imag.is_finite() {
            return Err(ViewportError::InvalidCenter { center });
        }

        Ok(Self { center, size })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Smallest real coordinate covered by the view.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.real - self.size / 2.0
    }

    /// Smallest imaginary coordinate covered by the view.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.imag - self.size / 2.0
    }

    pub(crate) fn recentre(&mut self, center: Complex) {
        self.center = center;
    }

    /// Divides the size by `factor`. The size never drops below the smallest
    /// positive `f64`, so repeated zooming cannot break the invariant.
    pub(crate) fn shrink(&mut self, factor: f64) {
        debug_assert!(factor > 0.0, "shrink factor must be positive");
        self.size = (self.size / factor).max(f64::MIN_POSITIVE);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Complex::new(-0.5, 0.0),
            size: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.25), 3.0).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.25));
        assert_eq!(viewport.size(), 3.0);
        assert_eq!(viewport.left(), -2.0);
        assert_eq!(viewport.bottom(), -1.25);
    }

    #[test]
    fn test_viewport_size_must_be_positive() {
        assert_eq!(
            Viewport::new(Complex::ZERO, 0.0),
            Err(ViewportError::InvalidSize { size: 0.0 })
        );
        assert_eq!(
            Viewport::new(Complex::ZERO, -2.0),
            Err(ViewportError::InvalidSize { size: -2.0 })
        );
        assert!(Viewport::new(Complex::ZERO, f64::INFINITY).is_err());
        assert!(Viewport::new(Complex::ZERO, f64::NAN).is_err());
    }

    #[test]
    fn test_viewport_center_must_be_finite() {
        let center = Complex::new(f64::NAN, 0.0);

        assert!(matches!(
            Viewport::new(center, 1.0),
            Err(ViewportError::InvalidCenter { .. })
        ));
    }

    #[test]
    fn test_default_viewport_matches_classic_view() {
        let viewport = Viewport::default();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
        assert_eq!(viewport.size(), 2.0);
    }

    #[test]
    fn test_shrink_never_reaches_zero() {
        let mut viewport = Viewport::new(Complex::ZERO, 1e-300).unwrap();

        viewport.shrink(1e300);
        viewport.shrink(1e300);

        assert!(viewport.size() > 0.0);
    }

    #[test]
    fn test_error_message() {
        let err = ViewportError::InvalidSize { size: -1.0 };

        assert_eq!(
            err.to_string(),
            "viewport size must be positive and finite: -1"
        );
    }
}
