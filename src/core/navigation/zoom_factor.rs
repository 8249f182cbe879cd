/// Multiplier applied by [`ZoomFactor::increase`].
pub const ZOOM_INCREASE_RATIO: f64 = 1.1;

/// Multiplier applied by [`ZoomFactor::decrease`].
pub const ZOOM_DECREASE_RATIO: f64 = 0.9;

/// [`ZoomFactor::decrease`] only acts while the factor is strictly above this.
pub const ZOOM_FACTOR_FLOOR: f64 = 1.5;

/// Smallest factor [`ZoomFactor::new`] accepts: one decrease step below the
/// floor, the lowest value decreasing can reach.
pub const MIN_ZOOM_FACTOR: f64 = ZOOM_FACTOR_FLOOR * ZOOM_DECREASE_RATIO;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ZoomFactorError {
    #[error("zoom factor must be finite: {value}")]
    Invalid { value: f64 },

    #[error("zoom factor must be at least {min}: {value}", min = MIN_ZOOM_FACTOR)]
    BelowMinimum { value: f64 },
}

/// How much a single click shrinks the viewport.
///
/// Decreasing stops at [`ZOOM_FACTOR_FLOOR`] so a long press of the zoom-out
/// key cannot drive the factor towards zero. Increasing has no ceiling. The
/// factor is never below [`MIN_ZOOM_FACTOR`], so a click always shrinks the
/// viewport.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    pub fn new(value: f64) -> Result<Self, ZoomFactorError> {
        if !value.is_finite() {
            return Err(ZoomFactorError::Invalid { value });
        }

        if value < MIN_ZOOM_FACTOR {
            return Err(ZoomFactorError::BelowMinimum { value });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn increase(&mut self) {
        self.0 *= ZOOM_INCREASE_RATIO;
    }

    /// Returns `false` when the factor is at or below the floor and was left
    /// unchanged.
    pub fn decrease(&mut self) -> bool {
        if self.0 <= ZOOM_FACTOR_FLOOR {
            return false;
        }

        self.0 *= ZOOM_DECREASE_RATIO;
        true
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_increase_multiplies_by_one_point_one() {
        let mut factor = ZoomFactor::new(5.0).unwrap();

        factor.increase();

        assert!((factor.value() - 5.5).abs() < EPSILON);
    }

    #[test]
    fn test_decrease_multiplies_by_point_nine_above_floor() {
        let mut factor = ZoomFactor::new(2.0).unwrap();

        assert!(factor.decrease());
        assert!((factor.value() - 1.8).abs() < EPSILON);
    }

    #[test]
    fn test_decrease_is_noop_at_or_below_floor() {
        let mut below = ZoomFactor::new(1.4).unwrap();
        let mut at = ZoomFactor::new(ZOOM_FACTOR_FLOOR).unwrap();

        assert!(!below.decrease());
        assert!(!at.decrease());
        assert_eq!(below.value(), 1.4);
        assert_eq!(at.value(), ZOOM_FACTOR_FLOOR);
    }

    #[test]
    fn test_repeated_decrease_settles_just_below_floor() {
        let mut factor = ZoomFactor::default();

        for _ in 0..100 {
            factor.decrease();
        }

        assert!(factor.value() <= ZOOM_FACTOR_FLOOR);
        assert!(factor.value() > ZOOM_FACTOR_FLOOR * ZOOM_DECREASE_RATIO);
    }

    #[test]
    fn test_increase_has_no_ceiling() {
        let mut factor = ZoomFactor::new(1000.0).unwrap();

        factor.increase();

        assert!(factor.value() > 1000.0);
    }

    #[test]
    fn test_new_rejects_invalid_values() {
        assert_eq!(ZoomFactor::new(0.0), Err(ZoomFactorError::BelowMinimum { value: 0.0 }));
        assert!(ZoomFactor::new(-3.0).is_err());
        assert!(matches!(ZoomFactor::new(f64::NAN), Err(ZoomFactorError::Invalid { .. })));
        assert!(ZoomFactor::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_rejects_factors_that_would_grow_the_viewport() {
        assert_eq!(ZoomFactor::new(0.5), Err(ZoomFactorError::BelowMinimum { value: 0.5 }));
        assert!(ZoomFactor::new(1e-10).is_err());
        assert!(ZoomFactor::new(1.0).is_err());
    }

    #[test]
    fn test_new_accepts_the_minimum() {
        let factor = ZoomFactor::new(MIN_ZOOM_FACTOR).unwrap();

        assert_eq!(factor.value(), MIN_ZOOM_FACTOR);
    }

    #[test]
    fn test_decrease_never_goes_below_the_minimum() {
        let mut factor = ZoomFactor::new(ZOOM_FACTOR_FLOOR + 1e-9).unwrap();

        assert!(factor.decrease());
        assert!(!factor.decrease());
        assert!(factor.value() >= MIN_ZOOM_FACTOR);
    }
}
