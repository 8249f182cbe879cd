use std::ops::{Add, Mul};

/// A point in the complex plane. Arithmetic returns new values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Euclidean norm, `sqrt(re² + im²)`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_three_four_five() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::new(-3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::new(3.0, -4.0).magnitude(), 5.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_of_zero_is_zero() {
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_magnitude_squared_matches_magnitude() {
        let c = Complex::new(1.5, -2.5);
        let m = c.magnitude();

        assert!((m * m - c.magnitude_squared()).abs() < 1e-12);
    }

    #[test]
    fn test_add() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(sum, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_by_i_rotates() {
        let i = Complex::new(0.0, 1.0);

        assert_eq!(Complex::new(1.0, 0.0) * i, i);
        assert_eq!(i * i, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);

        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = Complex::new(1.0, 1.0);
        let b = Complex::new(2.0, -1.0);
        let _ = a + b;
        let _ = a * b;

        assert_eq!(a, Complex::new(1.0, 1.0));
        assert_eq!(b, Complex::new(2.0, -1.0));
    }
}
