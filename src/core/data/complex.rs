use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait, the escape loop only needs these ops
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
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
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_parts() {
        assert_eq!(Complex::new(-3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(3.0, -4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn test_square_matches_recurrence_terms() {
        let z = Complex::new(1.5, -0.5);
        let squared = z * z;

        // x*x - y*y and 2*x*y
        assert_eq!(squared.real, 1.5 * 1.5 - 0.5 * 0.5);
        assert_eq!(squared.imag, 2.0 * 1.5 * -0.5);
    }

    #[test]
    fn test_add() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(-3.0, 0.5);
        assert_eq!(sum, Complex::new(-2.0, 2.5));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(0.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
