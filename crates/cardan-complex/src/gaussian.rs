//! Gaussian integers over 64-bit machine integers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use cardan_fields::ArithmeticError;

use crate::complex64::Complex64;
use crate::polar::Polar;

/// An immutable Gaussian integer with i64 components.
///
/// Addition, subtraction, and multiplication are closed; division,
/// inversion, exponentiation, and the argument are not closed over the
/// integers and promote to [`Complex64`] through the explicit
/// [`Gaussian::to_complex`] conversion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Gaussian {
    re: i64,
    im: i64,
}

impl Gaussian {
    /// The additive identity.
    pub const ZERO: Self = Self { re: 0, im: 0 };

    /// The multiplicative identity.
    pub const ONE: Self = Self { re: 1, im: 0 };

    /// The imaginary unit.
    pub const I: Self = Self { re: 0, im: 1 };

    /// The negated multiplicative identity.
    pub const MINUS_ONE: Self = Self { re: -1, im: 0 };

    /// The negated imaginary unit.
    pub const MINUS_I: Self = Self { re: 0, im: -1 };

    /// The four units of the Gaussian integers.
    pub const UNITS: [Self; 4] = [Self::ONE, Self::I, Self::MINUS_ONE, Self::MINUS_I];

    /// Creates a Gaussian integer from real and imaginary components.
    #[must_use]
    pub const fn new(re: i64, im: i64) -> Self {
        Self { re, im }
    }

    /// Creates a purely real Gaussian integer.
    #[must_use]
    pub const fn from_real(re: i64) -> Self {
        Self { re, im: 0 }
    }

    /// Creates a purely imaginary Gaussian integer.
    #[must_use]
    pub const fn from_imaginary(im: i64) -> Self {
        Self { re: 0, im }
    }

    /// Returns the real component.
    #[must_use]
    pub const fn re(self) -> i64 {
        self.re
    }

    /// Returns the imaginary component.
    #[must_use]
    pub const fn im(self) -> i64 {
        self.im
    }

    /// Returns true if at least one component is non-zero.
    #[must_use]
    pub const fn is_invertible(self) -> bool {
        self.re != 0 || self.im != 0
    }

    /// Returns true if this value is one of the four units.
    #[must_use]
    pub fn is_unit(self) -> bool {
        Self::UNITS.contains(&self)
    }

    /// Numeric-equivalence predicate; coincides with `==` for exact
    /// integer components.
    #[must_use]
    pub fn eq_by_comparing(self, other: Self) -> bool {
        self == other
    }

    /// Widens into the floating complex kind.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }

    /// Divides by `divisor`, promoting to [`Complex64`].
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not invertible.
    #[must_use]
    pub fn divide(self, divisor: Self) -> Complex64 {
        match self.checked_divide(divisor) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }

    /// Divides by `divisor`, reporting a non-invertible divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonInvertibleDivisor`] if `divisor`
    /// is zero.
    pub fn checked_divide(self, divisor: Self) -> Result<Complex64, ArithmeticError> {
        if !divisor.is_invertible() {
            return Err(ArithmeticError::NonInvertibleDivisor);
        }
        self.to_complex().checked_divide(divisor.to_complex())
    }

    /// Returns the multiplicative inverse, promoting to [`Complex64`].
    ///
    /// # Panics
    ///
    /// Panics if this value is zero.
    #[must_use]
    pub fn invert(self) -> Complex64 {
        match self.checked_invert() {
            Ok(inv) => inv,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the multiplicative inverse, reporting a zero receiver.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonInvertibleOperand`] if this value
    /// is zero.
    pub fn checked_invert(self) -> Result<Complex64, ArithmeticError> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NonInvertibleOperand);
        }
        Ok(self.to_complex().invert())
    }

    /// The squared modulus, `re² + im²`, exact in integers.
    #[must_use]
    pub const fn abs_sqr(self) -> i64 {
        self.re * self.re + self.im * self.im
    }

    /// The modulus.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn abs(self) -> f64 {
        (self.abs_sqr() as f64).sqrt()
    }

    /// The complex conjugate.
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// The argument, in radians, in the range (−π, π].
    ///
    /// # Panics
    ///
    /// Panics if this value is zero.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.to_complex().arg()
    }

    /// Converts to polar form, promoting to f64 components.
    ///
    /// # Panics
    ///
    /// Panics if this value is zero.
    #[must_use]
    pub fn to_polar(self) -> Polar<f64> {
        self.to_complex().to_polar()
    }

    /// Computes self^exp for a signed exponent, in the promoted
    /// floating kind (the result type must not depend on the sign of
    /// the exponent).
    ///
    /// # Panics
    ///
    /// Panics if this value is zero and `exp` is negative.
    #[must_use]
    pub fn pow(self, exp: i32) -> Complex64 {
        self.to_complex().pow(exp)
    }
}

impl Add for Gaussian {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Gaussian {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Gaussian {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Gaussian {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl From<i64> for Gaussian {
    fn from(re: i64) -> Self {
        Self::from_real(re)
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0 {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_arithmetic() {
        let a = Gaussian::new(1, 2);
        let b = Gaussian::new(3, 4);

        assert_eq!(a + b, Gaussian::new(4, 6));
        assert_eq!(a - b, Gaussian::new(-2, -2));
        assert_eq!(a * b, Gaussian::new(-5, 10));
        assert_eq!(-a, Gaussian::new(-1, -2));
    }

    #[test]
    fn test_units() {
        assert!(Gaussian::ONE.is_unit());
        assert!(Gaussian::I.is_unit());
        assert!(Gaussian::MINUS_ONE.is_unit());
        assert!(Gaussian::MINUS_I.is_unit());
        assert!(!Gaussian::new(1, 1).is_unit());
        assert!(!Gaussian::ZERO.is_unit());
    }

    #[test]
    fn test_unit_rotation() {
        // multiplying by i rotates the units cyclically
        assert_eq!(Gaussian::ONE * Gaussian::I, Gaussian::I);
        assert_eq!(Gaussian::I * Gaussian::I, Gaussian::MINUS_ONE);
        assert_eq!(Gaussian::MINUS_ONE * Gaussian::I, Gaussian::MINUS_I);
        assert_eq!(Gaussian::MINUS_I * Gaussian::I, Gaussian::ONE);
    }

    #[test]
    fn test_division_promotes() {
        let q = Gaussian::new(1, 2).divide(Gaussian::new(3, 4));
        assert!((q.re() - 0.44).abs() < 1e-15);
        assert!((q.im() - 0.08).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "operand is not invertible")]
    fn test_invert_zero() {
        let _ = Gaussian::ZERO.invert();
    }

    #[test]
    fn test_abs() {
        assert_eq!(Gaussian::new(3, 4).abs_sqr(), 25);
        assert!((Gaussian::new(3, 4).abs() - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_pow_promotes() {
        let p = Gaussian::new(0, 1).pow(2);
        assert!(p.eq_by_comparing(Complex64::new(-1.0, 0.0)));
        assert!(Gaussian::new(2, 0).pow(0).eq_by_comparing(Complex64::ONE));
    }
}
