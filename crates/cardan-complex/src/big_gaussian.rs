//! Gaussian integers over arbitrary precision integers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use cardan_bignum::{Decimal, Integer};
use cardan_fields::ArithmeticError;
use num_traits::{One, Zero};

use crate::big_complex::BigComplex;
use crate::polar::Polar;

/// An immutable Gaussian integer with arbitrary precision components.
///
/// The non-closed operations (division, inversion, exponentiation,
/// argument) promote to [`BigComplex`] through the explicit
/// [`BigGaussian::to_big_complex`] conversion.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct BigGaussian {
    re: Integer,
    im: Integer,
}

impl BigGaussian {
    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            re: Integer::zero(),
            im: Integer::zero(),
        }
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self {
            re: Integer::one(),
            im: Integer::zero(),
        }
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self {
            re: Integer::zero(),
            im: Integer::one(),
        }
    }

    /// The negated multiplicative identity.
    #[must_use]
    pub fn minus_one() -> Self {
        Self {
            re: -Integer::one(),
            im: Integer::zero(),
        }
    }

    /// The negated imaginary unit.
    #[must_use]
    pub fn minus_i() -> Self {
        Self {
            re: Integer::zero(),
            im: -Integer::one(),
        }
    }

    /// The four units of the Gaussian integers.
    #[must_use]
    pub fn units() -> [Self; 4] {
        [Self::one(), Self::i(), Self::minus_one(), Self::minus_i()]
    }

    /// Creates a Gaussian integer from real and imaginary components.
    #[must_use]
    pub fn new(re: Integer, im: Integer) -> Self {
        Self { re, im }
    }

    /// Creates a Gaussian integer from i64 components.
    #[must_use]
    pub fn from_i64(re: i64, im: i64) -> Self {
        Self::new(Integer::new(re), Integer::new(im))
    }

    /// Creates a purely real Gaussian integer.
    #[must_use]
    pub fn from_real(re: Integer) -> Self {
        Self::new(re, Integer::zero())
    }

    /// Creates a purely imaginary Gaussian integer.
    #[must_use]
    pub fn from_imaginary(im: Integer) -> Self {
        Self::new(Integer::zero(), im)
    }

    /// Returns the real component.
    #[must_use]
    pub fn re(&self) -> &Integer {
        &self.re
    }

    /// Returns the imaginary component.
    #[must_use]
    pub fn im(&self) -> &Integer {
        &self.im
    }

    /// Returns true if at least one component is non-zero.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        !self.re.is_zero() || !self.im.is_zero()
    }

    /// Returns true if this value is one of the four units.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        Self::units().contains(self)
    }

    /// Numeric-equivalence predicate; coincides with `==` for exact
    /// integer components.
    #[must_use]
    pub fn eq_by_comparing(&self, other: &Self) -> bool {
        self == other
    }

    /// Widens into the decimal complex kind.
    #[must_use]
    pub fn to_big_complex(&self) -> BigComplex {
        BigComplex::new(
            Decimal::from_integer(&self.re),
            Decimal::from_integer(&self.im),
        )
    }

    /// Divides by `divisor`, promoting to [`BigComplex`].
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not invertible.
    #[must_use]
    pub fn divide(&self, divisor: &Self) -> BigComplex {
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
    pub fn checked_divide(&self, divisor: &Self) -> Result<BigComplex, ArithmeticError> {
        if !divisor.is_invertible() {
            return Err(ArithmeticError::NonInvertibleDivisor);
        }
        self.to_big_complex().checked_divide_with(
            &divisor.to_big_complex(),
            cardan_bignum::DecimalContext::default(),
        )
    }

    /// Returns the multiplicative inverse, promoting to
    /// [`BigComplex`].
    ///
    /// # Panics
    ///
    /// Panics if this value is zero.
    #[must_use]
    pub fn invert(&self) -> BigComplex {
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
    pub fn checked_invert(&self) -> Result<BigComplex, ArithmeticError> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NonInvertibleOperand);
        }
        Ok(self.to_big_complex().invert())
    }

    /// The squared modulus, `re² + im²`, exact in integers.
    #[must_use]
    pub fn abs_sqr(&self) -> Integer {
        &(&self.re * &self.re) + &(&self.im * &self.im)
    }

    /// The modulus, as a decimal in the default context.
    #[must_use]
    pub fn abs(&self) -> Decimal {
        Decimal::from_integer(&self.abs_sqr()).sqrt()
    }

    /// The complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    /// The argument, in radians, in the range (−π, π].
    ///
    /// # Panics
    ///
    /// Panics if this value is zero.
    #[must_use]
    pub fn arg(&self) -> Decimal {
        self.to_big_complex().arg()
    }

    /// Converts to polar form, promoting to decimal components.
    ///
    /// # Panics
    ///
    /// Panics if this value is zero.
    #[must_use]
    pub fn to_polar(&self) -> Polar<Decimal> {
        self.to_big_complex().to_polar()
    }

    /// Computes self^exp for a signed exponent, in the promoted
    /// decimal kind (the result type must not depend on the sign of
    /// the exponent).
    ///
    /// # Panics
    ///
    /// Panics if this value is zero and `exp` is negative.
    #[must_use]
    pub fn pow(&self, exp: i32) -> BigComplex {
        self.to_big_complex().pow(exp)
    }
}

impl Add for BigGaussian {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Add for &BigGaussian {
    type Output = BigGaussian;

    fn add(self, rhs: Self) -> Self::Output {
        BigGaussian::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl Sub for BigGaussian {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Sub for &BigGaussian {
    type Output = BigGaussian;

    fn sub(self, rhs: Self) -> Self::Output {
        BigGaussian::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl Mul for BigGaussian {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &BigGaussian {
    type Output = BigGaussian;

    fn mul(self, rhs: Self) -> Self::Output {
        BigGaussian::new(
            &(&self.re * &rhs.re) - &(&self.im * &rhs.im),
            &(&self.re * &rhs.im) + &(&self.im * &rhs.re),
        )
    }
}

impl Neg for BigGaussian {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl Neg for &BigGaussian {
    type Output = BigGaussian;

    fn neg(self) -> Self::Output {
        BigGaussian::new(-&self.re, -&self.im)
    }
}

impl From<Integer> for BigGaussian {
    fn from(re: Integer) -> Self {
        Self::from_real(re)
    }
}

impl fmt::Display for BigGaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
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
        let a = BigGaussian::from_i64(1, 2);
        let b = BigGaussian::from_i64(3, 4);

        assert_eq!(&a * &b, BigGaussian::from_i64(-5, 10));
        assert_eq!(&a + &b, BigGaussian::from_i64(4, 6));
    }

    #[test]
    fn test_units() {
        for u in BigGaussian::units() {
            assert!(u.is_unit());
            assert!(u.abs_sqr() == Integer::one());
        }
        assert!(!BigGaussian::from_i64(2, 1).is_unit());
    }

    #[test]
    #[should_panic(expected = "operand is not invertible")]
    fn test_invert_zero() {
        let _ = BigGaussian::zero().invert();
    }

    #[test]
    fn test_invert_round_trip() {
        let z = BigGaussian::from_i64(2, -3);
        let p = &z.to_big_complex() * &z.invert();
        let err = (&p - &BigComplex::one()).abs();
        assert!(err < Decimal::from_f64(1e-30));
    }

    #[test]
    fn test_division_promotes() {
        use std::str::FromStr;

        let q = BigGaussian::from_i64(1, 2).divide(&BigGaussian::from_i64(3, 4));
        let expected = BigComplex::new(
            Decimal::from_str("0.44").unwrap(),
            Decimal::from_str("0.08").unwrap(),
        );
        assert!(q.eq_by_comparing(&expected));
    }

    #[test]
    fn test_abs_exact_square() {
        let z = BigGaussian::from_i64(3, 4);
        assert_eq!(z.abs_sqr(), Integer::new(25));
        assert!(z.abs().eq_by_comparing(&Decimal::from_i64(5)));
    }

    #[test]
    fn test_conjugate_product_is_abs_sqr() {
        let z = BigGaussian::from_i64(5, -7);
        let p = &z * &z.conjugate();
        assert_eq!(p, BigGaussian::from_real(z.abs_sqr()));
    }
}
