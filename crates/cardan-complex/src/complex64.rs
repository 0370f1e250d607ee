//! Complex numbers over 64-bit floats.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use cardan_fields::{ArithmeticError, QuotientField};

use crate::polar::Polar;

/// An immutable complex number with f64 components.
///
/// Structural equality (`==`) requires exact component equality;
/// `eq_by_comparing` is the numeric-equivalence predicate. Both are
/// kept as separately named operations on every pair kind.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Complex64 {
    re: f64,
    im: f64,
}

impl Complex64 {
    /// The additive identity.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// The multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// The imaginary unit.
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Creates a complex number from real and imaginary components.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a purely real complex number.
    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Creates a purely imaginary complex number.
    #[must_use]
    pub const fn from_imaginary(im: f64) -> Self {
        Self { re: 0.0, im }
    }

    /// Returns the real component.
    #[must_use]
    pub const fn re(self) -> f64 {
        self.re
    }

    /// Returns the imaginary component.
    #[must_use]
    pub const fn im(self) -> f64 {
        self.im
    }

    /// Returns true if this number has a multiplicative inverse,
    /// i.e. at least one component is non-zero.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        self.re != 0.0 || self.im != 0.0
    }

    /// Numeric-equivalence predicate on both components.
    #[must_use]
    pub fn eq_by_comparing(self, other: Self) -> bool {
        self.re == other.re && self.im == other.im
    }

    /// Divides by `divisor` using the conjugate formula.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not invertible.
    #[must_use]
    pub fn divide(self, divisor: Self) -> Self {
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
    pub fn checked_divide(self, divisor: Self) -> Result<Self, ArithmeticError> {
        if !divisor.is_invertible() {
            return Err(ArithmeticError::NonInvertibleDivisor);
        }
        let den = divisor.abs_sqr();
        Ok(Self::new(
            (self.re * divisor.re + self.im * divisor.im) / den,
            (self.im * divisor.re - self.re * divisor.im) / den,
        ))
    }

    /// Returns the multiplicative inverse, `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero.
    #[must_use]
    pub fn invert(self) -> Self {
        match self.checked_invert() {
            Ok(inv) => inv,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the multiplicative inverse, reporting a zero receiver.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonInvertibleOperand`] if this
    /// number is zero.
    pub fn checked_invert(self) -> Result<Self, ArithmeticError> {
        Self::ONE
            .checked_divide(self)
            .map_err(|_| ArithmeticError::NonInvertibleOperand)
    }

    /// The squared modulus, `re² + im²`.
    #[must_use]
    pub fn abs_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The modulus.
    #[must_use]
    pub fn abs(self) -> f64 {
        self.abs_sqr().sqrt()
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
    /// Computed as `acos(re / abs)`, negated when the imaginary
    /// component is negative.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero.
    #[must_use]
    pub fn arg(self) -> f64 {
        match self.checked_arg() {
            Ok(a) => a,
            Err(e) => panic!("{e}"),
        }
    }

    /// The argument, reporting a zero receiver.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonInvertibleOperand`] if this
    /// number is zero.
    pub fn checked_arg(self) -> Result<f64, ArithmeticError> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NonInvertibleOperand);
        }
        let angle = (self.re / self.abs()).acos();
        Ok(if self.im < 0.0 { -angle } else { angle })
    }

    /// Converts to polar form.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero.
    #[must_use]
    pub fn to_polar(self) -> Polar<f64> {
        Polar::new(self.abs(), self.arg())
    }

    /// Computes self^exp for a signed exponent, by squaring.
    ///
    /// Exponent zero yields [`Complex64::ONE`]; a negative exponent
    /// inverts the positive power.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero and `exp` is negative.
    #[must_use]
    pub fn pow(self, exp: i32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut e = exp.unsigned_abs();

        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }

        if exp < 0 {
            result.invert()
        } else {
            result
        }
    }
}

impl Add for Complex64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl QuotientField for Complex64 {
    type Quotient = Complex64;
    type Abs = f64;

    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        *self - *rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        *self * *rhs
    }

    fn div(&self, rhs: &Self) -> Self {
        self.divide(*rhs)
    }

    fn neg(&self) -> Self {
        -*self
    }

    fn abs(&self) -> f64 {
        Complex64::abs(*self)
    }

    fn promote(&self) -> Self {
        *self
    }

    fn eq_by_comparing(&self, rhs: &Self) -> bool {
        Complex64::eq_by_comparing(*self, *rhs)
    }
}
