//! Complex numbers over arbitrary precision decimals.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use cardan_bignum::{Decimal, DecimalContext};
use cardan_fields::{ArithmeticError, QuotientField};
use num_traits::{One, Zero};

use crate::polar::Polar;

/// An immutable complex number with arbitrary precision decimal
/// components.
///
/// Division and the modulus take the default high-precision context;
/// the `_with` variants accept a caller-supplied [`DecimalContext`].
/// The argument computation goes through f64 (see
/// [`Decimal::acos`]); the modulus uses the exact decimal square root.
#[derive(Clone, PartialEq, Debug)]
pub struct BigComplex {
    re: Decimal,
    im: Decimal,
}

impl BigComplex {
    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            re: <Decimal as Zero>::zero(),
            im: <Decimal as Zero>::zero(),
        }
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self {
            re: <Decimal as One>::one(),
            im: <Decimal as Zero>::zero(),
        }
    }

    /// Creates a complex number from real and imaginary components.
    #[must_use]
    pub fn new(re: Decimal, im: Decimal) -> Self {
        Self { re, im }
    }

    /// Creates a complex number from f64 components.
    ///
    /// # Panics
    ///
    /// Panics if either component is NaN or infinite.
    #[must_use]
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(Decimal::from_f64(re), Decimal::from_f64(im))
    }

    /// Creates a purely real complex number.
    #[must_use]
    pub fn from_real(re: Decimal) -> Self {
        Self::new(re, <Decimal as Zero>::zero())
    }

    /// Creates a purely imaginary complex number.
    #[must_use]
    pub fn from_imaginary(im: Decimal) -> Self {
        Self::new(<Decimal as Zero>::zero(), im)
    }

    /// Returns the real component.
    #[must_use]
    pub fn re(&self) -> &Decimal {
        &self.re
    }

    /// Returns the imaginary component.
    #[must_use]
    pub fn im(&self) -> &Decimal {
        &self.im
    }

    /// Returns true if at least one component is non-zero.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        !Zero::is_zero(&self.re) || !Zero::is_zero(&self.im)
    }

    /// Numeric-equivalence predicate on both components, blind to the
    /// precision either representation carries.
    #[must_use]
    pub fn eq_by_comparing(&self, other: &Self) -> bool {
        self.re.eq_by_comparing(&other.re) && self.im.eq_by_comparing(&other.im)
    }

    /// Divides by `divisor` in the default context.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not invertible.
    #[must_use]
    pub fn divide(&self, divisor: &Self) -> Self {
        self.divide_with(divisor, DecimalContext::default())
    }

    /// Divides by `divisor` in the given context.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not invertible.
    #[must_use]
    pub fn divide_with(&self, divisor: &Self, ctx: DecimalContext) -> Self {
        match self.checked_divide_with(divisor, ctx) {
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
    pub fn checked_divide_with(
        &self,
        divisor: &Self,
        ctx: DecimalContext,
    ) -> Result<Self, ArithmeticError> {
        if !divisor.is_invertible() {
            return Err(ArithmeticError::NonInvertibleDivisor);
        }
        let den = divisor.abs_sqr();
        let re = &(&self.re * &divisor.re) + &(&self.im * &divisor.im);
        let im = &(&self.im * &divisor.re) - &(&self.re * &divisor.im);
        Ok(Self::new(re.div_with(&den, ctx), im.div_with(&den, ctx)))
    }

    /// Returns the multiplicative inverse, `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero.
    #[must_use]
    pub fn invert(&self) -> Self {
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
    pub fn checked_invert(&self) -> Result<Self, ArithmeticError> {
        Self::one()
            .checked_divide_with(self, DecimalContext::default())
            .map_err(|_| ArithmeticError::NonInvertibleOperand)
    }

    /// The squared modulus, `re² + im²`, exact in the decimal
    /// representation.
    #[must_use]
    pub fn abs_sqr(&self) -> Decimal {
        &(&self.re * &self.re) + &(&self.im * &self.im)
    }

    /// The modulus, in the default context.
    #[must_use]
    pub fn abs(&self) -> Decimal {
        self.abs_with(DecimalContext::default())
    }

    /// The modulus, in the given context.
    #[must_use]
    pub fn abs_with(&self, ctx: DecimalContext) -> Decimal {
        self.abs_sqr().sqrt_with(ctx)
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
    /// Panics if this number is zero.
    #[must_use]
    pub fn arg(&self) -> Decimal {
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
    pub fn checked_arg(&self) -> Result<Decimal, ArithmeticError> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NonInvertibleOperand);
        }
        let ratio = self.re.clone() / self.abs();
        // rounding can push the ratio epsilon past ±1
        let clamped = Decimal::from_f64(ratio.to_f64().clamp(-1.0, 1.0));
        let angle = clamped.acos();
        Ok(if self.im.is_negative() { -angle } else { angle })
    }

    /// Converts to polar form.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero.
    #[must_use]
    pub fn to_polar(&self) -> Polar<Decimal> {
        Polar::new(self.abs(), self.arg())
    }

    /// Computes self^exp for a signed exponent, by squaring.
    ///
    /// Exponent zero yields the multiplicative identity; a negative
    /// exponent inverts the positive power.
    ///
    /// # Panics
    ///
    /// Panics if this number is zero and `exp` is negative.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut e = exp.unsigned_abs();

        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            e >>= 1;
        }

        if exp < 0 {
            result.invert()
        } else {
            result
        }
    }
}

impl Add for BigComplex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Add for &BigComplex {
    type Output = BigComplex;

    fn add(self, rhs: Self) -> Self::Output {
        BigComplex::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl Sub for BigComplex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Sub for &BigComplex {
    type Output = BigComplex;

    fn sub(self, rhs: Self) -> Self::Output {
        BigComplex::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl Mul for BigComplex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &BigComplex {
    type Output = BigComplex;

    fn mul(self, rhs: Self) -> Self::Output {
        BigComplex::new(
            &(&self.re * &rhs.re) - &(&self.im * &rhs.im),
            &(&self.re * &rhs.im) + &(&self.im * &rhs.re),
        )
    }
}

impl Neg for BigComplex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl Neg for &BigComplex {
    type Output = BigComplex;

    fn neg(self) -> Self::Output {
        BigComplex::new(-&self.re, -&self.im)
    }
}

impl From<Decimal> for BigComplex {
    fn from(re: Decimal) -> Self {
        Self::from_real(re)
    }
}

impl fmt::Display for BigComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl QuotientField for BigComplex {
    type Quotient = BigComplex;
    type Abs = Decimal;

    fn zero() -> Self {
        BigComplex::zero()
    }

    fn one() -> Self {
        BigComplex::one()
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div(&self, rhs: &Self) -> Self {
        self.divide(rhs)
    }

    fn neg(&self) -> Self {
        -self
    }

    fn abs(&self) -> Decimal {
        BigComplex::abs(self)
    }

    fn promote(&self) -> Self {
        self.clone()
    }

    fn eq_by_comparing(&self, rhs: &Self) -> bool {
        BigComplex::eq_by_comparing(self, rhs)
    }
}
