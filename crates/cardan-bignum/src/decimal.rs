//! Arbitrary precision decimal arithmetic with explicit precision control.
//!
//! This module wraps `dashu`'s decimal float (`FBig<HalfEven, 10>`). Every
//! constructor rounds the value into an explicit precision, so arithmetic
//! never mixes unlimited-precision operands (which `dashu` rejects for
//! inexact operations such as division).

use dashu::base::SquareRoot;
use dashu::float::round::mode::HalfEven;
use dashu::float::FBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::Integer;

/// The decimal representation: base-10 float with half-even rounding.
type Repr = FBig<HalfEven, 10>;

/// The default precision, in decimal digits.
///
/// Matches the width of a 128-bit decimal, the fixed high-precision
/// configuration used for integer-to-decimal promotion.
pub const DEFAULT_DIGITS: usize = 34;

/// A precision configuration for decimal operations.
///
/// The rounding mode is fixed by the representation (half-even); the
/// context selects the number of significant decimal digits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecimalContext {
    digits: usize,
}

impl DecimalContext {
    /// Creates a context with the given number of significant digits.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is zero.
    #[must_use]
    pub fn new(digits: usize) -> Self {
        assert!(digits > 0, "precision must be at least one digit");
        Self { digits }
    }

    /// Returns the number of significant digits.
    #[must_use]
    pub const fn digits(self) -> usize {
        self.digits
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
        }
    }
}

/// An arbitrary precision decimal number.
///
/// Equality (`==`) compares numeric values; `eq_by_comparing` does the
/// same through the total order and additionally ignores the precision
/// metadata a value carries. Both predicates are kept separate because
/// the pair types distinguish structural from numeric equality.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(Repr);

impl Decimal {
    /// Creates a decimal from an i64, at default precision.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(round(Repr::from(IBig::from(value)), DEFAULT_DIGITS))
    }

    /// Creates a decimal from an arbitrary precision integer, at
    /// default precision.
    #[must_use]
    pub fn from_integer(value: &Integer) -> Self {
        Self(round(Repr::from(value.as_inner().clone()), DEFAULT_DIGITS))
    }

    /// Creates a decimal from an f64, at default precision.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or infinite.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        assert!(value.is_finite(), "decimal from non-finite f64");
        let binary = FBig::<HalfEven, 2>::try_from(value)
            .expect("finite f64 converts to decimal");
        Self(round(
            binary.to_decimal().value().with_rounding::<HalfEven>(),
            DEFAULT_DIGITS,
        ))
    }

    /// Re-rounds this value into the given context.
    #[must_use]
    pub fn with_context(&self, ctx: DecimalContext) -> Self {
        Self(round(self.0.clone(), ctx.digits))
    }

    /// Returns the precision of this value, in decimal digits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.0.precision()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.0.cmp(&Repr::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Repr::ZERO
    }

    /// Numeric-equivalence predicate: true when both values compare
    /// equal, regardless of the precision either representation carries.
    #[must_use]
    pub fn eq_by_comparing(&self, other: &Self) -> bool {
        self.0.cmp(&other.0) == Ordering::Equal
    }

    /// Divides by `rhs` in the given context.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div_with(&self, rhs: &Self, ctx: DecimalContext) -> Self {
        Self(round(&self.0 / &rhs.0, ctx.digits))
    }

    /// Computes the square root in the default context.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.sqrt_with(DecimalContext::default())
    }

    /// Computes the square root in the given context.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn sqrt_with(&self, ctx: DecimalContext) -> Self {
        Self(round(self.0.clone().sqrt(), ctx.digits))
    }

    /// Converts to f64, rounding to the nearest representable value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// The arccosine of this value, in radians.
    ///
    /// The computation goes through f64: angle precision beyond double
    /// is out of scope for this crate.
    ///
    /// # Panics
    ///
    /// Panics if the value lies outside [-1, 1].
    #[must_use]
    pub fn acos(&self) -> Self {
        let x = self.to_f64();
        assert!((-1.0..=1.0).contains(&x), "acos argument out of range");
        Self::from_f64(x.acos())
    }

    /// The cosine of this value (radians), through f64.
    #[must_use]
    pub fn cos(&self) -> Self {
        Self::from_f64(self.to_f64().cos())
    }

    /// The sine of this value (radians), through f64.
    #[must_use]
    pub fn sin(&self) -> Self {
        Self::from_f64(self.to_f64().sin())
    }
}

fn round(value: Repr, digits: usize) -> Repr {
    value.with_precision(digits).value()
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self(round(Repr::ZERO, DEFAULT_DIGITS))
    }

    fn is_zero(&self) -> bool {
        self.0 == Repr::ZERO
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self(round(Repr::ONE, DEFAULT_DIGITS))
    }

    fn is_one(&self) -> bool {
        self.0 == Repr::ONE
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Decimal {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Repr::from_str(s).map(|v| Self(round(v, DEFAULT_DIGITS)))
    }
}

// Arithmetic operations
impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Decimal> for Decimal {
    type Output = Self;

    fn add(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Decimal> for Decimal {
    type Output = Self;

    fn sub(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Decimal> for Decimal {
    type Output = Self;

    fn mul(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Div for Decimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_with(&rhs, DecimalContext::default())
    }
}

impl Div<&Decimal> for Decimal {
    type Output = Self;

    fn div(self, rhs: &Decimal) -> Self::Output {
        self.div_with(rhs, DecimalContext::default())
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(-self.0.clone())
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<Integer> for Decimal {
    fn from(value: Integer) -> Self {
        Self::from_integer(&value)
    }
}
