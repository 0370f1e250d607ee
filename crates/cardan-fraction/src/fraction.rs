//! The generic fraction pair.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use cardan_bignum::Integer;
use cardan_fields::{ArithmeticError, QuotientField};

/// An immutable (numerator, denominator) pair over one element type.
///
/// The denominator is non-zero, enforced at construction. Values are
/// not kept in any canonical form: arithmetic results are neither
/// reduced to lowest terms nor sign-normalized. Structural equality
/// (`==`, `Hash`) therefore distinguishes 1/2 from 2/4; use
/// [`Fraction::equivalent`](crate::canonical) for value equality.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction<N: QuotientField> {
    pub(crate) num: N,
    pub(crate) den: N,
}

/// A fraction over 64-bit machine integers.
pub type Fraction64 = Fraction<i64>;

/// A fraction over arbitrary precision integers.
pub type BigFraction = Fraction<Integer>;

impl<N: QuotientField> Fraction<N> {
    /// Creates a fraction from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero by comparison.
    #[must_use]
    pub fn new(num: N, den: N) -> Self {
        match Self::try_new(num, den) {
            Ok(f) => f,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a fraction, reporting a zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ZeroDenominator`] if `den` is zero.
    pub fn try_new(num: N, den: N) -> Result<Self, ArithmeticError> {
        if den.is_zero() {
            return Err(ArithmeticError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    /// Creates `num / 1`.
    #[must_use]
    pub fn of_numerator(num: N) -> Self {
        Self {
            num,
            den: N::one(),
        }
    }

    /// Creates `1 / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero by comparison.
    #[must_use]
    pub fn of_denominator(den: N) -> Self {
        Self::new(N::one(), den)
    }

    /// The canonical zero, `0 / 1`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            num: N::zero(),
            den: N::one(),
        }
    }

    /// The multiplicative identity, `1 / 1`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            num: N::one(),
            den: N::one(),
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &N {
        &self.num
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &N {
        &self.den
    }

    /// Returns true if the numerator is non-zero by comparison.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        !self.num.is_zero()
    }

    /// Returns true if the numerator equals the field's one by
    /// comparison.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.num.is_one()
    }

    /// Divides by `divisor` (multiplication by its inverse). The
    /// result is not reduced.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not invertible.
    #[must_use]
    pub fn divide(&self, divisor: &Self) -> Self {
        match self.checked_divide(divisor) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }

    /// Divides by `divisor`, reporting a non-invertible divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonInvertibleDivisor`] if the
    /// numerator of `divisor` is zero.
    pub fn checked_divide(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if !divisor.is_invertible() {
            return Err(ArithmeticError::NonInvertibleDivisor);
        }
        Ok(self * &Self {
            num: divisor.den.clone(),
            den: divisor.num.clone(),
        })
    }

    /// Swaps numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if this fraction is not invertible.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self.checked_invert() {
            Ok(inv) => inv,
            Err(e) => panic!("{e}"),
        }
    }

    /// Swaps numerator and denominator, reporting a zero numerator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonInvertibleOperand`] if the
    /// numerator is zero.
    pub fn checked_invert(&self) -> Result<Self, ArithmeticError> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NonInvertibleOperand);
        }
        Ok(Self {
            num: self.den.clone(),
            den: self.num.clone(),
        })
    }

    /// Computes self^exp for a signed exponent, by squaring. The
    /// result is not reduced; exponent zero yields the multiplicative
    /// identity.
    ///
    /// # Panics
    ///
    /// Panics if this fraction is not invertible and `exp` is
    /// negative.
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

    /// Scales numerator and denominator by the same factor.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is zero (the expanded denominator would be
    /// zero).
    #[must_use]
    pub fn expand(&self, factor: &N) -> Self {
        Self::new(self.num.mul(factor), self.den.mul(factor))
    }
}

impl<N: QuotientField<Abs = N>> Fraction<N> {
    /// The absolute value, componentwise through the field's operator.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.abs(),
        }
    }
}

// Cross-multiplied addition over the product of denominators; no
// reduction, mirroring rational-number addition verbatim.
impl<N: QuotientField> Add for &Fraction<N> {
    type Output = Fraction<N>;

    fn add(self, rhs: Self) -> Self::Output {
        Fraction {
            num: self
                .num
                .mul(&rhs.den)
                .add(&rhs.num.mul(&self.den)),
            den: self.den.mul(&rhs.den),
        }
    }
}

impl<N: QuotientField> Add for Fraction<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<N: QuotientField> Sub for &Fraction<N> {
    type Output = Fraction<N>;

    fn sub(self, rhs: Self) -> Self::Output {
        Fraction {
            num: self
                .num
                .mul(&rhs.den)
                .sub(&rhs.num.mul(&self.den)),
            den: self.den.mul(&rhs.den),
        }
    }
}

impl<N: QuotientField> Sub for Fraction<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<N: QuotientField> Mul for &Fraction<N> {
    type Output = Fraction<N>;

    fn mul(self, rhs: Self) -> Self::Output {
        Fraction {
            num: self.num.mul(&rhs.num),
            den: self.den.mul(&rhs.den),
        }
    }
}

impl<N: QuotientField> Mul for Fraction<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<N: QuotientField> Neg for &Fraction<N> {
    type Output = Fraction<N>;

    fn neg(self) -> Self::Output {
        Fraction {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }
}

impl<N: QuotientField> Neg for Fraction<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<N: QuotientField + fmt::Display> fmt::Display for Fraction<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl Fraction64 {
    /// Widens into the arbitrary precision fraction kind.
    #[must_use]
    pub fn to_big_fraction(&self) -> BigFraction {
        BigFraction {
            num: Integer::new(self.num),
            den: Integer::new(self.den),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_unreduced() {
        // 1/2 + 3/4 = 10/8, deliberately not reduced
        let sum = &Fraction64::new(1, 2) + &Fraction64::new(3, 4);
        assert_eq!(*sum.numerator(), 10);
        assert_eq!(*sum.denominator(), 8);
    }

    #[test]
    fn test_mul_is_unreduced() {
        let p = &Fraction64::new(2, 3) * &Fraction64::new(3, 2);
        assert_eq!(*p.numerator(), 6);
        assert_eq!(*p.denominator(), 6);
    }

    #[test]
    #[should_panic(expected = "denominator must not be zero")]
    fn test_zero_denominator() {
        let _ = Fraction64::new(1, 0);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            Fraction64::try_new(1, 0),
            Err(ArithmeticError::ZeroDenominator)
        );
        assert!(Fraction64::try_new(1, 2).is_ok());
    }

    #[test]
    fn test_factories() {
        let n = Fraction64::of_numerator(7);
        assert_eq!((*n.numerator(), *n.denominator()), (7, 1));

        let d = Fraction64::of_denominator(7);
        assert_eq!((*d.numerator(), *d.denominator()), (1, 7));
    }

    #[test]
    fn test_invert_swaps() {
        let f = Fraction64::new(3, 4).invert();
        assert_eq!((*f.numerator(), *f.denominator()), (4, 3));
    }

    #[test]
    #[should_panic(expected = "operand is not invertible")]
    fn test_invert_zero() {
        let _ = Fraction64::new(0, 5).invert();
    }

    #[test]
    #[should_panic(expected = "divisor is not invertible")]
    fn test_divide_by_zero_fraction() {
        let _ = Fraction64::new(1, 2).divide(&Fraction64::new(0, 3));
    }

    #[test]
    fn test_pow() {
        let f = Fraction64::new(2, 3);
        let cube = f.pow(3);
        assert_eq!((*cube.numerator(), *cube.denominator()), (8, 27));

        let identity = f.pow(0);
        assert_eq!(identity, Fraction64::one());

        let inv_sq = f.pow(-2);
        assert_eq!((*inv_sq.numerator(), *inv_sq.denominator()), (9, 4));
    }

    #[test]
    fn test_expand() {
        let f = Fraction64::new(1, 2).expand(&3);
        assert_eq!((*f.numerator(), *f.denominator()), (3, 6));
    }

    #[test]
    fn test_unit_and_invertible() {
        assert!(Fraction64::new(1, 9).is_unit());
        assert!(!Fraction64::new(2, 9).is_unit());
        assert!(Fraction64::new(2, 9).is_invertible());
        assert!(!Fraction64::new(0, 9).is_invertible());
    }

    #[test]
    fn test_abs() {
        let f = Fraction64::new(-3, -4).abs();
        assert_eq!((*f.numerator(), *f.denominator()), (3, 4));
    }

    #[test]
    fn test_promotion() {
        let f = Fraction64::new(-7, 9).to_big_fraction();
        assert_eq!(f.numerator().to_i64(), Some(-7));
        assert_eq!(f.denominator().to_i64(), Some(9));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Fraction64::new(1, 2), Fraction64::new(1, 2));
        assert_ne!(Fraction64::new(1, 2), Fraction64::new(2, 4));
    }
}
