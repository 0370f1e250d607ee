//! Canonicalization, ordering, and coercions for integer fractions.
//!
//! Sign normalization and gcd reduction depend on integer-specific
//! operations that the generic operator table cannot express; they are
//! available through the `EuclideanElement` bound, i.e. for
//! `Fraction64` and `BigFraction` only. Ordering cross-multiplies the
//! *normalized* forms of both operands, never the raw components: an
//! unnormalized negative denominator would flip the comparison.

use cardan_bignum::Decimal;
use cardan_fields::{EuclideanElement, OrderedElement, QuotientField};

use crate::fraction::Fraction;

impl<N: EuclideanElement> Fraction<N> {
    /// The three-valued sign: the product of the component signs.
    ///
    /// Zero whenever the numerator is zero.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.num.signum() * self.den.signum()
    }

    /// Canonicalizes the sign.
    ///
    /// Zero maps to the canonical `0/1`; otherwise a negative value
    /// carries its sign on the numerator and the denominator is
    /// positive. Idempotent.
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.num.is_zero() {
            return Self::zero();
        }
        if self.den.signum() < 0 {
            return Self {
                num: self.num.neg(),
                den: self.den.neg(),
            };
        }
        self.clone()
    }

    /// Divides both components by their greatest common divisor.
    ///
    /// Does not touch signs; combine with [`Fraction::normalize`] for
    /// the canonical form. Idempotent.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let g = self.num.gcd(&self.den);
        if g.is_one() {
            return self.clone();
        }
        Self {
            num: self.num.exact_div(&g),
            den: self.den.exact_div(&g),
        }
    }

    /// Returns true if both sides represent the same rational value.
    ///
    /// Defined as structural equality of the canonical
    /// (`normalize().reduce()`) forms, independent of the raw
    /// representation: 2/4 is equivalent to 1/2.
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        self.normalize().reduce() == other.normalize().reduce()
    }

    /// Returns true if numerator and denominator are coprime.
    #[must_use]
    pub fn is_irreducible(&self) -> bool {
        self.num.gcd(&self.den).is_one()
    }

    /// Returns true if the normalized denominator is a power of two.
    #[must_use]
    pub fn is_dyadic(&self) -> bool {
        self.normalize().den.is_power_of_two()
    }

    /// Returns true if the value's magnitude is below one.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.num.abs() < self.den.abs()
    }

    /// Returns true if `self <= other` as rational values.
    #[must_use]
    pub fn le(&self, other: &Self) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        // both denominators are positive after normalization
        a.num.mul(&b.den) <= b.num.mul(&a.den)
    }

    /// Returns true if `self < other` as rational values.
    #[must_use]
    pub fn lt(&self, other: &Self) -> bool {
        !other.le(self)
    }

    /// Returns true if `self >= other` as rational values.
    #[must_use]
    pub fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    /// Returns true if `self > other` as rational values.
    #[must_use]
    pub fn gt(&self, other: &Self) -> bool {
        !self.le(other)
    }

    /// The smaller of the two rational values (self on ties).
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if self.le(other) {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// The larger of the two rational values (self on ties).
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        if self.ge(other) {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// The exact quotient of numerator by denominator, as a decimal
    /// under the fixed high-precision configuration.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        self.num.div(&self.den)
    }

    /// Narrows through the decimal value to f64. Not exact.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_decimal().to_f64()
    }

    /// Narrows through the decimal value to i64, truncating toward
    /// zero. Not exact; silently truncates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i64(&self) -> i64 {
        self.to_f64().trunc() as i64
    }
}
