//! The quotient field of 64-bit machine integers.
//!
//! Division and exponentiation are not closed over the integers; both
//! promote into `Decimal` under the default high-precision context.

use cardan_bignum::Decimal;

use crate::traits::{EuclideanElement, OrderedElement, QuotientField};

impl QuotientField for i64 {
    type Quotient = Decimal;
    type Abs = i64;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
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

    fn div(&self, rhs: &Self) -> Decimal {
        Decimal::from_i64(*self) / Decimal::from_i64(*rhs)
    }

    fn neg(&self) -> Self {
        -self
    }

    fn abs(&self) -> Self {
        i64::abs(*self)
    }

    fn promote(&self) -> Decimal {
        Decimal::from_i64(*self)
    }

    fn eq_by_comparing(&self, rhs: &Self) -> bool {
        self == rhs
    }
}

impl OrderedElement for i64 {
    fn signum(&self) -> i8 {
        match *self {
            0 => 0,
            n if n > 0 => 1,
            _ => -1,
        }
    }
}

impl EuclideanElement for i64 {
    fn gcd(&self, other: &Self) -> Self {
        let mut a = i64::abs(*self);
        let mut b = i64::abs(*other);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    fn exact_div(&self, divisor: &Self) -> Self {
        self / divisor
    }

    fn is_power_of_two(&self) -> bool {
        *self > 0 && (*self & (*self - 1)) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_promotes() {
        let q = QuotientField::div(&1i64, &3i64);
        let back = q * Decimal::from_i64(3);
        let diff = (back - Decimal::from_i64(1)).abs();
        assert!(diff < Decimal::from_f64(1e-30));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(EuclideanElement::gcd(&48i64, &18), 6);
        assert_eq!(EuclideanElement::gcd(&-48i64, &18), 6);
        assert_eq!(EuclideanElement::gcd(&0i64, &5), 5);
    }

    #[test]
    fn test_power_of_two() {
        assert!(EuclideanElement::is_power_of_two(&1i64));
        assert!(EuclideanElement::is_power_of_two(&64i64));
        assert!(!EuclideanElement::is_power_of_two(&0i64));
        assert!(!EuclideanElement::is_power_of_two(&-2i64));
        assert!(!EuclideanElement::is_power_of_two(&6i64));
    }

    #[test]
    fn test_pow_negative_exponent() {
        let q = QuotientField::pow(&2i64, -3);
        assert!(q.eq_by_comparing(&Decimal::from_f64(0.125)));
    }
}
