//! The quotient field of arbitrary precision decimals.
//!
//! The only field whose equality-by-comparison genuinely diverges from
//! structural equality: values carrying different precision metadata
//! compare equal when their magnitudes match.

use cardan_bignum::Decimal;
use num_traits::{One, Zero};

use crate::traits::QuotientField;

impl QuotientField for Decimal {
    type Quotient = Decimal;
    type Abs = Decimal;

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
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
        self.clone() / rhs
    }

    fn neg(&self) -> Self {
        -self
    }

    fn abs(&self) -> Self {
        Decimal::abs(self)
    }

    fn promote(&self) -> Self {
        self.clone()
    }

    fn eq_by_comparing(&self, rhs: &Self) -> bool {
        Decimal::eq_by_comparing(self, rhs)
    }
}
