//! The quotient field of 64-bit IEEE floats.

use crate::traits::QuotientField;

impl QuotientField for f64 {
    type Quotient = f64;
    type Abs = f64;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
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
        self / rhs
    }

    fn neg(&self) -> Self {
        -self
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn promote(&self) -> Self {
        *self
    }

    fn eq_by_comparing(&self, rhs: &Self) -> bool {
        self == rhs
    }
}
