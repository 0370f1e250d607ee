//! The quotient field of arbitrary precision integers.

use cardan_bignum::{Decimal, Integer};
use num_traits::{One, Zero};

use crate::traits::{EuclideanElement, OrderedElement, QuotientField};

impl QuotientField for Integer {
    type Quotient = Decimal;
    type Abs = Integer;

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

    fn div(&self, rhs: &Self) -> Decimal {
        Decimal::from_integer(self) / Decimal::from_integer(rhs)
    }

    fn neg(&self) -> Self {
        -self
    }

    fn abs(&self) -> Integer {
        Integer::abs(self)
    }

    fn promote(&self) -> Decimal {
        Decimal::from_integer(self)
    }

    fn eq_by_comparing(&self, rhs: &Self) -> bool {
        self == rhs
    }
}

impl OrderedElement for Integer {
    fn signum(&self) -> i8 {
        Integer::signum(self)
    }
}

impl EuclideanElement for Integer {
    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }

    fn exact_div(&self, divisor: &Self) -> Self {
        Integer::exact_div(self, divisor)
    }

    fn is_power_of_two(&self) -> bool {
        Integer::is_power_of_two(self)
    }
}
