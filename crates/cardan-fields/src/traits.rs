//! Quotient field capability traits.
//!
//! A quotient field is a stateless table of arithmetic operators and
//! identities for one numeric element type. Expressing it as a trait
//! implemented directly on the element type makes the descriptor a
//! process-wide singleton by construction and lets the compiler check
//! operator signatures per element type.

use std::fmt::Debug;
use std::hash::Hash;

use cardan_bignum::Decimal;

/// The operator table of a quotient field over one element type.
///
/// # Laws
///
/// - `add`/`mul` are associative and commutative with identities
///   `zero()` and `one()`
/// - `mul` distributes over `add`
/// - `x.add(&x.neg())` equals zero by comparison
/// - `x.div(&y).mul(&y.promote())` equals `x.promote()` by comparison
///   for invertible `y`, up to the representation's rounding
///
/// Division and exponentiation return the associated `Quotient` type,
/// which differs from `Self` for exact-integer elements (the integers
/// are not closed under division; quotients carry a fixed
/// high-precision decimal configuration). No argument validation is
/// performed here: callers check invertibility before dividing.
pub trait QuotientField: Clone + PartialEq + Debug + Sized {
    /// The type returned by division and exponentiation.
    type Quotient: QuotientField<Quotient = Self::Quotient>;

    /// The type returned by the absolute value operator.
    type Abs;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Addition.
    fn add(&self, rhs: &Self) -> Self;

    /// Subtraction.
    fn sub(&self, rhs: &Self) -> Self;

    /// Multiplication.
    fn mul(&self, rhs: &Self) -> Self;

    /// Division, in the quotient type.
    fn div(&self, rhs: &Self) -> Self::Quotient;

    /// Negation.
    fn neg(&self) -> Self;

    /// Absolute value.
    fn abs(&self) -> Self::Abs;

    /// Widens an element into the quotient type.
    ///
    /// Promotion is always explicit; no operation coerces implicitly.
    fn promote(&self) -> Self::Quotient;

    /// Numeric-equivalence predicate.
    ///
    /// Distinct from structural equality: two decimal representations
    /// of the same value compare equal here regardless of internal
    /// scale or precision.
    fn eq_by_comparing(&self, rhs: &Self) -> bool;

    /// Returns true if this is the additive identity, by comparison.
    fn is_zero(&self) -> bool {
        self.eq_by_comparing(&Self::zero())
    }

    /// Returns true if this is the multiplicative identity, by comparison.
    fn is_one(&self) -> bool {
        self.eq_by_comparing(&Self::one())
    }

    /// Computes self^exp for a signed exponent, in the quotient type.
    ///
    /// Uses exponentiation by squaring; a negative exponent inverts
    /// the positive power, and exponent zero yields the multiplicative
    /// identity. Division by zero is the caller's responsibility when
    /// the base is zero and the exponent negative.
    fn pow(&self, exp: i32) -> Self::Quotient {
        let mut result = <Self::Quotient as QuotientField>::one();
        let mut base = self.promote();
        let mut e = exp.unsigned_abs();

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            e >>= 1;
        }

        if exp < 0 {
            <Self::Quotient as QuotientField>::one().div(&result)
        } else {
            result
        }
    }
}

/// A quotient field element with a total order and three-valued sign.
///
/// The absolute value must stay within the element type.
pub trait OrderedElement: QuotientField<Abs = Self> + Ord {
    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// An exact-integer element supporting gcd-based canonicalization.
///
/// Fraction reduction and the dyadic test cannot be expressed through
/// the generic operator table; they live here and are implemented by
/// the two integer element types only. Quotients of integer elements
/// are decimals under the fixed high-precision configuration.
pub trait EuclideanElement:
    OrderedElement + QuotientField<Quotient = Decimal> + Hash
{
    /// Computes the greatest common divisor (non-negative).
    fn gcd(&self, other: &Self) -> Self;

    /// Divides by a known divisor of this element, exactly.
    ///
    /// # Panics
    ///
    /// May panic if `divisor` is zero.
    fn exact_div(&self, divisor: &Self) -> Self;

    /// Returns true if this element is a positive power of two.
    fn is_power_of_two(&self) -> bool;
}
