//! The polar form of a non-zero complex number.

use std::fmt;

use cardan_fields::QuotientField;

use crate::complex64::Complex64;

/// An immutable (radial, angular) pair.
///
/// The radial component is non-negative and the angular component lies
/// in (−π, π] whenever the value was derived from a valid complex
/// number. Equality is defined by numeric comparison, never
/// structurally: alternate internal scales of the same mathematical
/// value compare equal.
#[derive(Clone, Debug)]
pub struct Polar<N: QuotientField> {
    radial: N,
    angular: N,
}

impl<N: QuotientField> Polar<N> {
    /// Creates a polar form from radial and angular components.
    #[must_use]
    pub fn new(radial: N, angular: N) -> Self {
        Self { radial, angular }
    }

    /// Returns the radial component.
    #[must_use]
    pub fn radial(&self) -> &N {
        &self.radial
    }

    /// Returns the angular component, in radians.
    #[must_use]
    pub fn angular(&self) -> &N {
        &self.angular
    }

    /// Numeric-equivalence predicate on both components.
    #[must_use]
    pub fn eq_by_comparing(&self, other: &Self) -> bool {
        self.radial.eq_by_comparing(&other.radial)
            && self.angular.eq_by_comparing(&other.angular)
    }
}

// Equality on polar forms is comparison-based.
impl<N: QuotientField> PartialEq for Polar<N> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_by_comparing(other)
    }
}

impl Polar<f64> {
    /// Reconstructs the cartesian form,
    /// `(radial · cos angular, radial · sin angular)`.
    #[must_use]
    pub fn to_complex(&self) -> Complex64 {
        Complex64::new(
            self.radial * self.angular.cos(),
            self.radial * self.angular.sin(),
        )
    }
}

impl<N: QuotientField + fmt::Display> fmt::Display for Polar<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}∠{}", self.radial, self.angular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let z = Complex64::new(1.0, 2.0);
        let back = z.to_polar().to_complex();
        assert!((back.re() - z.re()).abs() < 1e-12);
        assert!((back.im() - z.im()).abs() < 1e-12);
    }

    #[test]
    fn test_comparison_equality() {
        let a = Polar::new(2.0, 0.5);
        let b = Polar::new(2.0, 0.5);
        assert_eq!(a, b);
        assert!(a.eq_by_comparing(&b));
    }
}
