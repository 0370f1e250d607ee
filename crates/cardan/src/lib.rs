//! # Cardan
//!
//! A family of immutable algebraic number abstractions.
//!
//! Cardan provides complex numbers and fractions over several numeric
//! representations (machine floats and integers, arbitrary precision
//! integers and decimals) behind one consistent arithmetic contract.
//!
//! ## Features
//!
//! - **Quotient fields**: one stateless operator table per element
//!   type, enforced at compile time
//! - **Complex kinds**: floating, decimal, and two Gaussian-integer
//!   variants with explicit promotion where integers are not closed
//! - **Fractions**: generic over the quotient field, with explicit
//!   canonicalization (`normalize`, `reduce`) and value equivalence
//! - **Precision control**: decimal operations accept an explicit
//!   rounding context
//!
//! ## Quick Start
//!
//! ```rust
//! use cardan::prelude::*;
//!
//! let z = Complex64::new(1.0, 2.0) * Complex64::new(3.0, 4.0);
//! assert_eq!(z, Complex64::new(-5.0, 10.0));
//!
//! let f = &Fraction64::new(1, 2) + &Fraction64::new(3, 4);
//! assert!(f.equivalent(&Fraction64::new(5, 4)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cardan_bignum as bignum;
pub use cardan_complex as complex;
pub use cardan_fields as fields;
pub use cardan_fraction as fraction;
pub use cardan_geometry as geometry;
pub use cardan_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cardan_bignum::{Decimal, DecimalContext, Integer};
    pub use cardan_complex::{BigComplex, BigGaussian, Complex64, Gaussian, Polar};
    pub use cardan_fields::{ArithmeticError, EuclideanElement, OrderedElement, QuotientField};
    pub use cardan_fraction::{BigFraction, Fraction, Fraction64};
    pub use cardan_geometry::{Circle, Rectangle};
    pub use cardan_linalg::{Matrix, SeededSampler, Vector};
}
