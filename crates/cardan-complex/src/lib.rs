//! # cardan-complex
//!
//! Immutable complex number kinds for Cardan.
//!
//! This crate provides:
//! - `Complex64`: a pair of 64-bit floats, closed under all operations
//! - `BigComplex`: a pair of arbitrary precision decimals
//! - `Gaussian`: a pair of 64-bit integers (Gaussian integers)
//! - `BigGaussian`: a pair of arbitrary precision integers
//! - `Polar`: the (radial, angular) form of a non-zero complex number
//!
//! The integer-valued kinds are not closed under division, inversion,
//! exponentiation, or argument; those operations promote explicitly
//! (`to_complex`, `to_big_complex`) to the corresponding non-integer
//! kind. Every value is immutable and every operation allocates a new
//! result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod big_complex;
pub mod big_gaussian;
pub mod complex64;
pub mod gaussian;
pub mod polar;

#[cfg(test)]
mod proptests;

pub use big_complex::BigComplex;
pub use big_gaussian::BigGaussian;
pub use complex64::Complex64;
pub use gaussian::Gaussian;
pub use polar::Polar;
