//! # cardan-fraction
//!
//! Immutable fraction kinds for Cardan.
//!
//! A [`Fraction`] is an ordered (numerator, denominator) pair over a
//! single element type, generic over the [`cardan_fields::QuotientField`]
//! operator table for that type. Arithmetic composes the field's
//! primitive operators and deliberately returns results that are
//! neither reduced nor sign-canonical; callers ask for a canonical
//! form explicitly through `normalize` and `reduce`.
//!
//! Canonicalization, ordering, and the dyadic/irreducible/proper
//! queries depend on integer-specific operations (gcd, exact division,
//! sign) and are only available for the two integer element types,
//! through the [`cardan_fields::EuclideanElement`] bound:
//! [`Fraction64`] and [`BigFraction`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod fraction;

#[cfg(test)]
mod proptests;

pub use fraction::{BigFraction, Fraction, Fraction64};
