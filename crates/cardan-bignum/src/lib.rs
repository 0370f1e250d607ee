//! # cardan-bignum
//!
//! Arbitrary precision integer and decimal arithmetic for Cardan.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision decimals with explicit precision control
//!   (`Decimal`, `DecimalContext`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large values are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decimal;
pub mod integer;

#[cfg(test)]
mod proptests;

pub use decimal::{Decimal, DecimalContext};
pub use integer::Integer;
