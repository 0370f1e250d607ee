//! # cardan-fields
//!
//! Quotient field capability traits for Cardan.
//!
//! This crate provides:
//! - The `QuotientField` trait: a stateless table of arithmetic
//!   operators and identities for one numeric element type
//! - Refinements for ordered and Euclidean elements
//!   (`OrderedElement`, `EuclideanElement`)
//! - The four scalar instances: `f64`, `i64`, `Integer`, `Decimal`
//! - The arithmetic error taxonomy (`ArithmeticError`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! QuotientField
//!  └── OrderedElement
//!       └── EuclideanElement
//! ```
//!
//! The two complex instances live in `cardan-complex`, next to their
//! element types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decimals;
pub mod error;
pub mod float;
pub mod integers;
pub mod machine;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use traits::{EuclideanElement, OrderedElement, QuotientField};
