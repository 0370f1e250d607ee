//! # cardan-geometry
//!
//! Simple shape formula wrappers for Cardan.
//!
//! Shapes validate their dimensions at construction (positive and
//! finite) and expose the usual derived quantities; they carry plain
//! f64 values and no algebraic genericity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod circle;
pub mod rectangle;

use thiserror::Error;

/// Errors signalled when a shape dimension is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension that must be positive and finite was not.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveDimension {
        /// The dimension name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

pub use circle::Circle;
pub use rectangle::Rectangle;

pub(crate) fn require_positive(
    name: &'static str,
    value: f64,
) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension { name, value })
    }
}
