//! # cardan-linalg
//!
//! Dense vector and matrix containers for Cardan.
//!
//! Containers are built from 1-based entry lists and validate two
//! invariants at construction: completeness (every index present) and
//! uniqueness (no index listed twice). They carry plain `f64`
//! components and do not participate in the quotient-field protocol;
//! their consumers are norm and distance computations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matrix;
pub mod rand;
pub mod vector;

use thiserror::Error;

/// Errors signalled when an entry list violates a container invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EntryListError {
    /// An index below one or above the container dimension.
    #[error("index {index} out of range for dimension {dim}")]
    OutOfRange {
        /// The offending 1-based index.
        index: usize,
        /// The container dimension.
        dim: usize,
    },

    /// The same index was listed twice.
    #[error("duplicate entry for index {index}")]
    Duplicate {
        /// The duplicated 1-based index.
        index: usize,
    },

    /// An index has no entry.
    #[error("missing entry for index {index}")]
    Missing {
        /// The absent 1-based index.
        index: usize,
    },
}

pub use matrix::Matrix;
pub use self::rand::SeededSampler;
pub use vector::Vector;
