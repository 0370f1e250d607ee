//! Seeded random sampling of scalars, vectors, and matrices.
//!
//! A thin wrapper around a seeded ChaCha bit source, for tests and
//! stochastic callers that need reproducible streams.

use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::matrix::Matrix;
use crate::vector::Vector;

/// A deterministic sampler over a seeded ChaCha8 stream.
pub struct SeededSampler {
    rng: ChaCha8Rng,
}

impl SeededSampler {
    /// Creates a sampler from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Samples a uniform f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Samples a uniform i64 in [lo, hi).
    ///
    /// # Panics
    ///
    /// Panics if `lo >= hi`.
    pub fn next_i64(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.gen_range(lo..hi)
    }

    /// Samples a vector with uniform components in [0, 1).
    pub fn vector(&mut self, dim: usize) -> Vector {
        Vector::from_components((0..dim).map(|_| self.next_f64()).collect())
    }

    /// Samples a matrix with uniform entries in [0, 1).
    pub fn matrix(&mut self, num_rows: usize, num_cols: usize) -> Matrix {
        Matrix::from_rows(
            (0..num_rows)
                .map(|_| (0..num_cols).map(|_| self.next_f64()).collect())
                .collect(),
        )
    }
}
