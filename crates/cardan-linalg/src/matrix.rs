//! Dense matrices built from 1-based entry lists.
//!
//! Storage is row-major.

use std::ops::{Add, Sub};

use crate::vector::Vector;
use crate::EntryListError;

/// An immutable dense matrix of f64 components.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    num_rows: usize,
    num_cols: usize,
}

impl Matrix {
    /// Builds a matrix from (row, column, value) entries with 1-based
    /// indices.
    ///
    /// # Errors
    ///
    /// Returns an [`EntryListError`] when an index pair is out of
    /// range, duplicated, or absent. Reported flat indices run
    /// row-major, `(row - 1) * num_cols + col`.
    pub fn from_entries(
        num_rows: usize,
        num_cols: usize,
        entries: &[(usize, usize, f64)],
    ) -> Result<Self, EntryListError> {
        let dim = num_rows * num_cols;
        let mut slots: Vec<Option<f64>> = vec![None; dim];
        for &(row, col, value) in entries {
            if row == 0 || row > num_rows || col == 0 || col > num_cols {
                return Err(EntryListError::OutOfRange {
                    index: (row.saturating_sub(1)) * num_cols + col,
                    dim,
                });
            }
            let flat = (row - 1) * num_cols + (col - 1);
            if slots[flat].is_some() {
                return Err(EntryListError::Duplicate { index: flat + 1 });
            }
            slots[flat] = Some(value);
        }
        let mut data = Vec::with_capacity(dim);
        for (i, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(value) => data.push(value),
                None => return Err(EntryListError::Missing { index: i + 1 }),
            }
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Builds a matrix from rows of components.
    ///
    /// # Panics
    ///
    /// Panics if the rows have uneven lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "uneven rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![0.0; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entry at 1-based (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row == 0 || row > self.num_rows || col == 0 || col > self.num_cols {
            return None;
        }
        Some(self.data[(row - 1) * self.num_cols + (col - 1)])
    }

    /// Scales every entry.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * factor).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// The transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.data.len()];
        for r in 0..self.num_rows {
            for c in 0..self.num_cols {
                data[c * self.num_rows + r] = self.data[r * self.num_cols + c];
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Matrix-vector product.
    ///
    /// # Panics
    ///
    /// Panics if the vector dimension differs from the column count.
    #[must_use]
    pub fn mul_vector(&self, v: &Vector) -> Vector {
        assert_eq!(self.num_cols, v.dim(), "dimension mismatch");
        let data = (0..self.num_rows)
            .map(|r| {
                self.data[r * self.num_cols..(r + 1) * self.num_cols]
                    .iter()
                    .zip(v.components())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect();
        Vector::from_components(data)
    }

    /// Matrix-matrix product.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        assert_eq!(self.num_cols, rhs.num_rows, "dimension mismatch");
        let mut data = vec![0.0; self.num_rows * rhs.num_cols];
        for r in 0..self.num_rows {
            for k in 0..self.num_cols {
                let a = self.data[r * self.num_cols + k];
                if a == 0.0 {
                    continue;
                }
                for c in 0..rhs.num_cols {
                    data[r * rhs.num_cols + c] += a * rhs.data[k * rhs.num_cols + c];
                }
            }
        }
        Self {
            data,
            num_rows: self.num_rows,
            num_cols: rhs.num_cols,
        }
    }

    /// The Frobenius norm.
    #[must_use]
    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// The maximum-magnitude entry.
    #[must_use]
    pub fn max_norm(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, x| acc.max(x.abs()))
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            (self.num_rows, self.num_cols),
            (rhs.num_rows, rhs.num_cols),
            "dimension mismatch"
        );
        Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            (self.num_rows, self.num_cols),
            (rhs.num_rows, rhs.num_cols),
            "dimension mismatch"
        );
        Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}
