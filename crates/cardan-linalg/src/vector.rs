//! Dense vectors built from 1-based entry lists.

use std::ops::{Add, Sub};

use crate::EntryListError;

/// An immutable dense vector of f64 components.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Builds a vector of the given dimension from (index, value)
    /// entries with 1-based indices.
    ///
    /// # Errors
    ///
    /// Returns an [`EntryListError`] when an index is out of range,
    /// duplicated, or absent.
    pub fn from_entries(dim: usize, entries: &[(usize, f64)]) -> Result<Self, EntryListError> {
        let mut slots: Vec<Option<f64>> = vec![None; dim];
        for &(index, value) in entries {
            if index == 0 || index > dim {
                return Err(EntryListError::OutOfRange { index, dim });
            }
            if slots[index - 1].is_some() {
                return Err(EntryListError::Duplicate { index });
            }
            slots[index - 1] = Some(value);
        }
        let mut data = Vec::with_capacity(dim);
        for (i, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(value) => data.push(value),
                None => return Err(EntryListError::Missing { index: i + 1 }),
            }
        }
        Ok(Self { data })
    }

    /// Builds a vector directly from its components.
    #[must_use]
    pub fn from_components(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Creates a zero vector.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Returns the component at a 1-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        if index == 0 {
            return None;
        }
        self.data.get(index - 1).copied()
    }

    /// Returns the components in index order.
    #[must_use]
    pub fn components(&self) -> &[f64] {
        &self.data
    }

    /// Scales every component.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * factor).collect(),
        }
    }

    /// The dot product.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        assert_eq!(self.dim(), other.dim(), "dimension mismatch");
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// The euclidean (2-) norm.
    #[must_use]
    pub fn euclidean_norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// The manhattan (1-) norm.
    #[must_use]
    pub fn manhattan_norm(&self) -> f64 {
        self.data.iter().map(|x| x.abs()).sum()
    }

    /// The maximum (∞-) norm.
    #[must_use]
    pub fn max_norm(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, x| acc.max(x.abs()))
    }

    /// The euclidean distance to another vector.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self - other).euclidean_norm()
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dim(), rhs.dim(), "dimension mismatch");
        Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dim(), rhs.dim(), "dimension mismatch");
        Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_list_construction() {
        let v = Vector::from_entries(3, &[(2, 5.0), (1, 4.0), (3, 6.0)]).unwrap();
        assert_eq!(v.components(), &[4.0, 5.0, 6.0]);
        assert_eq!(v.get(1), Some(4.0));
        assert_eq!(v.get(0), None);
        assert_eq!(v.get(4), None);
    }

    #[test]
    fn test_entry_list_violations() {
        assert_eq!(
            Vector::from_entries(2, &[(1, 1.0), (3, 2.0)]),
            Err(EntryListError::OutOfRange { index: 3, dim: 2 })
        );
        assert_eq!(
            Vector::from_entries(2, &[(1, 1.0), (1, 2.0)]),
            Err(EntryListError::Duplicate { index: 1 })
        );
        assert_eq!(
            Vector::from_entries(2, &[(1, 1.0)]),
            Err(EntryListError::Missing { index: 2 })
        );
    }

    #[test]
    fn test_norms() {
        let v = Vector::from_components(vec![3.0, -4.0]);
        assert!((v.euclidean_norm() - 5.0).abs() < 1e-15);
        assert!((v.manhattan_norm() - 7.0).abs() < 1e-15);
        assert!((v.max_norm() - 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_distance() {
        let a = Vector::from_components(vec![1.0, 1.0]);
        let b = Vector::from_components(vec![4.0, 5.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::from_components(vec![1.0, 2.0]);
        let b = Vector::from_components(vec![3.0, 4.0]);
        assert_eq!((&a + &b).components(), &[4.0, 6.0]);
        assert_eq!((&b - &a).components(), &[2.0, 2.0]);
        assert_eq!(a.scale(2.0).components(), &[2.0, 4.0]);
        assert!((a.dot(&b) - 11.0).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_dimension_mismatch() {
        let _ = Vector::zeros(2).dot(&Vector::zeros(3));
    }
}
