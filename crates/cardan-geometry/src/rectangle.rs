//! Rectangles.

use crate::{require_positive, GeometryError};

/// An immutable rectangle with positive side lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    /// Creates a rectangle.
    ///
    /// # Panics
    ///
    /// Panics if either side is not positive and finite.
    #[must_use]
    pub fn new(length: f64, width: f64) -> Self {
        match Self::try_new(length, width) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a rectangle, reporting an invalid side.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveDimension`] for a
    /// non-positive or non-finite side.
    pub fn try_new(length: f64, width: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            length: require_positive("length", length)?,
            width: require_positive("width", width)?,
        })
    }

    /// Returns the length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length
    }

    /// Returns the width.
    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the area.
    #[must_use]
    pub fn area(self) -> f64 {
        self.length * self.width
    }

    /// Returns the perimeter.
    #[must_use]
    pub fn perimeter(self) -> f64 {
        2.0 * (self.length + self.width)
    }

    /// Returns the diagonal length.
    #[must_use]
    pub fn diagonal(self) -> f64 {
        self.length.hypot(self.width)
    }

    /// Returns true if both sides are equal.
    #[must_use]
    pub fn is_square(self) -> bool {
        self.length == self.width
    }
}
