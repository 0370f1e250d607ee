//! Circles.

use std::f64::consts::PI;

use crate::{require_positive, GeometryError};

/// An immutable circle with a positive radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive and finite.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        match Self::try_new(radius) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a circle, reporting an invalid radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveDimension`] for a
    /// non-positive or non-finite radius.
    pub fn try_new(radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: require_positive("radius", radius)?,
        })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Returns the diameter.
    #[must_use]
    pub fn diameter(self) -> f64 {
        2.0 * self.radius
    }

    /// Returns the circumference.
    #[must_use]
    pub fn circumference(self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Returns the area.
    #[must_use]
    pub fn area(self) -> f64 {
        PI * self.radius * self.radius
    }
}
