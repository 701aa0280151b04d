//! Per-axis search bounds and the affine map from the unit hypercube.
//!
//! The complex always triangulates `[0, 1]^D`. When bounds are configured, the
//! coordinate handed to the objective is rescaled axis by axis as
//! `x * (high - low) + low`.

#![forbid(unsafe_code)]

use crate::geometry::point::Point;
use thiserror::Error;

/// Errors that can occur when constructing [`Bounds`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum BoundsError {
    /// A bound is NaN or infinite.
    #[error("Bound on axis {axis} is not finite: ({low}, {high})")]
    NonFinite {
        /// Axis index.
        axis: usize,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
    /// The lower bound is not strictly below the upper bound.
    #[error("Bound on axis {axis} is empty or inverted: low {low} >= high {high}")]
    Inverted {
        /// Axis index.
        axis: usize,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
}

/// Validated `(low, high)` pairs, one per axis.
///
/// # Examples
///
/// ```rust
/// use shgo_complex::geometry::{bounds::Bounds, point::Point};
///
/// let bounds = Bounds::new([(-5.0, 5.0), (0.0, 2.0)]).unwrap();
/// let mapped = bounds.to_domain(&Point::new([0.5, 1.0]));
/// assert_eq!(mapped.coords(), &[0.0, 2.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<const D: usize> {
    axes: [(f64, f64); D],
}

impl<const D: usize> Bounds<D> {
    /// Validates and wraps the per-axis bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::NonFinite`] or [`BoundsError::Inverted`] for the
    /// first malformed axis.
    pub fn new(axes: [(f64, f64); D]) -> Result<Self, BoundsError> {
        for (axis, &(low, high)) in axes.iter().enumerate() {
            if !low.is_finite() || !high.is_finite() {
                return Err(BoundsError::NonFinite { axis, low, high });
            }
            if low >= high {
                return Err(BoundsError::Inverted { axis, low, high });
            }
        }
        Ok(Self { axes })
    }

    /// The `(low, high)` pairs.
    #[inline]
    #[must_use]
    pub const fn axes(&self) -> &[(f64, f64); D] {
        &self.axes
    }

    /// Rescales a unit-hypercube point into the search domain.
    #[must_use]
    pub fn to_domain(&self, unit: &Point<D>) -> Point<D> {
        let mut coords = *unit.coords();
        for (c, &(low, high)) in coords.iter_mut().zip(self.axes.iter()) {
            *c = *c * (high - low) + low;
        }
        Point::new(coords)
    }
}

impl<const D: usize> TryFrom<[(f64, f64); D]> for Bounds<D> {
    type Error = BoundsError;

    fn try_from(axes: [(f64, f64); D]) -> Result<Self, Self::Error> {
        Self::new(axes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn maps_corners_onto_bounds() {
        let bounds = Bounds::new([(-1.0, 3.0), (10.0, 20.0)]).unwrap();
        assert_eq!(bounds.to_domain(&Point::origin()).coords(), &[-1.0, 10.0]);
        assert_eq!(bounds.to_domain(&Point::supremum()).coords(), &[3.0, 20.0]);

        let mid = bounds.to_domain(&Point::new([0.25, 0.5]));
        assert_relative_eq!(mid.coords()[0], 0.0);
        assert_relative_eq!(mid.coords()[1], 15.0);
    }

    #[test]
    fn rejects_inverted_and_non_finite_axes() {
        assert_eq!(
            Bounds::new([(0.0, 1.0), (2.0, 2.0)]),
            Err(BoundsError::Inverted {
                axis: 1,
                low: 2.0,
                high: 2.0
            })
        );
        assert!(matches!(
            Bounds::new([(f64::NEG_INFINITY, 0.0)]),
            Err(BoundsError::NonFinite { axis: 0, .. })
        ));
        assert!(Bounds::try_from([(0.0, 1.0); 4]).is_ok());
    }
}
