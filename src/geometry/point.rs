//! Data and operations on d-dimensional points of the unit search space.
//!
//! # Bit-Stable Equality Semantics
//!
//! Points are the identity of a vertex: the [`VertexCache`](crate::core::vertex_cache::VertexCache)
//! resolves equal coordinate arrays to the same vertex. Equality and hashing are
//! therefore defined through [`OrderedFloat`], which makes `Point` usable as a
//! hash key and treats `-0.0` and `0.0` as the same coordinate.
//!
//! Every point the complex synthesizes is produced by the same arithmetic path
//! ([`Point::midpoint`] and [`Point::affine_pattern`]), so two requests for the
//! "same" geometric location produce bit-identical coordinates and land on the
//! same cache entry.

#![forbid(unsafe_code)]

use ordered_float::OrderedFloat;
use serde::de::{Error as _, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when validating a point.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PointValidationError {
    /// A coordinate is NaN or infinite.
    #[error(
        "Invalid coordinate at index {coordinate_index} in dimension {dimension}: {coordinate_value}"
    )]
    NonFiniteCoordinate {
        /// Index of the offending coordinate.
        coordinate_index: usize,
        /// The offending value.
        coordinate_value: f64,
        /// Dimension of the point.
        dimension: usize,
    },
}

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in D-dimensional space with `f64` coordinates.
///
/// Points are immutable once created; the complex only ever derives new points
/// from existing ones.
///
/// # Examples
///
/// ```rust
/// use shgo_complex::geometry::point::Point;
///
/// let p = Point::new([1.0, 0.0]);
/// let q = Point::new([0.0, 1.0]);
/// assert_eq!(p.midpoint(&q).coords(), &[0.5, 0.5]);
/// assert_eq!(Point::<3>::supremum().order(), 3.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Point<const D: usize> {
    coords: [f64; D],
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl<const D: usize> Point<D> {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(coords: [f64; D]) -> Self {
        Self { coords }
    }

    /// The origin of the unit hypercube, `[0, …, 0]`.
    #[inline]
    #[must_use]
    pub const fn origin() -> Self {
        Self { coords: [0.0; D] }
    }

    /// The supremum of the unit hypercube, `[1, …, 1]`.
    #[inline]
    #[must_use]
    pub const fn supremum() -> Self {
        Self { coords: [1.0; D] }
    }

    /// Returns a reference to the coordinates.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[f64; D] {
        &self.coords
    }

    /// Returns the coordinate on `axis`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, axis: usize) -> Option<f64> {
        self.coords.get(axis).copied()
    }

    /// Sum of the coordinate components.
    ///
    /// For the 0/1 corners of the root cell this is the number of unit steps
    /// taken from the origin, which is how the symmetric staircase simplex is
    /// ordered.
    #[must_use]
    pub fn order(&self) -> f64 {
        self.coords.iter().sum()
    }

    /// Component-wise midpoint of `self` and `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        let mut coords = [0.0; D];
        for (axis, c) in coords.iter_mut().enumerate() {
            *c = (self.coords[axis] + other.coords[axis]) / 2.0;
        }
        Self { coords }
    }

    /// Maps a root-cell pattern point into the box spanned by `origin` and `supremum`.
    ///
    /// Each axis is computed as `(origin - origin * x) + supremum * x`, which
    /// for 0/1 patterns reproduces `origin` or `supremum` exactly.
    #[must_use]
    pub fn affine_pattern(origin: &Self, supremum: &Self, pattern: &Self) -> Self {
        let mut coords = [0.0; D];
        for (axis, c) in coords.iter_mut().enumerate() {
            let x = pattern.coords[axis];
            let t1 = origin.coords[axis] - origin.coords[axis] * x;
            let t2 = supremum.coords[axis] * x;
            *c = t1 + t2;
        }
        Self { coords }
    }

    /// Validates that all coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`PointValidationError::NonFiniteCoordinate`] for the first NaN or
    /// infinite coordinate.
    pub fn validate(&self) -> Result<(), PointValidationError> {
        for (coordinate_index, &coordinate_value) in self.coords.iter().enumerate() {
            if !coordinate_value.is_finite() {
                return Err(PointValidationError::NonFiniteCoordinate {
                    coordinate_index,
                    coordinate_value,
                    dimension: D,
                });
            }
        }
        Ok(())
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    #[inline]
    fn from(coords: [f64; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> From<Point<D>> for [f64; D] {
    #[inline]
    fn from(point: Point<D>) -> Self {
        point.coords
    }
}

// =============================================================================
// STANDARD TRAIT IMPLEMENTATIONS
// =============================================================================

impl<const D: usize> Hash for Point<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &coord in &self.coords {
            OrderedFloat(coord).hash(state);
        }
    }
}

impl<const D: usize> PartialEq for Point<D> {
    fn eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(&a, &b)| OrderedFloat(a) == OrderedFloat(b))
    }
}

impl<const D: usize> Eq for Point<D> {}

impl<const D: usize> PartialOrd for Point<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Lexicographic, with OrderedFloat semantics per axis
impl<const D: usize> Ord for Point<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        for (&a, &b) in self.coords.iter().zip(other.coords.iter()) {
            match OrderedFloat(a).cmp(&OrderedFloat(b)) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::origin()
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

// serde has no blanket impls for `[T; D]` with a const `D`, so points are
// written as fixed-length tuples by hand.
impl<const D: usize> Serialize for Point<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(D)?;
        for coord in &self.coords {
            tuple.serialize_element(coord)?;
        }
        tuple.end()
    }
}

impl<'de, const D: usize> Deserialize<'de> for Point<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        struct PointVisitor<const D: usize>;

        impl<'de, const D: usize> Visitor<'de> for PointVisitor<D> {
            type Value = Point<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {D} finite coordinates")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Point<D>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut coords = [0.0; D];
                for (i, c) in coords.iter_mut().enumerate() {
                    *c = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                let point = Point::new(coords);
                point.validate().map_err(A::Error::custom)?;
                Ok(point)
            }
        }

        deserializer.deserialize_tuple(D, PointVisitor::<D>)
    }
}

// =============================================================================
// TESTS
// =============================================================================
