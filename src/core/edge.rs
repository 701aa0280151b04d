//! Canonical identifiers for undirected edges of the vertex graph.
//!
//! Edges are not stored explicitly; they are implied by each vertex's neighbor
//! set. [`EdgeKey`] names an edge by its two endpoint [`VertexKey`]s with the
//! endpoints put in a canonical order, so `(a, b)` and `(b, a)` are the same key.
//!
//! ## Determinism
//!
//! The canonical order follows the raw slotmap key, which is stable within one
//! cache but says nothing about coordinates. Sort by vertex index or point when
//! a geometric order is needed.

use crate::core::vertex::VertexKey;
use slotmap::Key;

/// Canonical identifier for an undirected edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    v0: VertexKey,
    v1: VertexKey,
}

impl EdgeKey {
    /// Creates the canonical key for the edge `a`–`b`.
    #[must_use]
    pub fn new(a: VertexKey, b: VertexKey) -> Self {
        if a.data().as_ffi() <= b.data().as_ffi() {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// First endpoint in canonical order.
    #[inline]
    #[must_use]
    pub const fn v0(self) -> VertexKey {
        self.v0
    }

    /// Second endpoint in canonical order.
    #[inline]
    #[must_use]
    pub const fn v1(self) -> VertexKey {
        self.v1
    }

    /// Both endpoints.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (VertexKey, VertexKey) {
        (self.v0, self.v1)
    }

    /// Returns `true` if `key` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn touches(self, key: VertexKey) -> bool {
        self.v0 == key || self.v1 == key
    }
}

impl From<(VertexKey, VertexKey)> for EdgeKey {
    #[inline]
    fn from((a, b): (VertexKey, VertexKey)) -> Self {
        Self::new(a, b)
    }
}
