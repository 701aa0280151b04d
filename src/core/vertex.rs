//! Vertices of the complex.
//!
//! A [`Vertex`] is a point of the unit search space together with everything the
//! complex learned about it: the rescaled coordinate handed to the objective,
//! the objective value, feasibility, its adjacency, and a lazily maintained
//! "is local minimizer" flag.
//!
//! Vertices live in the arena owned by
//! [`VertexCache`](crate::core::vertex_cache::VertexCache) and are addressed by
//! [`VertexKey`]. Adjacency is stored as a set of keys, so the cyclic vertex
//! graph has a single owner. Edge mutation goes through the cache, which keeps
//! the relation symmetric and invalidates the minimizer flag on both endpoints.

#![forbid(unsafe_code)]

use crate::core::collections::VertexKeySet;
use crate::geometry::point::Point;
use serde::Serialize;
use slotmap::new_key_type;

new_key_type! {
    /// Key type for accessing vertices in the cache arena.
    ///
    /// Keys are stable for the life of the cache: vertices are never removed
    /// during a refinement run, only disconnected.
    pub struct VertexKey;
}

/// Cached answer to "is this vertex a local minimizer?".
///
/// The cache is [`Dirty`](MinimizerCache::Dirty) after any adjacency change
/// touching the vertex and becomes [`Clean`](MinimizerCache::Clean) the next
/// time the flag is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MinimizerCache {
    /// Must be recomputed from the current neighbor set.
    #[default]
    Dirty,
    /// Up to date with the current neighbor set.
    Clean(bool),
}

/// A point in the search space with its evaluation and adjacency.
///
/// # Properties
///
/// - **`point`**: the unit-hypercube coordinate; this is the vertex identity
/// - **`domain_point`**: `point` rescaled into the configured bounds, computed once
/// - **`value`**: objective value, `+∞` when infeasible
/// - **`feasible`**: whether every constraint evaluated non-negative
/// - **`neighbors`**: adjacent vertex keys (symmetric relation)
/// - **`index`**: dense creation index assigned by the cache
/// - **`minimizer`**: cached local-minimizer flag
#[derive(Clone, Debug, Serialize)]
pub struct Vertex<const D: usize> {
    point: Point<D>,
    domain_point: Point<D>,
    value: f64,
    feasible: bool,
    #[serde(skip)]
    neighbors: VertexKeySet,
    index: usize,
    #[serde(skip)]
    minimizer: MinimizerCache,
}

impl<const D: usize> Vertex<D> {
    pub(crate) fn new(
        point: Point<D>,
        domain_point: Point<D>,
        value: f64,
        feasible: bool,
        index: usize,
    ) -> Self {
        Self {
            point,
            domain_point,
            value,
            feasible,
            neighbors: VertexKeySet::default(),
            index,
            minimizer: MinimizerCache::Dirty,
        }
    }

    /// The unit-hypercube coordinate identifying this vertex.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> &Point<D> {
        &self.point
    }

    /// The coordinate rescaled into the search bounds.
    #[inline]
    #[must_use]
    pub const fn domain_point(&self) -> &Point<D> {
        &self.domain_point
    }

    /// Objective value (`f64::INFINITY` for infeasible vertices).
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether every constraint was satisfied.
    #[inline]
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Dense creation index; unique within one cache.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Sum of the unit coordinate components.
    #[inline]
    #[must_use]
    pub fn order(&self) -> f64 {
        self.point.order()
    }

    /// Iterates over the keys of adjacent vertices (unordered).
    pub fn neighbors(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.neighbors.iter().copied()
    }

    /// Number of adjacent vertices.
    #[inline]
    #[must_use]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if `key` is adjacent to this vertex.
    #[inline]
    #[must_use]
    pub fn is_neighbor(&self, key: VertexKey) -> bool {
        self.neighbors.contains(&key)
    }

    /// Current state of the minimizer cache.
    #[inline]
    #[must_use]
    pub const fn minimizer_cache(&self) -> MinimizerCache {
        self.minimizer
    }

    /// Adds one half of an edge. Returns `true` if the neighbor set changed.
    pub(crate) fn insert_neighbor(&mut self, key: VertexKey) -> bool {
        let inserted = self.neighbors.insert(key);
        if inserted {
            self.minimizer = MinimizerCache::Dirty;
        }
        inserted
    }

    /// Removes one half of an edge. Returns `true` if the neighbor set changed.
    pub(crate) fn remove_neighbor(&mut self, key: VertexKey) -> bool {
        let removed = self.neighbors.remove(&key);
        if removed {
            self.minimizer = MinimizerCache::Dirty;
        }
        removed
    }

    pub(crate) const fn set_minimizer(&mut self, is_minimizer: bool) {
        self.minimizer = MinimizerCache::Clean(is_minimizer);
    }
}
