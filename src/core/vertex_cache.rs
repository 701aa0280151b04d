//! Coordinate-keyed vertex store with evaluate-once semantics.
//!
//! [`VertexCache`] is the single owner of every [`Vertex`] in a refinement run.
//! Requesting a coordinate either returns the existing vertex or creates one,
//! evaluating the constraints and (if feasible) the objective exactly once.
//!
//! # Invariants
//!
//! | Invariant | Enforced by |
//! |---|---|
//! | Equal coordinates resolve to the same vertex | [`VertexCache::get_or_create`] lookup |
//! | Each coordinate is evaluated at most once | [`VertexCache::get_or_create`] only evaluates on a miss |
//! | Indices are dense and never reused | `next_index` only increases |
//! | Adjacency is symmetric | [`VertexCache::connect`] / [`VertexCache::disconnect`] |
//! | Minimizer flags are never stale | both endpoints are marked dirty on every edge change |
//!
//! The cache is not designed for concurrent access; a parallel driver must
//! serialize calls to `get_or_create` and to the edge mutators.

#![forbid(unsafe_code)]

use crate::core::collections::{PointToVertexKeyMap, StorageMap};
use crate::core::traits::scalar_function::{BoxedScalarFunction, EvaluationError};
use crate::core::vertex::{MinimizerCache, Vertex, VertexKey};
use crate::geometry::bounds::Bounds;
use crate::geometry::point::Point;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Structural errors raised by the vertex cache.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum VertexCacheError {
    /// A key does not refer to a vertex of this cache.
    #[error("Vertex key {key:?} is not present in the cache")]
    MissingVertex {
        /// The unknown key.
        key: VertexKey,
    },
    /// A vertex lists a neighbor that is not present in the cache.
    #[error("Vertex {vertex:?} references missing neighbor {neighbor:?}")]
    DanglingNeighbor {
        /// The vertex holding the reference.
        vertex: VertexKey,
        /// The missing neighbor.
        neighbor: VertexKey,
    },
    /// Adjacency is not symmetric between two vertices.
    #[error("Vertex {vertex:?} lists {neighbor:?} as neighbor but not vice versa")]
    AsymmetricNeighbors {
        /// The vertex holding the one-sided reference.
        vertex: VertexKey,
        /// The vertex missing the back-reference.
        neighbor: VertexKey,
    },
}

// =============================================================================
// VERTEX CACHE
// =============================================================================

/// Arena of vertices keyed by their unit coordinate.
///
/// # Examples
///
/// ```rust
/// use shgo_complex::core::vertex_cache::VertexCache;
/// use shgo_complex::geometry::point::Point;
///
/// let mut cache: VertexCache<2> =
///     VertexCache::new(Box::new(|x: &[f64; 2]| x[0] + x[1]), Vec::new(), None);
/// let a = cache.get_or_create(Point::new([0.0, 0.0])).unwrap();
/// let b = cache.get_or_create(Point::new([1.0, 0.0])).unwrap();
/// let again = cache.get_or_create(Point::new([0.0, 0.0])).unwrap();
///
/// assert_eq!(a, again);
/// assert_eq!(cache.total_evaluations(), 2);
///
/// cache.connect(a, b).unwrap();
/// assert!(cache.is_local_minimizer(a).unwrap());
/// assert!(!cache.is_local_minimizer(b).unwrap());
/// ```
pub struct VertexCache<const D: usize> {
    vertices: StorageMap<VertexKey, Vertex<D>>,
    lookup: PointToVertexKeyMap<D>,
    by_index: Vec<VertexKey>,
    objective: BoxedScalarFunction<D>,
    constraints: Vec<BoxedScalarFunction<D>>,
    bounds: Option<Bounds<D>>,
    nfev: usize,
    next_index: usize,
}

impl<const D: usize> VertexCache<D> {
    /// Creates an empty cache.
    ///
    /// The objective and constraints receive the bounds-rescaled coordinate.
    #[must_use]
    pub fn new(
        objective: BoxedScalarFunction<D>,
        constraints: Vec<BoxedScalarFunction<D>>,
        bounds: Option<Bounds<D>>,
    ) -> Self {
        Self {
            vertices: StorageMap::with_key(),
            lookup: PointToVertexKeyMap::default(),
            by_index: Vec::new(),
            objective,
            constraints,
            bounds,
            nfev: 0,
            next_index: 0,
        }
    }

    /// Returns the vertex at `point`, creating and evaluating it on first request.
    ///
    /// On a hit the existing vertex is returned untouched; nothing is evaluated.
    /// On a miss the constraints are evaluated first (in order, stopping at the
    /// first violated one); the objective only runs when all are non-negative,
    /// otherwise the vertex is stored with value `+∞`.
    ///
    /// # Errors
    ///
    /// Propagates the [`EvaluationError`] of a failing objective or constraint.
    /// Nothing is stored and no index is consumed in that case.
    pub fn get_or_create(&mut self, point: Point<D>) -> Result<VertexKey, EvaluationError> {
        if let Some(&key) = self.lookup.get(&point) {
            return Ok(key);
        }

        let domain_point = self
            .bounds
            .as_ref()
            .map_or(point, |bounds| bounds.to_domain(&point));
        let (value, feasible) = self.evaluate(&domain_point)?;

        let index = self.next_index;
        self.next_index += 1;
        if feasible {
            self.nfev += 1;
        }

        let key = self
            .vertices
            .insert(Vertex::new(point, domain_point, value, feasible, index));
        self.by_index.push(key);
        self.lookup.insert(point, key);

        tracing::trace!(index, ?point, value, feasible, "new vertex");
        Ok(key)
    }

    fn evaluate(&mut self, domain_point: &Point<D>) -> Result<(f64, bool), EvaluationError> {
        let x = domain_point.coords();
        for constraint in &mut self.constraints {
            if constraint.evaluate(x)? < 0.0 {
                return Ok((f64::INFINITY, false));
            }
        }
        Ok((self.objective.evaluate(x)?, true))
    }

    /// Looks up the key for `point` without creating anything.
    #[must_use]
    pub fn key_of(&self, point: &Point<D>) -> Option<VertexKey> {
        self.lookup.get(point).copied()
    }

    /// Returns the vertex for `key`.
    #[must_use]
    pub fn get(&self, key: VertexKey) -> Option<&Vertex<D>> {
        self.vertices.get(key)
    }

    /// Returns the vertex for `key` or a [`VertexCacheError::MissingVertex`].
    ///
    /// # Errors
    ///
    /// Fails when `key` does not belong to this cache.
    pub fn vertex(&self, key: VertexKey) -> Result<&Vertex<D>, VertexCacheError> {
        self.vertices
            .get(key)
            .ok_or(VertexCacheError::MissingVertex { key })
    }

    /// Returns the key of the vertex created with dense index `index`.
    #[must_use]
    pub fn vertex_by_index(&self, index: usize) -> Option<VertexKey> {
        self.by_index.get(index).copied()
    }

    /// Returns `true` if `key` refers to a vertex of this cache.
    #[must_use]
    pub fn contains_key(&self, key: VertexKey) -> bool {
        self.vertices.contains_key(key)
    }

    /// Iterates over every vertex (arena order, not creation order).
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex<D>)> {
        self.vertices.iter()
    }

    /// Number of distinct vertices created, feasible or not.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of objective evaluations performed (feasible vertices only).
    #[must_use]
    pub const fn total_evaluations(&self) -> usize {
        self.nfev
    }

    // =========================================================================
    // ADJACENCY
    // =========================================================================

    /// Adds the undirected edge `a`–`b`.
    ///
    /// A self-loop or an existing edge is a no-op. Returns `true` if an edge was
    /// added, in which case both endpoints' minimizer caches are dirty.
    ///
    /// # Errors
    ///
    /// Fails when either key is not in the cache.
    pub fn connect(&mut self, a: VertexKey, b: VertexKey) -> Result<bool, VertexCacheError> {
        self.check_pair(a, b)?;
        if a == b {
            return Ok(false);
        }
        let added = self.vertices[a].insert_neighbor(b);
        if added {
            self.vertices[b].insert_neighbor(a);
        }
        Ok(added)
    }

    /// Removes the undirected edge `a`–`b` if present.
    ///
    /// Returns `true` if an edge was removed, in which case both endpoints'
    /// minimizer caches are dirty.
    ///
    /// # Errors
    ///
    /// Fails when either key is not in the cache.
    pub fn disconnect(&mut self, a: VertexKey, b: VertexKey) -> Result<bool, VertexCacheError> {
        self.check_pair(a, b)?;
        let removed = self.vertices[a].remove_neighbor(b);
        if removed {
            self.vertices[b].remove_neighbor(a);
        }
        Ok(removed)
    }

    /// Returns `true` if `a` and `b` share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: VertexKey, b: VertexKey) -> bool {
        self.vertices.get(a).is_some_and(|v| v.is_neighbor(b))
    }

    fn check_pair(&self, a: VertexKey, b: VertexKey) -> Result<(), VertexCacheError> {
        for key in [a, b] {
            if !self.vertices.contains_key(key) {
                return Err(VertexCacheError::MissingVertex { key });
            }
        }
        Ok(())
    }

    /// Whether the vertex is a strict local minimizer of the objective.
    ///
    /// A vertex is a minimizer iff its value is strictly below every
    /// neighbor's value; a tie disqualifies it. A vertex without neighbors is
    /// a minimizer. The answer is cached until the next edge change touching
    /// the vertex.
    ///
    /// # Errors
    ///
    /// Fails when `key` or one of its neighbors is not in the cache.
    pub fn is_local_minimizer(&mut self, key: VertexKey) -> Result<bool, VertexCacheError> {
        let vertex = self.vertex(key)?;
        if let MinimizerCache::Clean(cached) = vertex.minimizer_cache() {
            return Ok(cached);
        }

        let value = vertex.value();
        let mut is_minimizer = true;
        for neighbor in vertex.neighbors() {
            let other = self
                .vertices
                .get(neighbor)
                .ok_or(VertexCacheError::DanglingNeighbor {
                    vertex: key,
                    neighbor,
                })?;
            if value >= other.value() {
                is_minimizer = false;
                break;
            }
        }

        self.vertices[key].set_minimizer(is_minimizer);
        Ok(is_minimizer)
    }

    /// Checks that every neighbor reference resolves and is reciprocated.
    ///
    /// # Errors
    ///
    /// Returns the first [`VertexCacheError::DanglingNeighbor`] or
    /// [`VertexCacheError::AsymmetricNeighbors`] found.
    pub fn validate_neighbors(&self) -> Result<(), VertexCacheError> {
        for (vertex, v) in &self.vertices {
            for neighbor in v.neighbors() {
                let other = self
                    .vertices
                    .get(neighbor)
                    .ok_or(VertexCacheError::DanglingNeighbor { vertex, neighbor })?;
                if !other.is_neighbor(vertex) {
                    return Err(VertexCacheError::AsymmetricNeighbors { vertex, neighbor });
                }
            }
        }
        Ok(())
    }
}

impl<const D: usize> std::fmt::Debug for VertexCache<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexCache")
            .field("vertices", &self.vertices.len())
            .field("constraints", &self.constraints.len())
            .field("bounds", &self.bounds)
            .field("nfev", &self.nfev)
            .field("next_index", &self.next_index)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
