//! Cells of the complex: sub-hypercubes and symmetry-reduced simplices.
//!
//! Both kinds are generation-tagged, ordered collections of [`VertexKey`]s that
//! share one contract, [`HomologyCell`]: they count how many of their vertices
//! are local minimizers (the *homology group rank*) and cache that count.
//!
//! - [`Hypercube`] is an image of the root hypercube under an axis-aligned
//!   affine map, defined by its origin and supremum corners plus a centroid.
//! - [`Simplex`] is a `D + 1` vertex simplex used when the objective is
//!   assumed invariant under coordinate permutations. Its vertex order is
//!   significant: the first and last vertices span the edge bisected next.
//!
//! [`Cell`] is the tagged union stored in the generation table.
//!
//! # Rank caching
//!
//! The rank is computed lazily and cached. Changing membership through
//! [`HomologyCell::add_vertex`] invalidates it; edge changes elsewhere in the
//! complex do not, so the rank must not be queried until every mutation
//! affecting the cell is done (or [`HomologyCell::invalidate_homology`] must be
//! called).

#![forbid(unsafe_code)]

use crate::core::collections::{CELL_VERTEX_INLINE_CAPACITY, SmallBuffer};
use crate::core::vertex::VertexKey;
use crate::core::vertex_cache::{VertexCache, VertexCacheError};
use crate::geometry::point::Point;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when querying or validating a cell.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellValidationError {
    /// The cell references a vertex that is not in the cache.
    #[error("Cell vertex at position {position} ({key:?}) is not in the vertex cache")]
    DanglingVertex {
        /// Position of the reference in the cell's vertex list.
        position: usize,
        /// The dangling key.
        key: VertexKey,
    },
    /// The same vertex appears twice in the cell.
    #[error("Vertex {key:?} appears more than once in the cell")]
    DuplicateVertex {
        /// The repeated key.
        key: VertexKey,
    },
    /// The cache reported a structural error while evaluating minimizers.
    #[error("Vertex cache error: {0}")]
    Cache(#[from] VertexCacheError),
}

// =============================================================================
// SHARED STATE
// =============================================================================

type CellVertexBuffer = SmallBuffer<VertexKey, CELL_VERTEX_INLINE_CAPACITY>;

/// State common to hypercubes and simplices.
#[derive(Clone, Debug, Default)]
pub struct CellMembers {
    generation: usize,
    parent_rank: usize,
    parent_rank_history: usize,
    vertices: CellVertexBuffer,
    rank: Option<usize>,
    retired: bool,
}

impl CellMembers {
    fn new(generation: usize, parent_rank: usize, parent_rank_history: usize) -> Self {
        Self {
            generation,
            parent_rank,
            parent_rank_history,
            ..Self::default()
        }
    }
}

/// The homology-rank contract shared by every cell kind.
pub trait HomologyCell {
    /// Shared state.
    fn members(&self) -> &CellMembers;

    /// Shared state, mutably.
    fn members_mut(&mut self) -> &mut CellMembers;

    /// Generation this cell belongs to (`0` is the root).
    fn generation(&self) -> usize {
        self.members().generation
    }

    /// Homology group rank of the parent when this cell was created.
    fn parent_rank(&self) -> usize {
        self.members().parent_rank
    }

    /// Rank history inherited from the parent.
    fn parent_rank_history(&self) -> usize {
        self.members().parent_rank_history
    }

    /// Ordered vertex keys (first-seen order).
    fn vertices(&self) -> &[VertexKey] {
        &self.members().vertices
    }

    /// Number of vertices.
    fn number_of_vertices(&self) -> usize {
        self.members().vertices.len()
    }

    /// Returns `true` if `key` is a member.
    fn contains_vertex(&self, key: VertexKey) -> bool {
        self.members().vertices.contains(&key)
    }

    /// Appends `key` unless it is already present. Returns `true` if appended.
    ///
    /// Appending invalidates the cached rank.
    fn add_vertex(&mut self, key: VertexKey) -> bool {
        if self.contains_vertex(key) {
            return false;
        }
        let members = self.members_mut();
        members.vertices.push(key);
        members.rank = None;
        true
    }

    /// Cached rank, if it has been computed.
    fn cached_rank(&self) -> Option<usize> {
        self.members().rank
    }

    /// Drops the cached rank so the next query recomputes it.
    fn invalidate_homology(&mut self) {
        self.members_mut().rank = None;
    }

    /// Whether this cell has been subdivided.
    fn is_retired(&self) -> bool {
        self.members().retired
    }

    /// Count of member vertices that are local minimizers, computed lazily.
    ///
    /// # Errors
    ///
    /// Fails loudly with [`CellValidationError::DanglingVertex`] when a member
    /// is not in `cache`, rather than returning a stale count.
    fn homology_group_rank<const D: usize>(
        &mut self,
        cache: &mut VertexCache<D>,
    ) -> Result<usize, CellValidationError> {
        if let Some(rank) = self.members().rank {
            return Ok(rank);
        }
        let mut rank = 0;
        for (position, &key) in self.members().vertices.iter().enumerate() {
            if !cache.contains_key(key) {
                return Err(CellValidationError::DanglingVertex { position, key });
            }
            if cache.is_local_minimizer(key)? {
                rank += 1;
            }
        }
        self.members_mut().rank = Some(rank);
        Ok(rank)
    }

    /// `rank − parent_rank`.
    ///
    /// # Errors
    ///
    /// Same as [`HomologyCell::homology_group_rank`].
    #[allow(clippy::cast_possible_wrap)]
    fn homology_group_differential<const D: usize>(
        &mut self,
        cache: &mut VertexCache<D>,
    ) -> Result<isize, CellValidationError> {
        let rank = self.homology_group_rank(cache)?;
        Ok(rank as isize - self.parent_rank() as isize)
    }

    /// Checks that every member resolves in `cache` and appears once.
    ///
    /// # Errors
    ///
    /// Returns the first [`CellValidationError`] found.
    fn validate<const D: usize>(&self, cache: &VertexCache<D>) -> Result<(), CellValidationError> {
        let vertices = self.vertices();
        for (position, &key) in vertices.iter().enumerate() {
            if !cache.contains_key(key) {
                return Err(CellValidationError::DanglingVertex { position, key });
            }
            if vertices[..position].contains(&key) {
                return Err(CellValidationError::DuplicateVertex { key });
            }
        }
        Ok(())
    }
}

// =============================================================================
// HYPERCUBE
// =============================================================================

/// A sub-hypercube, affinely similar to the root cell.
///
/// Vertices are stored in root-template order: the image of every root corner
/// first, the centroid last.
#[derive(Clone, Debug)]
pub struct Hypercube<const D: usize> {
    members: CellMembers,
    origin: Point<D>,
    supremum: Point<D>,
    centroid: Option<(Point<D>, VertexKey)>,
}

impl<const D: usize> Hypercube<D> {
    /// Creates an empty hypercube spanned by `origin` and `supremum`.
    #[must_use]
    pub fn new(
        generation: usize,
        parent_rank: usize,
        parent_rank_history: usize,
        origin: Point<D>,
        supremum: Point<D>,
    ) -> Self {
        Self {
            members: CellMembers::new(generation, parent_rank, parent_rank_history),
            origin,
            supremum,
            centroid: None,
        }
    }

    /// Origin corner.
    #[must_use]
    pub const fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Supremum corner.
    #[must_use]
    pub const fn supremum(&self) -> &Point<D> {
        &self.supremum
    }

    /// Centroid coordinate, once inserted.
    #[must_use]
    pub fn centroid(&self) -> Option<&Point<D>> {
        self.centroid.as_ref().map(|(point, _)| point)
    }

    /// Centroid vertex key, once inserted.
    #[must_use]
    pub fn centroid_key(&self) -> Option<VertexKey> {
        self.centroid.map(|(_, key)| key)
    }

    /// Records `key` at `point` as the centroid and appends it to the vertices.
    pub(crate) fn set_centroid(&mut self, point: Point<D>, key: VertexKey) {
        self.add_vertex(key);
        self.centroid = Some((point, key));
    }

    /// Vertex keys excluding the centroid.
    pub fn corner_keys(&self) -> impl Iterator<Item = VertexKey> + '_ {
        let centroid = self.centroid_key();
        self.vertices()
            .iter()
            .copied()
            .filter(move |&key| Some(key) != centroid)
    }
}

impl<const D: usize> HomologyCell for Hypercube<D> {
    fn members(&self) -> &CellMembers {
        &self.members
    }

    fn members_mut(&mut self) -> &mut CellMembers {
        &mut self.members
    }
}

// =============================================================================
// SIMPLEX
// =============================================================================

/// A simplex of the symmetry-reduced triangulation.
///
/// The first and last vertices span the edge the next bisection splits.
#[derive(Clone, Debug)]
pub struct Simplex {
    members: CellMembers,
    generation_cycle: usize,
}

impl Simplex {
    /// Creates an empty simplex whose cycle is `(parent_cycle + 1) mod (dim − 1)`.
    ///
    /// `dim` must be at least 2 for the cycle to rotate; smaller values pin
    /// the cycle at 0.
    #[must_use]
    pub fn new(
        generation: usize,
        parent_rank: usize,
        parent_rank_history: usize,
        parent_cycle: usize,
        dim: usize,
    ) -> Self {
        let modulus = dim.saturating_sub(1).max(1);
        Self {
            members: CellMembers::new(generation, parent_rank, parent_rank_history),
            generation_cycle: (parent_cycle + 1) % modulus,
        }
    }

    /// Rotating index selecting which interior vertex leads the upper child.
    #[must_use]
    pub const fn generation_cycle(&self) -> usize {
        self.generation_cycle
    }

    /// The edge to bisect next: first and last vertex.
    #[must_use]
    pub fn longest_edge(&self) -> Option<(VertexKey, VertexKey)> {
        match self.vertices() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }
}

impl HomologyCell for Simplex {
    fn members(&self) -> &CellMembers {
        &self.members
    }

    fn members_mut(&mut self) -> &mut CellMembers {
        &mut self.members
    }
}

// =============================================================================
// TAGGED UNION
// =============================================================================

/// A member of the generation table.
#[derive(Clone, Debug)]
pub enum Cell<const D: usize> {
    /// Hypercube-mode cell.
    Hypercube(Hypercube<D>),
    /// Symmetric-mode cell.
    Simplex(Simplex),
}

impl<const D: usize> Cell<D> {
    /// The hypercube, if this is one.
    #[must_use]
    pub const fn as_hypercube(&self) -> Option<&Hypercube<D>> {
        match self {
            Self::Hypercube(cube) => Some(cube),
            Self::Simplex(_) => None,
        }
    }

    /// The simplex, if this is one.
    #[must_use]
    pub const fn as_simplex(&self) -> Option<&Simplex> {
        match self {
            Self::Simplex(simplex) => Some(simplex),
            Self::Hypercube(_) => None,
        }
    }

    pub(crate) fn retire(&mut self) {
        match self {
            Self::Hypercube(cube) => cube.members.retired = true,
            Self::Simplex(simplex) => simplex.members.retired = true,
        }
    }
}

impl<const D: usize> HomologyCell for Cell<D> {
    fn members(&self) -> &CellMembers {
        match self {
            Self::Hypercube(cube) => cube.members(),
            Self::Simplex(simplex) => simplex.members(),
        }
    }

    fn members_mut(&mut self) -> &mut CellMembers {
        match self {
            Self::Hypercube(cube) => cube.members_mut(),
            Self::Simplex(simplex) => simplex.members_mut(),
        }
    }
}

impl<const D: usize> From<Hypercube<D>> for Cell<D> {
    fn from(cube: Hypercube<D>) -> Self {
        Self::Hypercube(cube)
    }
}

impl<const D: usize> From<Simplex> for Cell<D> {
    fn from(simplex: Simplex) -> Self {
        Self::Simplex(simplex)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line_cache() -> VertexCache<1> {
        VertexCache::new(Box::new(|x: &[f64; 1]| (x[0] - 0.3).abs()), Vec::new(), None)
    }

    #[test]
    fn add_vertex_keeps_first_seen_order_and_rejects_duplicates() {
        let mut cache = line_cache();
        let a = cache.get_or_create(Point::new([0.0])).unwrap();
        let b = cache.get_or_create(Point::new([1.0])).unwrap();

        let mut simplex = Simplex::new(0, 0, 0, 0, 2);
        assert!(simplex.add_vertex(b));
        assert!(simplex.add_vertex(a));
        assert!(!simplex.add_vertex(b));
        assert_eq!(simplex.vertices(), &[b, a]);
        assert_eq!(simplex.longest_edge(), Some((b, a)));
        assert!(simplex.validate(&cache).is_ok());
    }

    #[test]
    fn rank_counts_minimizers_and_is_cached() {
        let mut cache = line_cache();
        let a = cache.get_or_create(Point::new([0.0])).unwrap();
        let m = cache.get_or_create(Point::new([0.5])).unwrap();
        let b = cache.get_or_create(Point::new([1.0])).unwrap();
        cache.connect(a, m).unwrap();
        cache.connect(m, b).unwrap();

        let mut cube = Hypercube::new(1, 2, 0, Point::new([0.0]), Point::new([1.0]));
        cube.add_vertex(a);
        cube.add_vertex(b);
        cube.set_centroid(Point::new([0.5]), m);

        assert_eq!(cube.cached_rank(), None);
        assert_eq!(cube.homology_group_rank(&mut cache).unwrap(), 1);
        assert_eq!(cube.cached_rank(), Some(1));
        assert_eq!(cube.homology_group_differential(&mut cache).unwrap(), -1);
        assert_eq!(cube.corner_keys().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(cube.centroid(), Some(&Point::new([0.5])));

        // Edge changes do not invalidate the cell; the caller must.
        cache.disconnect(a, m).unwrap();
        assert_eq!(cube.homology_group_rank(&mut cache).unwrap(), 1);
        cube.invalidate_homology();
        assert_eq!(cube.homology_group_rank(&mut cache).unwrap(), 2);
    }

    #[test]
    fn dangling_vertex_fails_loudly() {
        let mut cache = line_cache();
        let mut foreign_cache = line_cache();
        let _ = foreign_cache.get_or_create(Point::new([0.0])).unwrap();
        let foreign = foreign_cache.get_or_create(Point::new([1.0])).unwrap();
        let local = cache.get_or_create(Point::new([0.0])).unwrap();

        let mut cell: Cell<1> = Simplex::new(0, 0, 0, 0, 2).into();
        cell.add_vertex(local);
        cell.add_vertex(foreign);

        assert_eq!(
            cell.homology_group_rank(&mut cache),
            Err(CellValidationError::DanglingVertex {
                position: 1,
                key: foreign
            })
        );
        assert!(cell.validate(&cache).is_err());
        assert_eq!(cell.cached_rank(), None);
    }

    #[test]
    fn generation_cycle_rotates_modulo_dim_minus_one() {
        assert_eq!(Simplex::new(0, 0, 0, 0, 2).generation_cycle(), 0);
        assert_eq!(Simplex::new(0, 0, 0, 0, 3).generation_cycle(), 1);
        assert_eq!(Simplex::new(0, 0, 0, 1, 3).generation_cycle(), 0);
        assert_eq!(Simplex::new(0, 0, 0, 2, 4).generation_cycle(), 0);
        assert_eq!(Simplex::new(0, 0, 0, 0, 1).generation_cycle(), 0);
    }

    #[test]
    fn tagged_union_dispatch() {
        let cube: Cell<2> = Hypercube::new(3, 1, 4, Point::origin(), Point::supremum()).into();
        assert!(cube.as_hypercube().is_some() && cube.as_simplex().is_none());
        assert_eq!(cube.generation(), 3);
        assert_eq!(cube.parent_rank(), 1);
        assert_eq!(cube.parent_rank_history(), 4);

        let mut simplex: Cell<2> = Simplex::new(2, 0, 0, 0, 2).into();
        assert!(simplex.as_simplex().is_some());
        assert!(!simplex.is_retired());
        simplex.retire();
        assert!(simplex.is_retired());
    }
}
