//! The refinable complex over the unit hypercube.
//!
//! [`Complex`] owns the [`VertexCache`], the generation table, the root cell
//! and the [`AdjacencyTemplate`] derived from it. Each call to
//! [`Complex::split_generation`] subdivides every cell of the current
//! generation and appends the children as the next generation.
//!
//! # Modes
//!
//! - **Hypercube mode** (default): the root is the full `2^D` corner graph of
//!   the unit cube (every vertex connected to all vertices it dominates along
//!   a generating chain) plus a centroid replacing the origin–supremum
//!   diagonal. Each cell splits into one child per corner, spanned by the
//!   parent centroid and that corner.
//! - **Symmetric mode**: for objectives invariant under coordinate
//!   permutation, the root is the single `D + 1` vertex staircase simplex from
//!   origin to supremum. Each simplex is bisected across the edge between its
//!   first and last vertex.
//!
//! # Examples
//!
//! ```rust
//! use shgo_complex::prelude::*;
//!
//! let config = ComplexConfigBuilder::<2>::default().build().unwrap();
//! let objective = Box::new(|x: &[f64; 2]| (x[0] - 0.3).powi(2) + (x[1] - 0.6).powi(2));
//! let mut complex = Complex::new(config, objective, Vec::new()).unwrap();
//!
//! assert_eq!(complex.total_vertices(), 5);
//! assert!(complex.split_generation().unwrap());
//! assert_eq!(complex.current_generation().len(), 4);
//! ```

#![forbid(unsafe_code)]

use crate::core::adjacency::{AdjacencyTemplate, AdjacencyTemplateError};
use crate::core::cell::{Cell, CellValidationError, HomologyCell, Hypercube, Simplex};
use crate::core::collections::{
    CELL_VERTEX_INLINE_CAPACITY, FastHashSet, SmallBuffer, fast_hash_set_with_capacity,
};
use crate::core::edge::EdgeKey;
use crate::core::traits::scalar_function::{BoxedScalarFunction, EvaluationError};
use crate::core::vertex::VertexKey;
use crate::core::vertex_cache::{VertexCache, VertexCacheError};
use crate::geometry::bounds::Bounds;
use crate::geometry::point::Point;
use thiserror::Error;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Construction options for a [`Complex`].
///
/// # Examples
///
/// ```rust
/// use shgo_complex::prelude::*;
///
/// let bounds = Bounds::new([(-5.0, 5.0), (0.0, 2.0)]).unwrap();
/// let config = ComplexConfigBuilder::<2>::default()
///     .symmetry(true)
///     .bounds(bounds)
///     .build()
///     .unwrap();
/// assert!(config.symmetry);
/// assert_eq!(config.bounds, Some(bounds));
/// ```
#[derive(Builder, Clone, Debug, Default, PartialEq)]
pub struct ComplexConfig<const D: usize> {
    /// Assume the objective and constraints are invariant under any
    /// permutation of the coordinates and triangulate a single simplex.
    ///
    /// The constraint set cannot be inspected, so this assumption is not
    /// checked.
    #[builder(default)]
    pub symmetry: bool,
    /// Per-axis rescaling applied before the objective and constraints see a
    /// coordinate. `None` evaluates directly on the unit hypercube.
    #[builder(setter(into, strip_option), default)]
    pub bounds: Option<Bounds<D>>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building the root of a [`Complex`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ComplexConstructionError {
    /// The dimension must be positive.
    #[error("Invalid dimension {dimension}: a complex needs at least one axis")]
    InvalidDimension {
        /// The rejected dimension.
        dimension: usize,
    },
    /// Symmetric mode rotates its bisection modulo `D − 1`.
    #[error("Symmetric mode requires dimension >= 2, got {dimension}")]
    SymmetryRequiresDimension {
        /// The rejected dimension.
        dimension: usize,
    },
    /// The objective or a constraint failed on a root vertex.
    #[error("Root evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
    /// The cache rejected an edge operation.
    #[error("Vertex cache error: {0}")]
    Cache(#[from] VertexCacheError),
    /// The root cell could not report its rank.
    #[error("Root cell error: {0}")]
    Cell(#[from] CellValidationError),
    /// The adjacency template could not be recorded.
    #[error("Adjacency template error: {0}")]
    Template(#[from] AdjacencyTemplateError),
}

/// Errors that can occur while refining or querying a [`Complex`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ComplexError {
    /// The objective or a constraint failed on a new vertex.
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
    /// The cache rejected a lookup or edge operation.
    #[error("Vertex cache error: {0}")]
    Cache(#[from] VertexCacheError),
    /// A cell failed validation.
    #[error("Cell error: {0}")]
    Cell(#[from] CellValidationError),
    /// Replaying the adjacency template failed.
    #[error("Adjacency template error: {0}")]
    Template(#[from] AdjacencyTemplateError),
    /// The requested generation does not exist.
    #[error("Generation {generation} does not exist ({available} generations)")]
    GenerationOutOfRange {
        /// Requested generation.
        generation: usize,
        /// Number of generations in the table.
        available: usize,
    },
    /// The requested cell does not exist in its generation.
    #[error("Generation {generation} has no cell {index} ({available} cells)")]
    CellOutOfRange {
        /// Generation searched.
        generation: usize,
        /// Requested index.
        index: usize,
        /// Number of cells in that generation.
        available: usize,
    },
    /// A hypercube was split before its centroid was inserted.
    #[error("Hypercube in generation {generation} has no centroid")]
    MissingCentroid {
        /// Generation of the offending cell.
        generation: usize,
    },
    /// A simplex with too few vertices to bisect.
    #[error("Simplex in generation {generation} has {vertices} vertices; need {expected}")]
    DegenerateSimplex {
        /// Generation of the offending cell.
        generation: usize,
        /// Vertices present.
        vertices: usize,
        /// Vertices required (`D + 1`).
        expected: usize,
    },
    /// Hypercube construction was requested on a symmetric complex.
    #[error("Hypercube construction is unavailable in symmetric mode")]
    SymmetricMode,
}

type CellKeyBuffer = SmallBuffer<VertexKey, CELL_VERTEX_INLINE_CAPACITY>;

// =============================================================================
// COMPLEX
// =============================================================================

/// A generation-indexed simplicial/cubical complex over `[0, 1]^D`.
#[derive(Debug)]
pub struct Complex<const D: usize> {
    cache: VertexCache<D>,
    /// `generations[g]` holds every cell created at depth `g`; retired cells
    /// keep their slot.
    generations: Vec<Vec<Cell<D>>>,
    root: Cell<D>,
    /// Unit corner patterns of the root, in template order (hypercube mode).
    corner_patterns: Vec<Point<D>>,
    template: AdjacencyTemplate,
    symmetry: bool,
    generation: usize,
    root_rank: usize,
}

impl<const D: usize> Complex<D> {
    /// Builds the root cell, its centroid (hypercube mode) and the adjacency
    /// template, evaluating every root vertex.
    ///
    /// # Errors
    ///
    /// - [`ComplexConstructionError::InvalidDimension`] when `D == 0`.
    /// - [`ComplexConstructionError::SymmetryRequiresDimension`] when symmetric
    ///   mode is requested with `D < 2`.
    /// - [`ComplexConstructionError::Evaluation`] when the objective or a
    ///   constraint fails on a root vertex.
    pub fn new(
        config: ComplexConfig<D>,
        objective: BoxedScalarFunction<D>,
        constraints: Vec<BoxedScalarFunction<D>>,
    ) -> Result<Self, ComplexConstructionError> {
        if D == 0 {
            return Err(ComplexConstructionError::InvalidDimension { dimension: D });
        }
        if config.symmetry && D < 2 {
            return Err(ComplexConstructionError::SymmetryRequiresDimension { dimension: D });
        }

        let mut cache = VertexCache::new(objective, constraints, config.bounds);

        let (mut root, centroid, corner_patterns) = if config.symmetry {
            (Cell::from(Self::perm_symmetry(&mut cache)?), None, Vec::new())
        } else {
            let mut cube = Self::n_cube(&mut cache)?;
            let centroid = Self::add_centroid(&mut cube, &mut cache)?;
            let patterns = cube
                .corner_keys()
                .map(|key| cache.vertex(key).map(|v| *v.point()))
                .collect::<Result<Vec<_>, _>>()?;
            (Cell::from(cube), Some(centroid), patterns)
        };

        let root_rank = root.homology_group_rank(&mut cache)?;
        let template = AdjacencyTemplate::from_cell(&root, centroid, &cache)?;

        tracing::debug!(
            dimension = D,
            symmetry = config.symmetry,
            vertices = root.number_of_vertices(),
            template_edges = template.edge_count(),
            root_rank,
            "Built root cell"
        );

        Ok(Self {
            cache,
            generations: vec![vec![root.clone()]],
            root,
            corner_patterns,
            template,
            symmetry: config.symmetry,
            generation: 0,
            root_rank,
        })
    }

    // =========================================================================
    // ROOT CONSTRUCTION
    // =========================================================================

    /// Root hypercube: origin, supremum, then every corner reached by the
    /// axis-permutation walk.
    fn n_cube(cache: &mut VertexCache<D>) -> Result<Hypercube<D>, ComplexConstructionError> {
        let origin = Point::origin();
        let supremum = Point::supremum();
        let mut cube = Hypercube::new(0, 0, 0, origin, supremum);

        let origin_key = cache.get_or_create(origin)?;
        let supremum_key = cache.get_or_create(supremum)?;
        cube.add_vertex(origin_key);
        cube.add_vertex(supremum_key);

        let mut used_axes = [false; D];
        let mut chain = vec![origin_key];
        Self::perm(&mut cube, cache, &mut used_axes, &mut chain, origin)?;
        Ok(cube)
    }

    /// Depth-first walk over axis orderings from `xi`.
    ///
    /// `chain` holds every vertex on the path from the origin to `xi`
    /// inclusive; each newly reached corner is connected to all of them.
    fn perm(
        cube: &mut Hypercube<D>,
        cache: &mut VertexCache<D>,
        used_axes: &mut [bool; D],
        chain: &mut Vec<VertexKey>,
        xi: Point<D>,
    ) -> Result<(), ComplexConstructionError> {
        for axis in 0..D {
            if used_axes[axis] {
                continue;
            }
            let mut coords = *xi.coords();
            coords[axis] = 1.0;
            let next = Point::new(coords);
            let key = cache.get_or_create(next)?;
            cube.add_vertex(key);
            for &ancestor in chain.iter() {
                cache.connect(key, ancestor)?;
            }

            used_axes[axis] = true;
            chain.push(key);
            Self::perm(cube, cache, used_axes, chain, next)?;
            chain.pop();
            used_axes[axis] = false;
        }
        Ok(())
    }

    /// Root staircase simplex `0, e0, e0+e1, …, 1`, fully connected.
    fn perm_symmetry(cache: &mut VertexCache<D>) -> Result<Simplex, ComplexConstructionError> {
        let mut simplex = Simplex::new(0, 0, 0, 0, D);
        let mut coords = [0.0; D];
        let origin_key = cache.get_or_create(Point::new(coords))?;
        simplex.add_vertex(origin_key);

        let mut chain: CellKeyBuffer = CellKeyBuffer::new();
        chain.push(origin_key);
        for axis in 0..D {
            coords[axis] = 1.0;
            let key = cache.get_or_create(Point::new(coords))?;
            simplex.add_vertex(key);
            for &ancestor in &chain {
                cache.connect(key, ancestor)?;
            }
            chain.push(key);
        }
        Ok(simplex)
    }

    /// Inserts the root centroid, connects it to every root vertex and drops
    /// the origin–supremum diagonal. Returns the centroid key.
    fn add_centroid(
        cube: &mut Hypercube<D>,
        cache: &mut VertexCache<D>,
    ) -> Result<VertexKey, ComplexConstructionError> {
        let centroid = cube.origin().midpoint(cube.supremum());
        let centroid_key = cache.get_or_create(centroid)?;
        cube.set_centroid(centroid, centroid_key);

        if let (Some(origin_key), Some(supremum_key)) =
            (cache.key_of(cube.origin()), cache.key_of(cube.supremum()))
        {
            cache.disconnect(origin_key, supremum_key)?;
        }
        for &key in cube.vertices() {
            cache.connect(centroid_key, key)?;
        }
        Ok(centroid_key)
    }

    // =========================================================================
    // SUBDIVISION
    // =========================================================================

    /// Subdivides every cell of the current generation into the next one.
    ///
    /// Before any cell is split, the rank of every cell in the generation is
    /// computed so that children record their parent's rank. Split cells are
    /// retired but keep their slot in the table.
    ///
    /// Returns `Ok(false)` without advancing when the current generation is
    /// empty; this is the exhaustion signal, not an error.
    ///
    /// # Errors
    ///
    /// Propagates evaluation failures of new vertices and any structural
    /// inconsistency met while splitting. The complex is left partially
    /// refined in that case.
    pub fn split_generation(&mut self) -> Result<bool, ComplexError> {
        let generation = self.generation;
        let cell_count = self.current_generation().len();
        if cell_count == 0 {
            tracing::debug!(generation, "No cells left to split");
            return Ok(false);
        }

        if let Some(cells) = self.generations.get_mut(generation) {
            for cell in cells.iter_mut() {
                cell.homology_group_rank(&mut self.cache)?;
            }
        }

        let next_generation = generation + 1;
        let mut next = Vec::new();
        for index in 0..cell_count {
            let parent = self.cell(generation, index)?.clone();
            match parent {
                Cell::Hypercube(cube) => {
                    next.extend(
                        self.sub_generate_cell(cube, next_generation)?
                            .into_iter()
                            .map(Cell::from),
                    );
                }
                Cell::Simplex(simplex) => {
                    next.extend(
                        self.split_simplex_symmetry(simplex, next_generation)?
                            .into_iter()
                            .map(Cell::from),
                    );
                }
            }
            if let Some(cell) = self
                .generations
                .get_mut(generation)
                .and_then(|cells| cells.get_mut(index))
            {
                cell.retire();
            }
        }

        tracing::debug!(
            generation = next_generation,
            cells = next.len(),
            vertices = self.cache.total_vertices(),
            evaluations = self.cache.total_evaluations(),
            "Split generation"
        );

        self.generations.push(next);
        self.generation = next_generation;
        Ok(true)
    }

    /// Splits `parent` into one child per corner, each spanned by the parent
    /// centroid and that corner, then removes the parent's template edges.
    fn sub_generate_cell(
        &mut self,
        mut parent: Hypercube<D>,
        generation: usize,
    ) -> Result<Vec<Hypercube<D>>, ComplexError> {
        let origin = *parent.centroid().ok_or(ComplexError::MissingCentroid {
            generation: parent.generation(),
        })?;
        let parent_rank = parent.homology_group_rank(&mut self.cache)?;
        let history = parent.parent_rank_history();

        let corners: CellKeyBuffer = parent.corner_keys().collect();
        let mut children = Vec::with_capacity(corners.len());
        for corner in corners {
            let supremum = *self.cache.vertex(corner)?.point();
            children.push(self.construct_hypercube(
                origin,
                supremum,
                generation,
                parent_rank,
                history,
            )?);
        }

        self.template
            .disconnect_corners(parent.vertices(), &mut self.cache)?;
        Ok(children)
    }

    /// Builds the hypercube spanned by `origin` and `supremum` with the root's
    /// combinatorics: one vertex per root corner (mapped per axis as
    /// `origin·(1−x) + supremum·x`), the midpoint as centroid, and every
    /// template edge.
    ///
    /// The new cell is returned, not inserted into the generation table.
    ///
    /// # Errors
    ///
    /// - [`ComplexError::SymmetricMode`] on a symmetric complex.
    /// - [`ComplexError::Evaluation`] when a new vertex fails to evaluate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shgo_complex::prelude::*;
    ///
    /// let config = ComplexConfigBuilder::<2>::default().build().unwrap();
    /// let mut complex = Complex::new(config, Box::new(|x: &[f64; 2]| x[0]), Vec::new()).unwrap();
    ///
    /// let cube = complex
    ///     .construct_hypercube(Point::new([0.5, 0.5]), Point::new([1.0, 0.0]), 1, 0, 0)
    ///     .unwrap();
    /// assert_eq!(cube.number_of_vertices(), 5);
    /// assert_eq!(cube.centroid(), Some(&Point::new([0.75, 0.25])));
    /// ```
    pub fn construct_hypercube(
        &mut self,
        origin: Point<D>,
        supremum: Point<D>,
        generation: usize,
        parent_rank: usize,
        parent_rank_history: usize,
    ) -> Result<Hypercube<D>, ComplexError> {
        if self.symmetry {
            return Err(ComplexError::SymmetricMode);
        }
        let mut cube = Hypercube::new(
            generation,
            parent_rank,
            parent_rank_history,
            origin,
            supremum,
        );

        let mut keys = CellKeyBuffer::with_capacity(self.template.len());
        for pattern in &self.corner_patterns {
            let key = self
                .cache
                .get_or_create(Point::affine_pattern(&origin, &supremum, pattern))?;
            cube.add_vertex(key);
            keys.push(key);
        }
        let centroid = origin.midpoint(&supremum);
        let centroid_key = self.cache.get_or_create(centroid)?;
        cube.set_centroid(centroid, centroid_key);
        keys.push(centroid_key);

        self.template.connect_all(&keys, &mut self.cache)?;
        Ok(cube)
    }

    /// Bisects `parent` across the edge between its first and last vertex.
    ///
    /// The midpoint of that edge replaces it: the edge is disconnected and
    /// the midpoint is connected to every vertex of `parent`. The children
    /// are
    /// - lower: `[first, midpoint, interior…]`
    /// - upper: `[interior[c], remaining interior…, midpoint, last]`
    ///
    /// where `c` is the children's rotated generation cycle.
    fn split_simplex_symmetry(
        &mut self,
        mut parent: Simplex,
        generation: usize,
    ) -> Result<[Simplex; 2], ComplexError> {
        let vertices: CellKeyBuffer = parent.vertices().iter().copied().collect();
        let degenerate = ComplexError::DegenerateSimplex {
            generation: parent.generation(),
            vertices: vertices.len(),
            expected: D + 1,
        };
        let [first, interior @ .., last] = vertices.as_slice() else {
            return Err(degenerate);
        };
        let (first, last) = (*first, *last);

        let midpoint = self
            .cache
            .vertex(first)?
            .point()
            .midpoint(self.cache.vertex(last)?.point());
        let midpoint_key = self.cache.get_or_create(midpoint)?;

        self.cache.disconnect(first, last)?;
        for &key in &vertices {
            self.cache.connect(key, midpoint_key)?;
        }

        let parent_rank = parent.homology_group_rank(&mut self.cache)?;
        let history = parent.parent_rank_history();
        let cycle = parent.generation_cycle();

        let mut lower = Simplex::new(generation, parent_rank, history, cycle, D);
        lower.add_vertex(first);
        lower.add_vertex(midpoint_key);
        for &key in interior {
            lower.add_vertex(key);
        }

        let mut upper = Simplex::new(generation, parent_rank, history, cycle, D);
        let lead = vertices
            .get(upper.generation_cycle() + 1)
            .copied()
            .ok_or(degenerate)?;
        upper.add_vertex(lead);
        for &key in interior {
            upper.add_vertex(key);
        }
        upper.add_vertex(midpoint_key);
        upper.add_vertex(last);

        Ok([lower, upper])
    }

    /// Drops cells of the current generation for which `keep` returns
    /// `false`, so they are not refined further. Returns how many were
    /// dropped.
    ///
    /// Pruning every cell makes the next [`Complex::split_generation`]
    /// report exhaustion.
    pub fn retain_current<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Cell<D>) -> bool,
    {
        let Some(cells) = self.generations.get_mut(self.generation) else {
            return 0;
        };
        let before = cells.len();
        cells.retain(|cell| keep(cell));
        let dropped = before - cells.len();
        if dropped > 0 {
            tracing::debug!(
                generation = self.generation,
                dropped,
                remaining = cells.len(),
                "Pruned current generation"
            );
        }
        dropped
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Cells at the current refinement depth.
    #[must_use]
    pub fn current_generation(&self) -> &[Cell<D>] {
        self.generations
            .get(self.generation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Index of the current refinement depth (`0` is the root).
    #[must_use]
    pub const fn generation_index(&self) -> usize {
        self.generation
    }

    /// Every generation, root first.
    #[must_use]
    pub fn generations(&self) -> &[Vec<Cell<D>>] {
        &self.generations
    }

    /// Cells of generation `generation`.
    ///
    /// # Errors
    ///
    /// [`ComplexError::GenerationOutOfRange`] when it does not exist.
    pub fn generation(&self, generation: usize) -> Result<&[Cell<D>], ComplexError> {
        self.generations
            .get(generation)
            .map(Vec::as_slice)
            .ok_or(ComplexError::GenerationOutOfRange {
                generation,
                available: self.generations.len(),
            })
    }

    /// A single cell.
    ///
    /// # Errors
    ///
    /// Fails when the generation or index is out of range.
    pub fn cell(&self, generation: usize, index: usize) -> Result<&Cell<D>, ComplexError> {
        let cells = self.generation(generation)?;
        cells.get(index).ok_or(ComplexError::CellOutOfRange {
            generation,
            index,
            available: cells.len(),
        })
    }

    fn cell_and_cache_mut(
        &mut self,
        generation: usize,
        index: usize,
    ) -> Result<(&mut Cell<D>, &mut VertexCache<D>), ComplexError> {
        let available = self.generations.len();
        let cells = self
            .generations
            .get_mut(generation)
            .ok_or(ComplexError::GenerationOutOfRange {
                generation,
                available,
            })?;
        let available = cells.len();
        let cell = cells.get_mut(index).ok_or(ComplexError::CellOutOfRange {
            generation,
            index,
            available,
        })?;
        Ok((cell, &mut self.cache))
    }

    /// Homology group rank of one cell, computed on first request.
    ///
    /// # Errors
    ///
    /// Fails when the cell does not exist or references a vertex missing
    /// from the cache.
    pub fn homology_group_rank(
        &mut self,
        generation: usize,
        index: usize,
    ) -> Result<usize, ComplexError> {
        let (cell, cache) = self.cell_and_cache_mut(generation, index)?;
        Ok(cell.homology_group_rank(cache)?)
    }

    /// `rank − parent_rank` of one cell.
    ///
    /// # Errors
    ///
    /// Same as [`Complex::homology_group_rank`].
    pub fn homology_group_differential(
        &mut self,
        generation: usize,
        index: usize,
    ) -> Result<isize, ComplexError> {
        let (cell, cache) = self.cell_and_cache_mut(generation, index)?;
        Ok(cell.homology_group_differential(cache)?)
    }

    /// Rank of the root cell, computed once after construction.
    #[must_use]
    pub const fn root_homology_rank(&self) -> usize {
        self.root_rank
    }

    /// The root cell as built at construction.
    #[must_use]
    pub const fn initial_cell(&self) -> &Cell<D> {
        &self.root
    }

    /// The root edge pattern reused for every constructed hypercube.
    #[must_use]
    pub const fn adjacency_template(&self) -> &AdjacencyTemplate {
        &self.template
    }

    /// Dense 0/1 adjacency over root vertex positions, as recorded in the
    /// template.
    #[must_use]
    pub fn incidence_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.template.len();
        (0..n)
            .map(|row| {
                let mut entries = vec![0_u8; n];
                for &column in self.template.neighbors(row) {
                    entries[column] = 1;
                }
                entries
            })
            .collect()
    }

    /// Every edge currently in the vertex graph.
    #[must_use]
    pub fn edges(&self) -> FastHashSet<EdgeKey> {
        let mut edges = fast_hash_set_with_capacity(self.cache.total_vertices() * D);
        for (key, vertex) in self.cache.vertices() {
            edges.extend(vertex.neighbors().map(|neighbor| EdgeKey::new(key, neighbor)));
        }
        edges
    }

    /// Checks that adjacency is symmetric and free of dangling references.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate_neighbors(&self) -> Result<(), ComplexError> {
        Ok(self.cache.validate_neighbors()?)
    }

    /// Whether the complex was built in symmetric mode.
    #[must_use]
    pub const fn is_symmetric(&self) -> bool {
        self.symmetry
    }

    /// Objective evaluations performed on feasible vertices.
    #[must_use]
    pub const fn total_evaluations(&self) -> usize {
        self.cache.total_evaluations()
    }

    /// Distinct vertices created.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        self.cache.total_vertices()
    }

    /// The vertex store.
    #[must_use]
    pub const fn cache(&self) -> &VertexCache<D> {
        &self.cache
    }
}

// =============================================================================
// TESTS
// =============================================================================
