//! Position-indexed adjacency template of the root cell.
//!
//! Every sub-hypercube produced by subdivision is an axis-aligned affine image
//! of the root hypercube, with its vertices listed in the same order. The edge
//! pattern of the root can therefore be recorded once, by vertex *position*,
//! and replayed onto any child without rediscovering it.
//!
//! This template is:
//! - built once, after the root centroid is inserted
//! - immutable afterwards
//! - indexed by position in the root cell's vertex list
//!
//! Row `i` lists the positions adjacent to position `i`. The final row belongs
//! to the centroid when the root has one.

use crate::core::cell::HomologyCell;
use crate::core::collections::{
    NeighborPositionBuffer, VertexPositionMap, fast_hash_map_with_capacity,
};
use crate::core::vertex::VertexKey;
use crate::core::vertex_cache::{VertexCache, VertexCacheError};
use thiserror::Error;

/// Errors that can occur while building or applying an [`AdjacencyTemplate`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdjacencyTemplateError {
    /// A root neighbor is not itself a member of the root cell.
    #[error("Root vertex at position {position} has neighbor {neighbor:?} outside the root cell")]
    NeighborOutsideCell {
        /// Position whose row could not be built.
        position: usize,
        /// The foreign neighbor.
        neighbor: VertexKey,
    },
    /// A cell was given whose vertex count differs from the template's.
    #[error("Template has {expected} rows but the cell has {actual} vertices")]
    ShapeMismatch {
        /// Number of template rows.
        expected: usize,
        /// Number of vertices supplied.
        actual: usize,
    },
    /// The cache rejected an edge operation.
    #[error("Vertex cache error: {0}")]
    Cache(#[from] VertexCacheError),
}

/// Root-cell edge pattern, by vertex position.
///
/// # Examples
///
/// ```rust
/// use shgo_complex::prelude::*;
///
/// let config = ComplexConfigBuilder::<2>::default().build().unwrap();
/// let complex = Complex::new(config, Box::new(|x: &[f64; 2]| x[0] + x[1]), Vec::new()).unwrap();
///
/// let template = complex.adjacency_template();
/// assert_eq!(template.len(), 5);
/// assert_eq!(template.corner_count(), 4);
/// assert_eq!(template.edge_count(), 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyTemplate {
    rows: Vec<NeighborPositionBuffer>,
    centroid: Option<usize>,
}

impl AdjacencyTemplate {
    /// Records the current adjacency of `cell` by position.
    ///
    /// `centroid` names the cell's centroid vertex, if it has one; its row is
    /// skipped by [`AdjacencyTemplate::disconnect_corners`].
    ///
    /// # Errors
    ///
    /// Returns [`AdjacencyTemplateError::NeighborOutsideCell`] when a member is
    /// adjacent to a vertex outside the cell, and
    /// [`AdjacencyTemplateError::Cache`] when a member is missing.
    pub fn from_cell<const D: usize, C: HomologyCell>(
        cell: &C,
        centroid: Option<VertexKey>,
        cache: &VertexCache<D>,
    ) -> Result<Self, AdjacencyTemplateError> {
        let vertices = cell.vertices();
        let mut positions: VertexPositionMap = fast_hash_map_with_capacity(vertices.len());
        for (position, &key) in vertices.iter().enumerate() {
            positions.insert(key, position);
        }

        let mut rows = Vec::with_capacity(vertices.len());
        for (position, &key) in vertices.iter().enumerate() {
            let vertex = cache.vertex(key)?;
            let mut row = NeighborPositionBuffer::new();
            for neighbor in vertex.neighbors() {
                let &neighbor_position = positions
                    .get(&neighbor)
                    .ok_or(AdjacencyTemplateError::NeighborOutsideCell { position, neighbor })?;
                row.push(neighbor_position);
            }
            row.sort_unstable();
            rows.push(row);
        }

        Ok(Self {
            rows,
            centroid: centroid.and_then(|key| positions.get(&key).copied()),
        })
    }

    /// Number of rows (vertices of the root cell).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the template has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of non-centroid rows.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.rows.len() - usize::from(self.centroid.is_some())
    }

    /// Position of the centroid row, if any.
    #[must_use]
    pub const fn centroid_position(&self) -> Option<usize> {
        self.centroid
    }

    /// Positions adjacent to `position`, ascending. Empty when out of range.
    #[must_use]
    pub fn neighbors(&self, position: usize) -> &[usize] {
        self.rows
            .get(position)
            .map(|row| row.as_slice())
            .unwrap_or_default()
    }

    /// Number of undirected edges in the template.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum::<usize>() / 2
    }

    fn check_shape(&self, keys: &[VertexKey]) -> Result<(), AdjacencyTemplateError> {
        if keys.len() == self.rows.len() {
            Ok(())
        } else {
            Err(AdjacencyTemplateError::ShapeMismatch {
                expected: self.rows.len(),
                actual: keys.len(),
            })
        }
    }

    /// Replays every template edge onto `keys` (listed in template order).
    ///
    /// # Errors
    ///
    /// Fails on a length mismatch or when a key is missing from `cache`.
    pub fn connect_all<const D: usize>(
        &self,
        keys: &[VertexKey],
        cache: &mut VertexCache<D>,
    ) -> Result<(), AdjacencyTemplateError> {
        self.check_shape(keys)?;
        for (position, row) in self.rows.iter().enumerate() {
            for &neighbor in row.iter().filter(|&&neighbor| neighbor > position) {
                cache.connect(keys[position], keys[neighbor])?;
            }
        }
        Ok(())
    }

    /// Removes the template edges of every non-centroid row from `keys`.
    ///
    /// Edges to the centroid are removed from the corner side, so after this
    /// call only edges not in the template survive among `keys`.
    ///
    /// # Errors
    ///
    /// Fails on a length mismatch or when a key is missing from `cache`.
    pub fn disconnect_corners<const D: usize>(
        &self,
        keys: &[VertexKey],
        cache: &mut VertexCache<D>,
    ) -> Result<(), AdjacencyTemplateError> {
        self.check_shape(keys)?;
        for (position, row) in self.rows.iter().enumerate() {
            if Some(position) == self.centroid {
                continue;
            }
            for &neighbor in row {
                cache.disconnect(keys[position], keys[neighbor])?;
            }
        }
        Ok(())
    }
}
