//! # shgo-complex
//!
//! This is a library for building and refining the simplicial/cubical complex
//! that simplicial homology global optimization (SHGO) uses to sample a
//! bounded n-dimensional search box.
//!
//! # Features
//!
//! - Const-generic dimension: coordinates are `[f64; D]`
//! - Evaluate-once vertex cache keyed by exact coordinates
//! - Hypercube subdivision driven by a reusable root adjacency template
//! - Symmetry-reduced simplex bisection for permutation-invariant objectives
//! - Lazily cached local-minimizer flags and per-cell homology group ranks
//! - Serialization of points and vertices with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use shgo_complex::prelude::*;
//!
//! let bounds = Bounds::new([(-2.0, 2.0), (-2.0, 2.0)]).unwrap();
//! let config = ComplexConfigBuilder::<2>::default()
//!     .bounds(bounds)
//!     .build()
//!     .unwrap();
//!
//! // Two wells, at (-1, -1) and (1, 1) in the search domain.
//! let objective = Box::new(|x: &[f64; 2]| {
//!     let a = (x[0] + 1.0).powi(2) + (x[1] + 1.0).powi(2);
//!     let b = (x[0] - 1.0).powi(2) + (x[1] - 1.0).powi(2);
//!     a.min(b)
//! });
//! let mut complex = Complex::new(config, objective, Vec::new()).unwrap();
//!
//! while complex.generation_index() < 2 {
//!     assert!(complex.split_generation().unwrap());
//! }
//! assert_eq!(complex.current_generation().len(), 16);
//!
//! let ranks: Vec<usize> = (0..complex.current_generation().len())
//!     .map(|i| complex.homology_group_rank(2, i).unwrap())
//!     .collect();
//! assert!(ranks.iter().any(|&rank| rank > 0));
//! ```
//!
//! # Constraints
//!
//! Constraints are scalar functions that are satisfied when non-negative. They
//! are evaluated in order before the objective; a vertex failing any of them
//! is stored with value `+∞` and never counts as an evaluation.
//!
//! ```rust
//! use shgo_complex::prelude::*;
//!
//! let config = ComplexConfig::<2>::default();
//! let objective: BoxedScalarFunction<2> = Box::new(|x: &[f64; 2]| x[0] * x[1]);
//! let half_plane: BoxedScalarFunction<2> = Box::new(|x: &[f64; 2]| 1.0 - x[0] - x[1]);
//!
//! let complex = Complex::new(config, objective, vec![half_plane]).unwrap();
//! assert_eq!(complex.total_vertices(), 5);
//! assert_eq!(complex.total_evaluations(), 4); // (1, 1) is infeasible
//! ```
//!
//! # Ownership model
//!
//! The vertex graph is cyclic. Vertices live in a slotmap arena inside the
//! [`VertexCache`](core::vertex_cache::VertexCache) and refer to each other by
//! [`VertexKey`](core::vertex::VertexKey); cells hold keys only. Every
//! adjacency change goes through the cache, which keeps the relation
//! symmetric and dirties the affected minimizer flags.
//!
//! # Concurrency
//!
//! Refinement is single-threaded and synchronous. The complex owns its cache
//! exclusively, and objectives are `FnMut`, so neither is shared between
//! threads.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the vertex cache, cells, the adjacency template
/// and the refinable [`Complex`](core::complex::Complex).
pub mod core {
    pub mod adjacency;
    pub mod cell;
    /// High-performance collection types used throughout the crate
    pub mod collections;
    pub mod complex;
    pub mod edge;
    pub mod vertex;
    pub mod vertex_cache;
    /// Traits for the callables driving vertex evaluation.
    pub mod traits {
        pub mod scalar_function;
        pub use scalar_function::*;
    }
    // Re-export the `core` modules.
    pub use adjacency::*;
    pub use cell::*;
    pub use complex::*;
    pub use edge::*;
    pub use traits::*;
    pub use vertex::*;
    pub use vertex_cache::*;
    // Note: collections module not re-exported here to avoid namespace pollution
}

/// Contains the coordinate type and the search-domain bounds.
pub mod geometry {
    pub mod bounds;
    pub mod point;
    pub use bounds::*;
    pub use point::*;
}

/// A prelude module that re-exports commonly used types.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        adjacency::*, cell::*, complex::*, edge::*, traits::scalar_function::*, vertex::*,
        vertex_cache::*,
    };

    // Re-export commonly used collection types from core::collections
    pub use crate::core::collections::{
        FastHashMap, FastHashSet, SmallBuffer, fast_hash_map_with_capacity,
        fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{bounds::*, point::*};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{
        core::{adjacency::AdjacencyTemplate, cell::Cell, edge::EdgeKey, vertex::Vertex},
        geometry::{Bounds, Point},
        is_normal,
    };

    // =============================================================================
    // TYPE SAFETY TESTS
    // =============================================================================

    #[test]
    fn normal_types() {
        assert!(is_normal::<Point<3>>());
        assert!(is_normal::<Bounds<3>>());
        assert!(is_normal::<Vertex<3>>());
        assert!(is_normal::<Cell<4>>());
        assert!(is_normal::<EdgeKey>());
        assert!(is_normal::<AdjacencyTemplate>());
    }

    #[test]
    fn test_prelude_collections_exports() {
        use crate::prelude::*;

        let mut map: FastHashMap<u64, usize> = FastHashMap::default();
        map.insert(123, 456);
        assert_eq!(map.get(&123), Some(&456));

        let mut set: FastHashSet<u64> = FastHashSet::default();
        set.insert(789);
        assert!(set.contains(&789));

        let mut buffer: SmallBuffer<i32, 8> = SmallBuffer::new();
        buffer.push(42);
        assert_eq!(buffer.len(), 1);

        let map_with_cap = fast_hash_map_with_capacity::<u64, usize>(100);
        assert!(map_with_cap.capacity() >= 100);

        let set_with_cap = fast_hash_set_with_capacity::<u64>(50);
        assert!(set_with_cap.capacity() >= 50);
    }
}
