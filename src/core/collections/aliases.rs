use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smallvec::SmallVec;

#[cfg(not(feature = "dense-slotmap"))]
use slotmap::SlotMap;

#[cfg(feature = "dense-slotmap")]
use slotmap::DenseSlotMap;

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Arena backend for vertices.
///
/// # Feature Flags
///
/// - **default**: `DenseSlotMap` (via the default `dense-slotmap` feature),
///   which keeps vertices contiguous for fast whole-cache sweeps such as
///   neighbor validation
/// - **--no-default-features**: `SlotMap`
///
/// Vertices are never removed from the arena during a refinement run, so
/// both backends hand out keys that stay valid for the life of the cache.
#[cfg(not(feature = "dense-slotmap"))]
pub type StorageMap<K, V> = SlotMap<K, V>;

/// Arena backend for vertices (`DenseSlotMap` variant).
#[cfg(feature = "dense-slotmap")]
pub type StorageMap<K, V> = DenseSlotMap<K, V>;

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// `HashMap` using the Fx hasher.
///
/// # Examples
///
/// ```rust
/// use shgo_complex::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(7, 1);
/// assert_eq!(map.get(&7), Some(&1));
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Build hasher shared by [`FastHashMap`] and [`FastHashSet`].
pub type FastBuildHasher = FxBuildHasher;

/// `HashSet` using the Fx hasher.
pub type FastHashSet<T> = FxHashSet<T>;

/// Small-optimized Vec: inline for up to `N` elements, heap beyond.
///
/// Hypercube cells hold `2^D + 1` vertices and simplices `D + 1`, so the
/// inline capacity only covers low dimensions; larger cells spill to the heap.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Inline capacity for per-vertex position lists in the adjacency template.
///
/// Corner rows of a 3D root cell have at most 7 entries; the centroid row
/// (`2^D` entries) and corner rows of higher dimensions spill to the heap.
pub const MAX_PRACTICAL_NEIGHBOR_COUNT: usize = 8;

/// Inline capacity for a cell's vertex list (`2^3 + 1` fits a 3D hypercube).
pub const CELL_VERTEX_INLINE_CAPACITY: usize = 9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_buffer_spills_to_heap_beyond_inline_capacity() {
        let mut buffer: SmallBuffer<usize, CELL_VERTEX_INLINE_CAPACITY> = SmallBuffer::new();
        for i in 0..CELL_VERTEX_INLINE_CAPACITY {
            buffer.push(i);
        }
        assert!(!buffer.spilled());
        buffer.push(CELL_VERTEX_INLINE_CAPACITY);
        assert!(buffer.spilled());
        assert_eq!(buffer.len(), CELL_VERTEX_INLINE_CAPACITY + 1);
    }

    #[test]
    fn fast_collections_behave_like_std() {
        use std::collections::hash_map::Entry;

        let mut map: FastHashMap<&str, i32> = FastHashMap::default();
        match map.entry("a") {
            Entry::Occupied(_) => unreachable!(),
            Entry::Vacant(e) => {
                e.insert(1);
            }
        }
        assert_eq!(map["a"], 1);

        let mut set: FastHashSet<u8> = FastHashSet::default();
        assert!(set.insert(3));
        assert!(!set.insert(3));
    }
}
