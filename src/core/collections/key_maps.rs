use super::{FastHashMap, FastHashSet, MAX_PRACTICAL_NEIGHBOR_COUNT, SmallBuffer};
use crate::core::vertex::VertexKey;
use crate::geometry::point::Point;

/// Neighbor set of a vertex.
pub type VertexKeySet = FastHashSet<VertexKey>;

/// Coordinate → arena key lookup backing the construct-or-fetch cache.
pub type PointToVertexKeyMap<const D: usize> = FastHashMap<Point<D>, VertexKey>;

/// Arena key → position of that vertex inside one cell.
pub type VertexPositionMap = FastHashMap<VertexKey, usize>;

/// Positions of a vertex's neighbors within the root cell.
pub type NeighborPositionBuffer = SmallBuffer<usize, MAX_PRACTICAL_NEIGHBOR_COUNT>;
