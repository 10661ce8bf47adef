use grid_util::Point;
use thiserror::Error;

use crate::node_pool::GridBounds;

/// Precondition violations surfaced by the search. Failing to find a path is not an error and is
/// reported as `Ok(None)` by [find_path](crate::pathfinder::Pathfinder::find_path).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("{point:?} lies outside of the initialized grid {bounds:?}")]
    OutOfBounds { point: Point, bounds: GridBounds },
    #[error("pathfinder was used before init was called")]
    NotInitialized,
    #[error("{0:?} is already in the open list")]
    AlreadyOpen(Point),
    #[error("grid bounds ({min_x}, {min_y})..=({max_x}, {max_y}) are empty")]
    EmptyBounds {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },
}
