//! # grid_waypoints
//!
//! Grid pathfinding for real-time agents. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on an 8-connected grid of flagged
//! cells, using an indexed min-heap as open list so that nodes can be re-keyed in place. The
//! resulting cell path is reduced to a handful of waypoints by removing collinear points,
//! shortcutting along unobstructed
//! [Bresenham lines](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm) and dropping the
//! cell the agent already stands on.
//!
//! Whether an agent may occupy a cell is decided by a [Walkable] policy, typically a
//! [CompositeWalkable] that inflates the agent's radius over a [FlagStore].
pub mod components;
pub mod error;
pub mod flags;
pub mod follower;
pub mod frontier;
pub mod node_pool;
pub mod optimizer;
pub mod pathfinder;
pub mod walkable;

pub use components::Components;
pub use error::PathError;
pub use flags::{FlagStore, MapFlags};
pub use follower::PathFollower;
pub use node_pool::GridBounds;
pub use optimizer::{BresenhamLine, PathOptimizer};
pub use pathfinder::Pathfinder;
pub use walkable::{CompositeWalkable, Walkable};

use grid_util::Point;
use itertools::Itertools;

/// Ordered cells from the agent towards its goal.
pub type Path = Vec<Point>;

/// World size of a single grid cell.
pub const GRID_SIZE: f32 = 1.0;
/// Cost of a diagonal step, cardinal steps cost 1.
pub const SQRT_2: f32 = std::f32::consts::SQRT_2;
pub const N_SMALLVEC_SIZE: usize = 8;

pub const DIRECTION_FOUR: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
pub const DIRECTION_EIGHT: [(i32, i32); 8] = [
    (1, 1),
    (1, -1),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Cell containing the world position `(x, z)` on the ground plane.
pub fn world_to_grid(x: f32, z: f32) -> Point {
    Point::new((x / GRID_SIZE).floor() as i32, (z / GRID_SIZE).floor() as i32)
}

/// World position of the centre of a cell.
pub fn grid_to_world(p: Point) -> (f32, f32) {
    (
        p.x as f32 * GRID_SIZE + GRID_SIZE * 0.5,
        p.y as f32 * GRID_SIZE + GRID_SIZE * 0.5,
    )
}

/// Turns waypoints into a path on the grid which can be followed step by step. The cells between
/// two waypoints are exactly those checked by the line-of-sight test, so the expanded path only
/// crosses cells the optimizer validated.
pub fn waypoints_to_path(waypoints: &[Point]) -> Path {
    let mut path: Path = waypoints.iter().take(1).copied().collect();
    for (a, b) in waypoints.iter().tuple_windows() {
        path.extend(BresenhamLine::new(*a, *b).skip(1));
    }
    path
}

/// Octile cost summed over consecutive waypoints. Exact for raw paths, whose steps are all king
/// moves.
pub fn path_cost(waypoints: &[Point]) -> f32 {
    waypoints
        .iter()
        .tuple_windows()
        .map(|(a, b)| pathfinder::octile_distance(a, b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn world_grid_conversion() {
        assert_eq!(world_to_grid(0.5, 0.99), Point::new(0, 0));
        assert_eq!(world_to_grid(-0.1, 3.0), Point::new(-1, 3));
        assert_eq!(world_to_grid(grid_to_world(Point::new(-4, 7)).0, 0.0).x, -4);
        assert_eq!(grid_to_world(Point::new(2, -1)), (2.5, -0.5));
    }

    #[test]
    fn waypoints_expand_to_king_moves() {
        let waypoints = vec![Point::new(0, 0), Point::new(3, 1), Point::new(3, 3)];
        let path = waypoints_to_path(&waypoints);
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(3, 2),
                Point::new(3, 3)
            ]
        );
        assert!(waypoints_to_path(&[]).is_empty());
    }

    #[test]
    fn cost_of_waypoints() {
        let waypoints = vec![Point::new(0, 0), Point::new(2, 2), Point::new(2, 5)];
        assert_relative_eq!(path_cost(&waypoints), 2.0 * SQRT_2 + 3.0);
        assert_eq!(path_cost(&waypoints[..1]), 0.0);
    }
}
