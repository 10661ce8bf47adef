use grid_util::Point;

use crate::{grid_to_world, Path};

/// Moves an agent along the waypoints produced by
/// [find_path](crate::pathfinder::Pathfinder::find_path), one caller-driven step at a time.
///
/// The follower heads for the centre of the current waypoint in world space and advances to the
/// next waypoint once it is within `arrive_epsilon` of it.
#[derive(Clone, Debug)]
pub struct PathFollower {
    pub speed: f32,
    pub arrive_epsilon: f32,
    path: Path,
    index: usize,
}

impl PathFollower {
    pub fn new(speed: f32) -> PathFollower {
        PathFollower {
            speed,
            arrive_epsilon: 0.03,
            path: Vec::new(),
            index: 0,
        }
    }
    /// Replaces the current path and restarts at its first waypoint.
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
        self.index = 0;
    }
    pub fn path(&self) -> &[Point] {
        &self.path
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn current_target(&self) -> Option<Point> {
        self.path.get(self.index).copied()
    }
    pub fn is_finished(&self) -> bool {
        self.index >= self.path.len()
    }

    /// Moves `position` towards the current waypoint by at most `speed * dt` and returns the new
    /// position. Positions are world coordinates on the ground plane.
    pub fn advance(&mut self, position: (f32, f32), dt: f32) -> (f32, f32) {
        let Some(target) = self.current_target() else {
            return position;
        };
        let (tx, tz) = grid_to_world(target);
        let (dx, dz) = (tx - position.0, tz - position.1);
        let distance = (dx * dx + dz * dz).sqrt();
        let max_step = self.speed * dt;
        let next = if distance <= max_step {
            (tx, tz)
        } else {
            let t = max_step / distance;
            (position.0 + dx * t, position.1 + dz * t)
        };
        let (rx, rz) = (tx - next.0, tz - next.1);
        if (rx * rx + rz * rz).sqrt() < self.arrive_epsilon {
            self.index += 1;
        }
        next
    }
}
