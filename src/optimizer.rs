//! Turns the cell-by-cell output of the search into a short list of waypoints in three passes:
//! collinear reduction, greedy line-of-sight smoothing and trimming of the start cell.
use grid_util::Point;
use itertools::Itertools;

use crate::walkable::Walkable;

/// Iterator over the cells of the
/// [Bresenham line](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm) between two
/// cells, both endpoints included.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: Point, end: Point) -> BresenhamLine {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        BresenhamLine {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let current = Point::new(self.x, self.y);
        if self.x == self.end.x && self.y == self.end.y {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Checks whether every cell rasterized between `start` and `end` is walkable. Without a policy
/// every line is clear.
pub fn line_of_sight(start: Point, end: Point, walkable: Option<&dyn Walkable>) -> bool {
    match walkable {
        Some(w) => BresenhamLine::new(start, end).all(|p| w.is_walkable(p.x, p.y)),
        None => true,
    }
}

/// Applies the optimization passes to paths in place, reusing a scratch buffer between calls.
#[derive(Clone, Debug, Default)]
pub struct PathOptimizer {
    scratch: Vec<Point>,
}

impl PathOptimizer {
    pub fn new() -> PathOptimizer {
        PathOptimizer::default()
    }
    pub fn with_capacity(capacity: usize) -> PathOptimizer {
        PathOptimizer {
            scratch: Vec::with_capacity(capacity),
        }
    }

    /// Runs all passes in order. The start trim has to come last: smoothing anchors its first
    /// shortcut at the agent's own cell, which both the search and the line-of-sight checks have
    /// validated, so dropping it afterwards cannot make any later segment unreachable.
    pub fn optimize(&mut self, path: &mut Vec<Point>, walkable: Option<&dyn Walkable>) {
        self.reduce_collinear(path);
        self.smooth_line_of_sight(path, walkable);
        trim_start(path);
    }

    /// Only keeps the endpoints and the points at which the step direction changes.
    pub fn reduce_collinear(&mut self, path: &mut Vec<Point>) {
        if path.len() < 3 {
            return;
        }
        self.scratch.clear();
        self.scratch.push(path[0]);
        let turns = path
            .iter()
            .tuple_windows()
            .filter(|(a, b, c)| direction(a, b) != direction(b, c))
            .map(|(_, b, _)| *b);
        self.scratch.extend(turns);
        self.scratch.push(path[path.len() - 1]);
        std::mem::swap(path, &mut self.scratch);
    }

    /// Greedily replaces stretches of the path by straight segments, always jumping to the
    /// farthest point that is in line of sight of the current anchor.
    pub fn smooth_line_of_sight(&mut self, path: &mut Vec<Point>, walkable: Option<&dyn Walkable>) {
        if path.len() <= 2 {
            return;
        }
        self.scratch.clear();
        let last = path.len() - 1;
        let mut start = 0;
        while start < last {
            self.scratch.push(path[start]);
            start = ((start + 2)..=last)
                .rev()
                .find(|&target| line_of_sight(path[start], path[target], walkable))
                .unwrap_or(start + 1);
        }
        self.scratch.push(path[last]);
        std::mem::swap(path, &mut self.scratch);
    }
}

/// Drops the agent's own cell from the front of the path if anything else remains.
pub fn trim_start(path: &mut Vec<Point>) {
    if path.len() > 1 {
        path.remove(0);
    }
}

/// Step from `a` to `b` reduced to its smallest integer multiple, so that collinear segments of
/// different lengths compare equal.
fn direction(a: &Point, b: &Point) -> (i32, i32) {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let d = gcd(dx.abs(), dy.abs());
    if d == 0 {
        (0, 0)
    } else {
        (dx / d, dy / d)
    }
}

fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
