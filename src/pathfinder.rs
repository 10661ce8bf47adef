//! A* over the 8-connected grid with octile costs. All search state lives in the [Pathfinder] and
//! is reused between searches, so a search does not allocate once [init](Pathfinder::init) has
//! been called.
use fxhash::FxHashSet;
use grid_util::Point;
use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::error::PathError;
use crate::frontier::Frontier;
use crate::node_pool::{GridBounds, NodePool};
use crate::optimizer::PathOptimizer;
use crate::walkable::Walkable;
use crate::{Path, DIRECTION_EIGHT, N_SMALLVEC_SIZE, SQRT_2};

/// Cost of a single king move: 1 straight, sqrt(2) diagonally.
pub fn step_cost(from: &Point, to: &Point) -> f32 {
    if from.x == to.x || from.y == to.y {
        1.0
    } else {
        SQRT_2
    }
}

/// [Octile distance](https://theory.stanford.edu/~amitp/GameProgramming/Heuristics.html), the
/// exact cost of an unobstructed 8-directional path. Admissible and consistent for
/// [step_cost], which keeps A* optimal.
pub fn octile_distance(p1: &Point, p2: &Point) -> f32 {
    let dx = (p1.x - p2.x).abs() as f32;
    let dy = (p1.y - p2.y).abs() as f32;
    dx.min(dy) * SQRT_2 + (dx - dy).abs()
}

/// Reusable A* search plus path optimization. Not meant to be shared between concurrent
/// searches: every call to [find_path](Self::find_path) takes the scratch state exclusively.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    nodes: NodePool,
    open: Frontier,
    closed: FxHashSet<Point>,
    optimizer: PathOptimizer,
    /// Number of nodes expanded by the last search.
    pub expanded: usize,
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder::default()
    }
    /// Shorthand for [new](Self::new) followed by [init](Self::init).
    pub fn with_bounds(bounds: GridBounds) -> Pathfinder {
        let mut pathfinder = Pathfinder::new();
        pathfinder.init(bounds);
        pathfinder
    }

    /// Pre-allocates one node per cell of `bounds` and sizes the open and closed sets for a
    /// search covering the whole grid. Searches can only visit cells inside `bounds`.
    pub fn init(&mut self, bounds: GridBounds) {
        let count = bounds.area();
        info!(
            "Initializing pathfinder for {}x{} grid at ({}, {})",
            bounds.width(),
            bounds.height(),
            bounds.min_x,
            bounds.min_y
        );
        self.nodes = NodePool::new(bounds);
        self.open = Frontier::with_capacity(count);
        self.closed = FxHashSet::with_capacity_and_hasher(count, Default::default());
        self.optimizer = PathOptimizer::with_capacity(bounds.width());
    }

    pub fn bounds(&self) -> Option<GridBounds> {
        self.nodes.bounds()
    }

    /// Computes an optimized list of waypoints from `start` to `target`. The agent's own cell is
    /// trimmed from the front, so the first waypoint is the first place to move to.
    ///
    /// Returns `Ok(None)` if no path exists and `Ok(Some(vec![start]))` if `start == target`.
    /// Without a walkability policy every cell within the bounds is considered walkable.
    pub fn find_path(
        &mut self,
        start: Point,
        target: Point,
        walkable: Option<&dyn Walkable>,
    ) -> Result<Option<Path>, PathError> {
        let Some(mut path) = self.find_raw_path(start, target, walkable)? else {
            return Ok(None);
        };
        if path.len() > 1 {
            let raw_len = path.len();
            self.optimizer.optimize(&mut path, walkable);
            debug!("Optimized path from {} to {} waypoints", raw_len, path.len());
        }
        Ok(Some(path))
    }

    /// The unoptimized cell-by-cell path from `start` to `target`, both included, from which
    /// [find_path](Self::find_path) derives its waypoints. Consecutive cells are always king moves
    /// apart.
    pub fn find_raw_path(
        &mut self,
        start: Point,
        target: Point,
        walkable: Option<&dyn Walkable>,
    ) -> Result<Option<Path>, PathError> {
        self.expanded = 0;
        if start == target {
            return Ok(Some(vec![start]));
        }
        let endpoints = (self.nodes.index_of(&start), self.nodes.index_of(&target));
        let (start_ix, target_ix) = match endpoints {
            (Ok(s), Ok(t)) => (s, t),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Rejecting search from {:?} to {:?}: {}", start, target, e);
                return Err(e);
            }
        };

        self.nodes.reset();
        self.open.clear();
        self.closed.clear();

        let start_node = &mut self.nodes[start_ix];
        start_node.g = 0.0;
        start_node.h = octile_distance(&start, &target);
        self.open.insert(start_ix, &self.nodes[start_ix])?;

        while let Some(current_ix) = self.open.extract_min() {
            let current = self.nodes[current_ix].pos;
            self.closed.insert(current);
            self.expanded += 1;

            if current_ix == target_ix {
                let path = self.nodes.trace_back(current_ix);
                debug!(
                    "Found path of {} cells from {:?} to {:?} after expanding {} nodes",
                    path.len(),
                    start,
                    target,
                    self.expanded
                );
                return Ok(Some(path));
            }

            let current_g = self.nodes[current_ix].g;
            for (neighbour_ix, cost) in self.successors(&current, walkable) {
                let neighbour = &mut self.nodes[neighbour_ix];
                let tentative_g = current_g + cost;
                let is_open = self.open.contains(&neighbour.pos);
                if tentative_g < neighbour.g || !is_open {
                    neighbour.g = tentative_g;
                    neighbour.parent = Some(current_ix);
                    if is_open {
                        self.open.update(neighbour);
                    } else {
                        neighbour.h = octile_distance(&neighbour.pos, &target);
                        self.open.insert(neighbour_ix, neighbour)?;
                    }
                }
            }
        }
        warn!(
            "No path from {:?} to {:?} after expanding {} nodes",
            start, target, self.expanded
        );
        Ok(None)
    }

    /// Walkable, not yet closed neighbours of `pos` inside the bounds, with the cost of moving
    /// there.
    fn successors(
        &self,
        pos: &Point,
        walkable: Option<&dyn Walkable>,
    ) -> SmallVec<[(usize, f32); N_SMALLVEC_SIZE]> {
        DIRECTION_EIGHT
            .iter()
            .map(|&(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|n| walkable.map_or(true, |w| w.is_walkable(n.x, n.y)))
            .filter(|n| !self.closed.contains(n))
            .filter_map(|n| self.nodes.try_index_of(&n).map(|ix| (ix, step_cost(pos, &n))))
            .collect()
    }
}
