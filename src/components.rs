use grid_util::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::node_pool::GridBounds;
use crate::walkable::Walkable;

/// [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of the walkable
/// cells of a grid under 8-directional movement. Lets callers reject unreachable targets without
/// flood-filling the whole grid in a failing search.
#[derive(Clone, Debug)]
pub struct Components {
    bounds: GridBounds,
    walkable: Vec<bool>,
    components: UnionFind<usize>,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up walkable grid neighbours to the same
    /// components. Without a policy every cell in `bounds` is walkable.
    pub fn generate(bounds: GridBounds, walkable: Option<&dyn Walkable>) -> Components {
        info!(
            "Generating connected components for {}x{} grid",
            bounds.width(),
            bounds.height()
        );
        let is_walkable: Vec<bool> = bounds
            .points()
            .map(|p| walkable.map_or(true, |w| w.is_walkable(p.x, p.y)))
            .collect();
        let mut components = UnionFind::new(bounds.area());
        for (ix, point) in bounds.points().enumerate() {
            if !is_walkable[ix] {
                continue;
            }
            // Linking towards the four "forward" neighbours covers every king move once.
            [(1, -1), (1, 0), (1, 1), (0, 1)]
                .iter()
                .filter_map(|&(dx, dy)| bounds.index(&Point::new(point.x + dx, point.y + dy)))
                .filter(|&n_ix| is_walkable[n_ix])
                .for_each(|n_ix| {
                    components.union(ix, n_ix);
                });
        }
        Components {
            bounds,
            walkable: is_walkable,
            components,
        }
    }

    /// Retrieves the component id a given [Point] belongs to, [None] for cells outside the bounds
    /// or cells that are not walkable.
    pub fn component(&self, point: &Point) -> Option<usize> {
        let ix = self.bounds.index(point)?;
        self.walkable[ix].then(|| self.components.find(ix))
    }

    /// Whether a search from `start` can reach `goal`. The start cell itself does not need to be
    /// walkable, matching the search, which never tests the cell it starts from.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if start == goal {
            return true;
        }
        let Some(goal_component) = self.component(goal) else {
            return false;
        };
        match self.component(start) {
            Some(start_component) => start_component == goal_component,
            None => self.bounds.contains(start)
                && crate::DIRECTION_EIGHT.iter().any(|&(dx, dy)| {
                    self.component(&Point::new(start.x + dx, start.y + dy))
                        == Some(goal_component)
                }),
        }
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}
