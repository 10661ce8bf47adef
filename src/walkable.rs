use crate::flags::FlagStore;
use crate::{DIRECTION_FOUR, GRID_SIZE};

/// Decides whether an agent may occupy a cell. The same predicate drives both the search and the
/// line-of-sight checks of the optimizer, so smoothing never violates a constraint the search
/// respected.
pub trait Walkable {
    fn is_walkable(&self, x: i32, y: i32) -> bool;
}

impl<F> Walkable for F
where
    F: Fn(i32, i32) -> bool,
{
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

/// Walkability for an agent with a circular footprint on a [FlagStore].
///
/// A radius in `(0, 1]` cells occupies a 3x3 square, `(1, 2]` a 5x5 square and so forth. A
/// point-sized agent (radius 0) only requires the four orthogonal neighbours of the cell to be
/// standable, which keeps diagonal moves from clipping blocked corners.
#[derive(Clone, Copy, Debug)]
pub struct CompositeWalkable<'a> {
    store: &'a FlagStore,
    inflate: i32,
}

impl<'a> CompositeWalkable<'a> {
    pub fn new(store: &'a FlagStore, radius: f32) -> CompositeWalkable<'a> {
        CompositeWalkable::with_grid_size(store, radius, GRID_SIZE)
    }
    pub fn with_grid_size(
        store: &'a FlagStore,
        radius: f32,
        grid_size: f32,
    ) -> CompositeWalkable<'a> {
        CompositeWalkable {
            store,
            inflate: (radius / grid_size).ceil().max(0.0) as i32,
        }
    }
    /// Number of cells the footprint extends in every direction.
    pub fn inflate(&self) -> i32 {
        self.inflate
    }
}

impl Walkable for CompositeWalkable<'_> {
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        if self.inflate > 0 {
            let r = self.inflate;
            (-r..=r).all(|dx| (-r..=r).all(|dy| self.store.can_stand(x + dx, y + dy)))
        } else {
            DIRECTION_FOUR
                .iter()
                .all(|&(dx, dy)| self.store.can_stand(x + dx, y + dy))
        }
    }
}
