use bitflags::bitflags;
use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::IndexMap;
use log::info;

use crate::node_pool::GridBounds;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

bitflags! {
    /// Terrain and occupancy attributes of a single cell.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MapFlags: u32 {
        const GROUND = 1 << 0;
        const WALL = 1 << 1;
        const OBSTACLE = 1 << 2;
        const HOLE = 1 << 3;
        const PLAYER = 1 << 4;
        const MONSTER = 1 << 5;
    }
}

impl MapFlags {
    /// Flags that make a cell impossible to stand on, even if it has ground.
    pub const BLOCKING: MapFlags = MapFlags::OBSTACLE
        .union(MapFlags::HOLE)
        .union(MapFlags::PLAYER)
        .union(MapFlags::MONSTER);

    /// Whether an agent may stand on a cell carrying these flags.
    pub fn standable(self) -> bool {
        self.contains(MapFlags::GROUND) && !self.intersects(MapFlags::BLOCKING)
    }
}

/// Sparse store of [MapFlags] per grid cell. Cells that were never flagged carry no flags.
/// Also tracks the range covered by ground, which is what a
/// [Pathfinder](crate::pathfinder::Pathfinder) should be initialized with.
#[derive(Clone, Debug, Default)]
pub struct FlagStore {
    cells: FxIndexMap<Point, MapFlags>,
    map_range: Option<GridBounds>,
}

impl FlagStore {
    pub fn new() -> FlagStore {
        FlagStore::default()
    }
    pub fn flags(&self, x: i32, y: i32) -> MapFlags {
        self.cells
            .get(&Point::new(x, y))
            .copied()
            .unwrap_or_default()
    }
    pub fn has_flag(&self, x: i32, y: i32, flag: MapFlags) -> bool {
        self.flags(x, y).contains(flag)
    }
    pub fn can_stand(&self, x: i32, y: i32) -> bool {
        self.flags(x, y).standable()
    }
    pub fn add_flag(&mut self, x: i32, y: i32, flag: MapFlags) {
        let p = Point::new(x, y);
        *self.cells.entry(p).or_default() |= flag;
        if flag.contains(MapFlags::GROUND) {
            match self.map_range.as_mut() {
                Some(range) => range.include(p),
                None => self.map_range = Some(GridBounds::from_point(p)),
            }
        }
    }
    /// Clears `flag` from a cell, forgetting the cell entirely once no flags remain. The ground
    /// range is not shrunk.
    pub fn remove_flag(&mut self, x: i32, y: i32, flag: MapFlags) {
        let p = Point::new(x, y);
        if let Some(flags) = self.cells.get_mut(&p) {
            flags.remove(flag);
            if flags.is_empty() {
                self.cells.swap_remove(&p);
            }
        }
    }
    /// Adds `flag` to every cell of the inclusive rectangle spanned by `min` and `max`.
    pub fn add_region(&mut self, min: Point, max: Point, flag: MapFlags) {
        info!("Registering {:?} on ({}, {})..=({}, {})", flag, min.x, min.y, max.x, max.y);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.add_flag(x, y, flag);
            }
        }
    }
    pub fn remove_region(&mut self, min: Point, max: Point, flag: MapFlags) {
        info!("Removing {:?} from ({}, {})..=({}, {})", flag, min.x, min.y, max.x, max.y);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.remove_flag(x, y, flag);
            }
        }
    }
    /// Bounds of all cells that ever received [MapFlags::GROUND].
    pub fn map_range(&self) -> Option<GridBounds> {
        self.map_range
    }
    /// Number of cells carrying at least one flag.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Flagged cells in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &MapFlags)> {
        self.cells.iter()
    }
}

impl fmt::Display for FlagStore {
    /// Draws the ground range top row first: `#` blocked, `.` standable, space without ground.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(range) = self.map_range else {
            return writeln!(f, "<empty map>");
        };
        for y in (range.min_y..=range.max_y).rev() {
            let row: String = (range.min_x..=range.max_x)
                .map(|x| {
                    let flags = self.flags(x, y);
                    if flags.intersects(MapFlags::BLOCKING) {
                        '#'
                    } else if flags.contains(MapFlags::GROUND) {
                        '.'
                    } else {
                        ' '
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
