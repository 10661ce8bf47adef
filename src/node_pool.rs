use grid_util::Point;

use crate::error::PathError;

/// Inclusive rectangle of grid cells the [Pathfinder](crate::pathfinder::Pathfinder) is
/// initialized for. Cells are laid out row by row starting at `(min_x, min_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Result<GridBounds, PathError> {
        if max_x < min_x || max_y < min_y {
            return Err(PathError::EmptyBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(GridBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }
    /// Smallest bounds containing a single cell.
    pub fn from_point(p: Point) -> GridBounds {
        GridBounds {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }
    pub fn width(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }
    pub fn height(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
    /// Grows the bounds so that they also cover `p`.
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }
    /// Dense index of a point, [None] if it lies outside.
    pub fn index(&self, p: &Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y - self.min_y) as usize * self.width() + (p.x - self.min_x) as usize)
        } else {
            None
        }
    }
    /// Inverse of [index](Self::index).
    pub fn point(&self, ix: usize) -> Point {
        let w = self.width();
        Point::new(self.min_x + (ix % w) as i32, self.min_y + (ix / w) as i32)
    }
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.area()).map(move |ix| self.point(ix))
    }
}

/// Per-cell search state. The total estimate `f` is always derived from `g` and `h`.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub pos: Point,
    pub g: f32,
    pub h: f32,
    pub parent: Option<usize>,
}

impl SearchNode {
    pub fn new(pos: Point) -> SearchNode {
        SearchNode {
            pos,
            g: f32::INFINITY,
            h: 0.0,
            parent: None,
        }
    }
    pub fn f(&self) -> f32 {
        self.g + self.h
    }
    pub fn reset(&mut self) {
        self.g = f32::INFINITY;
        self.h = 0.0;
        self.parent = None;
    }
}

/// Arena of [SearchNode]s, one per cell of the [GridBounds], addressed by dense index.
#[derive(Clone, Debug, Default)]
pub struct NodePool {
    bounds: Option<GridBounds>,
    nodes: Vec<SearchNode>,
}

impl NodePool {
    pub fn new(bounds: GridBounds) -> NodePool {
        let nodes = bounds.points().map(SearchNode::new).collect();
        NodePool {
            bounds: Some(bounds),
            nodes,
        }
    }
    pub fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Index of the node for `p`, failing with [PathError::OutOfBounds] outside the pool.
    pub fn index_of(&self, p: &Point) -> Result<usize, PathError> {
        let bounds = self.bounds.ok_or(PathError::NotInitialized)?;
        bounds.index(p).ok_or(PathError::OutOfBounds { point: *p, bounds })
    }
    /// Like [index_of](Self::index_of) but treats cells outside the pool as absent.
    pub fn try_index_of(&self, p: &Point) -> Option<usize> {
        self.bounds.and_then(|b| b.index(p))
    }
    pub fn reset(&mut self) {
        self.nodes.iter_mut().for_each(SearchNode::reset);
    }
    /// Walks the parent links from `ix` back to the root and returns the positions root first.
    pub fn trace_back(&self, ix: usize) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(ix), |&i| self.nodes[i].parent)
                .map(|i| self.nodes[i].pos)
                .collect();
        path.reverse();
        path
    }
}

impl std::ops::Index<usize> for NodePool {
    type Output = SearchNode;
    fn index(&self, ix: usize) -> &SearchNode {
        &self.nodes[ix]
    }
}

impl std::ops::IndexMut<usize> for NodePool {
    fn index_mut(&mut self, ix: usize) -> &mut SearchNode {
        &mut self.nodes[ix]
    }
}
