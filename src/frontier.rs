//! The open list of the search: a binary min-heap that additionally keeps track of where every
//! position lives in the heap array. This enables O(1) membership tests and O(log n) key
//! updates, which [std::collections::BinaryHeap] cannot offer without pushing duplicates.
use fxhash::FxHashMap;
use grid_util::Point;
use std::cmp::Ordering;

use crate::error::PathError;
use crate::node_pool::SearchNode;

#[derive(Clone, Debug)]
struct OpenEntry {
    node: usize,
    pos: Point,
    f: f32,
    h: f32,
    seq: u64,
}

impl OpenEntry {
    // Orders per estimated total cost first, then favours nodes closer to the goal and finally
    // the node that was opened first.
    fn cmp_key(&self, other: &OpenEntry) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.h.total_cmp(&other.h))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: Vec<OpenEntry>,
    slots: FxHashMap<Point, usize>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: Vec::with_capacity(capacity),
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_seq: 0,
        }
    }
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.slots.reserve(additional);
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn contains(&self, pos: &Point) -> bool {
        self.slots.contains_key(pos)
    }

    /// Opens `node`, which lives at index `ix` of the node pool.
    pub fn insert(&mut self, ix: usize, node: &SearchNode) -> Result<(), PathError> {
        if self.slots.contains_key(&node.pos) {
            return Err(PathError::AlreadyOpen(node.pos));
        }
        let slot = self.heap.len();
        self.heap.push(OpenEntry {
            node: ix,
            pos: node.pos,
            f: node.f(),
            h: node.h,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.slots.insert(node.pos, slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes the entry with the lowest key and returns its node pool index.
    pub fn extract_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.slots.remove(&min.pos);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min.node)
    }

    /// Refreshes the key of an open node after its `g` or `h` changed. Sifts in both directions so
    /// it is correct whether the key decreased or increased. Nodes that are not open are ignored.
    pub fn update(&mut self, node: &SearchNode) {
        let Some(&slot) = self.slots.get(&node.pos) else {
            return;
        };
        let entry = &mut self.heap[slot];
        entry.f = node.f();
        entry.h = node.h;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.next_seq = 0;
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_key(&self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].pos, a);
        self.slots.insert(self.heap[b].pos, b);
    }

    /// Returns the slot the entry ended up in.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.heap.len(), self.slots.len());
        for (slot, entry) in self.heap.iter().enumerate() {
            assert_eq!(self.slots[&entry.pos], slot);
            if slot > 0 {
                assert!(!self.less(slot, (slot - 1) / 2));
            }
        }
    }
}
