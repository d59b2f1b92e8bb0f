//! Indexed priority queue over grid coordinates.
//!
//! A binary min-heap keyed by distance, plus a coordinate-to-slot map
//! updated on every swap so `decrease_key` can sift a specific coordinate
//! up from its known position in O(log n). Invariant: for every
//! coordinate in the heap, `slots[coord]` holds its current array index.

use crate::dungeon::Coord;

#[derive(Debug, Clone, Copy)]
struct Entry {
    coord: Coord,
    key: u32,
}

/// Min-heap of coordinates keyed by distance, with decrease-key.
#[derive(Debug, Clone)]
pub struct DistanceQueue {
    heap: Vec<Entry>,
    /// Heap slot of each coordinate, indexed by `y * width + x`.
    slots: Vec<Option<usize>>,
    width: usize,
}

impl DistanceQueue {
    /// Create an empty queue able to hold every cell of a
    /// `height` x `width` grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            heap: Vec::with_capacity(height * width),
            slots: vec![None; height * width],
            width,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Check if a coordinate is currently queued
    pub fn contains(&self, coord: Coord) -> bool {
        self.slots[self.id(coord)].is_some()
    }

    /// Add a coordinate with the given key.
    ///
    /// Each coordinate may be inserted at most once; inserting a
    /// coordinate already present is a logic defect.
    pub fn insert(&mut self, coord: Coord, key: u32) {
        let id = self.id(coord);
        debug_assert!(self.slots[id].is_none(), "coordinate inserted twice");
        self.heap.push(Entry { coord, key });
        self.slots[id] = Some(self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the coordinate with the smallest key, or `None`
    /// if the queue is empty. Ties break on heap order.
    pub fn extract_min(&mut self) -> Option<(Coord, u32)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let min = self.heap.pop().expect("heap is non-empty");
        let min_id = self.id(min.coord);
        self.slots[min_id] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((min.coord, min.key))
    }

    /// Lower the key of a queued coordinate and restore heap order.
    ///
    /// Callers guard with a presence/improvement check; a missing
    /// coordinate or a raised key here is a logic defect.
    pub fn decrease_key(&mut self, coord: Coord, new_key: u32) {
        let Some(slot) = self.slots[self.id(coord)] else {
            debug_assert!(false, "decrease_key on absent coordinate ({}, {})", coord.x, coord.y);
            return;
        };
        debug_assert!(
            new_key <= self.heap[slot].key,
            "decrease_key would raise the key from {} to {}",
            self.heap[slot].key,
            new_key
        );
        self.heap[slot].key = new_key;
        self.sift_up(slot);
    }

    fn id(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }

    /// Swap two heap slots and keep the coordinate map in sync
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        let ca = self.id(self.heap[a].coord);
        let cb = self.id(self.heap[b].coord);
        self.slots[ca] = Some(a);
        self.slots[cb] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].key >= self.heap[parent].key {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.heap.len() && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_entries(slot, smallest);
            slot = smallest;
        }
    }
}
