//! Min-ordered worklist of search states.

use super::state::CostMatrix;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry: a state plus its insertion sequence number for tie-breaking.
#[derive(Debug, Clone)]
struct Entry {
    node: CostMatrix,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert the bound comparison so the
        // lowest bound pops first. Ties pop the most recent insertion,
        // which approximates depth-first behavior and keeps iteration
        // order fully deterministic (total_cmp is a total order).
        other
            .node
            .bound()
            .total_cmp(&self.node.bound())
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Binary-heap frontier of partial-tour states, ordered by lower bound
/// ascending.
///
/// States are never revisited in place — every expansion produces a brand
/// new, independently owned state — so no decrease-key operation exists.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a state. `O(log n)`.
    pub fn push(&mut self, node: CostMatrix) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { node, seq });
    }

    /// Removes and returns the lowest-bound state, or `None` if empty.
    /// `O(log n)`.
    pub fn pop(&mut self) -> Option<CostMatrix> {
        self.heap.pop().map(|e| e.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Bounds of all queued states, in no particular order. Used for
    /// end-of-run prune accounting.
    pub fn bounds(&self) -> impl Iterator<Item = f64> + '_ {
        self.heap.iter().map(|e| e.node.bound())
    }
}
