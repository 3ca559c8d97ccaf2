//! Min-priority open set for A*.
//!
//! Entries are never updated in place. Improving a node pushes a fresh
//! entry; stale ones are recognised on pop by comparing the `g` they were
//! pushed with against the node's current `g`.

use crate::node_arena::NodeIndex;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: f32,
    g: f32,
    seq: u64,
    node: NodeIndex,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // `BinaryHeap` is a max-heap: invert so the lowest `f` wins, then the
    // earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Entry returned by [`OpenSet::pop`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Popped {
    /// The node.
    pub node: NodeIndex,
    /// `f` at push time.
    pub f: f32,
    /// `g` at push time.
    pub g: f32,
}

/// Priority queue ordered by `f`, ties broken by insertion order.
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
    pushes: usize,
    peak: usize,
}

impl OpenSet {
    /// An empty open set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` with priority `f`. `g` is kept to detect stale entries.
    pub fn push(&mut self, node: NodeIndex, f: f32, g: f32) {
        self.heap.push(OpenEntry {
            f,
            g,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        self.pushes += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    /// Remove the entry with the lowest `f`.
    pub fn pop(&mut self) -> Option<Popped> {
        self.heap.pop().map(|e| Popped {
            node: e.node,
            f: e.f,
            g: e.g,
        })
    }

    /// Entries currently queued, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Nothing queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total pushes since creation.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Largest size the queue reached.
    pub fn peak_len(&self) -> usize {
        self.peak
    }
}
