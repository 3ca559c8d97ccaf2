//! Per-search counters.

/// Work done by one `find_path` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded.
    pub iterations: usize,
    /// Nodes allocated in the arena.
    pub nodes_allocated: usize,
    /// Open-set pushes, including re-pushes of improved nodes.
    pub pushes: usize,
    /// Largest open-set size reached.
    pub peak_open: usize,
}

impl SearchStats {
    /// Accumulate another search's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.iterations += other.iterations;
        self.nodes_allocated += other.nodes_allocated;
        self.pushes += other.pushes;
        self.peak_open = self.peak_open.max(other.peak_open);
    }
}
