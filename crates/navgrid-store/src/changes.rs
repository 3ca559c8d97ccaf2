//! Change records emitted by dynamic updates.
//!
//! The store does not know which outstanding paths a write affects. It only
//! publishes what changed; consumers holding cached paths drain the log and
//! drop whatever crosses a changed tile.

use navgrid_core::{Generation, GridCoord, LayerId};
use std::collections::VecDeque;

/// One invalidation signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileChange {
    /// A single tile was rewritten.
    Tile {
        /// Cell that changed.
        coord: GridCoord,
        /// Layer that changed.
        layer: LayerId,
        /// Store generation after the write.
        generation: Generation,
    },
    /// Every tile of a layer was rewritten (bulk load or fill).
    Layer {
        /// Layer that changed.
        layer: LayerId,
        /// Store generation after the write.
        generation: Generation,
    },
    /// Everything must be considered stale: the store was reinitialised or
    /// the log overflowed.
    All {
        /// Store generation at the time of the reset.
        generation: Generation,
    },
}

impl TileChange {
    /// Generation stamped on the record.
    pub fn generation(&self) -> Generation {
        match *self {
            Self::Tile { generation, .. }
            | Self::Layer { generation, .. }
            | Self::All { generation } => generation,
        }
    }

    /// Whether this record invalidates a path that crosses `coord` on `layer`.
    pub fn affects(&self, coord: GridCoord, layer: LayerId) -> bool {
        match *self {
            Self::Tile {
                coord: c, layer: l, ..
            } => c == coord && l == layer,
            Self::Layer { layer: l, .. } => l == layer,
            Self::All { .. } => true,
        }
    }
}

/// Records drained from a [`ChangeLog`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    /// Changes in the order they were made.
    pub changes: Vec<TileChange>,
}

impl ChangeBatch {
    /// No changes since the last drain.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Whether the batch contains a blanket [`TileChange::All`].
    pub fn invalidates_everything(&self) -> bool {
        self.changes
            .iter()
            .any(|c| matches!(c, TileChange::All { .. }))
    }
}

/// Bounded queue of pending [`TileChange`]s.
///
/// When more than `capacity` records accumulate between drains, the log
/// collapses into a single [`TileChange::All`] so memory stays bounded.
#[derive(Clone, Debug)]
pub struct ChangeLog {
    pending: VecDeque<TileChange>,
    capacity: usize,
    collapsed: bool,
}

impl ChangeLog {
    /// Default number of records retained between drains.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create a log that holds at most `capacity` records (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            capacity: capacity.max(1),
            collapsed: false,
        }
    }

    /// Append a record, collapsing the log if it is full.
    pub fn record(&mut self, change: TileChange) {
        if self.collapsed {
            if let Some(TileChange::All { generation }) = self.pending.back_mut() {
                *generation = change.generation();
            }
            return;
        }
        if matches!(change, TileChange::All { .. }) || self.pending.len() >= self.capacity {
            self.pending.clear();
            self.pending.push_back(TileChange::All {
                generation: change.generation(),
            });
            self.collapsed = true;
            return;
        }
        self.pending.push_back(change);
    }

    /// Take every pending record.
    pub fn drain(&mut self) -> ChangeBatch {
        self.collapsed = false;
        ChangeBatch {
            changes: self.pending.drain(..).collect(),
        }
    }

    /// Number of pending records.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// No pending records.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Maximum records held before collapsing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. Pending records are kept.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
