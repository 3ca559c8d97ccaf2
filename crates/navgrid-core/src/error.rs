//! Error types for the navigation subsystem.
//!
//! Organised by subsystem: [`StoreError`] for tile-store construction and
//! bulk loading, [`PathError`] for path queries. None of these are fatal;
//! hot-path accessors (tile reads and single-tile writes) never return them
//! and instead fall back to sentinels or no-ops.

use crate::id::{GridCoord, LayerId};
use thiserror::Error;

/// Errors from tile-store initialisation and bulk loading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Width, height, layer count or tile size is out of range. The store
    /// is left uninitialised.
    #[error("invalid dimensions: {reason}")]
    InvalidDimensions {
        /// What was out of range.
        reason: String,
    },
    /// A coordinate or layer outside the configured grid was addressed by
    /// an operation that reports rather than ignores it.
    #[error("position {coord} on layer {layer} is outside the grid")]
    InvalidPosition {
        /// The offending coordinate.
        coord: GridCoord,
        /// The offending layer.
        layer: LayerId,
    },
    /// Tile storage could not be reserved.
    #[error("failed to allocate storage for {tiles} tiles")]
    AllocationFailed {
        /// Number of tiles requested.
        tiles: usize,
    },
}

/// Why a path query could not reach its goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnreachableReason {
    /// The start tile is not traversable on the requested layer.
    StartBlocked,
    /// The goal tile is not traversable on the requested layer.
    GoalBlocked,
    /// The open set emptied before the goal was reached.
    Disconnected,
}

impl std::fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartBlocked => write!(f, "start tile is not traversable"),
            Self::GoalBlocked => write!(f, "goal tile is not traversable"),
            Self::Disconnected => write!(f, "no traversable route connects start and goal"),
        }
    }
}

/// Errors from a path query.
///
/// Callers treat every variant as "no path, try later or elsewhere"; the
/// distinction exists for diagnostics and logging.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// Start or goal lies outside the grid, or the layer does not exist.
    #[error("position {coord} on layer {layer} is outside the grid")]
    InvalidPosition {
        /// The offending coordinate.
        coord: GridCoord,
        /// The requested layer.
        layer: LayerId,
    },
    /// Start or goal is blocked, or no route exists.
    #[error("goal unreachable: {reason}")]
    Unreachable {
        /// Which precondition or search outcome failed.
        reason: UnreachableReason,
    },
    /// The iteration cap was reached before the search resolved.
    #[error("search exhausted after {iterations} iterations")]
    SearchExhausted {
        /// Nodes expanded before giving up.
        iterations: usize,
    },
}

impl PathError {
    /// `true` when the failure came from the iteration cap rather than from
    /// the map itself. Such a query may succeed with a larger budget.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::SearchExhausted { .. })
    }
}
