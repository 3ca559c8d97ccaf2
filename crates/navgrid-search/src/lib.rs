//! Path search and sampling for navgrid.
//!
//! [`PathFinder`] runs A* over one layer of a
//! [`TileStore`](navgrid_store::TileStore), expanding neighbours through the
//! grid's [`CoordinateTransform`](navgrid_space::CoordinateTransform).
//! All search state (the [`NodeArena`] and [`OpenSet`]) is local to one call
//! and released when it returns, on success and failure alike.
//!
//! [`RandomNavigableSampler`] draws uniformly distributed world points on
//! traversable tiles, for wander and spawn selection.
//!
//! Both types only read the store. Searches on different threads may share
//! one store freely; updates must happen while no search is running, which
//! the borrow checker enforces.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod filter;
pub mod node_arena;
pub mod open_set;
pub mod sampler;
pub mod stats;

pub use astar::{Path, PathFinder, DEFAULT_MAX_ITERATIONS};
pub use filter::{DirectionalFilter, NeighbourFilter};
pub use node_arena::{NodeArena, NodeIndex, PathNode};
pub use open_set::OpenSet;
pub use sampler::RandomNavigableSampler;
pub use stats::SearchStats;
