//! Core types for the navgrid navigation subsystem.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other navgrid crate: grid coordinates and
//! layer identifiers, the immutable [`GridConfig`], per-tile
//! [`TileProperties`], the ingestion-time [`TerrainCosts`] table, and the
//! error types returned by the store and the path search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod terrain;
pub mod tile;

pub use error::{PathError, StoreError, UnreachableReason};
pub use grid::{GridConfig, Projection};
pub use id::{Generation, GridCoord, LayerId};
pub use terrain::{Terrain, TerrainCost, TerrainCosts};
pub use tile::{TileFlags, TileProperties};
