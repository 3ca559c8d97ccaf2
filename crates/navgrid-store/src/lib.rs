//! Layered tile storage for navgrid.
//!
//! [`TileStore`] owns one `width × height` array of
//! [`TileProperties`](navgrid_core::TileProperties) per layer. Reads and
//! single-tile writes are bounds-checked without ever failing: reads outside
//! the grid return a blocked sentinel and writes outside it are ignored.
//!
//! Mutation happens through the dynamic-update methods in [`update`]. Each
//! effective write advances the store [`Generation`](navgrid_core::Generation)
//! and is recorded in the [`ChangeLog`], which path caches drain to decide
//! which of their entries went stale.
//!
//! # Concurrency
//!
//! The store has no interior mutability. Any number of searches may share a
//! `&TileStore` across threads; updates require `&mut TileStore` and are
//! therefore serialised against all readers by the borrow checker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod changes;
pub mod store;
pub mod update;

pub use changes::{ChangeBatch, ChangeLog, TileChange};
pub use store::TileStore;
