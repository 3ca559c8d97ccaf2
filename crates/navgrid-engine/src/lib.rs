//! Navigation context orchestrating navgrid stores, projections and
//! searches.
//!
//! A [`NavContext`] is created per loaded level from a validated
//! [`NavConfig`]. It owns the tile store and the projection strategy chosen
//! at initialisation, and exposes the complete navigation API: dynamic
//! updates, path queries, world/grid conversion and random sampling.
//!
//! Consumers that keep paths across frames can use a [`PathCache`], which
//! honours the store's change records, and [`plan_batch`] spreads many
//! independent queries over worker threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod cache;
pub mod config;
pub mod context;
pub mod error;

pub use batch::{plan_batch, PathRequest};
pub use cache::{CacheStats, PathCache, PathKey};
pub use config::{ConfigError, NavConfig};
pub use context::NavContext;
pub use error::NavError;
