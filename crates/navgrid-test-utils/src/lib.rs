//! Test utilities for navgrid development.
//!
//! Provides ASCII map fixtures ([`parse_map`] and the canned 5×5
//! scenarios), seeded random maps, and a reference Dijkstra solver
//! ([`reference_cost`]) that search results are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{
    central_block_5x5, gated_5x5, open_5x5, open_grid, parse_map, random_map, TestMap,
};
pub use reference::{assert_path_valid, path_cost, reference_cost};
