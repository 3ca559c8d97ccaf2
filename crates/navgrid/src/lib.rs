//! Navgrid: tile-grid navigation for games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! navgrid sub-crates. For most users, adding `navgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use navgrid::prelude::*;
//!
//! // A 5×5 orthogonal level with a wall in the middle.
//! let grid = GridConfig::new(5, 5, Projection::Orthogonal).with_tile_size(32.0, 32.0);
//! let mut nav = NavContext::new(NavConfig::new(grid)).unwrap();
//! nav.fill_layer(LayerId::GROUND, TileProperties::open(1.0)).unwrap();
//! nav.set_tile_properties(GridCoord::new(2, 2), LayerId::GROUND, TileProperties::wall());
//!
//! let path = nav
//!     .find_path(GridCoord::new(0, 2), GridCoord::new(4, 2), LayerId::GROUND)
//!     .unwrap();
//! assert!(!path.crosses(GridCoord::new(2, 2)));
//! assert_eq!(path.cost, 6.0);
//!
//! // Waypoints are world-space tile centres.
//! assert_eq!(path.waypoints[0], Vec2::new(16.0, 80.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `navgrid-core` | Coordinates, tiles, terrain, grid configuration, errors |
//! | [`space`] | `navgrid-space` | Projection strategies and neighbourhoods |
//! | [`store`] | `navgrid-store` | Tile storage, generations and change records |
//! | [`search`] | `navgrid-search` | A* search, neighbour filters, random sampling |
//! | [`engine`] | `navgrid-engine` | Navigation context, path cache, batch planning |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`navgrid-core`).
///
/// Contains [`types::GridCoord`], [`types::TileProperties`], the terrain
/// cost table and the error enums shared by every crate.
pub use navgrid_core as types;

/// Projection strategies (`navgrid-space`).
///
/// Provides the [`space::CoordinateTransform`] trait and its
/// implementations [`space::Orthogonal`], [`space::Isometric`] and
/// [`space::HexAxial`].
pub use navgrid_space as space;

/// Tile storage (`navgrid-store`).
///
/// [`store::TileStore`] holds per-layer tile records and records every
/// write as a [`store::TileChange`].
pub use navgrid_store as store;

/// Path search and sampling (`navgrid-search`).
///
/// [`search::PathFinder`] runs A* over a store;
/// [`search::RandomNavigableSampler`] picks walkable points in a disk.
pub use navgrid_search as search;

/// Navigation context (`navgrid-engine`).
///
/// [`engine::NavContext`] bundles a store with its projection;
/// [`engine::PathCache`] and [`engine::plan_batch`] serve many agents.
pub use navgrid_engine as engine;

/// Common imports for typical navgrid usage.
///
/// ```rust
/// use navgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use navgrid_core::{
        GridConfig, GridCoord, LayerId, Projection, Terrain, TerrainCost, TerrainCosts,
        TileFlags, TileProperties,
    };

    // Errors
    pub use navgrid_core::{PathError, StoreError, UnreachableReason};

    // Space
    pub use navgrid_space::{CoordinateTransform, Vec2};

    // Store
    pub use navgrid_store::{ChangeBatch, TileChange};

    // Search
    pub use navgrid_search::{NeighbourFilter, Path};

    // Engine
    pub use navgrid_engine::{NavConfig, NavContext, NavError, PathCache, PathRequest};
}
