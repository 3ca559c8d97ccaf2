//! Neighbour filtering hooks.
//!
//! Without a filter the search ignores `custom_flags`. Installing one lets
//! callers veto individual moves, e.g. one-way tiles.

use navgrid_core::{GridCoord, TileProperties};

/// Vetoes moves during neighbour expansion.
///
/// Called only for in-bounds, traversable, not-yet-closed neighbours.
pub trait NeighbourFilter: Send + Sync {
    /// Whether the move `from → to` is allowed.
    fn allows(
        &self,
        from: GridCoord,
        from_tile: &TileProperties,
        to: GridCoord,
        to_tile: &TileProperties,
    ) -> bool;
}

impl<F> NeighbourFilter for F
where
    F: Fn(GridCoord, &TileProperties, GridCoord, &TileProperties) -> bool + Send + Sync,
{
    fn allows(
        &self,
        from: GridCoord,
        from_tile: &TileProperties,
        to: GridCoord,
        to_tile: &TileProperties,
    ) -> bool {
        self(from, from_tile, to, to_tile)
    }
}

/// Enforces the `NO_ENTRY_*` bits of [`TileFlags`](navgrid_core::TileFlags)
/// on the destination tile.
///
/// The move delta is taken in grid space, so on hex grids a NE step
/// `(+1, -1)` is refused by either `NO_ENTRY_POS_X` or `NO_ENTRY_NEG_Y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionalFilter;

impl NeighbourFilter for DirectionalFilter {
    fn allows(
        &self,
        from: GridCoord,
        _from_tile: &TileProperties,
        to: GridCoord,
        to_tile: &TileProperties,
    ) -> bool {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        to_tile
            .custom_flags
            .allows_entry(dx.signum() as i32, dy.signum() as i32)
    }
}
