//! The `CoordinateTransform` trait and strategy selection.

use crate::{HexAxial, Isometric, Orthogonal};
use glam::Vec2;
use navgrid_core::{GridConfig, GridCoord, Projection};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;

/// Neighbour list. Inline capacity covers the 6-connected hex case.
pub type Neighbours = SmallVec<[GridCoord; 6]>;

/// Projection-specific geometry and adjacency.
///
/// One implementation exists per [`Projection`]. All projection-dependent
/// logic lives behind this trait so the search and the sampler never branch
/// on the projection themselves.
///
/// # Contract
///
/// - `grid_to_world` returns the tile centre, and
///   `world_to_grid(grid_to_world(c)) == c` for every cell.
/// - `neighbours` is pure topology: no bounds or navigability filtering.
/// - `heuristic` never exceeds the number of unit-cost steps between two
///   cells under `neighbours`, and changes by at most one per step.
///
/// # Thread Safety
///
/// `Sync` is required so that concurrent searches can share one transform
/// through `&NavContext`.
pub trait CoordinateTransform: Any + Send + Sync + fmt::Debug + 'static {
    /// The projection this strategy implements.
    fn projection(&self) -> Projection;

    /// The cell containing a world-space point.
    fn world_to_grid(&self, world: Vec2) -> GridCoord;

    /// World-space centre of a cell.
    fn grid_to_world(&self, cell: GridCoord) -> Vec2;

    /// Cells adjacent to `cell`, in a fixed strategy-defined order.
    fn neighbours(&self, cell: GridCoord) -> Neighbours;

    /// Admissible estimate of the unit-cost step count from `a` to `b`.
    fn heuristic(&self, a: GridCoord, b: GridCoord) -> f32;
}

impl dyn CoordinateTransform {
    /// Attempt to downcast a trait object to a concrete strategy.
    pub fn downcast_ref<T: CoordinateTransform>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Build the strategy matching `config.projection`.
///
/// Called once when a grid is initialised. `config` is expected to have
/// passed [`GridConfig::validate`]; tile sizes are used as-is.
pub fn transform_for(config: &GridConfig) -> Box<dyn CoordinateTransform> {
    match config.projection {
        Projection::Orthogonal => Box::new(Orthogonal::new(config.tile_width, config.tile_height)),
        Projection::Isometric => Box::new(Isometric::new(config.tile_width, config.tile_height)),
        Projection::HexAxial => Box::new(HexAxial::new(config.tile_width, config.tile_height)),
    }
}
