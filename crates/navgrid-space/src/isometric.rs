//! Diamond (isometric) tiles with 4-connected neighbourhood.

use crate::transform::{CoordinateTransform, Neighbours};
use glam::Vec2;
use navgrid_core::{GridCoord, Projection};

/// Grid-space offsets: `(x+1, y)` SE, `(x-1, y)` NW, `(x, y+1)` SW,
/// `(x, y-1)` NE on screen.
const ISO_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Isometric diamond tiles.
///
/// The grid is rotated 45° on screen: cell `(x, y)` has its top vertex at
/// `((x − y)·tw/2, (x + y)·th/2)` and its centre half a tile height below.
/// Moves follow the diamond edges, so adjacency in grid space is the same
/// 4-neighbourhood as [`Orthogonal`](crate::Orthogonal).
///
/// The heuristic is Chebyshev distance, which never exceeds the 4-connected
/// step count and therefore stays admissible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Isometric {
    half_width: f32,
    half_height: f32,
}

impl Isometric {
    /// Create the strategy for diamonds of the given world size.
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            half_width: tile_width * 0.5,
            half_height: tile_height * 0.5,
        }
    }

    /// Chebyshev distance between two cells.
    pub fn chebyshev(a: GridCoord, b: GridCoord) -> u32 {
        a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
    }
}

impl CoordinateTransform for Isometric {
    fn projection(&self) -> Projection {
        Projection::Isometric
    }

    fn world_to_grid(&self, world: Vec2) -> GridCoord {
        let a = world.x / self.half_width;
        let b = world.y / self.half_height;
        GridCoord::new(
            ((a + b) * 0.5).floor() as i32,
            ((b - a) * 0.5).floor() as i32,
        )
    }

    fn grid_to_world(&self, cell: GridCoord) -> Vec2 {
        let x = cell.x as f32;
        let y = cell.y as f32;
        Vec2::new((x - y) * self.half_width, (x + y + 1.0) * self.half_height)
    }

    fn neighbours(&self, cell: GridCoord) -> Neighbours {
        ISO_OFFSETS
            .iter()
            .map(|&(dx, dy)| cell.offset(dx, dy))
            .collect()
    }

    fn heuristic(&self, a: GridCoord, b: GridCoord) -> f32 {
        Self::chebyshev(a, b) as f32
    }
}
