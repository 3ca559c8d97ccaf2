//! Pointy-top hexagons in axial coordinates.

use crate::transform::{CoordinateTransform, Neighbours};
use glam::Vec2;
use navgrid_core::{GridCoord, Projection};

/// Pointy-top hex offsets in axial `(dq, dr)` order: E, NE, NW, W, SW, SE.
const HEX_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // E
    (1, -1), // NE
    (0, -1), // NW
    (-1, 0), // W
    (-1, 1), // SW
    (0, 1),  // SE
];

/// Pointy-top hexagonal tiles addressed by axial `(q, r)` = `(x, y)`.
///
/// `tile_width` is the flat-to-flat width of a hex (the horizontal spacing
/// between centres in a row) and `tile_height` is its point-to-point
/// height; rows are spaced `0.75·tile_height` apart and every row is
/// shifted half a hex to the right of the previous one. Cell `(0, 0)` has
/// its centre at `(tile_width/2, tile_height/2)`.
///
/// Distance is axial (cube) distance `(|dq| + |dq + dr| + |dr|) / 2`,
/// which equals the 6-connected step count.
///
/// # Examples
///
/// ```
/// use navgrid_core::GridCoord;
/// use navgrid_space::{CoordinateTransform, HexAxial};
///
/// let hex = HexAxial::new(2.0, 2.0);
/// assert_eq!(hex.neighbours(GridCoord::new(2, 2)).len(), 6);
/// assert_eq!(hex.heuristic(GridCoord::new(0, 0), GridCoord::new(2, -1)), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexAxial {
    tile_width: f32,
    tile_height: f32,
}

impl HexAxial {
    /// Create the strategy for hexes of the given world size.
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Axial distance between two cells.
    pub fn axial_distance(a: GridCoord, b: GridCoord) -> u32 {
        let dq = i64::from(a.x) - i64::from(b.x);
        let dr = i64::from(a.y) - i64::from(b.y);
        ((dq.unsigned_abs() + (dq + dr).unsigned_abs() + dr.unsigned_abs()) / 2) as u32
    }

    /// Round fractional axial coordinates to the containing hex.
    ///
    /// Rounds in cube space (`s = -q - r`) and fixes up the component with
    /// the largest rounding error so that `q + r + s == 0` holds.
    fn axial_round(q: f32, r: f32) -> GridCoord {
        let s = -q - r;
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        GridCoord::new(rq as i32, rr as i32)
    }
}

impl CoordinateTransform for HexAxial {
    fn projection(&self) -> Projection {
        Projection::HexAxial
    }

    fn world_to_grid(&self, world: Vec2) -> GridCoord {
        let r = (world.y - self.tile_height * 0.5) / (self.tile_height * 0.75);
        let q = (world.x - self.tile_width * 0.5) / self.tile_width - r * 0.5;
        Self::axial_round(q, r)
    }

    fn grid_to_world(&self, cell: GridCoord) -> Vec2 {
        let q = cell.x as f32;
        let r = cell.y as f32;
        Vec2::new(
            self.tile_width * (q + r * 0.5) + self.tile_width * 0.5,
            self.tile_height * 0.75 * r + self.tile_height * 0.5,
        )
    }

    fn neighbours(&self, cell: GridCoord) -> Neighbours {
        HEX_OFFSETS
            .iter()
            .map(|&(dq, dr)| cell.offset(dq, dr))
            .collect()
    }

    fn heuristic(&self, a: GridCoord, b: GridCoord) -> f32 {
        Self::axial_distance(a, b) as f32
    }
}
