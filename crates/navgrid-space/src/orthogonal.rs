//! Square tiles with 4-connected neighbourhood (N/S/E/W).

use crate::transform::{CoordinateTransform, Neighbours};
use glam::Vec2;
use navgrid_core::{GridCoord, Projection};

/// Cardinal offsets in `(dx, dy)` order: N, S, E, W.
const ORTHO_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

/// Axis-aligned square tiles.
///
/// Cell `(x, y)` covers `[x·tw, (x+1)·tw) × [y·th, (y+1)·th)` in world
/// space. Distance is Manhattan (L1), which equals the step count of the
/// 4-connected neighbourhood on an open grid.
///
/// # Examples
///
/// ```
/// use navgrid_core::GridCoord;
/// use navgrid_space::{CoordinateTransform, Orthogonal, Vec2};
///
/// let t = Orthogonal::new(32.0, 32.0);
/// assert_eq!(t.world_to_grid(Vec2::new(40.0, 70.0)), GridCoord::new(1, 2));
/// assert_eq!(t.grid_to_world(GridCoord::new(1, 2)), Vec2::new(48.0, 80.0));
/// assert_eq!(t.neighbours(GridCoord::new(0, 0)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthogonal {
    tile_width: f32,
    tile_height: f32,
}

impl Orthogonal {
    /// Create the strategy for tiles of the given world size.
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(a: GridCoord, b: GridCoord) -> u32 {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }
}

impl CoordinateTransform for Orthogonal {
    fn projection(&self) -> Projection {
        Projection::Orthogonal
    }

    fn world_to_grid(&self, world: Vec2) -> GridCoord {
        GridCoord::new(
            (world.x / self.tile_width).floor() as i32,
            (world.y / self.tile_height).floor() as i32,
        )
    }

    fn grid_to_world(&self, cell: GridCoord) -> Vec2 {
        Vec2::new(
            (cell.x as f32 + 0.5) * self.tile_width,
            (cell.y as f32 + 0.5) * self.tile_height,
        )
    }

    fn neighbours(&self, cell: GridCoord) -> Neighbours {
        ORTHO_OFFSETS
            .iter()
            .map(|&(dx, dy)| cell.offset(dx, dy))
            .collect()
    }

    fn heuristic(&self, a: GridCoord, b: GridCoord) -> f32 {
        Self::manhattan(a, b) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_are_cardinal() {
        let t = Orthogonal::new(1.0, 1.0);
        let n = t.neighbours(c(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(2, 1))); // north
        assert!(n.contains(&c(2, 3))); // south
        assert!(n.contains(&c(3, 2))); // east
        assert!(n.contains(&c(1, 2))); // west
    }

    #[test]
    fn neighbours_are_not_bounds_filtered() {
        let t = Orthogonal::new(1.0, 1.0);
        let n = t.neighbours(c(0, 0));
        assert!(n.contains(&c(-1, 0)));
        assert!(n.contains(&c(0, -1)));
    }

    // ── Geometry tests ──────────────────────────────────────────

    #[test]
    fn centre_of_non_square_tiles() {
        let t = Orthogonal::new(32.0, 16.0);
        assert_eq!(t.grid_to_world(c(0, 0)), Vec2::new(16.0, 8.0));
        assert_eq!(t.grid_to_world(c(3, 1)), Vec2::new(112.0, 24.0));
    }

    #[test]
    fn tile_edges_belong_to_the_higher_cell() {
        let t = Orthogonal::new(10.0, 10.0);
        assert_eq!(t.world_to_grid(Vec2::new(10.0, 0.0)), c(1, 0));
        assert_eq!(t.world_to_grid(Vec2::new(9.999, 0.0)), c(0, 0));
        assert_eq!(t.world_to_grid(Vec2::new(-0.1, -0.1)), c(-1, -1));
    }

    #[test]
    fn heuristic_is_manhattan() {
        let t = Orthogonal::new(1.0, 1.0);
        assert_eq!(t.heuristic(c(0, 0), c(4, 4)), 8.0);
        assert_eq!(t.heuristic(c(2, 3), c(5, 7)), 7.0);
        assert_eq!(t.heuristic(c(5, 7), c(2, 3)), 7.0);
    }

    // ── Compliance suite ────────────────────────────────────────

    #[test]
    fn compliance() {
        compliance::run_full_compliance(&Orthogonal::new(32.0, 24.0), 7, 6);
    }

    #[test]
    fn heuristic_is_exact_on_open_grid() {
        compliance::assert_heuristic_exact(&Orthogonal::new(1.0, 1.0), 6, 6);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn world_point_lands_in_its_tile(
            wx in -500.0f32..500.0,
            wy in -500.0f32..500.0,
        ) {
            let t = Orthogonal::new(16.0, 12.0);
            let p = Vec2::new(wx, wy);
            let cell = t.world_to_grid(p);
            let centre = t.grid_to_world(cell);
            prop_assert!((p.x - centre.x).abs() <= 8.0 + 1e-3);
            prop_assert!((p.y - centre.y).abs() <= 6.0 + 1e-3);
            prop_assert_eq!(t.world_to_grid(centre), cell);
        }
    }
}
