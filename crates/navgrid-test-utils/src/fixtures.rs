//! Map fixtures.
//!
//! ASCII legend, one character per tile, rows top (`y = 0`) to bottom:
//!
//! | char | tile |
//! |---|---|
//! | `.` | open, cost 1 |
//! | `,` | road, cost 0.5 |
//! | `1`..`9` | open, that cost |
//! | `#` | wall (blocked) |
//! | `~` | deep water (not navigable) |
//! | `S` | open, cost 1, start marker |
//! | `G` | open, cost 1, goal marker |
//!
//! Whitespace around rows is ignored, so maps can be indented in tests.

use navgrid_core::{
    GridConfig, GridCoord, LayerId, Projection, Terrain, TileFlags, TileProperties,
};
use navgrid_space::{transform_for, CoordinateTransform};
use navgrid_store::TileStore;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A loaded single-layer map with its projection strategy.
pub struct TestMap {
    pub store: TileStore,
    pub transform: Box<dyn CoordinateTransform>,
    pub start: Option<GridCoord>,
    pub goal: Option<GridCoord>,
}

impl TestMap {
    pub fn config(&self) -> GridConfig {
        *self.store.config().expect("test map is initialised")
    }

    pub fn start(&self) -> GridCoord {
        self.start.expect("map has an S marker")
    }

    pub fn goal(&self) -> GridCoord {
        self.goal.expect("map has a G marker")
    }

    pub fn transform(&self) -> &dyn CoordinateTransform {
        self.transform.as_ref()
    }
}

fn tile_for_char(ch: char) -> TileProperties {
    match ch {
        '.' | 'S' | 'G' => TileProperties::open(1.0),
        ',' => TileProperties::open(0.5).with_terrain(Terrain::Road),
        '#' => TileProperties::wall(),
        '~' => TileProperties::default().with_terrain(Terrain::DeepWater),
        '1'..='9' => TileProperties::open(ch.to_digit(10).unwrap_or(1) as f32),
        other => panic!("unknown map character {other:?}"),
    }
}

/// Build a single-layer map from ASCII rows.
///
/// # Panics
///
/// On ragged rows, an empty map, or an unknown character.
pub fn parse_map(projection: Projection, map: &str) -> TestMap {
    let rows: Vec<&str> = map
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "empty map");
    let width = rows[0].chars().count();
    assert!(
        rows.iter().all(|r| r.chars().count() == width),
        "ragged map rows"
    );

    let config = GridConfig::new(width as u32, rows.len() as u32, projection);
    let mut store = TileStore::new(config).expect("valid map dimensions");
    let mut tiles = Vec::with_capacity(width * rows.len());
    let mut start = None;
    let mut goal = None;
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let cell = GridCoord::new(x as i32, y as i32);
            match ch {
                'S' => start = Some(cell),
                'G' => goal = Some(cell),
                _ => {}
            }
            tiles.push(tile_for_char(ch));
        }
    }
    store
        .load_layer(LayerId::GROUND, &tiles)
        .expect("tile count matches dimensions");
    TestMap {
        store,
        transform: transform_for(&config),
        start,
        goal,
    }
}

/// An all-open single-layer grid of unit cost.
pub fn open_grid(width: u32, height: u32, projection: Projection) -> TestMap {
    let config = GridConfig::new(width, height, projection);
    let mut store = TileStore::new(config).expect("valid grid dimensions");
    store
        .fill_layer(LayerId::GROUND, TileProperties::open(1.0))
        .expect("ground layer exists");
    TestMap {
        store,
        transform: transform_for(&config),
        start: None,
        goal: None,
    }
}

/// 5×5 orthogonal, everything open, start `(0,0)`, goal `(4,4)`.
pub fn open_5x5() -> TestMap {
    parse_map(
        Projection::Orthogonal,
        "
        S....
        .....
        .....
        .....
        ....G
        ",
    )
}

/// 5×5 orthogonal with the central 3×3 block not navigable.
pub fn central_block_5x5() -> TestMap {
    parse_map(
        Projection::Orthogonal,
        "
        S....
        .~~~.
        .~~~.
        .~~~.
        ....G
        ",
    )
}

/// 5×5 orthogonal where `(3,3)` is the only way into the goal corner:
/// walls at `(4,3)` and `(2,4)` seal off every other approach.
pub fn gated_5x5() -> TestMap {
    parse_map(
        Projection::Orthogonal,
        "
        S....
        .....
        .....
        ....#
        ..#.G
        ",
    )
}

/// A seeded random map: every tile is a wall with probability
/// `wall_ratio`, otherwise open with a cost drawn from `{0.5, 1, 2, 3}`.
/// Some open tiles carry random one-way flags.
pub fn random_map(
    width: u32,
    height: u32,
    projection: Projection,
    wall_ratio: f64,
    seed: u64,
) -> TestMap {
    let config = GridConfig::new(width, height, projection);
    let mut store = TileStore::new(config).expect("valid grid dimensions");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let costs = [0.5f32, 1.0, 2.0, 3.0];
    let tiles: Vec<TileProperties> = (0..config.tile_count())
        .map(|_| {
            if rng.gen_bool(wall_ratio) {
                TileProperties::wall()
            } else {
                let cost = costs[rng.gen_range(0..costs.len())];
                let flags = if rng.gen_bool(0.1) {
                    TileFlags(1 << rng.gen_range(0..4))
                } else {
                    TileFlags::NONE
                };
                TileProperties::open(cost).with_flags(flags)
            }
        })
        .collect();
    store
        .load_layer(LayerId::GROUND, &tiles)
        .expect("tile count matches dimensions");
    TestMap {
        store,
        transform: transform_for(&config),
        start: None,
        goal: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_markers_and_costs() {
        let m = parse_map(
            Projection::HexAxial,
            "
            S,3
            #~G
            ",
        );
        assert_eq!(m.start(), GridCoord::new(0, 0));
        assert_eq!(m.goal(), GridCoord::new(2, 1));
        assert_eq!(m.store.traversal_cost(GridCoord::new(1, 0), LayerId::GROUND), 0.5);
        assert_eq!(m.store.traversal_cost(GridCoord::new(2, 0), LayerId::GROUND), 3.0);
        assert!(!m.store.is_navigable(GridCoord::new(0, 1), LayerId::GROUND));
        assert!(!m.store.is_navigable(GridCoord::new(1, 1), LayerId::GROUND));
        assert_eq!(m.config().projection, Projection::HexAxial);
    }

    #[test]
    fn canned_scenarios_have_expected_shape() {
        assert_eq!(open_5x5().store.traversable_count(LayerId::GROUND), 25);
        assert_eq!(central_block_5x5().store.traversable_count(LayerId::GROUND), 16);
        assert_eq!(gated_5x5().store.traversable_count(LayerId::GROUND), 23);
    }

    #[test]
    fn random_map_is_reproducible() {
        let a = random_map(12, 9, Projection::Isometric, 0.3, 5);
        let b = random_map(12, 9, Projection::Isometric, 0.3, 5);
        assert_eq!(
            a.store.layer_tiles(LayerId::GROUND),
            b.store.layer_tiles(LayerId::GROUND)
        );
    }
}
