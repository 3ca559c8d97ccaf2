//! Benchmark profiles for the navgrid navigation library.
//!
//! - [`level_profile`]: seeded terrain level of any size and projection
//! - [`reference_level`]: 128x128 orthogonal level (16K tiles)
//! - [`stress_level`]: 512x512 orthogonal level (~262K tiles)
//! - [`request_mix`]: deterministic path requests between walkable tiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use navgrid_core::{GridConfig, GridCoord, LayerId, Projection, Terrain, TerrainCosts};
use navgrid_engine::{NavConfig, NavContext, NavError, PathRequest};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fraction of interior tiles turned into walls.
pub const WALL_RATIO: f64 = 0.25;

/// Build a `size`x`size` level with seeded terrain.
///
/// Row 0 and the last column are kept walkable, so the top-left and
/// bottom-right corners are always connected in every projection.
pub fn level_profile(size: u32, projection: Projection, seed: u64) -> Result<NavContext, NavError> {
    let (tile_w, tile_h) = match projection {
        Projection::Isometric => (64.0, 32.0),
        _ => (32.0, 32.0),
    };
    let grid = GridConfig::new(size, size, projection).with_tile_size(tile_w, tile_h);
    let mut ctx = NavContext::new(NavConfig::new(grid).with_seed(seed))?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ground = [Terrain::Grass, Terrain::Grass, Terrain::Road, Terrain::Mud];
    let last = size.saturating_sub(1);
    let terrain: Vec<Terrain> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            let corridor = y == 0 || x == last;
            if !corridor && rng.gen_bool(WALL_RATIO) {
                Terrain::Wall
            } else {
                ground[rng.gen_range(0..ground.len())]
            }
        })
        .collect();
    ctx.load_terrain(LayerId::GROUND, &terrain, &TerrainCosts::default())?;
    let _ = ctx.drain_changes();
    Ok(ctx)
}

/// 128x128 orthogonal level.
pub fn reference_level(seed: u64) -> Result<NavContext, NavError> {
    level_profile(128, Projection::Orthogonal, seed)
}

/// 512x512 orthogonal level.
pub fn stress_level(seed: u64) -> Result<NavContext, NavError> {
    level_profile(512, Projection::Orthogonal, seed)
}

/// `n` requests between random walkable tiles of `ctx`'s ground layer.
///
/// Endpoints are drawn by rejection; a grid with no walkable tile yields
/// no requests.
pub fn request_mix(ctx: &NavContext, n: usize, seed: u64) -> Vec<PathRequest> {
    let grid = ctx.config().grid;
    if grid.width == 0 || ctx.store().traversable_count(LayerId::GROUND) == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let walkable = |rng: &mut ChaCha8Rng| loop {
        let cell = GridCoord::new(
            rng.gen_range(0..grid.width as i32),
            rng.gen_range(0..grid.height as i32),
        );
        if ctx.is_navigable(cell, LayerId::GROUND) {
            return cell;
        }
    };
    (0..n)
        .map(|_| {
            let start = walkable(&mut rng);
            let goal = walkable(&mut rng);
            PathRequest::new(start, goal, LayerId::GROUND)
        })
        .collect()
}
