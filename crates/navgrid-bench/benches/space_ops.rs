//! Criterion micro-benchmarks for projection operations.

use criterion::{criterion_group, criterion_main, Criterion};
use navgrid_core::{GridConfig, GridCoord, Projection};
use navgrid_space::{transform_for, Vec2};
use std::hint::black_box;

const PROJECTIONS: [Projection; 3] = [
    Projection::Orthogonal,
    Projection::Isometric,
    Projection::HexAxial,
];

/// Benchmark: neighbours() on all 10K cells of a 100x100 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    for projection in PROJECTIONS {
        let transform = transform_for(&GridConfig::new(100, 100, projection));
        c.bench_function(&format!("neighbours_{projection}_10k"), |b| {
            b.iter(|| {
                for y in 0..100 {
                    for x in 0..100 {
                        black_box(transform.neighbours(GridCoord::new(x, y)));
                    }
                }
            });
        });
    }
}

/// Benchmark: world_to_grid() for 10K points spread over the map.
fn bench_world_to_grid_10k(c: &mut Criterion) {
    for projection in PROJECTIONS {
        let grid = GridConfig::new(100, 100, projection).with_tile_size(32.0, 16.0);
        let transform = transform_for(&grid);
        let points: Vec<Vec2> = (0u64..10_000)
            .map(|i| {
                let x = (i.wrapping_mul(6364136223846793007) % 3200) as f32;
                let y = (i.wrapping_mul(1442695040888963407) % 1600) as f32;
                Vec2::new(x + 0.25, y + 0.75)
            })
            .collect();
        c.bench_function(&format!("world_to_grid_{projection}_10k"), |b| {
            b.iter(|| {
                for p in &points {
                    black_box(transform.world_to_grid(*p));
                }
            });
        });
    }
}

/// Benchmark: heuristic() for 1000 deterministic pairs.
fn bench_heuristic_pairs(c: &mut Criterion) {
    let pairs: Vec<(GridCoord, GridCoord)> = (0u64..1000)
        .map(|i| {
            let j = i + 500;
            (
                GridCoord::new(
                    (i.wrapping_mul(6364136223846793007) % 100) as i32,
                    (i.wrapping_mul(2862933555777941757) % 100) as i32,
                ),
                GridCoord::new(
                    (j.wrapping_mul(6364136223846793007) % 100) as i32,
                    (j.wrapping_mul(2862933555777941757) % 100) as i32,
                ),
            )
        })
        .collect();
    for projection in PROJECTIONS {
        let transform = transform_for(&GridConfig::new(100, 100, projection));
        c.bench_function(&format!("heuristic_{projection}_1k"), |b| {
            b.iter(|| {
                for &(a, z) in &pairs {
                    black_box(transform.heuristic(a, z));
                }
            });
        });
    }
}

criterion_group!(
    benches,
    bench_neighbours_10k,
    bench_world_to_grid_10k,
    bench_heuristic_pairs
);
criterion_main!(benches);
