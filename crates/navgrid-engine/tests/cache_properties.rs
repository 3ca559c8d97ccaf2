//! Cache and batch behaviour on seeded random levels.

use navgrid_core::{GridConfig, GridCoord, LayerId, Projection};
use navgrid_engine::{NavConfig, NavContext, PathCache, PathRequest};
use navgrid_test_utils::{assert_path_valid, path_cost, random_map};
use proptest::prelude::*;

const W: u32 = 12;
const H: u32 = 10;

fn arb_projection() -> impl Strategy<Value = Projection> {
    prop_oneof![
        Just(Projection::Orthogonal),
        Just(Projection::Isometric),
        Just(Projection::HexAxial),
    ]
}

fn arb_cell() -> impl Strategy<Value = GridCoord> {
    (0..W as i32, 0..H as i32).prop_map(|(x, y)| GridCoord::new(x, y))
}

fn random_context(projection: Projection, seed: u64, workers: usize) -> NavContext {
    let map = random_map(W, H, projection, 0.25, seed);
    let grid = GridConfig::new(W, H, projection);
    let mut ctx = NavContext::new(NavConfig::new(grid).with_workers(workers)).unwrap();
    let tiles = map.store.layer_tiles(LayerId::GROUND).unwrap();
    ctx.load_layer(LayerId::GROUND, tiles).unwrap();
    let _ = ctx.drain_changes();
    ctx
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn batch_results_match_single_queries(
        projection in arb_projection(),
        seed in any::<u64>(),
        workers in 1usize..6,
        pairs in prop::collection::vec((arb_cell(), arb_cell()), 0..24),
    ) {
        let ctx = random_context(projection, seed, workers);
        let requests: Vec<PathRequest> = pairs
            .iter()
            .map(|&(s, g)| PathRequest::new(s, g, LayerId::GROUND))
            .collect();
        let results = ctx.plan_batch(&requests);
        prop_assert_eq!(results.len(), requests.len());
        for (request, result) in requests.iter().zip(results) {
            prop_assert_eq!(result, ctx.find_path(request.start, request.goal, request.layer));
        }
    }

    #[test]
    fn cached_routes_stay_walkable_and_optimal_while_tiles_close(
        projection in arb_projection(),
        seed in any::<u64>(),
        queries in prop::collection::vec((arb_cell(), arb_cell()), 1..12),
        closures in prop::collection::vec(arb_cell(), 1..12),
    ) {
        let mut ctx = random_context(projection, seed, 1);
        let mut cache = PathCache::for_context(&ctx);

        for &closed in &closures {
            for &(s, g) in &queries {
                let _ = cache.find_path(&ctx, s, g, LayerId::GROUND);
            }

            ctx.set_navigable(closed, false, 1.0, LayerId::GROUND);
            cache.apply_changes(&ctx.drain_changes());

            // Closing tiles never shortens a route, so every survivor is
            // still a least-cost one.
            for &(s, g) in &queries {
                match cache.find_path(&ctx, s, g, LayerId::GROUND) {
                    Ok(path) => {
                        assert_path_valid(ctx.store(), ctx.transform(), &path.cells, LayerId::GROUND);
                        prop_assert!(!path.crosses(closed));
                        let fresh = ctx.find_path(s, g, LayerId::GROUND).unwrap();
                        prop_assert!(close(path.cost, fresh.cost), "cached {} vs fresh {}", path.cost, fresh.cost);
                        prop_assert!(close(path_cost(ctx.store(), &path.cells, LayerId::GROUND), path.cost));
                    }
                    Err(err) => {
                        prop_assert_eq!(Err(err), ctx.find_path(s, g, LayerId::GROUND).map(|_| ()));
                    }
                }
            }
        }
        prop_assert_eq!(cache.synced_generation(), ctx.generation());
    }
}
