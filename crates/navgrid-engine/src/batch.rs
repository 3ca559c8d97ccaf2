//! Concurrent planning of independent path requests.
//!
//! Requests are queued on a crossbeam channel and drained by scoped worker
//! threads that share one `&NavContext`. No update can run while the scope
//! is alive, so every search in a batch sees the same store state.

use crate::context::NavContext;
use navgrid_core::{GridCoord, LayerId, PathError};
use navgrid_search::Path;
use tracing::debug;

/// One path query in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRequest {
    /// Start cell.
    pub start: GridCoord,
    /// Goal cell.
    pub goal: GridCoord,
    /// Layer to search.
    pub layer: LayerId,
    /// Iteration cap; `None` uses the context default.
    pub max_iterations: Option<usize>,
}

impl PathRequest {
    /// A request using the context's default iteration cap.
    pub fn new(start: GridCoord, goal: GridCoord, layer: LayerId) -> Self {
        Self {
            start,
            goal,
            layer,
            max_iterations: None,
        }
    }

    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Plan `requests` on up to `workers` threads. Results are returned in
/// request order.
pub fn plan_batch(
    ctx: &NavContext,
    requests: &[PathRequest],
    workers: usize,
) -> Vec<Result<Path, PathError>> {
    let workers = workers.clamp(1, requests.len().max(1));
    debug!(requests = requests.len(), workers, "planning path batch");
    if workers == 1 {
        return requests.iter().map(|r| ctx.run_request(r)).collect();
    }

    let (job_tx, job_rx) = crossbeam_channel::unbounded::<(usize, PathRequest)>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded();
    for job in requests.iter().copied().enumerate() {
        let sent = job_tx.send(job);
        debug_assert!(sent.is_ok(), "job receiver is held until the batch ends");
    }
    drop(job_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok((index, request)) = job_rx.recv() {
                    if result_tx.send((index, ctx.run_request(&request))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut results: Vec<(usize, Result<Path, PathError>)> = result_rx.iter().collect();
    results.sort_unstable_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use navgrid_core::{GridConfig, Projection, TileProperties, UnreachableReason};

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn ctx() -> NavContext {
        let mut ctx =
            NavContext::new(NavConfig::new(GridConfig::new(8, 8, Projection::HexAxial))).unwrap();
        ctx.fill_layer(LayerId::GROUND, TileProperties::open(1.0))
            .unwrap();
        ctx.set_navigable(c(7, 7), false, 1.0, LayerId::GROUND);
        ctx
    }

    #[test]
    fn results_keep_request_order() {
        let ctx = ctx();
        let requests: Vec<PathRequest> = (0..7)
            .map(|x| PathRequest::new(c(0, 0), c(x, 0), LayerId::GROUND))
            .collect();
        let results = plan_batch(&ctx, &requests, 4);
        assert_eq!(results.len(), 7);
        for (x, result) in results.iter().enumerate() {
            assert_eq!(result.as_ref().unwrap().cost, x as f32);
        }
    }

    #[test]
    fn failures_stay_in_place() {
        let ctx = ctx();
        let requests = [
            PathRequest::new(c(0, 0), c(3, 3), LayerId::GROUND),
            PathRequest::new(c(0, 0), c(7, 7), LayerId::GROUND),
            PathRequest::new(c(0, 0), c(6, 6), LayerId::GROUND).with_max_iterations(1),
            PathRequest::new(c(0, 0), c(9, 9), LayerId::GROUND),
        ];
        let results = plan_batch(&ctx, &requests, 3);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(PathError::Unreachable {
                reason: UnreachableReason::GoalBlocked
            })
        );
        assert!(results[2].as_ref().unwrap_err().is_exhausted());
        assert!(matches!(results[3], Err(PathError::InvalidPosition { .. })));
    }

    #[test]
    fn parallel_matches_sequential() {
        let ctx = ctx();
        let requests: Vec<PathRequest> = (0..8)
            .flat_map(|y| (0..8).map(move |x| PathRequest::new(c(0, 0), c(x, y), LayerId::GROUND)))
            .collect();
        let sequential = plan_batch(&ctx, &requests, 1);
        let parallel = plan_batch(&ctx, &requests, 8);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_batch() {
        let ctx = ctx();
        assert!(plan_batch(&ctx, &[], 4).is_empty());
        assert!(ctx.plan_batch(&[]).is_empty());
    }
}
