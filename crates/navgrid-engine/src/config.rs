//! Navigation context configuration and validation.
//!
//! [`NavConfig`] is the constructor input for a
//! [`NavContext`](crate::NavContext). [`validate()`](NavConfig::validate)
//! checks every structural invariant before any storage is allocated.

use navgrid_core::{GridConfig, Projection, StoreError};
use navgrid_search::DEFAULT_MAX_ITERATIONS;
use navgrid_store::ChangeLog;
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`NavConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid configuration is invalid.
    #[error("grid: {0}")]
    Grid(#[from] StoreError),
    /// `default_max_iterations` is zero: no search could expand a node.
    #[error("default_max_iterations must be at least 1")]
    ZeroIterationBudget,
    /// `change_log_capacity` is zero.
    #[error("change_log_capacity must be at least 1")]
    ChangeLogZero,
    /// `worker_count` is `Some(0)`.
    #[error("worker_count must be at least 1 when set")]
    WorkerCountZero,
}

// ── NavConfig ──────────────────────────────────────────────────────

/// Complete configuration for a navigation context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Grid geometry of the level.
    pub grid: GridConfig,
    /// Iteration cap used by searches that do not pass their own.
    /// Default: 10 000.
    pub default_max_iterations: usize,
    /// Change records kept between drains before collapsing.
    /// Default: 4 096.
    pub change_log_capacity: usize,
    /// Paths kept by a [`PathCache`](crate::PathCache) built from this
    /// config. Zero disables caching. Default: 256.
    pub path_cache_capacity: usize,
    /// Seed for the context's own sampler RNG. Default: 0.
    pub sampler_seed: u64,
    /// Threads used by batch planning. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl NavConfig {
    /// Default configuration for `grid`.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            change_log_capacity: ChangeLog::DEFAULT_CAPACITY,
            path_cache_capacity: 256,
            sampler_seed: 0,
            worker_count: None,
        }
    }

    /// Set the sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sampler_seed = seed;
        self
    }

    /// Set the batch planning thread count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.worker_count = Some(workers);
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if self.default_max_iterations == 0 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        if self.change_log_capacity == 0 {
            return Err(ConfigError::ChangeLogZero);
        }
        if self.worker_count == Some(0) {
            return Err(ConfigError::WorkerCountZero);
        }
        Ok(())
    }

    /// Resolve the batch planning thread count, auto-detecting if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new(GridConfig::new(64, 64, Projection::Orthogonal))
    }
}
