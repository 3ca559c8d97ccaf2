//! The navigation context: one loaded level's store, projection and RNG.

use crate::batch::{self, PathRequest};
use crate::config::NavConfig;
use crate::error::NavError;
use navgrid_core::{
    Generation, GridConfig, GridCoord, LayerId, PathError, Terrain, TerrainCosts, TileProperties,
};
use navgrid_search::{NeighbourFilter, Path, PathFinder, RandomNavigableSampler};
use navgrid_space::{transform_for, CoordinateTransform, Vec2};
use navgrid_store::{ChangeBatch, TileStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Everything needed to answer navigation queries for one level.
///
/// Created at level load and passed by reference to every caller; any
/// number of contexts can coexist. Queries take `&self` and may run on many
/// threads at once; updates take `&mut self`, so the borrow checker keeps
/// writers and readers apart.
///
/// # Examples
///
/// ```
/// use navgrid_core::{GridConfig, GridCoord, LayerId, Projection, TileProperties};
/// use navgrid_engine::{NavConfig, NavContext};
///
/// let grid = GridConfig::new(5, 5, Projection::Orthogonal);
/// let mut ctx = NavContext::new(NavConfig::new(grid)).unwrap();
/// ctx.fill_layer(LayerId::GROUND, TileProperties::open(1.0)).unwrap();
///
/// let path = ctx
///     .find_path(GridCoord::new(0, 0), GridCoord::new(4, 4), LayerId::GROUND)
///     .unwrap();
/// assert_eq!(path.cost, 8.0);
///
/// // A door closes; the next query routes around it.
/// ctx.set_navigable(GridCoord::new(1, 0), false, 1.0, LayerId::GROUND);
/// assert!(!ctx.drain_changes().is_empty());
/// ```
pub struct NavContext {
    config: NavConfig,
    store: TileStore,
    transform: Box<dyn CoordinateTransform>,
    rng: ChaCha8Rng,
}

// Compile-time assertion: batch planning shares `&NavContext` across threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<NavContext>();
};

impl std::fmt::Debug for NavContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavContext")
            .field("grid", &self.config.grid)
            .field("generation", &self.store.generation())
            .finish_non_exhaustive()
    }
}

impl NavContext {
    /// Validate `config` and allocate the store. Every tile starts out
    /// non-navigable until the level is loaded.
    ///
    /// # Errors
    ///
    /// [`NavError::Config`] if validation fails, [`NavError::Store`] if tile
    /// storage cannot be allocated.
    pub fn new(config: NavConfig) -> Result<Self, NavError> {
        config.validate()?;
        let mut store = TileStore::new(config.grid)?;
        store.set_change_log_capacity(config.change_log_capacity);
        let transform = transform_for(&config.grid);
        debug!(
            projection = %config.grid.projection,
            width = config.grid.width,
            height = config.grid.height,
            "navigation context created"
        );
        Ok(Self {
            config,
            store,
            transform,
            rng: ChaCha8Rng::seed_from_u64(config.sampler_seed),
        })
    }

    /// Replace the level with a freshly sized one.
    ///
    /// All tiles are discarded and a blanket invalidation is recorded. On
    /// error the store is left uninitialised: every query fails with
    /// [`PathError::InvalidPosition`] and [`is_initialized`](Self::is_initialized)
    /// reports `false` until a later call succeeds. [`config`](Self::config)
    /// and the world/grid conversions keep describing the last level that
    /// loaded successfully, so callers can still place debug output while
    /// they recover.
    ///
    /// # Errors
    ///
    /// [`NavError::Store`] if `grid` is invalid or cannot be allocated.
    pub fn initialize(&mut self, grid: GridConfig) -> Result<(), NavError> {
        self.store.initialize(grid)?;
        self.transform = transform_for(&grid);
        self.config.grid = grid;
        Ok(())
    }

    /// Whether a level is loaded. False after a failed
    /// [`initialize`](Self::initialize).
    pub fn is_initialized(&self) -> bool {
        self.store.is_initialized()
    }

    /// The configuration of the last level that loaded successfully.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Read access to the tile store.
    pub fn store(&self) -> &TileStore {
        &self.store
    }

    /// The projection strategy selected at initialisation.
    pub fn transform(&self) -> &dyn CoordinateTransform {
        self.transform.as_ref()
    }

    // ── Dynamic updates ──────────────────────────────────────────

    /// Replace one tile's properties. Out-of-range writes are ignored.
    /// Returns whether the tile changed.
    pub fn set_tile_properties(
        &mut self,
        coord: GridCoord,
        layer: LayerId,
        props: TileProperties,
    ) -> bool {
        self.store.set_tile_properties(coord, layer, props)
    }

    /// Set one tile's navigability and cost. Out-of-range writes are
    /// ignored. Returns whether the tile changed.
    pub fn set_navigable(
        &mut self,
        coord: GridCoord,
        is_navigable: bool,
        cost: f32,
        layer: LayerId,
    ) -> bool {
        self.store.set_navigable(coord, is_navigable, cost, layer)
    }

    /// Overwrite every tile of a layer.
    ///
    /// # Errors
    ///
    /// See [`TileStore::fill_layer`].
    pub fn fill_layer(&mut self, layer: LayerId, props: TileProperties) -> Result<(), NavError> {
        Ok(self.store.fill_layer(layer, props)?)
    }

    /// Bulk-load a layer from row-major tiles.
    ///
    /// # Errors
    ///
    /// See [`TileStore::load_layer`].
    pub fn load_layer(&mut self, layer: LayerId, tiles: &[TileProperties]) -> Result<(), NavError> {
        Ok(self.store.load_layer(layer, tiles)?)
    }

    /// Bulk-load a layer from terrain labels.
    ///
    /// # Errors
    ///
    /// See [`TileStore::load_terrain`].
    pub fn load_terrain(
        &mut self,
        layer: LayerId,
        terrain: &[Terrain],
        costs: &TerrainCosts,
    ) -> Result<(), NavError> {
        Ok(self.store.load_terrain(layer, terrain, costs)?)
    }

    /// Current store generation.
    pub fn generation(&self) -> Generation {
        self.store.generation()
    }

    /// Generation of the last write to `layer`.
    pub fn layer_generation(&self, layer: LayerId) -> Generation {
        self.store.layer_generation(layer)
    }

    /// Take the invalidation records accumulated since the last drain.
    pub fn drain_changes(&mut self) -> ChangeBatch {
        self.store.drain_changes()
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Properties of a tile, or the out-of-bounds sentinel.
    pub fn tile_properties(&self, coord: GridCoord, layer: LayerId) -> TileProperties {
        self.store.tile_properties(coord, layer)
    }

    /// Whether a tile is traversable.
    pub fn is_navigable(&self, coord: GridCoord, layer: LayerId) -> bool {
        self.store.is_navigable(coord, layer)
    }

    /// World position to the containing cell.
    pub fn world_to_grid(&self, world: Vec2) -> GridCoord {
        self.transform.world_to_grid(world)
    }

    /// Cell to the world position of its centre.
    pub fn grid_to_world(&self, cell: GridCoord) -> Vec2 {
        self.transform.grid_to_world(cell)
    }

    /// Search with the configured default iteration cap.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::find_path`].
    pub fn find_path(
        &self,
        start: GridCoord,
        goal: GridCoord,
        layer: LayerId,
    ) -> Result<Path, PathError> {
        self.find_path_with_limit(start, goal, layer, self.config.default_max_iterations)
    }

    /// Search with an explicit iteration cap.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::find_path`].
    pub fn find_path_with_limit(
        &self,
        start: GridCoord,
        goal: GridCoord,
        layer: LayerId,
        max_iterations: usize,
    ) -> Result<Path, PathError> {
        PathFinder::new(&self.store, self.transform.as_ref())
            .find_path(start, goal, layer, max_iterations)
    }

    /// Search with a neighbour filter installed.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::find_path`].
    pub fn find_path_with_filter(
        &self,
        start: GridCoord,
        goal: GridCoord,
        layer: LayerId,
        filter: &dyn NeighbourFilter,
    ) -> Result<Path, PathError> {
        PathFinder::new(&self.store, self.transform.as_ref())
            .with_filter(filter)
            .find_path(start, goal, layer, self.config.default_max_iterations)
    }

    /// Search between two world positions, snapping each to its tile.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::find_path`].
    pub fn find_path_world(&self, start: Vec2, goal: Vec2, layer: LayerId) -> Result<Path, PathError> {
        self.find_path(self.world_to_grid(start), self.world_to_grid(goal), layer)
    }

    /// Run one batch request.
    pub(crate) fn run_request(&self, request: &PathRequest) -> Result<Path, PathError> {
        let limit = request
            .max_iterations
            .unwrap_or(self.config.default_max_iterations);
        self.find_path_with_limit(request.start, request.goal, request.layer, limit)
    }

    /// Plan many independent requests on the configured worker threads.
    /// Results come back in request order.
    pub fn plan_batch(&self, requests: &[PathRequest]) -> Vec<Result<Path, PathError>> {
        batch::plan_batch(self, requests, self.config.resolved_worker_count())
    }

    /// A random traversable world point within `radius` of `center`, drawn
    /// from the context's own seeded RNG.
    pub fn random_navigable_point(
        &mut self,
        center: Vec2,
        radius: f32,
        max_attempts: u32,
        layer: LayerId,
    ) -> Option<Vec2> {
        RandomNavigableSampler::new(&self.store, self.transform.as_ref()).sample(
            center,
            radius,
            max_attempts,
            layer,
            &mut self.rng,
        )
    }

    /// As [`random_navigable_point`](Self::random_navigable_point) with a
    /// caller-supplied RNG, for use from shared references.
    pub fn random_navigable_point_with<R: Rng + ?Sized>(
        &self,
        center: Vec2,
        radius: f32,
        max_attempts: u32,
        layer: LayerId,
        rng: &mut R,
    ) -> Option<Vec2> {
        RandomNavigableSampler::new(&self.store, self.transform.as_ref())
            .sample(center, radius, max_attempts, layer, rng)
    }
}
