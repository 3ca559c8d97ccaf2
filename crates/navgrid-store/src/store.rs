//! The layered tile store.

use crate::changes::{ChangeBatch, ChangeLog, TileChange};
use navgrid_core::{Generation, GridConfig, GridCoord, LayerId, StoreError, TileProperties};
use tracing::debug;

/// Owns the tile properties of every layer of one loaded level.
///
/// A store is either uninitialised (zero-sized; every read returns the
/// sentinel) or sized by a validated [`GridConfig`]. Layers are stored
/// row-major: tile `(x, y)` lives at index `y * width + x`.
///
/// # Examples
///
/// ```
/// use navgrid_core::{GridConfig, GridCoord, LayerId, Projection, TileProperties};
/// use navgrid_store::TileStore;
///
/// let mut store = TileStore::new(GridConfig::new(4, 4, Projection::Orthogonal)).unwrap();
/// let cell = GridCoord::new(1, 2);
/// assert!(!store.is_navigable(cell, LayerId::GROUND));
///
/// store.set_tile_properties(cell, LayerId::GROUND, TileProperties::open(2.0));
/// assert!(store.is_navigable(cell, LayerId::GROUND));
/// assert_eq!(store.traversal_cost(cell, LayerId::GROUND), 2.0);
///
/// // Out-of-range reads return the blocked sentinel.
/// assert!(store.tile_properties(GridCoord::new(9, 9), LayerId::GROUND).is_blocked);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileStore {
    pub(crate) config: Option<GridConfig>,
    pub(crate) layers: Vec<Vec<TileProperties>>,
    /// Per-layer lower bound on the cost of any traversable tile, capped at 1.
    pub(crate) cost_floors: Vec<f32>,
    pub(crate) generation: Generation,
    pub(crate) layer_generations: Vec<Generation>,
    pub(crate) changes: ChangeLog,
}

// Compile-time assertion: concurrent searches share `&TileStore`.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<TileStore>();
};

impl TileStore {
    /// An uninitialised store. Every read returns the sentinel and every
    /// write is ignored until [`initialize`](Self::initialize) succeeds.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Create and default-fill a store for `config`.
    ///
    /// # Errors
    ///
    /// See [`initialize`](Self::initialize).
    pub fn new(config: GridConfig) -> Result<Self, StoreError> {
        let mut store = Self::default();
        store.initialize(config)?;
        Ok(store)
    }

    /// (Re)size the store for `config` and default-fill every layer.
    ///
    /// Any previous contents are discarded. The generation keeps counting
    /// upward across reinitialisation and a [`TileChange::All`] is recorded,
    /// so caches built against the previous level are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDimensions`] if `config` fails
    /// validation, or [`StoreError::AllocationFailed`] if tile storage
    /// cannot be reserved. In both cases the store is left uninitialised.
    pub fn initialize(&mut self, config: GridConfig) -> Result<(), StoreError> {
        self.config = None;
        self.layers.clear();
        self.cost_floors.clear();
        self.layer_generations.clear();
        self.generation = self.generation.next();
        self.changes.record(TileChange::All {
            generation: self.generation,
        });

        config.validate()?;
        let tiles = (config.width as usize)
            .checked_mul(config.height as usize)
            .ok_or_else(|| StoreError::InvalidDimensions {
                reason: format!(
                    "{}x{} tiles overflow the address space",
                    config.width, config.height
                ),
            })?;

        let mut layers = Vec::with_capacity(config.layers as usize);
        for _ in 0..config.layers {
            let mut layer = Vec::new();
            layer
                .try_reserve_exact(tiles)
                .map_err(|_| StoreError::AllocationFailed { tiles })?;
            layer.resize(tiles, TileProperties::default());
            layers.push(layer);
        }

        self.layers = layers;
        self.cost_floors = vec![TileProperties::DEFAULT_COST; config.layers as usize];
        self.layer_generations = vec![self.generation; config.layers as usize];
        self.config = Some(config);

        debug!(
            width = config.width,
            height = config.height,
            layers = config.layers,
            projection = %config.projection,
            generation = %self.generation,
            "tile store initialised"
        );
        Ok(())
    }

    /// Whether a successful [`initialize`](Self::initialize) has happened.
    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// The active configuration, if initialised.
    pub fn config(&self) -> Option<&GridConfig> {
        self.config.as_ref()
    }

    /// Tile count along x. Zero when uninitialised.
    pub fn width(&self) -> u32 {
        self.config.map_or(0, |c| c.width)
    }

    /// Tile count along y. Zero when uninitialised.
    pub fn height(&self) -> u32 {
        self.config.map_or(0, |c| c.height)
    }

    /// Number of layers. Zero when uninitialised.
    pub fn layer_count(&self) -> u8 {
        self.config.map_or(0, |c| c.layers)
    }

    /// Whether `coord` lies on the grid.
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width()
            && (coord.y as u32) < self.height()
    }

    /// Whether `layer` is one of the configured layers.
    pub fn has_layer(&self, layer: LayerId) -> bool {
        layer.index() < self.layers.len()
    }

    /// Flat index of `coord` within a layer, if in bounds.
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(coord.y as usize * self.width() as usize + coord.x as usize)
    }

    /// Cell at a flat layer index. Inverse of [`index_of`](Self::index_of).
    pub fn coord_of(&self, index: usize) -> Option<GridCoord> {
        let width = self.width() as usize;
        if width == 0 || index >= width * self.height() as usize {
            return None;
        }
        Some(GridCoord::new((index % width) as i32, (index / width) as i32))
    }

    /// Properties of a tile, or [`TileProperties::OUT_OF_BOUNDS`] if the
    /// coordinate or layer is outside the grid.
    pub fn tile_properties(&self, coord: GridCoord, layer: LayerId) -> TileProperties {
        self.tile(coord, layer)
            .copied()
            .unwrap_or(TileProperties::OUT_OF_BOUNDS)
    }

    /// Whether the tile is traversable: navigable **and** not blocked.
    pub fn is_navigable(&self, coord: GridCoord, layer: LayerId) -> bool {
        self.tile(coord, layer)
            .is_some_and(TileProperties::is_traversable)
    }

    /// Cost of entering a tile.
    ///
    /// Meaningful only for traversable tiles; the search never asks for
    /// anything else. Out-of-range cells report
    /// [`TileProperties::DEFAULT_COST`].
    pub fn traversal_cost(&self, coord: GridCoord, layer: LayerId) -> f32 {
        self.tile(coord, layer)
            .map_or(TileProperties::DEFAULT_COST, |t| t.traversal_cost)
    }

    /// Lower bound on the entry cost of any traversable tile on `layer`,
    /// never above `1.0`.
    ///
    /// Scaling a unit-step heuristic by this value keeps it admissible when
    /// some terrain is cheaper than one. The bound only tightens on bulk
    /// loads; single-tile writes can lower it but never raise it.
    pub fn cost_floor(&self, layer: LayerId) -> f32 {
        self.cost_floors
            .get(layer.index())
            .copied()
            .unwrap_or(TileProperties::DEFAULT_COST)
    }

    /// Store-wide mutation counter.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation of the last write that touched `layer`.
    pub fn layer_generation(&self, layer: LayerId) -> Generation {
        self.layer_generations
            .get(layer.index())
            .copied()
            .unwrap_or(self.generation)
    }

    /// All tiles of a layer in row-major order.
    pub fn layer_tiles(&self, layer: LayerId) -> Option<&[TileProperties]> {
        self.layers.get(layer.index()).map(Vec::as_slice)
    }

    /// Number of traversable tiles on `layer`.
    pub fn traversable_count(&self, layer: LayerId) -> usize {
        self.layer_tiles(layer)
            .map_or(0, |tiles| tiles.iter().filter(|t| t.is_traversable()).count())
    }

    /// Take every pending change record.
    pub fn drain_changes(&mut self) -> ChangeBatch {
        self.changes.drain()
    }

    /// Number of change records waiting to be drained.
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    /// Limit the number of change records kept between drains.
    pub fn set_change_log_capacity(&mut self, capacity: usize) {
        self.changes.set_capacity(capacity);
    }

    /// Heap memory held by tile storage, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.capacity() * std::mem::size_of::<TileProperties>())
            .sum()
    }

    pub(crate) fn tile(&self, coord: GridCoord, layer: LayerId) -> Option<&TileProperties> {
        let index = self.index_of(coord)?;
        self.layers.get(layer.index())?.get(index)
    }
}
