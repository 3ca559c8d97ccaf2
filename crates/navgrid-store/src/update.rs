//! Dynamic updates: single-tile writes and bulk layer loads.
//!
//! All writes are synchronous and take effect immediately: the next search
//! observes them. Nothing here re-plans paths. Instead, every effective
//! write advances the store generation and leaves a [`TileChange`] in the
//! change log for consumers that cache paths.

use crate::changes::TileChange;
use crate::store::TileStore;
use navgrid_core::{GridCoord, LayerId, StoreError, Terrain, TerrainCosts, TileProperties};
use tracing::{debug, trace};

impl TileStore {
    /// Replace the full property record of one tile.
    ///
    /// The cost is sanitised first (see [`TileProperties::sanitized`]).
    /// Out-of-range coordinates or layers are silently ignored. Returns
    /// `true` if the tile actually changed; rewriting identical properties
    /// is not a change and does not advance the generation.
    pub fn set_tile_properties(
        &mut self,
        coord: GridCoord,
        layer: LayerId,
        props: TileProperties,
    ) -> bool {
        let Some(index) = self.index_of(coord) else {
            return false;
        };
        let Some(tiles) = self.layers.get_mut(layer.index()) else {
            return false;
        };
        let props = props.sanitized();
        if tiles[index] == props {
            return false;
        }
        tiles[index] = props;
        self.after_tile_write(coord, layer, props);
        true
    }

    /// Set whether a tile may be routed through and its entry cost.
    ///
    /// `is_blocked`, terrain and flags are left as they are, so reopening a
    /// navigable-but-blocked tile still leaves it untraversable. Same
    /// bounds and change semantics as
    /// [`set_tile_properties`](Self::set_tile_properties).
    pub fn set_navigable(
        &mut self,
        coord: GridCoord,
        is_navigable: bool,
        cost: f32,
        layer: LayerId,
    ) -> bool {
        let Some(current) = self.tile(coord, layer).copied() else {
            return false;
        };
        let next = TileProperties {
            is_navigable,
            traversal_cost: cost,
            ..current
        };
        self.set_tile_properties(coord, layer, next)
    }

    /// Overwrite every tile of `layer` with `props`.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidPosition`] if the layer does not exist (or the
    /// store is uninitialised).
    pub fn fill_layer(&mut self, layer: LayerId, props: TileProperties) -> Result<(), StoreError> {
        let tiles = self.layer_mut(layer)?;
        tiles.fill(props.sanitized());
        self.after_layer_write(layer);
        Ok(())
    }

    /// Replace every tile of `layer` from a row-major slice.
    ///
    /// Each record is sanitised on the way in. This is the level-load entry
    /// point: the caller has already validated its source data.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidPosition`] if the layer does not exist, or
    /// [`StoreError::InvalidDimensions`] if `tiles.len()` is not
    /// `width × height`. The layer is untouched on error.
    pub fn load_layer(&mut self, layer: LayerId, tiles: &[TileProperties]) -> Result<(), StoreError> {
        let expected = self.width() as usize * self.height() as usize;
        let dst = self.layer_mut(layer)?;
        if tiles.len() != expected {
            return Err(StoreError::InvalidDimensions {
                reason: format!(
                    "layer {layer} expects {expected} tiles, got {}",
                    tiles.len()
                ),
            });
        }
        for (d, s) in dst.iter_mut().zip(tiles) {
            *d = s.sanitized();
        }
        self.after_layer_write(layer);
        Ok(())
    }

    /// Load `layer` from per-tile terrain labels using `costs` as the
    /// terrain-to-cost mapping.
    ///
    /// # Errors
    ///
    /// Same as [`load_layer`](Self::load_layer).
    pub fn load_terrain(
        &mut self,
        layer: LayerId,
        terrain: &[Terrain],
        costs: &TerrainCosts,
    ) -> Result<(), StoreError> {
        let tiles: Vec<TileProperties> = terrain.iter().map(|t| costs.tile_for(*t)).collect();
        self.load_layer(layer, &tiles)
    }

    fn layer_mut(&mut self, layer: LayerId) -> Result<&mut Vec<TileProperties>, StoreError> {
        self.layers
            .get_mut(layer.index())
            .ok_or(StoreError::InvalidPosition {
                coord: GridCoord::default(),
                layer,
            })
    }

    fn bump(&mut self, layer: LayerId) {
        self.generation = self.generation.next();
        if let Some(g) = self.layer_generations.get_mut(layer.index()) {
            *g = self.generation;
        }
    }

    fn after_tile_write(&mut self, coord: GridCoord, layer: LayerId, props: TileProperties) {
        self.bump(layer);
        if props.is_traversable() {
            if let Some(floor) = self.cost_floors.get_mut(layer.index()) {
                *floor = floor.min(props.traversal_cost);
            }
        }
        self.changes.record(TileChange::Tile {
            coord,
            layer,
            generation: self.generation,
        });
        trace!(
            %coord,
            %layer,
            navigable = props.is_traversable(),
            cost = props.traversal_cost,
            generation = %self.generation,
            "tile updated"
        );
    }

    fn after_layer_write(&mut self, layer: LayerId) {
        self.bump(layer);
        let floor = self.layers[layer.index()]
            .iter()
            .filter(|t| t.is_traversable())
            .map(|t| t.traversal_cost)
            .fold(TileProperties::DEFAULT_COST, f32::min);
        if let Some(f) = self.cost_floors.get_mut(layer.index()) {
            *f = floor;
        }
        self.changes.record(TileChange::Layer {
            layer,
            generation: self.generation,
        });
        debug!(
            %layer,
            cost_floor = floor,
            generation = %self.generation,
            "layer loaded"
        );
    }
}
