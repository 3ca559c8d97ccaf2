//! Terrain labels and the terrain-to-cost table applied at ingestion.
//!
//! The search never looks at [`Terrain`]; the level loader translates each
//! label through one authoritative [`TerrainCosts`] table into a
//! [`TileProperties`] before handing it to the store. Changing the table
//! afterwards does not re-cost tiles that are already loaded.

use crate::tile::TileProperties;
use indexmap::IndexMap;

/// Classification of a tile's ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// No label supplied by the loader.
    #[default]
    Unknown,
    /// Open ground.
    Grass,
    /// Paved, faster than open ground.
    Road,
    /// Loose ground.
    Sand,
    /// Slow, sticky ground.
    Mud,
    /// Wadeable water.
    ShallowWater,
    /// Water that cannot be crossed on foot.
    DeepWater,
    /// Solid obstacle.
    Wall,
    /// Game-specific label.
    Custom(u8),
}

/// What entering a tile of some terrain costs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerrainCost {
    /// Traversable at the given additive cost.
    Passable(f32),
    /// Never traversable.
    Impassable,
}

/// Authoritative terrain-to-cost mapping used by the level loader.
#[derive(Clone, Debug)]
pub struct TerrainCosts {
    costs: IndexMap<Terrain, TerrainCost>,
    fallback: TerrainCost,
}

impl TerrainCosts {
    /// An empty table where every terrain costs `fallback`.
    pub fn uniform(fallback: TerrainCost) -> Self {
        Self {
            costs: IndexMap::new(),
            fallback,
        }
    }

    /// Set the cost of a terrain, replacing any previous entry.
    ///
    /// Non-finite or negative passable costs are rejected.
    pub fn set(&mut self, terrain: Terrain, cost: TerrainCost) -> Result<(), String> {
        if let TerrainCost::Passable(c) = cost {
            if !c.is_finite() || c < 0.0 {
                return Err(format!(
                    "cost for {terrain:?} must be finite and >= 0, got {c}"
                ));
            }
        }
        self.costs.insert(terrain, cost);
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, terrain: Terrain, cost: TerrainCost) -> Result<Self, String> {
        self.set(terrain, cost)?;
        Ok(self)
    }

    /// The cost of entering `terrain`.
    pub fn cost(&self, terrain: Terrain) -> TerrainCost {
        self.costs.get(&terrain).copied().unwrap_or(self.fallback)
    }

    /// Explicitly configured entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (Terrain, TerrainCost)> + '_ {
        self.costs.iter().map(|(t, c)| (*t, *c))
    }

    /// Build the tile record for a terrain label.
    ///
    /// Impassable terrain yields a non-navigable tile; `Wall` is also
    /// marked as blocked.
    pub fn tile_for(&self, terrain: Terrain) -> TileProperties {
        let mut tile = match self.cost(terrain) {
            TerrainCost::Passable(cost) => TileProperties::open(cost),
            TerrainCost::Impassable => TileProperties::default(),
        };
        tile.terrain = terrain;
        tile.is_blocked = terrain == Terrain::Wall;
        tile
    }
}

impl Default for TerrainCosts {
    fn default() -> Self {
        let costs = [
            (Terrain::Unknown, TerrainCost::Passable(1.0)),
            (Terrain::Grass, TerrainCost::Passable(1.0)),
            (Terrain::Road, TerrainCost::Passable(0.5)),
            (Terrain::Sand, TerrainCost::Passable(1.5)),
            (Terrain::Mud, TerrainCost::Passable(3.0)),
            (Terrain::ShallowWater, TerrainCost::Passable(2.0)),
            (Terrain::DeepWater, TerrainCost::Impassable),
            (Terrain::Wall, TerrainCost::Impassable),
        ];
        Self {
            costs: costs.into_iter().collect(),
            fallback: TerrainCost::Passable(TileProperties::DEFAULT_COST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let t = TerrainCosts::default();
        assert_eq!(t.cost(Terrain::Mud), TerrainCost::Passable(3.0));
        assert_eq!(t.cost(Terrain::Wall), TerrainCost::Impassable);
        // Unlisted custom terrain falls back to unit cost.
        assert_eq!(t.cost(Terrain::Custom(7)), TerrainCost::Passable(1.0));
    }

    #[test]
    fn tile_for_maps_cost_and_label() {
        let t = TerrainCosts::default();
        let mud = t.tile_for(Terrain::Mud);
        assert!(mud.is_traversable());
        assert_eq!(mud.traversal_cost, 3.0);
        assert_eq!(mud.terrain, Terrain::Mud);

        let water = t.tile_for(Terrain::DeepWater);
        assert!(!water.is_traversable());
        assert!(!water.is_blocked);

        let wall = t.tile_for(Terrain::Wall);
        assert!(wall.is_blocked);
        assert!(!wall.is_traversable());
    }

    #[test]
    fn set_rejects_bad_costs() {
        let mut t = TerrainCosts::uniform(TerrainCost::Passable(1.0));
        assert!(t.set(Terrain::Sand, TerrainCost::Passable(-1.0)).is_err());
        assert!(t.set(Terrain::Sand, TerrainCost::Passable(f32::NAN)).is_err());
        assert!(t.set(Terrain::Sand, TerrainCost::Passable(4.0)).is_ok());
        assert_eq!(t.cost(Terrain::Sand), TerrainCost::Passable(4.0));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let t = TerrainCosts::uniform(TerrainCost::Impassable)
            .with(Terrain::Road, TerrainCost::Passable(0.5))
            .and_then(|t| t.with(Terrain::Grass, TerrainCost::Passable(1.0)))
            .unwrap();
        let order: Vec<_> = t.entries().map(|(terrain, _)| terrain).collect();
        assert_eq!(order, vec![Terrain::Road, Terrain::Grass]);
        assert_eq!(t.cost(Terrain::Mud), TerrainCost::Impassable);
    }
}
