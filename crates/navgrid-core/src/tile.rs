//! Per-tile navigation properties.

use crate::terrain::Terrain;

/// Bitfield of per-tile movement constraints.
///
/// The search only interprets these bits when a neighbour filter is
/// installed; otherwise they are carried through untouched for callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileFlags(pub u8);

impl TileFlags {
    /// No constraints.
    pub const NONE: TileFlags = TileFlags(0);
    /// The tile cannot be entered by a move with positive x delta.
    pub const NO_ENTRY_POS_X: TileFlags = TileFlags(0x01);
    /// The tile cannot be entered by a move with negative x delta.
    pub const NO_ENTRY_NEG_X: TileFlags = TileFlags(0x02);
    /// The tile cannot be entered by a move with positive y delta.
    pub const NO_ENTRY_POS_Y: TileFlags = TileFlags(0x04);
    /// The tile cannot be entered by a move with negative y delta.
    pub const NO_ENTRY_NEG_Y: TileFlags = TileFlags(0x08);
    /// Safe zone marker for gameplay code. Ignored by the search.
    pub const SAFE_ZONE: TileFlags = TileFlags(0x80);

    /// Whether every bit of `flag` is set.
    pub fn contains(self, flag: TileFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Set the bits of `flag`.
    pub fn insert(&mut self, flag: TileFlags) {
        self.0 |= flag.0;
    }

    /// Clear the bits of `flag`.
    pub fn remove(&mut self, flag: TileFlags) {
        self.0 &= !flag.0;
    }

    /// Whether a move with delta `(dx, dy)` may enter a tile with these flags.
    pub fn allows_entry(self, dx: i32, dy: i32) -> bool {
        !((dx > 0 && self.contains(Self::NO_ENTRY_POS_X))
            || (dx < 0 && self.contains(Self::NO_ENTRY_NEG_X))
            || (dy > 0 && self.contains(Self::NO_ENTRY_POS_Y))
            || (dy < 0 && self.contains(Self::NO_ENTRY_NEG_Y)))
    }
}

impl std::ops::BitOr for TileFlags {
    type Output = TileFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        TileFlags(self.0 | rhs.0)
    }
}

/// Navigation record for one `(x, y, layer)` cell.
///
/// A tile is traversable iff it is navigable **and** not blocked; use
/// [`TileProperties::is_traversable`] rather than either flag alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileProperties {
    /// Hard obstacle (collision).
    pub is_blocked: bool,
    /// Whether the search may route through this tile.
    pub is_navigable: bool,
    /// Additive cost of entering this tile. Finite and `>= 0`.
    pub traversal_cost: f32,
    /// Ingestion-time classification. Not consulted by the search.
    pub terrain: Terrain,
    /// Directional and gameplay flags.
    pub custom_flags: TileFlags,
}

impl TileProperties {
    /// Cost of entering a tile when nothing else is specified.
    pub const DEFAULT_COST: f32 = 1.0;

    /// Value returned for reads outside the grid: blocked and non-navigable.
    pub const OUT_OF_BOUNDS: TileProperties = TileProperties {
        is_blocked: true,
        is_navigable: false,
        traversal_cost: Self::DEFAULT_COST,
        terrain: Terrain::Unknown,
        custom_flags: TileFlags::NONE,
    };

    /// A traversable tile with the given entry cost.
    pub fn open(traversal_cost: f32) -> Self {
        Self {
            is_navigable: true,
            traversal_cost,
            ..Self::default()
        }
    }

    /// A hard obstacle.
    pub fn wall() -> Self {
        Self {
            is_blocked: true,
            is_navigable: false,
            terrain: Terrain::Wall,
            ..Self::default()
        }
    }

    /// Set the terrain label.
    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Set the custom flags.
    pub fn with_flags(mut self, flags: TileFlags) -> Self {
        self.custom_flags = flags;
        self
    }

    /// Navigable and not blocked.
    pub fn is_traversable(&self) -> bool {
        self.is_navigable && !self.is_blocked
    }

    /// Normalise the cost so the search can rely on it being finite and
    /// non-negative.
    ///
    /// NaN becomes [`Self::DEFAULT_COST`], negative values become `0.0`,
    /// and an infinite cost turns the tile non-navigable.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let cost = self.traversal_cost;
        if cost.is_nan() {
            self.traversal_cost = Self::DEFAULT_COST;
        } else if cost.is_infinite() {
            self.traversal_cost = Self::DEFAULT_COST;
            if cost > 0.0 {
                self.is_navigable = false;
            } else {
                self.traversal_cost = 0.0;
            }
        } else if cost < 0.0 {
            self.traversal_cost = 0.0;
        }
        self
    }
}

impl Default for TileProperties {
    /// Zero-filled tile: not blocked, not yet navigable, unit cost.
    fn default() -> Self {
        Self {
            is_blocked: false,
            is_navigable: false,
            traversal_cost: Self::DEFAULT_COST,
            terrain: Terrain::Unknown,
            custom_flags: TileFlags::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn traversable_requires_both_flags() {
        let mut t = TileProperties::open(1.0);
        assert!(t.is_traversable());
        t.is_blocked = true;
        assert!(!t.is_traversable());
        t.is_blocked = false;
        t.is_navigable = false;
        assert!(!t.is_traversable());
    }

    #[test]
    fn default_and_sentinel_are_not_traversable() {
        assert!(!TileProperties::default().is_traversable());
        assert!(!TileProperties::OUT_OF_BOUNDS.is_traversable());
        assert!(TileProperties::OUT_OF_BOUNDS.is_blocked);
        assert!(!TileProperties::wall().is_traversable());
    }

    #[test]
    fn sanitize_costs() {
        assert_eq!(TileProperties::open(f32::NAN).sanitized().traversal_cost, 1.0);
        assert_eq!(TileProperties::open(-3.0).sanitized().traversal_cost, 0.0);
        let inf = TileProperties::open(f32::INFINITY).sanitized();
        assert!(!inf.is_traversable());
        assert_eq!(inf.traversal_cost, 1.0);
        assert_eq!(
            TileProperties::open(f32::NEG_INFINITY).sanitized().traversal_cost,
            0.0
        );
        assert_eq!(TileProperties::open(2.5).sanitized().traversal_cost, 2.5);
    }

    #[test]
    fn flags_insert_remove() {
        let mut f = TileFlags::NONE;
        f.insert(TileFlags::SAFE_ZONE);
        f.insert(TileFlags::NO_ENTRY_POS_X);
        assert!(f.contains(TileFlags::SAFE_ZONE));
        assert!(f.contains(TileFlags::NO_ENTRY_POS_X | TileFlags::SAFE_ZONE));
        f.remove(TileFlags::SAFE_ZONE);
        assert!(!f.contains(TileFlags::SAFE_ZONE));
    }

    #[test]
    fn one_way_entry() {
        let f = TileFlags::NO_ENTRY_POS_X;
        assert!(!f.allows_entry(1, 0));
        assert!(f.allows_entry(-1, 0));
        assert!(f.allows_entry(0, 1));
        // Hex diagonal with a positive x component is also rejected.
        assert!(!f.allows_entry(1, -1));
        assert!(TileFlags::SAFE_ZONE.allows_entry(1, 1));
    }

    proptest! {
        #[test]
        fn sanitized_cost_is_finite_and_non_negative(cost in proptest::num::f32::ANY) {
            let t = TileProperties::open(cost).sanitized();
            prop_assert!(t.traversal_cost.is_finite());
            prop_assert!(t.traversal_cost >= 0.0);
        }
    }
}
