//! Strongly-typed identifiers: grid coordinates, layers and generations.

use std::fmt;

/// A cell position on the navigation grid.
///
/// Coordinates are signed so that neighbour offsets and world-to-grid
/// conversions can produce (and callers can pass) positions outside the
/// grid without wrapping; bounds are checked by the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column (or axial `q` on hex grids).
    pub x: i32,
    /// Row (or axial `r` on hex grids).
    pub y: i32,
}

impl GridCoord {
    /// Create a coordinate from its two components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate displaced by `(dx, dy)`.
    ///
    /// Saturates instead of overflowing so that neighbour enumeration on
    /// extreme coordinates stays well defined.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Identifies an independent navigability plane.
///
/// Layers share the grid geometry but carry their own tile properties, so a
/// wall can block [`LayerId::GROUND`] while leaving [`LayerId::AIR`] open.
/// Ids above [`LayerId::UNDERGROUND`] are free for game-specific layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u8);

impl LayerId {
    /// Walking agents.
    pub const GROUND: LayerId = LayerId(0);
    /// Flying agents.
    pub const AIR: LayerId = LayerId(1);
    /// Burrowing agents and tunnels.
    pub const UNDERGROUND: LayerId = LayerId(2);

    /// Maximum number of layers a grid may carry.
    pub const MAX_LAYERS: u8 = 8;

    /// The layer as a `usize` index into per-layer storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for LayerId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Monotonic mutation counter for the tile store.
///
/// Incremented on every effective tile write. Consumers that cache paths
/// stamp them with the generation they were computed at and treat a newer
/// generation as "possibly stale".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_saturates_at_extremes() {
        let c = GridCoord::new(i32::MAX, i32::MIN);
        assert_eq!(c.offset(1, -1), c);
        assert_eq!(GridCoord::new(2, 3).offset(-1, 1), GridCoord::new(1, 4));
    }

    #[test]
    fn coord_display_and_from_tuple() {
        let c: GridCoord = (4, -2).into();
        assert_eq!(c.to_string(), "(4, -2)");
    }

    #[test]
    fn named_layers_are_distinct() {
        assert_ne!(LayerId::GROUND, LayerId::AIR);
        assert_ne!(LayerId::AIR, LayerId::UNDERGROUND);
        assert_eq!(LayerId::UNDERGROUND.index(), 2);
        assert!(LayerId::UNDERGROUND.0 < LayerId::MAX_LAYERS);
    }

    #[test]
    fn generation_advances() {
        let g = Generation::default();
        assert_eq!(g.next(), Generation(1));
        assert!(g.next() > g);
    }
}
