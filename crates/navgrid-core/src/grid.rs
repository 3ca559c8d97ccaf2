//! Grid geometry configuration.

use crate::error::StoreError;
use crate::id::LayerId;
use std::fmt;

/// Grid topology and its visual arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Square tiles, 4-connected (N/S/E/W).
    #[default]
    Orthogonal,
    /// Diamond tiles, 4-connected along the diamond edges.
    Isometric,
    /// Pointy-top hexagons in axial coordinates, 6-connected.
    HexAxial,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orthogonal => write!(f, "orthogonal"),
            Self::Isometric => write!(f, "isometric"),
            Self::HexAxial => write!(f, "hex-axial"),
        }
    }
}

/// Geometry of a loaded level. Immutable for the lifetime of the level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Tile count along x (columns, or axial `q`).
    pub width: u32,
    /// Tile count along y (rows, or axial `r`).
    pub height: u32,
    /// Topology of the grid.
    pub projection: Projection,
    /// Width of a tile in world units.
    pub tile_width: f32,
    /// Height of a tile in world units.
    pub tile_height: f32,
    /// Number of navigability layers, in `[1, 8]`.
    pub layers: u8,
}

impl GridConfig {
    /// Maximum tile count per axis: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// A single-layer grid with unit-sized tiles.
    pub fn new(width: u32, height: u32, projection: Projection) -> Self {
        Self {
            width,
            height,
            projection,
            tile_width: 1.0,
            tile_height: 1.0,
            layers: 1,
        }
    }

    /// Set the world size of a tile.
    pub fn with_tile_size(mut self, tile_width: f32, tile_height: f32) -> Self {
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self
    }

    /// Set the number of layers.
    pub fn with_layers(mut self, layers: u8) -> Self {
        self.layers = layers;
        self
    }

    /// Number of tiles in one layer.
    pub fn tile_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `layer` names one of the configured layers.
    pub fn has_layer(&self, layer: LayerId) -> bool {
        layer.0 < self.layers
    }

    /// Check the structural invariants of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDimensions`] if either axis is zero or
    /// exceeds [`GridConfig::MAX_DIM`], if `layers` is outside `[1, 8]`, or
    /// if a tile size is not finite and positive.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.width == 0 || self.height == 0 {
            return Err(StoreError::InvalidDimensions {
                reason: format!("grid must be non-empty, got {}x{}", self.width, self.height),
            });
        }
        if self.width > Self::MAX_DIM || self.height > Self::MAX_DIM {
            return Err(StoreError::InvalidDimensions {
                reason: format!(
                    "grid {}x{} exceeds the per-axis maximum of {}",
                    self.width,
                    self.height,
                    Self::MAX_DIM
                ),
            });
        }
        if self.layers == 0 || self.layers > LayerId::MAX_LAYERS {
            return Err(StoreError::InvalidDimensions {
                reason: format!(
                    "layer count must be in [1, {}], got {}",
                    LayerId::MAX_LAYERS,
                    self.layers
                ),
            });
        }
        for (name, size) in [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(StoreError::InvalidDimensions {
                    reason: format!("{name} must be finite and positive, got {size}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let cfg = GridConfig::new(5, 5, Projection::Orthogonal).with_layers(3);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.tile_count(), 25);
        assert!(cfg.has_layer(LayerId::UNDERGROUND));
        assert!(!cfg.has_layer(LayerId(3)));
    }

    #[test]
    fn zero_axis_rejected() {
        let cfg = GridConfig::new(0, 5, Projection::Orthogonal);
        assert!(matches!(
            cfg.validate(),
            Err(StoreError::InvalidDimensions { .. })
        ));
        let cfg = GridConfig::new(5, 0, Projection::HexAxial);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn layer_count_bounds() {
        let base = GridConfig::new(4, 4, Projection::Isometric);
        assert!(base.with_layers(0).validate().is_err());
        assert!(base.with_layers(8).validate().is_ok());
        assert!(base.with_layers(9).validate().is_err());
    }

    #[test]
    fn bad_tile_size_rejected() {
        let base = GridConfig::new(4, 4, Projection::Orthogonal);
        assert!(base.with_tile_size(0.0, 1.0).validate().is_err());
        assert!(base.with_tile_size(1.0, -2.0).validate().is_err());
        assert!(base.with_tile_size(f32::NAN, 1.0).validate().is_err());
        assert!(base.with_tile_size(32.0, 16.0).validate().is_ok());
    }

    #[test]
    fn oversized_axis_rejected() {
        let cfg = GridConfig::new(GridConfig::MAX_DIM + 1, 1, Projection::Orthogonal);
        assert!(cfg.validate().is_err());
    }
}
