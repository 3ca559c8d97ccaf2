//! Rejection sampling of navigable world points.

use navgrid_core::LayerId;
use navgrid_space::{CoordinateTransform, Vec2};
use navgrid_store::TileStore;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::trace;

/// Picks uniformly distributed world points on traversable tiles.
///
/// Candidates are drawn uniformly over the disk: the radius is
/// `sqrt(u) · radius` so that areal density is constant. A candidate is
/// accepted when the tile containing it is traversable on the requested
/// layer. Failure after the attempt budget is an ordinary outcome on
/// obstructed maps.
#[derive(Clone, Copy)]
pub struct RandomNavigableSampler<'a> {
    store: &'a TileStore,
    transform: &'a dyn CoordinateTransform,
}

impl std::fmt::Debug for RandomNavigableSampler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomNavigableSampler")
            .field("projection", &self.transform.projection())
            .finish()
    }
}

impl<'a> RandomNavigableSampler<'a> {
    /// A sampler over `store` using `transform` to locate tiles.
    pub fn new(store: &'a TileStore, transform: &'a dyn CoordinateTransform) -> Self {
        Self { store, transform }
    }

    /// Draw up to `max_attempts` candidates within `radius` of `center`
    /// and return the first one that lands on a traversable tile.
    ///
    /// Returns `None` if every attempt fails, if `max_attempts` is zero, or
    /// if `radius` is negative or not finite.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        center: Vec2,
        radius: f32,
        max_attempts: u32,
        layer: LayerId,
        rng: &mut R,
    ) -> Option<Vec2> {
        if !radius.is_finite() || radius < 0.0 || !center.is_finite() {
            return None;
        }
        for _ in 0..max_attempts {
            let candidate = center + Self::disk_offset(radius, rng);
            let cell = self.transform.world_to_grid(candidate);
            if self.store.is_navigable(cell, layer) {
                return Some(candidate);
            }
        }
        trace!(
            center = ?center,
            radius,
            max_attempts,
            %layer,
            "no navigable point found"
        );
        None
    }

    /// A uniformly distributed offset within a disk of `radius`.
    pub fn disk_offset<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec2 {
        let angle = rng.gen_range(0.0..TAU);
        let r = rng.gen::<f32>().sqrt() * radius;
        Vec2::new(angle.cos(), angle.sin()) * r
    }
}
