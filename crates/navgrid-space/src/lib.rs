//! Grid projections for navgrid.
//!
//! This crate defines the [`CoordinateTransform`] trait, the single seam
//! through which the path search and the sampler see grid topology, along
//! with one strategy per [`Projection`](navgrid_core::Projection).
//!
//! # Strategies
//!
//! - [`Orthogonal`]: square tiles, 4-connected, Manhattan heuristic
//! - [`Isometric`]: diamond tiles, 4-connected, Chebyshev heuristic
//! - [`HexAxial`]: pointy-top hexes in axial coordinates, 6-connected,
//!   axial distance heuristic
//!
//! The strategy is picked once per grid by [`transform_for`] and used
//! through a `Box<dyn CoordinateTransform>` afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hex_axial;
pub mod isometric;
pub mod orthogonal;
pub mod transform;

#[cfg(test)]
pub(crate) mod compliance;

pub use glam::Vec2;
pub use hex_axial::HexAxial;
pub use isometric::Isometric;
pub use orthogonal::Orthogonal;
pub use transform::{transform_for, CoordinateTransform, Neighbours};
