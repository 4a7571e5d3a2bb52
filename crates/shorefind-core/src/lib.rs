//! **shorefind-core**: terrain maps for shore-deployment pathfinding.
//!
//! This crate provides the types shared by the *shorefind* crates: geometry
//! primitives, the packed terrain byte, decoded [`Tile`]s, and the immutable
//! [`TerrainMap`] grid with its half-resolution [`MapPair`] companion.

pub mod error;
pub mod geom;
pub mod map;
pub mod terrain;
pub mod tile;

pub use error::MapError;
pub use geom::{Point, Range};
pub use map::{MapPair, TerrainMap};
pub use terrain::Terrain;
pub use tile::Tile;
