//! The [`Tile`] value type: one decoded map cell.

use std::hash::{Hash, Hasher};

use crate::geom::Point;
use crate::terrain::Terrain;

/// An immutable decoded map tile.
///
/// Identity is the coordinate: two tiles compare equal (and hash equal)
/// whenever their `x` and `y` match, which makes lookups of the same cell on
/// the same map interchangeable in sets and maps.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub is_land: bool,
    pub is_ocean: bool,
    pub is_shore: bool,
    pub raw: u8,
}

impl Tile {
    /// Decode the tile at `(x, y)` from its raw terrain byte.
    pub const fn from_byte(x: i32, y: i32, raw: u8) -> Self {
        let t = Terrain(raw);
        Self {
            x,
            y,
            is_land: t.is_land(),
            is_ocean: t.is_ocean(),
            is_shore: t.is_shore(),
            raw,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn terrain(&self) -> Terrain {
        Terrain(self.raw)
    }

    #[inline]
    pub const fn is_water(&self) -> bool {
        !self.is_land
    }

    /// Whether the tile touches the opposite terrain type (land or water).
    #[inline]
    pub const fn is_shoreline(&self) -> bool {
        self.terrain().is_shoreline()
    }

    #[inline]
    pub const fn magnitude(&self) -> u8 {
        self.terrain().magnitude()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
