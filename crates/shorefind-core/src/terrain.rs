//! Decoding of the packed per-tile terrain byte.
//!
//! Bit layout (most significant first):
//!
//! | Bits | Meaning |
//! |---|---|
//! | 7 | land |
//! | 6 | shoreline: the tile has a 4-neighbour of the opposite type |
//! | 5 | ocean: water belonging to the largest connected water body |
//! | 0-4 | magnitude (elevation for land, depth for water) |

const LAND_FLAG: u8 = 0b1000_0000;
const SHORELINE_FLAG: u8 = 0b0100_0000;
const OCEAN_FLAG: u8 = 0b0010_0000;
const MAGNITUDE_MASK: u8 = 0b0001_1111;

/// The raw terrain byte of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain(pub u8);

impl Terrain {
    /// Build a terrain byte from its decoded parts. `magnitude` is truncated
    /// to its five bits.
    pub const fn encode(land: bool, shoreline: bool, ocean: bool, magnitude: u8) -> Self {
        let mut b = magnitude & MAGNITUDE_MASK;
        if land {
            b |= LAND_FLAG;
        }
        if shoreline {
            b |= SHORELINE_FLAG;
        }
        if ocean {
            b |= OCEAN_FLAG;
        }
        Self(b)
    }

    /// The underlying byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_land(self) -> bool {
        self.0 & LAND_FLAG != 0
    }

    #[inline]
    pub const fn is_water(self) -> bool {
        !self.is_land()
    }

    /// Land or water with a 4-neighbour of the opposite type.
    #[inline]
    pub const fn is_shoreline(self) -> bool {
        self.0 & SHORELINE_FLAG != 0
    }

    /// A land tile on the shoreline.
    #[inline]
    pub const fn is_shore(self) -> bool {
        self.is_land() && self.is_shoreline()
    }

    #[inline]
    pub const fn is_ocean(self) -> bool {
        self.is_water() && self.0 & OCEAN_FLAG != 0
    }

    /// Water that is not connected to the ocean.
    #[inline]
    pub const fn is_lake(self) -> bool {
        self.is_water() && self.0 & OCEAN_FLAG == 0
    }

    /// Elevation of land or depth of water, `0..=31`.
    #[inline]
    pub const fn magnitude(self) -> u8 {
        self.0 & MAGNITUDE_MASK
    }
}

impl From<u8> for Terrain {
    fn from(b: u8) -> Self {
        Self(b)
    }
}

impl From<Terrain> for u8 {
    fn from(t: Terrain) -> Self {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_flags() {
        let shore = Terrain(0b1100_0111);
        assert!(shore.is_land());
        assert!(shore.is_shoreline());
        assert!(shore.is_shore());
        assert!(!shore.is_ocean());
        assert_eq!(shore.magnitude(), 7);

        let ocean = Terrain(0b0010_0011);
        assert!(ocean.is_water());
        assert!(ocean.is_ocean());
        assert!(!ocean.is_lake());
        assert!(!ocean.is_shore());

        let lake = Terrain(0b0100_0001);
        assert!(lake.is_lake());
        assert!(lake.is_shoreline());
        assert!(!lake.is_shore());
    }

    #[test]
    fn ocean_bit_is_ignored_on_land() {
        let t = Terrain(LAND_FLAG | OCEAN_FLAG);
        assert!(!t.is_ocean());
        assert!(!t.is_lake());
    }

    #[test]
    fn encode_matches_decode() {
        let t = Terrain::encode(true, true, false, 12);
        assert_eq!(t.raw(), 0b1100_1100);
        assert!(t.is_shore());
        assert_eq!(t.magnitude(), 12);
        assert_eq!(Terrain::encode(false, false, true, 40).magnitude(), 40 & 0x1f);
    }
}
