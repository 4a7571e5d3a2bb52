//! [`GraphAdapter`] implementations over a [`TerrainMap`].
//!
//! Both adapters borrow the map, so the same types serve the full map and its
//! half-resolution reduction.

use shorefind_core::{Point, TerrainMap, Tile};

use crate::traits::GraphAdapter;

/// Extra cost of entering water when land is preferred.
pub const WATER_PENALTY: i32 = 3;

/// Magnitudes below this are lowland and cost more to cross.
const LOWLAND_MAGNITUDE: u8 = 10;

/// Base cost of entering a tile: 2 for low magnitudes, 1 otherwise.
#[inline]
pub fn tile_cost(tile: &Tile) -> i32 {
    if tile.magnitude() < LOWLAND_MAGNITUDE { 2 } else { 1 }
}

/// Which adapter a search runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TraversalMode {
    /// Ships: only water can be entered.
    #[default]
    WaterPath,
    /// Land units: water is penalised and only entered at the shoreline.
    LandPreferred,
}

#[inline]
fn push_neighbors(map: &TerrainMap, node: Tile, buf: &mut Vec<Tile>) {
    buf.extend(map.neighbors(node.pos()));
}

// ---------------------------------------------------------------------------
// WaterPathAdapter
// ---------------------------------------------------------------------------

/// Adapter for ship paths: a step is allowed only onto water.
#[derive(Debug, Clone, Copy)]
pub struct WaterPathAdapter<'m> {
    map: &'m TerrainMap,
}

impl<'m> WaterPathAdapter<'m> {
    pub fn new(map: &'m TerrainMap) -> Self {
        Self { map }
    }

    #[inline]
    pub fn map(&self) -> &'m TerrainMap {
        self.map
    }
}

impl GraphAdapter for WaterPathAdapter<'_> {
    type Node = Tile;

    fn neighbors(&self, node: Tile, buf: &mut Vec<Tile>) {
        push_neighbors(self.map, node, buf);
    }

    fn cost(&self, node: Tile) -> i32 {
        tile_cost(&node)
    }

    fn position(&self, node: Tile) -> Point {
        node.pos()
    }

    fn is_traversable(&self, _from: Tile, to: Tile) -> bool {
        to.is_water()
    }

    fn node_count(&self) -> usize {
        self.map.len()
    }

    fn index(&self, node: Tile) -> usize {
        self.map.key(&node)
    }

    fn node(&self, index: usize) -> Tile {
        self.map.tile_at_index(index)
    }
}

// ---------------------------------------------------------------------------
// LandPreferredAdapter
// ---------------------------------------------------------------------------

/// Adapter for land paths that may cross water.
///
/// Water costs [`WATER_PENALTY`] more and can only be entered when one side
/// of the step lies on the shoreline.
#[derive(Debug, Clone, Copy)]
pub struct LandPreferredAdapter<'m> {
    map: &'m TerrainMap,
    water_penalty: i32,
}

impl<'m> LandPreferredAdapter<'m> {
    pub fn new(map: &'m TerrainMap) -> Self {
        Self::with_water_penalty(map, WATER_PENALTY)
    }

    pub fn with_water_penalty(map: &'m TerrainMap, water_penalty: i32) -> Self {
        Self { map, water_penalty }
    }

    #[inline]
    pub fn map(&self) -> &'m TerrainMap {
        self.map
    }
}

impl GraphAdapter for LandPreferredAdapter<'_> {
    type Node = Tile;

    fn neighbors(&self, node: Tile, buf: &mut Vec<Tile>) {
        push_neighbors(self.map, node, buf);
    }

    fn cost(&self, node: Tile) -> i32 {
        let base = tile_cost(&node);
        if node.is_land { base } else { base + self.water_penalty }
    }

    fn position(&self, node: Tile) -> Point {
        node.pos()
    }

    fn is_traversable(&self, from: Tile, to: Tile) -> bool {
        to.is_land || from.is_shoreline() || to.is_shoreline()
    }

    fn node_count(&self) -> usize {
        self.map.len()
    }

    fn index(&self, node: Tile) -> usize {
        self.map.key(&node)
    }

    fn node(&self, index: usize) -> Tile {
        self.map.tile_at_index(index)
    }
}
