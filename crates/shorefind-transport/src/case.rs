//! Benchmark inputs and outputs.

use std::fmt;

use shorefind_core::{TerrainMap, Tile};

/// The search that produced a [`BenchmarkResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    #[cfg_attr(feature = "serde", serde(rename = "BFS"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "A*"))]
    AStar,
}

impl Method {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One deployment query: a target tile and the shore of the territory that
/// should reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TestCase {
    pub id: String,
    pub target: Tile,
    /// Flat keys (`y * width + x`) of the territory's shore tiles.
    pub source_shore: Vec<usize>,
    pub source_center: Tile,
    pub source_radius: u32,
}

impl TestCase {
    /// Resolve the territory's flat keys against `map`.
    ///
    /// # Panics
    ///
    /// Panics if a key is outside `map`.
    pub fn territory(&self, map: &TerrainMap) -> Vec<Tile> {
        self.source_shore.iter().map(|&k| map.tile_at_index(k)).collect()
    }
}

/// The record produced for a case that found a deployment source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BenchmarkResult {
    pub id: String,
    pub version: String,
    pub method: Method,
    pub target: Tile,
    pub source_center: Tile,
    pub source_radius: u32,
    pub source: Tile,
    pub visited: u64,
}

impl BenchmarkResult {
    pub(crate) fn new(
        case: &TestCase,
        version: &str,
        method: Method,
        source: Tile,
        visited: u64,
    ) -> Self {
        Self {
            id: case.id.clone(),
            version: version.to_owned(),
            method,
            target: case.target,
            source_center: case.source_center,
            source_radius: case.source_radius,
            source,
            visited,
        }
    }
}
