//! The [`TerrainMap`] grid and the full/coarse [`MapPair`].
//!
//! A `TerrainMap` is an immutable row-major array of terrain bytes. Tiles are
//! decoded on access, so any two lookups of the same coordinate yield equal
//! [`Tile`]s. Cells are keyed by `y * width + x` wherever a set or map of
//! tiles is needed.

use crate::error::MapError;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;
use crate::tile::Tile;

/// An immutable grid of terrain bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    name: String,
    width: i32,
    height: i32,
    data: Vec<u8>,
}

impl TerrainMap {
    /// Wrap raw terrain bytes whose flags were precomputed by the map
    /// generator.
    ///
    /// Fails when `data` does not hold exactly `width * height` bytes.
    pub fn from_bytes(
        name: impl Into<String>,
        width: i32,
        height: i32,
        data: Vec<u8>,
    ) -> Result<Self, MapError> {
        let name = name.into();
        let width = width.max(0);
        let height = height.max(0);
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(MapError::DataLength {
                name,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            name,
            width,
            height,
            data,
        })
    }

    /// Build a map from a land mask.
    ///
    /// `terrain` returns `(is_land, magnitude)` for each coordinate. The
    /// shoreline flag is set on every tile with a 4-neighbour of the other
    /// type, and the ocean flag on the largest 4-connected body of water
    /// (the first one found in row-major order wins ties).
    pub fn from_terrain(
        name: impl Into<String>,
        width: i32,
        height: i32,
        terrain: impl Fn(Point) -> (bool, u8),
    ) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let bounds = Range::new(0, 0, width, height);
        let cells: Vec<(bool, u8)> = bounds.iter().map(terrain).collect();
        let w = width as usize;
        let key = |p: Point| p.y as usize * w + p.x as usize;

        let ocean = largest_water_body(bounds, &cells);
        let data = bounds
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (land, magnitude) = cells[i];
                let shoreline = p
                    .neighbors_4()
                    .into_iter()
                    .filter(|&n| bounds.contains(n))
                    .any(|n| cells[key(n)].0 != land);
                Terrain::encode(land, shoreline, ocean[i], magnitude).raw()
            })
            .collect();

        Self {
            name: name.into(),
            width,
            height,
            data,
        }
    }

    /// Reduce the map to half its linear resolution.
    ///
    /// Each coarse tile covers a 2×2 block and is water if any in-bounds
    /// tile of the block is water, so one-tile straits stay open. The
    /// magnitude is taken from the block's top-left tile. Odd dimensions
    /// round up.
    pub fn half_resolution(&self) -> Self {
        let cw = (self.width + 1) / 2;
        let ch = (self.height + 1) / 2;
        Self::from_terrain(format!("{}-mini", self.name), cw, ch, |c| {
            let origin = c.doubled();
            let land = [(0, 0), (1, 0), (0, 1), (1, 1)]
                .into_iter()
                .filter_map(|(dx, dy)| self.try_get(origin.shift(dx, dy)))
                .all(|t| t.is_land);
            (land, self.at(origin).magnitude())
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the map as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat key `y * width + x` of `p`, or `None` outside the map.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Flat key of a tile of this map.
    #[inline]
    pub fn key(&self, tile: &Tile) -> usize {
        tile.y as usize * self.width as usize + tile.x as usize
    }

    /// The tile at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is outside the map.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.at(Point::new(x, y))
    }

    /// The tile at `p`.
    ///
    /// # Panics
    ///
    /// Panics when `p` is outside the map.
    pub fn at(&self, p: Point) -> Tile {
        match self.try_get(p) {
            Some(t) => t,
            None => panic!(
                "x: {} or y: {} is out of bounds for map {}",
                p.x, p.y, self.name
            ),
        }
    }

    /// The tile at `p`, or `None` outside the map.
    #[inline]
    pub fn try_get(&self, p: Point) -> Option<Tile> {
        let i = self.index(p)?;
        Some(Tile::from_byte(p.x, p.y, self.data[i]))
    }

    /// The tile with flat key `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not a key of this map.
    pub fn tile_at_index(&self, index: usize) -> Tile {
        let w = self.width.max(1) as usize;
        let p = Point::new((index % w) as i32, (index / w) as i32);
        if index >= self.data.len() {
            panic!("tile index {index} is out of bounds for map {}", self.name);
        }
        Tile::from_byte(p.x, p.y, self.data[index])
    }

    /// In-bounds 4-neighbours of `p`, in the order north, east, south, west.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Tile> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter_map(move |n| self.try_get(n))
    }

    /// Row-major iterator over every tile.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.bounds()
            .iter()
            .zip(self.data.iter())
            .map(|(p, &b)| Tile::from_byte(p.x, p.y, b))
    }

    /// Number of land tiles.
    pub fn num_land_tiles(&self) -> usize {
        self.data
            .iter()
            .filter(|&&b| Terrain(b).is_land())
            .count()
    }
}

/// Mask of the largest 4-connected water component, by iterative DFS.
fn largest_water_body(bounds: Range, cells: &[(bool, u8)]) -> Vec<bool> {
    let w = bounds.width() as usize;
    let mut labels = vec![-1i32; cells.len()];
    let mut stack = Vec::new();
    let mut label = 0;
    let mut best: Option<(i32, usize)> = None;

    for start in 0..cells.len() {
        if cells[start].0 || labels[start] >= 0 {
            continue;
        }
        let mut size = 0usize;
        labels[start] = label;
        stack.push(start);
        while let Some(ci) = stack.pop() {
            size += 1;
            let cp = Point::new((ci % w) as i32, (ci / w) as i32);
            for n in cp.neighbors_4() {
                if !bounds.contains(n) {
                    continue;
                }
                let ni = n.y as usize * w + n.x as usize;
                if !cells[ni].0 && labels[ni] < 0 {
                    labels[ni] = label;
                    stack.push(ni);
                }
            }
        }
        if best.is_none_or(|(_, s)| size > s) {
            best = Some((label, size));
        }
        label += 1;
    }

    match best {
        Some((ocean, _)) => labels.iter().map(|&l| l == ocean).collect(),
        None => vec![false; cells.len()],
    }
}

// ---------------------------------------------------------------------------
// MapPair
// ---------------------------------------------------------------------------

/// A full-resolution map together with its half-resolution counterpart.
#[derive(Debug, Clone)]
pub struct MapPair {
    full: TerrainMap,
    mini: TerrainMap,
}

impl MapPair {
    /// Pair a map with a precomputed coarse map.
    ///
    /// The coarse map must measure `⌈width/2⌉ × ⌈height/2⌉`.
    pub fn new(full: TerrainMap, mini: TerrainMap) -> Result<Self, MapError> {
        let expected = Point::new((full.width + 1) / 2, (full.height + 1) / 2);
        if mini.size() != expected {
            return Err(MapError::CoarseSize {
                name: full.name.clone(),
                expected,
                actual: mini.size(),
            });
        }
        Ok(Self { full, mini })
    }

    /// Pair a map with its [`half_resolution`](TerrainMap::half_resolution)
    /// reduction.
    pub fn from_full(full: TerrainMap) -> Self {
        let mini = full.half_resolution();
        Self { full, mini }
    }

    #[inline]
    pub fn full(&self) -> &TerrainMap {
        &self.full
    }

    #[inline]
    pub fn mini(&self) -> &TerrainMap {
        &self.mini
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Water everywhere except a land column at `x == col` for `y < rows`.
    fn column_map(w: i32, h: i32, col: i32, rows: i32) -> TerrainMap {
        TerrainMap::from_terrain("column", w, h, |p| (p.x == col && p.y < rows, 0))
    }

    #[test]
    fn from_bytes_checks_length() {
        let err = TerrainMap::from_bytes("bad", 3, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            MapError::DataLength {
                name: "bad".into(),
                expected: 6,
                actual: 5,
            }
        );
        let ok = TerrainMap::from_bytes("ok", 3, 2, vec![0; 6]).unwrap();
        assert_eq!(ok.size(), Point::new(3, 2));
        assert_eq!(ok.len(), 6);
    }

    #[test]
    fn get_decodes_raw_bytes() {
        let mut data = vec![0u8; 4];
        data[3] = 0b1100_0101;
        let map = TerrainMap::from_bytes("m", 2, 2, data).unwrap();
        let t = map.get(1, 1);
        assert!(t.is_land && t.is_shore);
        assert_eq!(t.magnitude(), 5);
        assert_eq!(map.key(&t), 3);
        assert_eq!(map.tile_at_index(3), t);
    }

    #[test]
    #[should_panic(expected = "out of bounds for map m")]
    fn get_out_of_bounds_panics() {
        let map = TerrainMap::from_bytes("m", 2, 2, vec![0; 4]).unwrap();
        map.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn tile_at_index_out_of_bounds_panics() {
        let map = TerrainMap::from_bytes("m", 2, 2, vec![0; 4]).unwrap();
        map.tile_at_index(4);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let map = column_map(3, 3, 1, 3);
        let corner: Vec<_> = map.neighbors(Point::ZERO).map(|t| t.pos()).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        let centre: Vec<_> = map.neighbors(Point::new(1, 1)).map(|t| t.pos()).collect();
        assert_eq!(
            centre,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn from_terrain_marks_shoreline_on_both_sides() {
        let map = column_map(5, 5, 2, 5);
        let land = map.get(2, 2);
        assert!(land.is_land && land.is_shore);
        let coast = map.get(1, 2);
        assert!(!coast.is_land && coast.is_shoreline() && !coast.is_shore);
        let open = map.get(0, 2);
        assert!(!open.is_shoreline());
        assert_eq!(map.num_land_tiles(), 5);
    }

    #[test]
    fn ocean_is_largest_water_body() {
        // Column at x == 1 splits a 1-wide lake from a 3-wide ocean.
        let map = column_map(5, 4, 1, 4);
        assert!(map.get(0, 0).terrain().is_lake());
        assert!(map.get(3, 0).is_ocean);
        assert!(map.get(4, 3).is_ocean);
    }

    #[test]
    fn half_resolution_keeps_water_open() {
        // A single water tile in each 2x2 block keeps the coarse tile water.
        let map = TerrainMap::from_terrain("m", 4, 4, |p| (!(p.x == 1 && p.y == 1), 3));
        let mini = map.half_resolution();
        assert_eq!(mini.size(), Point::new(2, 2));
        assert!(!mini.get(0, 0).is_land);
        assert!(mini.get(1, 0).is_land);
        assert!(mini.get(1, 1).is_land);
        assert_eq!(mini.get(1, 1).magnitude(), 3);
        assert_eq!(mini.name(), "m-mini");
    }

    #[test]
    fn half_resolution_rounds_odd_sizes_up() {
        let map = column_map(5, 3, 0, 0);
        assert_eq!(map.half_resolution().size(), Point::new(3, 2));
    }

    #[test]
    fn map_pair_checks_coarse_size() {
        let full = column_map(10, 10, 2, 10);
        let good = column_map(5, 5, 1, 5);
        assert!(MapPair::new(full.clone(), good).is_ok());

        let bad = column_map(4, 5, 1, 5);
        let err = MapPair::new(full.clone(), bad).unwrap_err();
        assert!(matches!(err, MapError::CoarseSize { expected, .. } if expected == Point::new(5, 5)));

        let pair = MapPair::from_full(full);
        assert_eq!(pair.mini().size(), Point::new(5, 5));
    }
}
