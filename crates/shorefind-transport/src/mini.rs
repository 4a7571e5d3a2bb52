//! Searching on the half-resolution map and mapping the result back.
//!
//! [`MiniAStar`] runs a [`BidirectionalAStar`] on the coarse map of a
//! [`MapPair`]. Its path is scaled back up with [`upscale_path`] and its
//! endpoints are repaired with [`fix_extremes`], so callers only ever see
//! full-resolution tiles.

use shorefind_core::{MapPair, Point, TerrainMap, Tile};
use shorefind_paths::{
    BidirectionalAStar, LandPreferredAdapter, SearchResult, TraversalMode, WaterPathAdapter,
};

use crate::config::SearchConfig;

enum Engine<'m> {
    Water(BidirectionalAStar<WaterPathAdapter<'m>>),
    Land(BidirectionalAStar<LandPreferredAdapter<'m>>),
}

/// A deployment search run on the coarse map of a [`MapPair`].
pub struct MiniAStar<'m> {
    maps: &'m MapPair,
    /// Set only for single-source searches, whose path must start on it.
    src: Option<Tile>,
    dst: Tile,
    engine: Engine<'m>,
}

impl<'m> MiniAStar<'m> {
    /// Search from any of `sources` to `dst`, both given at full resolution.
    ///
    /// Returns `None` when `sources` is empty.
    pub fn new(
        maps: &'m MapPair,
        sources: &[Tile],
        dst: Tile,
        config: &SearchConfig,
    ) -> Option<Self> {
        Self::build(maps, sources, None, dst, config)
    }

    /// Search from the single tile `src`. The reconstructed path starts on
    /// `src` itself rather than on its upscaled coarse tile.
    pub fn single(
        maps: &'m MapPair,
        src: Tile,
        dst: Tile,
        config: &SearchConfig,
    ) -> Option<Self> {
        let src = maps.full().at(src.pos());
        Self::build(maps, &[src], Some(src), dst, config)
    }

    fn build(
        maps: &'m MapPair,
        sources: &[Tile],
        src: Option<Tile>,
        dst: Tile,
        config: &SearchConfig,
    ) -> Option<Self> {
        let mini = maps.mini();
        let coarse: Vec<Tile> = sources.iter().map(|s| mini.at(s.pos().half())).collect();
        let coarse_dst = mini.at(dst.pos().half());
        let budget = config.budget();
        let penalty = config.direction_change_penalty;

        let engine = match config.mode {
            TraversalMode::WaterPath => {
                let graph = WaterPathAdapter::new(mini);
                let search = BidirectionalAStar::new(graph, &coarse, coarse_dst, budget)?;
                Engine::Water(search.with_direction_change_penalty(penalty))
            }
            TraversalMode::LandPreferred => {
                let graph = LandPreferredAdapter::with_water_penalty(mini, config.water_penalty);
                let search = BidirectionalAStar::new(graph, &coarse, coarse_dst, budget)?;
                Engine::Land(search.with_direction_change_penalty(penalty))
            }
        };

        Some(Self {
            maps,
            src,
            dst: maps.full().at(dst.pos()),
            engine,
        })
    }

    /// Advance the coarse search by at most one iteration budget.
    pub fn compute(&mut self) -> SearchResult {
        match &mut self.engine {
            Engine::Water(s) => s.compute(),
            Engine::Land(s) => s.compute(),
        }
    }

    pub fn visited(&self) -> u64 {
        match &self.engine {
            Engine::Water(s) => s.visited(),
            Engine::Land(s) => s.visited(),
        }
    }

    /// The full-resolution path from the sources to the destination.
    ///
    /// Empty unless the last [`compute`](Self::compute) call found a path.
    pub fn reconstruct_path(&self) -> Vec<Tile> {
        let coarse = match &self.engine {
            Engine::Water(s) => s.reconstruct_path(),
            Engine::Land(s) => s.reconstruct_path(),
        };
        if coarse.is_empty() {
            return Vec::new();
        }
        let coarse: Vec<Point> = coarse.iter().map(|t| t.pos()).collect();
        fix_extremes(upscale_path(&coarse, self.maps.full()), self.dst, self.src)
    }
}

/// Scale a coarse path up by two and fill the gaps between consecutive
/// points.
///
/// Between two scaled points `max(|dx|, |dy|) - 1` intermediate tiles are
/// interpolated, each coordinate rounded half-up. Every point must map into
/// `map`, which holds for a path on the coarse map of `map`.
pub fn upscale_path(path: &[Point], map: &TerrainMap) -> Vec<Tile> {
    let mut out = Vec::with_capacity(path.len() * 2);
    let scaled: Vec<Point> = path.iter().map(|p| p.doubled()).collect();

    for pair in scaled.windows(2) {
        let (cur, next) = (pair[0], pair[1]);
        out.push(map.at(cur));
        let d = next - cur;
        let steps = d.x.abs().max(d.y.abs());
        for step in 1..steps {
            let p = Point::new(lerp(cur.x, d.x, step, steps), lerp(cur.y, d.y, step, steps));
            out.push(map.at(p));
        }
    }
    if let Some(&last) = scaled.last() {
        out.push(map.at(last));
    }
    out
}

/// `round(a + d * step / steps)` with halves rounded up, in integers.
#[inline]
fn lerp(a: i32, d: i32, step: i32, steps: i32) -> i32 {
    (2 * (a * steps + d * step) + steps).div_euclid(2 * steps)
}

/// Make `path` start at `src` (when given) and end at `dst`.
///
/// A missing endpoint is added, and tiles before `src` or after `dst` are
/// trimmed. Tiles compare by coordinate.
pub fn fix_extremes(mut path: Vec<Tile>, dst: Tile, src: Option<Tile>) -> Vec<Tile> {
    if let Some(src) = src {
        match path.iter().position(|t| *t == src) {
            None => path.insert(0, src),
            Some(i) => {
                path.drain(..i);
            }
        }
    }
    match path.iter().position(|t| *t == dst) {
        None => path.push(dst),
        Some(i) => path.truncate(i + 1),
    }
    path
}
