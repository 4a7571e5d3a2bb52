//! Reduction of a territory's shore tiles to a small set of search sources.

use shorefind_core::{TerrainMap, Tile};

/// Territories this small are searched from every tile.
const WHOLE_TERRITORY_LEN: usize = 5;

/// Lower bound of the sampling stride.
const MIN_STRIDE: usize = 10;

/// Upper bound on the number of sampled tiles, stride permitting.
const MAX_SAMPLES: usize = 50;

/// Pick the source tiles a deployment search starts from.
///
/// The result holds, in order: the territory tile closest to `target` by
/// Manhattan distance (first one wins ties), the tiles that last set the
/// running minimum x, minimum y, maximum x and maximum y (each tile updates at
/// most one of them, checked in that order, and a slot never set is
/// omitted), then every tile whose index is a multiple of
/// `max(10, ⌈n / 50⌉)`. Duplicates are kept. Territories of at most five
/// tiles are returned whole.
///
/// Tiles are re-read from `map`, so stale copies of a tile are refreshed.
pub fn candidate_shore_tiles(map: &TerrainMap, territory: &[Tile], target: Tile) -> Vec<Tile> {
    if territory.len() <= WHOLE_TERRITORY_LEN {
        return territory.iter().map(|t| map.at(t.pos())).collect();
    }

    let target = target.pos();
    let mut closest: Option<(i32, Tile)> = None;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (i32::MAX, i32::MAX, i32::MIN, i32::MIN);
    // min x, min y, max x, max y
    let mut extrema: [Option<Tile>; 4] = [None; 4];

    for &tile in territory {
        let d = tile.pos().manhattan(target);
        if closest.is_none_or(|(best, _)| d < best) {
            closest = Some((d, tile));
        }

        if tile.x < min_x {
            min_x = tile.x;
            extrema[0] = Some(tile);
        } else if tile.y < min_y {
            min_y = tile.y;
            extrema[1] = Some(tile);
        } else if tile.x > max_x {
            max_x = tile.x;
            extrema[2] = Some(tile);
        } else if tile.y > max_y {
            max_y = tile.y;
            extrema[3] = Some(tile);
        }
    }

    let stride = MIN_STRIDE.max(territory.len().div_ceil(MAX_SAMPLES));
    let sampled = territory.iter().step_by(stride).copied();

    closest
        .map(|(_, t)| t)
        .into_iter()
        .chain(extrema.into_iter().flatten())
        .chain(sampled)
        .map(|t| map.at(t.pos()))
        .collect()
}
