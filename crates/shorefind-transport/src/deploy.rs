//! Choosing the shore tile a transport deploys from.
//!
//! Two methods are compared: the mini-map bidirectional A* of
//! [`best_shore_deployment_source`] and the full-resolution reverse BFS of
//! [`bfs_deployment_source`]. The `run_*` functions wrap them into benchmark
//! records.

use std::collections::HashSet;

use shorefind_core::{MapPair, TerrainMap, Tile};
use shorefind_paths::{BfsOutcome, SearchStatus, WaterPathAdapter, reverse_bfs};

use crate::candidates::candidate_shore_tiles;
use crate::case::{BenchmarkResult, Method, TestCase};
use crate::config::SearchConfig;
use crate::error::SkipReason;
use crate::mini::MiniAStar;

/// A chosen deployment tile and the work spent finding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub source: Tile,
    pub visited: u64,
}

/// Find the territory shore tile to deploy from towards `target`.
///
/// The territory is reduced to a few candidates, which are searched from on
/// the coarse map. The deployment tile is the first 4-neighbor of the path's
/// first waypoint that is a shore tile of `territory`.
pub fn best_shore_deployment_source(
    maps: &MapPair,
    territory: &[Tile],
    target: Tile,
    config: &SearchConfig,
) -> Result<Deployment, SkipReason> {
    let full = maps.full();
    let candidates = candidate_shore_tiles(full, territory, target);
    let mut search =
        MiniAStar::new(maps, &candidates, target, config).ok_or(SkipReason::EmptyTerritory)?;

    let mut result = search.compute();
    while result.status == SearchStatus::Pending {
        result = search.compute();
    }
    log::debug!(
        "mini search from {} candidates of {}: {} after {} visits",
        candidates.len(),
        territory.len(),
        result.status,
        result.visited,
    );
    if result.status != SearchStatus::Found {
        return Err(SkipReason::PathNotFound(result.status));
    }

    let path = search.reconstruct_path();
    let waypoint = path.first().copied().ok_or(SkipReason::EmptyPath)?;

    let keys: HashSet<usize> = territory.iter().map(|t| full.key(t)).collect();
    full.neighbors(waypoint.pos())
        .find(|n| n.is_shore && keys.contains(&full.key(n)))
        .map(|source| Deployment {
            source,
            visited: result.visited,
        })
        .ok_or(SkipReason::NoDeploymentTile {
            waypoint: waypoint.pos(),
        })
}

/// Find the territory tile closest to `target` by reverse BFS over water.
pub fn bfs_deployment_source(
    map: &TerrainMap,
    territory: &[Tile],
    target: Tile,
) -> Result<Deployment, SkipReason> {
    if territory.is_empty() {
        return Err(SkipReason::EmptyTerritory);
    }
    let water = WaterPathAdapter::new(map);
    match reverse_bfs(&water, map.at(target.pos()), territory) {
        BfsOutcome::Found { source, visited } => {
            log::debug!("reverse BFS reached {} after {visited} tiles", source.pos());
            Ok(Deployment {
                source,
                visited: visited as u64,
            })
        }
        BfsOutcome::Unreachable { seen } => Err(SkipReason::Unreachable { visited: seen.len() }),
    }
}

/// Run one case with [`best_shore_deployment_source`].
///
/// Returns `None`, after logging why, when no source was found.
pub fn run_astar_case(
    maps: &MapPair,
    case: &TestCase,
    version: &str,
    config: &SearchConfig,
) -> Option<BenchmarkResult> {
    let territory = case.territory(maps.full());
    let outcome = best_shore_deployment_source(maps, &territory, case.target, config);
    record(case, version, Method::AStar, outcome)
}

/// Run one case with [`bfs_deployment_source`].
///
/// Returns `None`, after logging why, when no source was found.
pub fn run_bfs_case(map: &TerrainMap, case: &TestCase, version: &str) -> Option<BenchmarkResult> {
    let territory = case.territory(map);
    let outcome = bfs_deployment_source(map, &territory, case.target);
    record(case, version, Method::Bfs, outcome)
}

fn record(
    case: &TestCase,
    version: &str,
    method: Method,
    outcome: Result<Deployment, SkipReason>,
) -> Option<BenchmarkResult> {
    match outcome {
        Ok(d) => Some(BenchmarkResult::new(case, version, method, d.source, d.visited)),
        Err(reason) => {
            log::warn!("case {} ({method}) skipped: {reason}", case.id);
            None
        }
    }
}

/// Run every case in order with the mini-map A*.
pub fn run_astar_benchmark(
    maps: &MapPair,
    cases: &[TestCase],
    version: &str,
    config: &SearchConfig,
) -> Vec<BenchmarkResult> {
    run_all(maps.full(), cases, Method::AStar, |case| {
        run_astar_case(maps, case, version, config)
    })
}

/// Run every case in order with the reverse BFS.
pub fn run_bfs_benchmark(map: &TerrainMap, cases: &[TestCase], version: &str) -> Vec<BenchmarkResult> {
    run_all(map, cases, Method::Bfs, |case| run_bfs_case(map, case, version))
}

fn run_all(
    map: &TerrainMap,
    cases: &[TestCase],
    method: Method,
    mut run: impl FnMut(&TestCase) -> Option<BenchmarkResult>,
) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    for (i, case) in cases.iter().enumerate() {
        if let Some(res) = run(case) {
            log::info!(
                "Completed test {} of {} for map {} - {method}",
                i + 1,
                cases.len(),
                map.name(),
            );
            results.push(res);
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorefind_core::Point;

    /// 10x10 with land in columns 0 and 1; the shore runs down `x == 1`.
    fn west_coast() -> MapPair {
        MapPair::from_full(TerrainMap::from_terrain("coast", 10, 10, |p| (p.x <= 1, 12)))
    }

    /// 10x10 land with a water strip at `x <= 1` and a one-tile lake at
    /// (8, 8). The shore runs down `x == 2`.
    fn cut_off_lake() -> MapPair {
        MapPair::from_full(TerrainMap::from_terrain("lake", 10, 10, |p| {
            (p.x > 1 && p != Point::new(8, 8), 12)
        }))
    }

    fn column(map: &TerrainMap, x: i32) -> Vec<Tile> {
        (0..map.height()).map(|y| map.get(x, y)).collect()
    }

    fn case(map: &TerrainMap, id: &str, territory: &[Tile], target: Tile) -> TestCase {
        TestCase {
            id: id.to_owned(),
            target,
            source_shore: territory.iter().map(|t| map.key(t)).collect(),
            source_center: territory[territory.len() / 2],
            source_radius: 5,
        }
    }

    #[test]
    fn astar_deploys_from_territory_shore() {
        let maps = west_coast();
        let territory = column(maps.full(), 1);
        let target = maps.full().get(8, 5);
        let d = best_shore_deployment_source(&maps, &territory, target, &SearchConfig::default())
            .unwrap();
        assert!(d.source.is_shore);
        assert!(territory.contains(&d.source));
        assert!(d.visited > 0);
    }

    #[test]
    fn bfs_deploys_from_territory_shore() {
        let maps = west_coast();
        let territory = column(maps.full(), 1);
        let target = maps.full().get(8, 5);
        let d = bfs_deployment_source(maps.full(), &territory, target).unwrap();
        assert_eq!(d.source.x, 1);
        assert!(territory.contains(&d.source));
    }

    #[test]
    fn cut_off_target_is_skipped() {
        let maps = cut_off_lake();
        let territory = column(maps.full(), 2);
        assert!(territory.iter().all(|t| t.is_shore));
        let target = maps.full().get(8, 8);

        let res = best_shore_deployment_source(&maps, &territory, target, &SearchConfig::default());
        assert_eq!(res, Err(SkipReason::PathNotFound(SearchStatus::Exhausted)));

        let res = bfs_deployment_source(maps.full(), &territory, target);
        assert_eq!(res, Err(SkipReason::Unreachable { visited: 0 }));
    }

    #[test]
    fn empty_territory_is_skipped() {
        let maps = west_coast();
        let target = maps.full().get(8, 5);
        let res = best_shore_deployment_source(&maps, &[], target, &SearchConfig::default());
        assert_eq!(res, Err(SkipReason::EmptyTerritory));
        let res = bfs_deployment_source(maps.full(), &[], target);
        assert_eq!(res, Err(SkipReason::EmptyTerritory));
    }

    #[test]
    fn inland_territory_has_no_deployment_tile() {
        let maps = west_coast();
        let territory = [maps.full().get(0, 4)];
        let target = maps.full().get(8, 5);
        let res = best_shore_deployment_source(&maps, &territory, target, &SearchConfig::default());
        assert_eq!(
            res,
            Err(SkipReason::NoDeploymentTile {
                waypoint: Point::new(0, 4),
            })
        );
    }

    #[test]
    fn retries_continue_a_pending_search() {
        let maps = west_coast();
        let territory = column(maps.full(), 1);
        let target = maps.full().get(9, 9);
        let config = SearchConfig {
            iterations: 1,
            max_tries: 100,
            ..SearchConfig::default()
        };
        let d = best_shore_deployment_source(&maps, &territory, target, &config).unwrap();
        assert!(territory.contains(&d.source));
    }

    #[test]
    fn cases_produce_records() {
        let maps = west_coast();
        let territory = column(maps.full(), 1);
        let c = case(maps.full(), "coast-001", &territory, maps.full().get(8, 5));

        let astar = run_astar_case(&maps, &c, "v1", &SearchConfig::default()).unwrap();
        assert_eq!(astar.method, Method::AStar);
        assert_eq!(astar.id, "coast-001");
        assert_eq!(astar.version, "v1");
        assert_eq!(astar.source_center, c.source_center);
        assert!(astar.source.is_shore);

        let bfs = run_bfs_case(maps.full(), &c, "v1").unwrap();
        assert_eq!(bfs.method, Method::Bfs);
        assert_eq!(bfs.target, c.target);
    }

    #[test]
    fn benchmarks_skip_failed_cases() {
        let maps = cut_off_lake();
        let territory = column(maps.full(), 2);
        let cases = [
            case(maps.full(), "lake-001", &territory, maps.full().get(8, 8)),
            case(maps.full(), "lake-002", &territory, maps.full().get(0, 3)),
        ];

        let results = run_astar_benchmark(&maps, &cases, "v1", &SearchConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "lake-002");

        let results = run_bfs_benchmark(maps.full(), &cases, "v1");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "lake-002");
        assert_eq!(results[0].source.x, 2);
    }
}
