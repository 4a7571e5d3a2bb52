use shorefind_core::Point;
use shorefind_paths::SearchStatus;
use thiserror::Error;

/// Why a deployment query produced no source tile.
///
/// None of these are fatal: the runners log the reason and move on to the
/// next case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("territory has no shore tiles")]
    EmptyTerritory,
    #[error("path not found: {0}")]
    PathNotFound(SearchStatus),
    #[error("reconstructed path is empty")]
    EmptyPath,
    #[error("no territory shore tile next to waypoint {waypoint}")]
    NoDeploymentTile { waypoint: Point },
    #[error("no source tile found in reverse BFS after {visited} tiles")]
    Unreachable { visited: usize },
}
