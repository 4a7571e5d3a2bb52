//! Shore deployment for transport ships.
//!
//! Given a target tile and the shore tiles of a territory, pick the shore tile
//! a transport should leave from. [`best_shore_deployment_source`] reduces the
//! territory with [`candidate_shore_tiles`] and searches the half-resolution
//! map with [`MiniAStar`]; [`bfs_deployment_source`] is the full-resolution
//! baseline it is benchmarked against.

pub mod candidates;
pub mod case;
pub mod config;
pub mod deploy;
pub mod error;
pub mod mini;

pub use candidates::candidate_shore_tiles;
pub use case::{BenchmarkResult, Method, TestCase};
pub use config::SearchConfig;
pub use deploy::{
    Deployment, best_shore_deployment_source, bfs_deployment_source, run_astar_benchmark,
    run_astar_case, run_bfs_benchmark, run_bfs_case,
};
pub use error::SkipReason;
pub use mini::{MiniAStar, fix_extremes, upscale_path};
