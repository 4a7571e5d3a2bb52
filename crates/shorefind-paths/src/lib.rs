//! Pathfinding over terrain grids.
//!
//! This crate provides the two searches compared by the shore-deployment
//! benchmark:
//!
//! - **Bidirectional A\*** from many sources to one destination
//!   ([`BidirectionalAStar`]), budgeted and resumable
//! - **Reverse BFS** from a target towards a set of sources
//!   ([`reverse_bfs`]), the unweighted baseline
//!
//! Both run over any graph implementing [`GraphAdapter`]. Two adapters over a
//! [`TerrainMap`](shorefind_core::TerrainMap) are included:
//!
//! | Adapter | Enters | Cost |
//! |---|---|---|
//! | [`WaterPathAdapter`] | water only | [`tile_cost`] |
//! | [`LandPreferredAdapter`] | land, or water at the shoreline | [`tile_cost`] + water penalty |

mod adapter;
mod bfs;
mod bidirectional;
mod frontier;
mod traits;

pub use adapter::{LandPreferredAdapter, TraversalMode, WATER_PENALTY, WaterPathAdapter, tile_cost};
pub use bfs::{BfsOutcome, reverse_bfs};
pub use bidirectional::{BidirectionalAStar, SearchBudget, SearchResult, SearchStatus};
pub use traits::GraphAdapter;
