use shorefind_core::Point;

/// Cost and adjacency view of a graph, as consumed by the search engines.
///
/// Nodes are small `Copy` handles. Every node also has a dense integer key in
/// `0..node_count()` which the engines use to index their per-node arrays.
pub trait GraphAdapter {
    type Node: Copy + Eq;

    /// Append the neighbors of `node` into `buf`. The caller clears `buf`
    /// before calling. The order must be stable for a given graph.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);

    /// Cost of entering `node`. Must be > 0.
    fn cost(&self, node: Self::Node) -> i32;

    /// Grid position of `node`, used for heuristics and directions.
    fn position(&self, node: Self::Node) -> Point;

    /// Whether a step from `from` onto its neighbor `to` is allowed.
    fn is_traversable(&self, from: Self::Node, to: Self::Node) -> bool;

    /// Number of distinct node keys.
    fn node_count(&self) -> usize;

    /// Dense key of `node`, in `0..node_count()`.
    fn index(&self, node: Self::Node) -> usize;

    /// Node with the dense key `index`.
    fn node(&self, index: usize) -> Self::Node;
}
