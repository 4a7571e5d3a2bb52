use std::collections::{HashSet, VecDeque};

use crate::traits::GraphAdapter;

/// Result of a [`reverse_bfs`] search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfsOutcome<N> {
    /// A source was reached. `visited` is the number of distinct nodes seen.
    Found { source: N, visited: usize },
    /// No source is reachable. Every seen node, in discovery order.
    Unreachable { seen: Vec<N> },
}

impl<N> BfsOutcome<N> {
    /// The number of distinct nodes seen by the search.
    pub fn visited(&self) -> usize {
        match self {
            Self::Found { visited, .. } => *visited,
            Self::Unreachable { seen } => seen.len(),
        }
    }
}

/// Unweighted reverse search from `target` towards a set of `sources`.
///
/// The frontier starts at the neighbors of `target` that the graph lets the
/// target step onto and only grows through traversable steps. Every examined
/// neighbor is tested against `sources` first, so a source is found even
/// when the graph would not let the search enter it (shore tiles are land).
pub fn reverse_bfs<G: GraphAdapter>(
    graph: &G,
    target: G::Node,
    sources: &[G::Node],
) -> BfsOutcome<G::Node> {
    let source_keys: HashSet<usize> = sources.iter().map(|&s| graph.index(s)).collect();
    let mut seen = vec![false; graph.node_count()];
    let mut order: Vec<G::Node> = Vec::new();
    let mut queue: VecDeque<G::Node> = VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    graph.neighbors(target, &mut nbuf);
    for &n in nbuf.iter() {
        if graph.is_traversable(target, n) {
            let ni = graph.index(n);
            if !seen[ni] {
                seen[ni] = true;
                order.push(n);
                queue.push_back(n);
            }
        }
    }

    while let Some(current) = queue.pop_front() {
        nbuf.clear();
        graph.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            let ni = graph.index(n);
            if source_keys.contains(&ni) {
                return BfsOutcome::Found {
                    source: n,
                    visited: order.len(),
                };
            }
            if !seen[ni] && graph.is_traversable(current, n) {
                seen[ni] = true;
                order.push(n);
                queue.push_back(n);
            }
        }
    }

    BfsOutcome::Unreachable { seen: order }
}
