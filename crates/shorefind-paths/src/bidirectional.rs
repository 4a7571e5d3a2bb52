//! Bidirectional A* from many sources to one destination.
//!
//! Two frontiers grow at once: the forward one from every source, the
//! backward one from the destination. The search completes as soon as a node
//! popped from one frontier already has a g-score in the other. The
//! heuristic is twice the Manhattan distance, which overestimates on purpose:
//! the engine trades optimality for fewer expansions.

use shorefind_core::Point;

use crate::frontier::Frontier;
use crate::traits::GraphAdapter;

/// Outcome of a [`BidirectionalAStar::compute`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The iteration budget ran out; call `compute` again to continue.
    Pending,
    /// The frontiers met; the path can be reconstructed.
    Found,
    /// An open set emptied, or the retry budget is spent.
    Exhausted,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Found => f.write_str("found"),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Status plus the running node-visit counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub status: SearchStatus,
    /// Seeds, popped nodes and examined neighbors so far. Never decreases.
    pub visited: u64,
}

/// Work limits of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchBudget {
    /// Iterations (one forward and one backward expansion) per `compute`.
    pub iterations: usize,
    /// Number of `compute` calls allowed before the search gives up.
    pub max_tries: u32,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            max_tries: 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

enum Step {
    Met,
    Expanded,
    Empty,
}

/// State of a single source(s)-to-destination query.
///
/// An instance owns everything it touches, is never reused for another
/// query, and can be dropped at any point to abandon the search.
pub struct BidirectionalAStar<G: GraphAdapter> {
    graph: G,
    fwd: Frontier,
    bwd: Frontier,
    dst: G::Node,
    closest_source: G::Node,
    budget: SearchBudget,
    tries_left: u32,
    direction_change_penalty: i32,
    status: SearchStatus,
    meeting: Option<usize>,
    visited: u64,
    nbuf: Vec<G::Node>,
}

#[inline]
fn heuristic(a: Point, b: Point) -> i32 {
    2 * a.manhattan(b)
}

impl<G: GraphAdapter> BidirectionalAStar<G> {
    /// Seed a search from `sources` towards `dst`.
    ///
    /// Returns `None` when `sources` is empty. Duplicate sources are allowed.
    pub fn new(
        graph: G,
        sources: &[G::Node],
        dst: G::Node,
        budget: SearchBudget,
    ) -> Option<Self> {
        let dst_pos = graph.position(dst);
        let h = |n: G::Node| heuristic(dst_pos, graph.position(n));
        let closest_source = sources
            .iter()
            .copied()
            .reduce(|closest, s| if h(s) < h(closest) { s } else { closest })?;

        let len = graph.node_count();
        let mut search = Self {
            fwd: Frontier::new(len),
            bwd: Frontier::new(len),
            dst,
            closest_source,
            budget,
            tries_left: budget.max_tries,
            direction_change_penalty: 0,
            status: SearchStatus::Pending,
            meeting: None,
            visited: 0,
            nbuf: Vec::with_capacity(4),
            graph,
        };

        for &s in sources {
            let f = heuristic(search.graph.position(s), dst_pos);
            search.fwd.seed(search.graph.index(s), f);
            search.visited += 1;
        }
        let f = heuristic(dst_pos, search.graph.position(closest_source));
        search.bwd.seed(search.graph.index(dst), f);
        search.visited += 1;

        Some(search)
    }

    /// Add `penalty` to every step that changes direction, straightening
    /// paths. Zero (the default) disables it.
    pub fn with_direction_change_penalty(mut self, penalty: i32) -> Self {
        self.direction_change_penalty = penalty;
        self
    }

    /// The adapter the search runs over.
    #[inline]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The backward frontier's heuristic target.
    #[inline]
    pub fn closest_source(&self) -> G::Node {
        self.closest_source
    }

    #[inline]
    pub fn visited(&self) -> u64 {
        self.visited
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Run up to one iteration budget of the search.
    ///
    /// Each call consumes one try. When the budget runs out before the
    /// frontiers meet, the result is [`SearchStatus::Pending`] while tries
    /// remain and [`SearchStatus::Exhausted`] after the last one. All state
    /// is kept between calls. Once the search is `Found` or `Exhausted`,
    /// further calls return the same status without doing work.
    pub fn compute(&mut self) -> SearchResult {
        if self.status != SearchStatus::Pending {
            return self.result();
        }

        self.tries_left = self.tries_left.saturating_sub(1);
        let mut remaining = self.budget.iterations;

        loop {
            if remaining == 0 {
                self.status = if self.tries_left == 0 {
                    SearchStatus::Exhausted
                } else {
                    SearchStatus::Pending
                };
                return self.result();
            }
            remaining -= 1;

            for side in [Side::Forward, Side::Backward] {
                match self.step(side) {
                    Step::Expanded => {}
                    Step::Met => {
                        self.status = SearchStatus::Found;
                        return self.result();
                    }
                    Step::Empty => {
                        self.status = SearchStatus::Exhausted;
                        return self.result();
                    }
                }
            }
        }
    }

    /// The path from a source to the destination through the meeting point.
    ///
    /// Empty unless the search is [`SearchStatus::Found`].
    pub fn reconstruct_path(&self) -> Vec<G::Node> {
        let Some(meeting) = self.meeting else {
            return Vec::new();
        };

        let mut path = vec![self.graph.node(meeting)];
        let mut ci = meeting;
        while let Some(p) = self.fwd.parent(ci) {
            path.push(self.graph.node(p));
            ci = p;
        }
        path.reverse();

        ci = meeting;
        while let Some(p) = self.bwd.parent(ci) {
            path.push(self.graph.node(p));
            ci = p;
        }
        path
    }

    #[inline]
    fn result(&self) -> SearchResult {
        SearchResult {
            status: self.status,
            visited: self.visited,
        }
    }

    /// Pop one node from `side` and either detect the meeting or expand it.
    fn step(&mut self, side: Side) -> Step {
        let Self {
            graph,
            fwd,
            bwd,
            dst,
            closest_source,
            direction_change_penalty,
            meeting,
            visited,
            nbuf,
            ..
        } = self;

        let (this, other, target) = match side {
            Side::Forward => (fwd, &*bwd, *dst),
            Side::Backward => (bwd, &*fwd, *closest_source),
        };

        let Some(ci) = this.pop() else {
            return Step::Empty;
        };
        *visited += 1;

        if other.is_known(ci) {
            *meeting = Some(ci);
            return Step::Met;
        }

        let current = graph.node(ci);
        let current_pos = graph.position(current);
        let current_g = this.g(ci);
        let target_pos = graph.position(target);
        let incoming = this
            .parent(ci)
            .map(|p| (current_pos - graph.position(graph.node(p))).signum());

        nbuf.clear();
        graph.neighbors(current, nbuf);

        for &n in nbuf.iter() {
            *visited += 1;
            // The frontier's target is exempt from the traversal filter.
            if n != target && !graph.is_traversable(current, n) {
                continue;
            }

            let n_pos = graph.position(n);
            let mut g = current_g + graph.cost(n);
            if *direction_change_penalty > 0
                && incoming.is_some_and(|dir| dir != (n_pos - current_pos).signum())
            {
                g += *direction_change_penalty;
            }

            this.relax(graph.index(n), g, ci, g + heuristic(n_pos, target_pos));
        }

        Step::Expanded
    }
}
