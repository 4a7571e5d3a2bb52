//! One search frontier: open set, g-scores and predecessors.

use std::collections::BinaryHeap;

/// Parent sentinel for seed nodes.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    known: bool,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            known: false,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
///
/// Equal `f` values pop in insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set plus g-score and predecessor arrays, keyed by dense node index.
pub(crate) struct Frontier {
    open: BinaryHeap<NodeRef>,
    nodes: Vec<Node>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            open: BinaryHeap::new(),
            nodes: vec![Node::default(); len],
            seq: 0,
        }
    }

    /// Start the frontier at `idx` with zero cost.
    pub(crate) fn seed(&mut self, idx: usize, f: i32) {
        let n = &mut self.nodes[idx];
        n.g = 0;
        n.parent = NO_PARENT;
        n.known = true;
        n.open = true;
        self.push(idx, f);
    }

    /// Record `g` for `idx` via `parent` if it improves on the known score.
    /// Returns `true` and reopens the node when it does.
    pub(crate) fn relax(&mut self, idx: usize, g: i32, parent: usize, f: i32) -> bool {
        let n = &mut self.nodes[idx];
        if n.known && g >= n.g {
            return false;
        }
        n.g = g;
        n.parent = parent;
        n.known = true;
        n.open = true;
        self.push(idx, f);
        true
    }

    /// Pop the open node with the lowest `f`, skipping stale entries.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(r) = self.open.pop() {
            let n = &mut self.nodes[r.idx];
            if n.open {
                n.open = false;
                return Some(r.idx);
            }
        }
        None
    }

    /// Whether `idx` has a g-score in this frontier.
    #[inline]
    pub(crate) fn is_known(&self, idx: usize) -> bool {
        self.nodes[idx].known
    }

    #[inline]
    pub(crate) fn g(&self, idx: usize) -> i32 {
        self.nodes[idx].g
    }

    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        match self.nodes[idx].parent {
            NO_PARENT => None,
            p => Some(p),
        }
    }

    fn push(&mut self, idx: usize, f: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.open.push(NodeRef { idx, f, seq });
    }
}
