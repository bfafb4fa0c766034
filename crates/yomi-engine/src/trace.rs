use serde::Serialize;

use yomi_core::{Action, Score};

use crate::alphabeta::SearchNode;

/// Callbacks fired as the search explores the game tree. The scoring
/// algorithm itself never reads anything back from an observer, so
/// implementations cannot change the result, only watch it happen.
pub trait SearchObserver {
    /// An edge from `parent` is about to be explored.
    fn edge(&mut self, parent: &SearchNode, action: &Action, depth: u8) {
        let _ = (parent, action, depth);
    }

    /// `node` was scored statically with `depth` plies remaining.
    fn leaf(&mut self, node: &SearchNode, depth: u8, score: Score) {
        let _ = (node, depth, score);
    }

    /// Sibling enumeration at `node` stopped early. A maximizing node
    /// stopping early is a beta cutoff, a minimizing node an alpha
    /// cutoff.
    fn cutoff(&mut self, node: &SearchNode, depth: u8) {
        let _ = (node, depth);
    }
}

/// Default observer: ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Aggregate counts of the explored tree, exportable as JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub edges: u64,
    pub leaves: u64,
    pub beta_cutoffs: u64,
    pub alpha_cutoffs: u64,
}

/// Observer that keeps pruning statistics instead of retaining the
/// explored subtree itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver {
    stats: SearchStats,
}

impl TraceObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl SearchObserver for TraceObserver {
    fn edge(&mut self, _parent: &SearchNode, _action: &Action, _depth: u8) {
        self.stats.edges += 1;
    }

    fn leaf(&mut self, _node: &SearchNode, _depth: u8, _score: Score) {
        self.stats.leaves += 1;
    }

    fn cutoff(&mut self, node: &SearchNode, _depth: u8) {
        if node.to_move().is_maximizing() {
            self.stats.beta_cutoffs += 1;
        } else {
            self.stats.alpha_cutoffs += 1;
        }
    }
}
