use thiserror::Error;

use crate::notation::{Action, Notation};
use crate::position::{Position, RulesError};
use crate::types::Score;

/// Outcome of a root search: the chosen action (canonical and in the
/// requested notation), its score, and how many nodes were visited.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub action: Action,
    pub notated: String,
    pub score: Score,
    pub nodes: u64,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search depth must be at least 1")]
    DepthZero,
    #[error("position has no legal moves")]
    NoLegalMoves,
    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub trait Searcher {
    /// Picks the best action for the side to move, exploring `depth`
    /// plies. Deterministic: identical inputs yield identical reports.
    fn best_move(
        &mut self,
        position: &Position,
        depth: u8,
        notation: Notation,
    ) -> Result<SearchReport, SearchError>;
}
