use proptest::prelude::*;

use yomi_core::{Evaluator, Position, Score};
use yomi_engine::{depth_damped, AlphaBetaSearcher, MaterialEval};

/// Exhaustive minimax without pruning, used as the reference the
/// pruning search must agree with score-for-score.
fn minimax(eval: &MaterialEval, position: &Position, depth: u8, maximizing: bool) -> Score {
    if depth == 0 || position.is_terminal() {
        return depth_damped(eval.evaluate(position), depth);
    }
    let actions = position.legal_actions();
    if actions.is_empty() {
        return depth_damped(eval.evaluate(position), depth);
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for action in actions {
        let child = position.apply(&action).expect("enumerated action is legal");
        let score = minimax(eval, &child, depth - 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

fn reference_score(position: &Position, depth: u8) -> Score {
    let maximizing = position.side_to_move().is_maximizing();
    minimax(&MaterialEval::new(), position, depth, maximizing)
}

/// Plays a pseudo-random sequence of legal moves from the start
/// position, stopping early if the game ends.
fn random_walk(picks: &[usize]) -> Position {
    let mut position = Position::default();
    for &pick in picks {
        let actions = position.legal_actions();
        if actions.is_empty() {
            break;
        }
        let action = &actions[pick % actions.len()];
        position = position.apply(action).expect("enumerated action is legal");
    }
    position
}

#[test]
fn pruned_score_matches_minimax_on_fixed_positions() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkb1r/1p3ppp/p2ppn2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq - 1 6",
        "4k3/8/8/2p5/3Q4/8/8/4K3 b - - 0 1",
        "3r3k/8/8/8/8/8/8/3Q3K w - - 0 1",
        "k7/8/1Q6/8/8/8/8/7K w - - 0 1",
    ];

    for fen in fens {
        let position = Position::from_fen(fen).unwrap();
        for depth in 0..=2u8 {
            let mut searcher = AlphaBetaSearcher::default();
            let pruned = searcher.score(&position, depth).unwrap();
            let reference = reference_score(&position, depth);
            assert_eq!(pruned, reference, "{fen} at depth {depth}");
        }
    }
}

#[test]
fn pruning_visits_no_more_nodes_than_minimax_would() {
    let position =
        Position::from_fen("rnbqkb1r/1p3ppp/p2ppn2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq - 1 6")
            .unwrap();

    let mut searcher = AlphaBetaSearcher::default();
    searcher.score(&position, 3).unwrap();
    let pruned_nodes = searcher.nodes();

    // Full depth-3 tree from this position is far larger.
    let branching = position.legal_actions().len() as u64;
    assert!(pruned_nodes < branching * branching * branching);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn pruned_score_matches_minimax_on_random_walks(
        picks in prop::collection::vec(0usize..512, 0..8),
        depth in 1u8..=2,
    ) {
        let position = random_walk(&picks);
        let mut searcher = AlphaBetaSearcher::default();
        let pruned = searcher.score(&position, depth).unwrap();
        let reference = reference_score(&position, depth);
        prop_assert_eq!(pruned, reference);
    }

    #[test]
    fn scores_stay_finite_on_random_walks(
        picks in prop::collection::vec(0usize..512, 0..12),
    ) {
        let position = random_walk(&picks);
        let mut searcher = AlphaBetaSearcher::default();
        let score = searcher.score(&position, 2).unwrap();
        prop_assert!(score.is_finite());
    }
}
