use yomi_core::{Evaluator, Player, Position, Role, Score, Square};

/// Classic point values. King is 0: losing the king is checkmate, and
/// checkmate is the rules engine's business, not the evaluator's.
pub fn piece_value(role: Role) -> Score {
    match role {
        Role::Pawn => 1.0,
        Role::Knight => 3.0,
        Role::Bishop => 3.0,
        Role::Rook => 5.0,
        Role::Queen => 9.0,
        Role::King => 0.0,
    }
}

/// Pure material count over all 64 squares: White pieces add their
/// value, Black pieces subtract it. Ignores whose turn it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl MaterialEval {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for MaterialEval {
    fn evaluate(&self, position: &Position) -> Score {
        let mut score = 0.0;
        for square in Square::ALL {
            let Some((player, role)) = position.piece_at(square) else {
                continue;
            };
            match player {
                Player::White => score += piece_value(role),
                Player::Black => score -= piece_value(role),
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let position = Position::default();
        assert_eq!(MaterialEval::new().evaluate(&position), 0.0);
    }

    #[test]
    fn counts_a_won_pawn() {
        let position =
            Position::from_fen("rnbqkb1r/1p3ppp/3ppn2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 0 7")
                .unwrap();
        assert_eq!(MaterialEval::new().evaluate(&position), 1.0);
    }

    #[test]
    fn bare_rook_endgame() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert_eq!(MaterialEval::new().evaluate(&position), 5.0);
    }

    #[test]
    fn color_mirror_negates_the_score() {
        let eval = MaterialEval::new();
        let white_up = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let black_up = Position::from_fen("4k2r/8/8/8/8/8/8/4K3 w k - 0 1").unwrap();
        assert_eq!(eval.evaluate(&white_up), -eval.evaluate(&black_up));
    }

    #[test]
    fn side_to_move_does_not_matter() {
        let eval = MaterialEval::new();
        let white_to_move =
            Position::from_fen("rnbqkb1r/1p3ppp/p2ppn2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 1 6")
                .unwrap();
        let black_to_move =
            Position::from_fen("rnbqkb1r/1p3ppp/p2ppn2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq - 1 6")
                .unwrap();
        assert_eq!(eval.evaluate(&white_to_move), eval.evaluate(&black_to_move));
    }
}
