use shakmaty::{Chess, File, Position as _, Rank, Role, Square};
use thiserror::Error;

use crate::fen::{parse_fen, FenError, START_POSITION};
use crate::notation::Action;
use crate::types::Player;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("illegal action {action} for this position")]
    IllegalAction { action: String },
}

/// Immutable snapshot of full game state. All rules semantics (piece
/// placement, legality, termination) live in the rules engine behind
/// this wrapper; the search treats a `Position` as an opaque value that
/// is copied, never mutated. Applying an action yields a new position.
#[derive(Debug, Clone)]
pub struct Position {
    inner: Chess,
}

impl Position {
    pub(crate) fn from_inner(inner: Chess) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &Chess {
        &self.inner
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    pub fn side_to_move(&self) -> Player {
        Player::from(self.inner.turn())
    }

    /// Legal actions in the rules engine's enumeration order. The order
    /// is deterministic and doubles as the root tie-break.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.inner
            .legal_moves()
            .into_iter()
            .map(Action::new)
            .collect()
    }

    /// Applies an action, producing the successor position with the
    /// side to move flipped. Fails rather than no-ops on an illegal
    /// action.
    pub fn apply(&self, action: &Action) -> Result<Self, RulesError> {
        self.inner
            .clone()
            .play(action.inner())
            .map(Self::from_inner)
            .map_err(|_| RulesError::IllegalAction {
                action: action.uci(),
            })
    }

    /// Whether the game is over by the rules of chess (checkmate,
    /// stalemate, insufficient material). Opaque oracle as far as the
    /// search is concerned.
    pub fn is_terminal(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn piece_at(&self, square: Square) -> Option<(Player, Role)> {
        self.inner
            .board()
            .piece_at(square)
            .map(|piece| (Player::from(piece.color), piece.role))
    }

    /// ASCII diagram, rank 8 at the top. Diagnostic only.
    pub fn render(&self) -> String {
        let board = self.inner.board();
        let mut out = String::with_capacity(8 * 16);
        for rank in (0..8).rev() {
            for file in 0..8 {
                if file > 0 {
                    out.push(' ');
                }
                let square = Square::from_coords(File::new(file), Rank::new(rank));
                match board.piece_at(square) {
                    Some(piece) => out.push(piece.char()),
                    None => out.push('.'),
                }
            }
            if rank > 0 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        parse_fen(START_POSITION).expect("start position is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_moves() {
        let position = Position::default();
        assert_eq!(position.side_to_move(), Player::White);
        assert_eq!(position.legal_actions().len(), 20);
        assert!(!position.is_terminal());
    }

    #[test]
    fn apply_flips_side_to_move() {
        let position = Position::default();
        let action = &position.legal_actions()[0];
        let next = position.apply(action).unwrap();
        assert_eq!(next.side_to_move(), Player::Black);
        // The original snapshot is untouched.
        assert_eq!(position.side_to_move(), Player::White);
    }

    #[test]
    fn render_shows_eight_ranks() {
        let rendered = Position::default().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[7], "R N B Q K B N R");
        assert_eq!(lines[3], ". . . . . . . .");
    }
}
