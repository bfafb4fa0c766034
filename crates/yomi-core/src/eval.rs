use crate::position::Position;
use crate::types::Score;

/// Static evaluation of a position snapshot. Implementations must be
/// pure functions of the placement: same position, same score, and the
/// side to move is never consulted.
pub trait Evaluator {
    fn evaluate(&self, position: &Position) -> Score;
}
