use shakmaty::fen::{Fen, ParseFenError};
use shakmaty::{CastlingMode, Chess};
use thiserror::Error;

use crate::position::Position;

pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Error)]
pub enum FenError {
    #[error("invalid fen: {0}")]
    Invalid(#[from] ParseFenError),
    #[error("illegal setup: {0}")]
    IllegalSetup(String),
}

/// Parses a FEN string into a [`Position`]. The grammar and setup
/// validation belong to the rules engine; a failure here means the
/// search must not proceed.
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let parsed: Fen = fen.parse()?;
    let inner: Chess = parsed
        .into_position(CastlingMode::Standard)
        .map_err(|err| FenError::IllegalSetup(err.to_string()))?;
    Ok(Position::from_inner(inner))
}
