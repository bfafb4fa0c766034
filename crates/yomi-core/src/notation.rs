use shakmaty::san::{ParseSanError, San, SanError};
use shakmaty::uci::{IllegalUciMoveError, ParseUciMoveError, UciMove};
use shakmaty::{CastlingMode, Move};
use thiserror::Error;

use crate::position::Position;

/// Textual move notation. Actions keep a single canonical internal
/// representation; conversion happens only at this boundary.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Standard Algebraic Notation, e.g. `Nxd4`.
    #[default]
    San,
    /// Long coordinate notation, e.g. `f6d4`.
    Uci,
}

impl Notation {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "san" => Some(Self::San),
            "uci" => Some(Self::Uci),
            _ => None,
        }
    }

    pub const fn to_code(self) -> &'static str {
        match self {
            Self::San => "san",
            Self::Uci => "uci",
        }
    }
}

#[derive(Debug, Error)]
pub enum NotationError {
    #[error("invalid san: {0}")]
    SanParse(#[from] ParseSanError),
    #[error("san is not playable: {0}")]
    San(#[from] SanError),
    #[error("invalid uci: {0}")]
    UciParse(#[from] ParseUciMoveError),
    #[error("uci is not playable: {0}")]
    Uci(#[from] IllegalUciMoveError),
}

/// A move, produced only by enumerating legal actions from a
/// [`Position`] and otherwise opaque to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    inner: Move,
}

impl Action {
    pub(crate) fn new(inner: Move) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &Move {
        &self.inner
    }

    /// Renders the action in the requested notation. SAN needs the
    /// position the action is played from to disambiguate.
    pub fn notated(&self, position: &Position, notation: Notation) -> String {
        match notation {
            Notation::San => San::from_move(position.inner(), &self.inner).to_string(),
            Notation::Uci => self.uci(),
        }
    }

    pub fn uci(&self) -> String {
        self.inner.to_uci(CastlingMode::Standard).to_string()
    }

    /// Parses an action from text against the position it would be
    /// played from, rejecting moves that are not legal there.
    pub fn parse(
        position: &Position,
        text: &str,
        notation: Notation,
    ) -> Result<Self, NotationError> {
        let inner = match notation {
            Notation::San => text.parse::<San>()?.to_move(position.inner())?,
            Notation::Uci => text.parse::<UciMove>()?.to_move(position.inner())?,
        };
        Ok(Self::new(inner))
    }
}
