pub mod eval;
pub mod fen;
pub mod notation;
pub mod position;
pub mod search;
pub mod types;

pub use eval::Evaluator;
pub use fen::{parse_fen, FenError, START_POSITION};
pub use notation::{Action, Notation, NotationError};
pub use position::{Position, RulesError};
pub use search::{SearchError, SearchReport, Searcher};
pub use types::{Player, Score};

// Board coordinates and piece kinds come straight from the rules engine;
// everything else about it stays behind `Position` and `Action`.
pub use shakmaty::{Role, Square};
