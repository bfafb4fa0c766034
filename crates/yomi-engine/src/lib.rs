pub mod alphabeta;
pub mod material;
pub mod trace;

pub use alphabeta::{depth_damped, AlphaBetaSearcher, SearchNode};
pub use material::{piece_value, MaterialEval};
pub use trace::{NullObserver, SearchObserver, SearchStats, TraceObserver};
