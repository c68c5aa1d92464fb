// Fixed-depth alpha-beta move selection over a pluggable rules engine
pub mod types;
pub mod error;
pub mod board;
pub mod search;
pub mod play;
pub mod uci;

pub use error::{Error, Result};
pub use types::{PieceKind, Score, Side, Square};
pub use board::Rules;
pub use search::alphabeta::{best_move, select_move, SearchParams, SearchResult, Searcher};
pub use search::eval::{evaluate, EvalMode};
