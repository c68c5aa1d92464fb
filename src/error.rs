use thiserror::Error;

/// Errors raised by the outer surfaces (FEN input, move text, CLI arguments).
/// The search itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("FEN error: {0}")]
    Fen(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("invalid move notation: {0}")]
    Notation(String),
    #[error("invalid side: {0} (use 'w' or 'b')")]
    Side(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
