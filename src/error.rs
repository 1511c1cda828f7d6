use thiserror::Error;

/// Caller precondition violations. Illegal moves are not errors; they leave the
/// state untouched instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid board size {0}: expected a positive size")]
    InvalidBoardSize(usize),

    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}
