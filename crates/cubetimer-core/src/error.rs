use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unsupported puzzle: {0}")]
    UnsupportedPuzzle(String),

    #[error("Invalid time format: {0:?}")]
    InvalidTime(String),

    #[error("Unknown solve action: {0:?}")]
    UnknownAction(String),

    #[error("Unknown average kind: {0:?}")]
    UnknownAverageKind(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
