use thiserror::Error;

/// Error type that captures common pacing-core failures.
#[derive(Debug, Error)]
pub enum PacingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, PacingError>;
