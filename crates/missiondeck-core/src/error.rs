use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("not initialized: run 'deck init'")]
    NotInitialized,

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("empty batch: no mission headers in generated markdown")]
    EmptyBatch,

    #[error("renumber mismatch: expected header 'Mission {expected}' for batch position {position}")]
    RenumberMismatch { expected: u32, position: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
