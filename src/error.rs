use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuError {
    #[error("Invalid card token: {0} (expected rank 2-9/T/J/Q/K/A followed by suit S/C/H/D)")]
    InvalidToken(String),

    #[error("Duplicate card: {0}")]
    DuplicateCard(String),

    #[error("Expected {expected} cards, got {got}")]
    WrongCardCount { expected: usize, got: usize },

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type HuResult<T> = Result<T, HuError>;
