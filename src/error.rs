use thiserror::Error;

#[derive(Error, Debug)]
pub enum PennantError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    /// Index arithmetic left the chain. Strategies never trigger this on
    /// their own, so seeing it means a bug in the caller.
    #[error("Index {index} out of bounds for chain of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PennantResult<T> = Result<T, PennantError>;
