use thiserror::Error;

/// Error type for contract violations the engine cannot sanitize.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
