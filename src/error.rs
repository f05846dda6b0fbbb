use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, PosError>;
