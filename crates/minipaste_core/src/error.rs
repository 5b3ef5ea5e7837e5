//! Application error types for core storage and domain logic.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Paste size exceeds maximum of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No unused paste id found after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error means the paste cannot be shown, as opposed to a
    /// server-side failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotFound | Self::MalformedRecord(_))
    }
}
