//! Errors raised by client-side computations

use thiserror::Error;

/// Errors returned by the client-side helpers
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for client-side helpers
pub type ClientResult<T> = Result<T, ClientError>;
