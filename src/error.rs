//! Errors raised by the outer surfaces (server and CLI).
//!
//! Rendering itself never fails; malformed input degrades to defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid query string: {0}")]
    Query(String),
}

pub type Result<T> = std::result::Result<T, SwatchError>;
