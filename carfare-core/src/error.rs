//! Core error types for Carfare.

use thiserror::Error;

/// Core error type for Carfare operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The quote request is malformed (window order, distance).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
