//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Provider not found.
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl StoreError {
    /// Returns true if the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<carfare_providers::ProviderError> for StoreError {
    fn from(err: carfare_providers::ProviderError) -> Self {
        match err {
            carfare_providers::ProviderError::UnknownProvider(name) => {
                StoreError::ProviderNotFound(name)
            }
            other @ carfare_providers::ProviderError::UnknownPlan { .. } => {
                StoreError::Config(other.to_string())
            }
        }
    }
}
