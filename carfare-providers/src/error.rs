//! Provider lookup errors.

use thiserror::Error;

/// Errors raised while resolving providers and plan classes by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No provider matches the CLI name or alias.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// No plan class matches the name.
    #[error("Unknown plan class '{name}' for {provider}")]
    UnknownPlan {
        /// Provider the plan belongs to.
        provider: &'static str,
        /// Rejected plan name.
        name: String,
    },
}
