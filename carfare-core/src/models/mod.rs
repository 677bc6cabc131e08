//! Domain models for Carfare.
//!
//! ## Submodules
//!
//! - [`request`] - The validated quote request
//! - [`fee`] - Fee breakdowns, plan info and provider results
//! - [`provider`] - Provider kinds and metadata

mod fee;
mod provider;
mod request;

pub use fee::{FeeBreakdown, PlanInfo, ProviderResult, Yen};
pub use provider::{ProviderCategory, ProviderKind, ProviderMetadata};
pub use request::QuoteRequest;
