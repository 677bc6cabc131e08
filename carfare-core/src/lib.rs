// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Carfare Core
//!
//! Core types, models, and traits for the Carfare fee comparison engine.
//!
//! This crate provides the foundational abstractions used across all other
//! Carfare crates, including:
//!
//! - Domain models (quote requests, fee breakdowns, provider results)
//! - Duration and clock-window utilities
//! - The holiday calendar collaborator
//! - Error types
//! - The [`FeeEvaluator`] trait every provider implements
//!
//! ## Key Types
//!
//! ### Request & Result Types
//! - [`QuoteRequest`] - Validated rental window plus planned distance
//! - [`FeeBreakdown`] - Time, mileage and insurance fees with their total
//! - [`PlanInfo`] - Which named pack (if any) set the time fee
//! - [`ProviderResult`] - `Quoted` or `Unavailable`
//!
//! ### Provider Types
//! - [`ProviderKind`] - Enum of all supported rental providers
//! - [`ProviderMetadata`] - Display info for a provider
//!
//! ### Clock & Calendar
//! - [`Elapsed`] - Fractional hours and minutes between two instants
//! - [`HolidayCalendar`] - External holiday lookup

pub mod calendar;
pub mod clock;
pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export clock & calendar helpers
pub use calendar::{HolidayCalendar, HolidaySet, WeekendCalendar};
pub use clock::{Elapsed, elapsed, is_at_or_after_hour, is_before_hour};

// Re-export all model types
pub use models::{
    // Fee types
    FeeBreakdown,
    PlanInfo,
    ProviderResult,
    Yen,
    // Provider types
    ProviderCategory,
    ProviderKind,
    ProviderMetadata,
    // Request types
    QuoteRequest,
};

// Re-export traits
pub use traits::FeeEvaluator;
