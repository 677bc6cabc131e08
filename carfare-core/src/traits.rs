//! Trait definitions for Carfare.
//!
//! This module defines the contract every provider's pricing policy satisfies.

use crate::calendar::HolidayCalendar;
use crate::models::{ProviderKind, ProviderResult, QuoteRequest};

/// A provider's pricing policy.
///
/// Implementors are pure: the same request and calendar always produce the
/// same result, no I/O happens, and no state is mutated. Every well-formed
/// request yields either a quote or `Unavailable`; evaluation never fails.
pub trait FeeEvaluator: Send + Sync {
    /// Returns the kind of provider this policy prices.
    fn kind(&self) -> ProviderKind;

    /// Returns the display name for this provider.
    fn display_name(&self) -> &str {
        self.kind().display_name()
    }

    /// Prices `request`, consulting `calendar` for weekday-only packs.
    fn evaluate(&self, request: &QuoteRequest, calendar: &dyn HolidayCalendar) -> ProviderResult;

    /// Mileage rate in yen per kilometre, for display.
    fn rate_per_km(&self) -> u64;

    /// Longest rentable duration in hours, if the provider has one.
    fn max_hours(&self) -> Option<u32> {
        None
    }
}
