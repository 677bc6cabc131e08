//! Provider descriptor system.
//!
//! A descriptor contains everything the registry knows about a provider:
//! - Metadata (display name, CLI name, aliases, category)
//! - The pricing policy that evaluates quote requests

use carfare_core::{
    FeeEvaluator, HolidayCalendar, ProviderKind, ProviderMetadata, ProviderResult, QuoteRequest,
};
use std::fmt;

// ============================================================================
// Provider Descriptor
// ============================================================================

/// Complete descriptor for a provider.
pub struct ProviderDescriptor {
    /// Provider identifier.
    pub id: ProviderKind,
    /// Display metadata.
    pub metadata: ProviderMetadata,
    /// Pricing policy.
    pub evaluator: Box<dyn FeeEvaluator>,
}

impl ProviderDescriptor {
    /// Creates a descriptor with default metadata for the evaluator's kind.
    pub fn new(evaluator: impl FeeEvaluator + 'static) -> Self {
        let id = evaluator.kind();
        Self {
            id,
            metadata: ProviderMetadata::for_provider(id),
            evaluator: Box::new(evaluator),
        }
    }

    /// Adds CLI aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.metadata
            .aliases
            .extend(aliases.iter().map(|a| (*a).to_string()));
        self
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.metadata.display_name
    }

    /// Returns the CLI name.
    pub fn cli_name(&self) -> &str {
        &self.metadata.cli_name
    }

    /// Mileage rate per kilometre.
    pub fn rate_per_km(&self) -> u64 {
        self.evaluator.rate_per_km()
    }

    /// Longest rentable duration in hours, if capped.
    pub fn max_hours(&self) -> Option<u32> {
        self.evaluator.max_hours()
    }

    /// Prices a request with this provider's policy.
    pub fn evaluate(&self, request: &QuoteRequest, calendar: &dyn HolidayCalendar) -> ProviderResult {
        self.evaluator.evaluate(request, calendar)
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("id", &self.id)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eneos::eneos_descriptor;
    use crate::everygo::{EveryGoPlan, everygo_descriptor};

    #[test]
    fn test_new_takes_metadata_from_evaluator_kind() {
        let desc = eneos_descriptor();
        assert_eq!(desc.id, ProviderKind::Eneos);
        assert_eq!(desc.cli_name(), "eneos");
        assert!(desc.metadata.aliases.is_empty());
        assert_eq!(desc.max_hours(), Some(72));
    }

    #[test]
    fn test_with_aliases_appends() {
        let desc = everygo_descriptor(EveryGoPlan::default()).with_aliases(&["hondaevery"]);
        assert_eq!(desc.id, ProviderKind::EveryGo);
        assert_eq!(desc.metadata.aliases, vec!["honda", "every-go", "hondaevery"]);
    }
}
