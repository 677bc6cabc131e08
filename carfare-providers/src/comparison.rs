//! Comparison aggregator.
//!
//! Every registered provider prices the same request. Results stay in
//! registry order; ranking by price is left to the consumer, helped by
//! [`ComparisonReport::cheapest`].

use carfare_core::{CoreError, HolidayCalendar, ProviderKind, ProviderResult, QuoteRequest, Yen};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::ProviderRegistry;

/// One provider's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuote {
    /// Provider identifier.
    pub provider: ProviderKind,
    /// Display name.
    pub name: String,
    /// Quote or unavailability.
    pub result: ProviderResult,
}

/// Results of one comparison, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// The request every provider priced.
    pub request: QuoteRequest,
    /// One entry per registered provider.
    pub quotes: Vec<ProviderQuote>,
}

impl ComparisonReport {
    /// Lowest total among quoted providers; the earlier provider wins ties.
    pub fn cheapest(&self) -> Option<&ProviderQuote> {
        let mut best: Option<(&ProviderQuote, Yen)> = None;
        for quote in &self.quotes {
            let Some(total) = quote.result.total_fee() else {
                continue;
            };
            if best.is_none_or(|(_, lowest)| total < lowest) {
                best = Some((quote, total));
            }
        }
        best.map(|(quote, _)| quote)
    }

    /// Providers that quoted.
    pub fn quoted(&self) -> impl Iterator<Item = &ProviderQuote> {
        self.quotes.iter().filter(|q| q.result.is_quoted())
    }

    /// Providers that cannot serve the request.
    pub fn unavailable(&self) -> impl Iterator<Item = &ProviderQuote> {
        self.quotes.iter().filter(|q| !q.result.is_quoted())
    }

    /// Looks up one provider's answer.
    pub fn get(&self, provider: ProviderKind) -> Option<&ProviderQuote> {
        self.quotes.iter().find(|q| q.provider == provider)
    }
}

/// Prices `request` with every provider in `registry`.
///
/// The request is already validated; evaluation cannot fail.
pub fn compare(
    registry: &ProviderRegistry,
    request: &QuoteRequest,
    calendar: &dyn HolidayCalendar,
) -> ComparisonReport {
    let quotes = registry
        .all()
        .iter()
        .map(|desc| {
            let result = desc.evaluate(request, calendar);
            match &result {
                ProviderResult::Quoted { fees, plan } => debug!(
                    provider = desc.cli_name(),
                    total = fees.total_fee,
                    plan = plan.applied_plan_name.as_deref().unwrap_or("-"),
                    "Quoted"
                ),
                ProviderResult::Unavailable { max_hours } => {
                    debug!(provider = desc.cli_name(), max_hours, "Unavailable");
                }
            }
            ProviderQuote {
                provider: desc.id,
                name: desc.display_name().to_string(),
                result,
            }
        })
        .collect();

    ComparisonReport {
        request: request.clone(),
        quotes,
    }
}

/// Validates a raw rental window, then compares.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRequest`] before any provider runs if `end`
/// is not after `start` or the distance is negative or not finite.
pub fn compare_window(
    registry: &ProviderRegistry,
    start: NaiveDateTime,
    end: NaiveDateTime,
    distance_km: f64,
    calendar: &dyn HolidayCalendar,
) -> Result<ComparisonReport, CoreError> {
    let request = QuoteRequest::new(start, end, distance_km)?;
    Ok(compare(registry, &request, calendar))
}
