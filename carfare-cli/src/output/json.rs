//! JSON output formatting.

use anyhow::Result;
use carfare_core::{ProviderCategory, ProviderKind, ProviderResult, Yen};
use carfare_providers::{ComparisonReport, ProviderDescriptor, ProviderRegistry};
use chrono::NaiveDateTime;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for one comparison.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub hours: f64,
    pub distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest: Option<String>,
    pub quotes: Vec<QuoteOutput>,
}

/// One provider's row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    pub provider: String,
    pub name: String,
    pub rate_per_km: Yen,
    pub result: ProviderResult,
}

/// A registry entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderListOutput {
    pub id: ProviderKind,
    pub name: String,
    pub english_name: String,
    pub cli_name: String,
    pub aliases: Vec<String>,
    pub category: ProviderCategory,
    pub rate_per_km: Yen,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hours: Option<u32>,
    pub enabled: bool,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats a comparison report.
    pub fn format_report(&self, report: &ComparisonReport, registry: &ProviderRegistry) -> Result<String> {
        let request = &report.request;
        let cli_name = |kind: ProviderKind| {
            registry
                .get(kind)
                .map_or_else(|| kind.cli_name().to_string(), |d| d.cli_name().to_string())
        };

        let output = ReportOutput {
            start: request.start(),
            end: request.end(),
            hours: request.elapsed().hours,
            distance_km: request.distance_km(),
            cheapest: report.cheapest().map(|q| cli_name(q.provider)),
            quotes: report
                .quotes
                .iter()
                .map(|q| QuoteOutput {
                    provider: cli_name(q.provider),
                    name: q.name.clone(),
                    rate_per_km: registry.get(q.provider).map_or(0, ProviderDescriptor::rate_per_km),
                    result: q.result.clone(),
                })
                .collect(),
        };

        self.format(&output)
    }

    /// Formats the provider list.
    pub fn format_providers(
        &self,
        providers: &[ProviderDescriptor],
        enabled: &[ProviderKind],
    ) -> Result<String> {
        let output: Vec<ProviderListOutput> = providers
            .iter()
            .map(|d| ProviderListOutput {
                id: d.id,
                name: d.display_name().to_string(),
                english_name: d.metadata.english_name.clone(),
                cli_name: d.cli_name().to_string(),
                aliases: d.metadata.aliases.clone(),
                category: d.metadata.category,
                rate_per_km: d.rate_per_km(),
                max_hours: d.max_hours(),
                enabled: enabled.contains(&d.id),
            })
            .collect();

        self.format(&output)
    }
}
