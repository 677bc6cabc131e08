//! Fee types.
//!
//! This module contains the outcome of a single provider evaluation:
//! - [`FeeBreakdown`] - The fee components and their total
//! - [`PlanInfo`] - Display metadata about the applied pack
//! - [`ProviderResult`] - `Quoted` or `Unavailable`

use serde::{Deserialize, Serialize};

/// Whole yen.
pub type Yen = u64;

// ============================================================================
// Fee Breakdown
// ============================================================================

/// Fee components of a quote.
///
/// `total_fee` is always the sum of the three components; the only
/// constructor computes it. The sum saturates at `Yen::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Sum of all components.
    pub total_fee: Yen,
    /// Time-based fee (packs, pay-as-you-go, overflow).
    pub time_fee: Yen,
    /// Distance-based fee.
    pub mileage_fee: Yen,
    /// Insurance / no-deposit (NOC waiver) fee.
    pub insurance_fee: Yen,
}

impl FeeBreakdown {
    /// Builds a breakdown from its components.
    pub fn new(time_fee: Yen, mileage_fee: Yen, insurance_fee: Yen) -> Self {
        Self {
            total_fee: sum(time_fee, mileage_fee, insurance_fee),
            time_fee,
            mileage_fee,
            insurance_fee,
        }
    }

    /// Returns true if `total_fee` equals the sum of the components.
    pub fn is_consistent(&self) -> bool {
        self.total_fee == sum(self.time_fee, self.mileage_fee, self.insurance_fee)
    }
}

fn sum(time_fee: Yen, mileage_fee: Yen, insurance_fee: Yen) -> Yen {
    time_fee.saturating_add(mileage_fee).saturating_add(insurance_fee)
}

// ============================================================================
// Plan Info
// ============================================================================

/// Which pack (if any) determined the time fee. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanInfo {
    /// Mileage rate in yen per kilometre (0 if distance is free).
    pub rate_per_km: Yen,
    /// Name of the applied pack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_plan_name: Option<String>,
    /// Nominal fee of the applied pack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_plan_fee: Option<Yen>,
    /// Extension charged on top of the pack's nominal fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_fee: Option<Yen>,
}

impl PlanInfo {
    /// Pay-as-you-go: no named pack applied.
    pub fn pay_as_you_go(rate_per_km: Yen) -> Self {
        Self {
            rate_per_km,
            ..Self::default()
        }
    }

    /// A named pack set the time fee.
    pub fn with_plan(rate_per_km: Yen, name: impl Into<String>, fee: Yen) -> Self {
        Self {
            rate_per_km,
            applied_plan_name: Some(name.into()),
            applied_plan_fee: Some(fee),
            extension_fee: None,
        }
    }

    /// Records an extension charge beyond the pack's nominal duration.
    #[must_use]
    pub fn extended_by(mut self, extension_fee: Yen) -> Self {
        self.extension_fee = (extension_fee > 0).then_some(extension_fee);
        self
    }

    /// Returns true if a named pack was applied.
    pub fn has_plan(&self) -> bool {
        self.applied_plan_name.is_some()
    }
}

// ============================================================================
// Provider Result
// ============================================================================

/// Outcome of evaluating one provider.
///
/// `Unavailable` is never encoded as a zero breakdown: a free quote and an
/// out-of-range request are different answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProviderResult {
    /// The provider can serve the request at this price.
    Quoted {
        /// Fee components.
        fees: FeeBreakdown,
        /// Applied plan metadata.
        plan: PlanInfo,
    },
    /// The request exceeds the provider's maximum rentable duration.
    Unavailable {
        /// The provider's maximum rentable duration in hours.
        max_hours: u32,
    },
}

impl ProviderResult {
    /// Creates a quoted result.
    pub fn quoted(fees: FeeBreakdown, plan: PlanInfo) -> Self {
        Self::Quoted { fees, plan }
    }

    /// Returns true for `Quoted`.
    pub fn is_quoted(&self) -> bool {
        matches!(self, Self::Quoted { .. })
    }

    /// Returns the fee breakdown of a quote.
    pub fn fees(&self) -> Option<&FeeBreakdown> {
        match self {
            Self::Quoted { fees, .. } => Some(fees),
            Self::Unavailable { .. } => None,
        }
    }

    /// Returns the plan info of a quote.
    pub fn plan(&self) -> Option<&PlanInfo> {
        match self {
            Self::Quoted { plan, .. } => Some(plan),
            Self::Unavailable { .. } => None,
        }
    }

    /// Returns the total fee of a quote.
    pub fn total_fee(&self) -> Option<Yen> {
        self.fees().map(|f| f.total_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total() {
        let fees = FeeBreakdown::new(2376, 0, 660);
        assert_eq!(fees.total_fee, 3036);
        assert!(fees.is_consistent());
    }

    #[test]
    fn test_breakdown_total_saturates() {
        let fees = FeeBreakdown::new(4780, Yen::MAX, 550);
        assert_eq!(fees.total_fee, Yen::MAX);
        assert!(fees.is_consistent());
    }

    #[test]
    fn test_extension_zero_is_none() {
        let plan = PlanInfo::with_plan(17, "8時間", 4780).extended_by(0);
        assert_eq!(plan.extension_fee, None);
        let plan = plan.extended_by(150);
        assert_eq!(plan.extension_fee, Some(150));
    }

    #[test]
    fn test_unavailable_is_not_zero_quote() {
        let unavailable = ProviderResult::Unavailable { max_hours: 72 };
        let free = ProviderResult::quoted(FeeBreakdown::new(0, 0, 0), PlanInfo::default());
        assert_ne!(unavailable, free);
        assert_eq!(unavailable.total_fee(), None);
        assert_eq!(free.total_fee(), Some(0));
    }

    #[test]
    fn test_result_serde_tag() {
        let json = serde_json::to_value(ProviderResult::Unavailable { max_hours: 72 }).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["max_hours"], 72);

        let quoted = ProviderResult::quoted(FeeBreakdown::new(100, 20, 5), PlanInfo::pay_as_you_go(20));
        let json = serde_json::to_value(&quoted).unwrap();
        assert_eq!(json["status"], "quoted");
        assert_eq!(json["fees"]["total_fee"], 125);
        assert!(json["plan"].get("applied_plan_name").is_none());
    }
}
