//! Yasashii Car Share pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy, Tariff,
    TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(1, 800),
    HourPack::new(6, 4800),
    HourPack::new(12, 6800),
    HourPack::new(24, 8800),
    HourPack::new(48, 17600),
    HourPack::new(72, 26400),
];

/// Yasashii Car Share tariff. Insurance is charged once per rental.
pub const YASASHII_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::CapPayAsYouGo { quarter_rate: 250 },
    packs: HourPackTable::new(PACKS),
    rate_per_km: 20,
    mileage: MileagePolicy::FreeUpToHours(6),
    insurance: InsurancePolicy::PerRental(550),
    overflow: Overflow::Unavailable,
};

/// Creates the Yasashii Car Share pricing policy.
pub const fn yasashii_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::Yasashii, &YASASHII_TARIFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carfare_core::{FeeEvaluator, ProviderResult, QuoteRequest, WeekendCalendar};
    use chrono::{Duration, NaiveDate};

    fn quote_minutes(minutes: i64, km: f64) -> ProviderResult {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let req = QuoteRequest::new(start, start + Duration::minutes(minutes), km).unwrap();
        yasashii_pricing().evaluate(&req, &WeekendCalendar)
    }

    #[test]
    fn test_half_hour_pay_as_you_go() {
        let fees = *quote_minutes(30, 5.0).fees().unwrap();
        assert_eq!(fees.time_fee, 500);
        assert_eq!(fees.insurance_fee, 550);
        assert_eq!(fees.total_fee, 1050);
    }

    #[test]
    fn test_one_hour_pack() {
        let result = quote_minutes(60, 5.0);
        assert_eq!(result.fees().unwrap().time_fee, 800);
        assert_eq!(result.plan().unwrap().applied_plan_name.as_deref(), Some("1時間パック"));
    }

    #[test]
    fn test_just_over_one_hour_falls_to_base() {
        // 5 units = 1250, under the 6h pack.
        let result = quote_minutes(75, 5.0);
        assert_eq!(result.fees().unwrap().time_fee, 1250);
        assert!(!result.plan().unwrap().has_plan());
    }

    #[test]
    fn test_eight_hours_with_distance() {
        let fees = *quote_minutes(8 * 60, 50.0).fees().unwrap();
        assert_eq!(fees.time_fee, 6800);
        assert_eq!(fees.mileage_fee, 1000);
        assert_eq!(fees.insurance_fee, 550);
        assert_eq!(fees.total_fee, 8350);
    }

    #[test]
    fn test_insurance_flat_for_long_rental() {
        assert_eq!(quote_minutes(72 * 60, 0.0).fees().unwrap().insurance_fee, 550);
    }

    #[test]
    fn test_beyond_72_hours_unavailable() {
        let result = quote_minutes(72 * 60 + 15, 0.0);
        assert_eq!(result, ProviderResult::Unavailable { max_hours: 72 });
    }
}
