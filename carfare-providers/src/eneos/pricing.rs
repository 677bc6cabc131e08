//! ENEOS Car Share pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy, Tariff,
    TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(6, 3960),
    HourPack::new(12, 5500),
    HourPack::new(24, 6600),
    HourPack::new(36, 8800),
    HourPack::new(48, 9900),
    HourPack::new(72, 14300),
];

/// ENEOS Car Share tariff.
pub const ENEOS_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::CapPayAsYouGo { quarter_rate: 198 },
    packs: HourPackTable::new(PACKS),
    rate_per_km: 18,
    mileage: MileagePolicy::FreeUpToHours(6),
    insurance: InsurancePolicy::PerDay(660),
    overflow: Overflow::Unavailable,
};

/// Creates the ENEOS Car Share pricing policy.
pub const fn eneos_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::Eneos, &ENEOS_TARIFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carfare_core::{FeeEvaluator, ProviderResult, QuoteRequest, WeekendCalendar};
    use chrono::NaiveDate;

    fn quote(hours: u32, km: f64) -> ProviderResult {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let req = QuoteRequest::for_hours(start, hours, km).unwrap();
        eneos_pricing().evaluate(&req, &WeekendCalendar)
    }

    #[test]
    fn test_three_hours_base_stands() {
        let result = quote(3, 50.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 2376);
        assert_eq!(fees.mileage_fee, 0);
        assert_eq!(fees.insurance_fee, 660);
        assert_eq!(fees.total_fee, 3036);
        assert!(!result.plan().unwrap().has_plan());
    }

    #[test]
    fn test_thirty_hours_capped_by_36h_pack() {
        let result = quote(30, 200.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 8800);
        assert_eq!(fees.mileage_fee, 3600);
        assert_eq!(fees.insurance_fee, 1320);
        assert_eq!(fees.total_fee, 13720);
        assert_eq!(result.plan().unwrap().applied_plan_name.as_deref(), Some("36時間パック"));
    }

    #[test]
    fn test_beyond_72_hours_unavailable() {
        assert_eq!(quote(80, 10.0), ProviderResult::Unavailable { max_hours: 72 });
        assert!(quote(72, 10.0).is_quoted());
    }

    #[test]
    fn test_six_hour_boundary_selects_six_hour_pack() {
        let result = quote(6, 10.0);
        assert_eq!(result.fees().unwrap().time_fee, 3960);
        assert_eq!(result.fees().unwrap().mileage_fee, 0);
        assert_eq!(result.plan().unwrap().applied_plan_name.as_deref(), Some("6時間パック"));
    }

    #[test]
    fn test_max_hours() {
        assert_eq!(eneos_pricing().max_hours(), Some(72));
        assert_eq!(eneos_pricing().rate_per_km(), 18);
    }
}
