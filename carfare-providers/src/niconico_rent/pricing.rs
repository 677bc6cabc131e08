//! Niconico Rent a Car pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy, Tariff,
    TariffPricing,
};

const PACKS: &[HourPack] = &[HourPack::new(12, 2420), HourPack::new(24, 4180)];

/// Niconico Rent a Car tariff. Every started extra day costs one more
/// 24-hour pack.
pub const NICONICO_RENT_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::Flat,
    packs: HourPackTable::new(PACKS),
    rate_per_km: 15,
    mileage: MileagePolicy::Always,
    insurance: InsurancePolicy::PerDay(2200),
    overflow: Overflow::Daily { per_day: 4180 },
};

/// Creates the Niconico Rent a Car pricing policy.
pub const fn niconico_rent_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::NiconicoRent, &NICONICO_RENT_TARIFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carfare_core::{FeeEvaluator, ProviderResult, QuoteRequest, WeekendCalendar};
    use chrono::NaiveDate;

    fn quote(hours: u32, km: f64) -> ProviderResult {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let req = QuoteRequest::for_hours(start, hours, km).unwrap();
        niconico_rent_pricing().evaluate(&req, &WeekendCalendar)
    }

    #[test]
    fn test_twelve_hour_pack() {
        let fees = *quote(5, 30.0).fees().unwrap();
        assert_eq!(fees.time_fee, 2420);
        assert_eq!(fees.mileage_fee, 450);
        assert_eq!(fees.insurance_fee, 2200);
        assert_eq!(fees.total_fee, 5070);
    }

    #[test]
    fn test_full_day_and_beyond() {
        assert_eq!(quote(24, 0.0).fees().unwrap().time_fee, 4180);
        let fees = *quote(36, 0.0).fees().unwrap();
        assert_eq!(fees.time_fee, 8360);
        assert_eq!(fees.insurance_fee, 4400);
    }
}
