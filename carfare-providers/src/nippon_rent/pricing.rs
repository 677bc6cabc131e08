//! Nippon Rent-A-Car pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    ExcessDayCount, HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy,
    Tariff, TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(6, 6380),
    HourPack::new(12, 6380),
    HourPack::new(24, 7920),
];

/// Nippon Rent-A-Car tariff.
pub const NIPPON_RENT_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::Flat,
    packs: HourPackTable::new(PACKS),
    rate_per_km: 15,
    mileage: MileagePolicy::Always,
    insurance: InsurancePolicy::PerDay(1100),
    overflow: Overflow::HourlyUntilDay {
        per_hour: 1210,
        per_day: 6710,
        day_count: ExcessDayCount::CeilPlusOneHour,
        whole_days_on_boundary: false,
    },
};

/// Creates the Nippon Rent-A-Car pricing policy.
pub const fn nippon_rent_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::NipponRent, &NIPPON_RENT_TARIFF)
}
