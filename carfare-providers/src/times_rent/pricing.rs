//! Times Car Rental pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    ExcessDayCount, HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy,
    Tariff, TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(6, 3696),
    HourPack::new(12, 4488),
    HourPack::new(24, 5280),
];

/// Times Car Rental tariff.
pub const TIMES_RENT_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::Flat,
    packs: HourPackTable::new(PACKS),
    rate_per_km: 15,
    mileage: MileagePolicy::Always,
    insurance: InsurancePolicy::PerDay(2200),
    overflow: Overflow::HourlyUntilDay {
        per_hour: 616,
        per_day: 4488,
        day_count: ExcessDayCount::Ceil,
        whole_days_on_boundary: true,
    },
};

/// Creates the Times Car Rental pricing policy.
pub const fn times_rent_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::TimesRent, &TIMES_RENT_TARIFF)
}
