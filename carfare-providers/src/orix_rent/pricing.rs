//! ORIX Rent a Car pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    ExcessDayCount, HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy,
    Tariff, TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(6, 6160),
    HourPack::new(12, 6160),
    HourPack::new(24, 8250),
];

/// ORIX Rent a Car tariff.
pub const ORIX_RENT_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::Flat,
    packs: HourPackTable::new(PACKS),
    rate_per_km: 15,
    mileage: MileagePolicy::Always,
    insurance: InsurancePolicy::PerDay(1100),
    overflow: Overflow::HourlyUntilDay {
        per_hour: 1320,
        per_day: 6160,
        day_count: ExcessDayCount::Ceil,
        whole_days_on_boundary: true,
    },
};

/// Creates the ORIX Rent a Car pricing policy.
pub const fn orix_rent_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::OrixRent, &ORIX_RENT_TARIFF)
}
