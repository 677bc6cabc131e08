//! Toyota Rent a Car pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy, Tariff,
    TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(3, 4312),
    HourPack::new(6, 6160),
    HourPack::new(12, 6600),
    HourPack::new(24, 8580),
];

/// Toyota Rent a Car tariff.
pub const TOYOTA_RENT_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::Flat,
    packs: HourPackTable::new(PACKS),
    rate_per_km: 15,
    mileage: MileagePolicy::Always,
    insurance: InsurancePolicy::PerDay(1650),
    overflow: Overflow::Daily { per_day: 7260 },
};

/// Creates the Toyota Rent a Car pricing policy.
pub const fn toyota_rent_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::ToyotaRent, &TOYOTA_RENT_TARIFF)
}
