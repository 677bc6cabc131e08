//! TOYOTA SHARE pricing.

use carfare_core::ProviderKind;

use crate::tariff::{
    ExcessDayCount, HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy,
    Tariff, TariffPricing,
};

const PACKS: &[HourPack] = &[
    HourPack::new(6, 5610),
    HourPack::new(12, 5940),
    HourPack::new(24, 7810),
];

/// TOYOTA SHARE tariff.
///
/// Insurance is a flat 330 yen for rentals under 6 hours. Excess days are
/// counted as `ceil((excess + 1) / 24)`.
pub const TOYOTA_SHARE_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::CapPayAsYouGo { quarter_rate: 220 },
    packs: HourPackTable::new(PACKS),
    rate_per_km: 16,
    mileage: MileagePolicy::FreeUpToHours(6),
    insurance: InsurancePolicy::PerDayWithShortFee {
        per_day: 1650,
        short_fee: 330,
        below_hours: 6,
    },
    overflow: Overflow::HourlyUntilDay {
        per_hour: 1210,
        per_day: 6600,
        day_count: ExcessDayCount::CeilPlusOneHour,
        whole_days_on_boundary: false,
    },
};

/// Creates the TOYOTA SHARE pricing policy.
pub const fn toyota_share_pricing() -> TariffPricing {
    TariffPricing::new(ProviderKind::ToyotaShare, &TOYOTA_SHARE_TARIFF)
}
