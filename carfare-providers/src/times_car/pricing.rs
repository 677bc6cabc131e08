//! Times Car Share pricing.

use carfare_core::{
    FeeBreakdown, FeeEvaluator, HolidayCalendar, ProviderKind, ProviderResult, QuoteRequest, Yen,
};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::tariff::{
    HourPack, HourPackTable, InsurancePolicy, MileagePolicy, Overflow, PackPolicy, Tariff,
    TimeCharge, mileage_fee,
};

const PACKS: &[HourPack] = &[
    HourPack::new(6, 4290),
    HourPack::new(12, 5500),
    HourPack::new(24, 6600),
    HourPack::new(36, 8800),
    HourPack::new(48, 9900),
    HourPack::new(72, 14300),
];

const NIGHT_PACK_FEE: Yen = 2640;
const NIGHT_PACK_NAME: &str = "ナイトパック";

/// Night pack window: pick-up from 18:00, return by 09:00 the next morning.
const NIGHT_STARTS_AT: u32 = 18;
const NIGHT_ENDS_AT: u32 = 9;

/// Tariff without the night pack.
pub const TIMES_CAR_TARIFF: Tariff = Tariff {
    pack_policy: PackPolicy::CapPayAsYouGo { quarter_rate: 220 },
    packs: HourPackTable::new(PACKS),
    rate_per_km: 20,
    mileage: MileagePolicy::FreeUpToHours(6),
    insurance: InsurancePolicy::PerDay(550),
    overflow: Overflow::Daily { per_day: 2640 },
};

/// Times Car Share pricing policy.
///
/// Standard hour packs plus a night pack. A night-pack rental pays for
/// distance regardless of its length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimesCarPricing;

impl TimesCarPricing {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }
}

/// Returns true if the rental fits the night pack window.
///
/// A rental picked up after midnight but before 09:00 must be returned by
/// 09:00 the same morning; otherwise it must start at or after 18:00 and end
/// by 09:00 the following day.
pub fn is_night_pack_window(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    let day = start.date();
    let morning = day.and_time(clock(NIGHT_ENDS_AT));

    if start.hour() < NIGHT_ENDS_AT {
        return end <= morning;
    }

    let evening = day.and_time(clock(NIGHT_STARTS_AT));
    let next_morning = morning + Duration::days(1);
    start >= evening && end <= next_morning
}

fn clock(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl FeeEvaluator for TimesCarPricing {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TimesCar
    }

    fn evaluate(&self, request: &QuoteRequest, _calendar: &dyn HolidayCalendar) -> ProviderResult {
        let tariff = &TIMES_CAR_TARIFF;
        let elapsed = request.elapsed();

        let Some(mut time) = tariff.time_charge(&elapsed) else {
            return ProviderResult::Unavailable {
                max_hours: tariff.max_hours().unwrap_or_default(),
            };
        };

        let night = is_night_pack_window(request.start(), request.end()) && time.fee > NIGHT_PACK_FEE;
        if night {
            time = TimeCharge::pack(NIGHT_PACK_NAME, NIGHT_PACK_FEE);
        }

        let mileage = if night || tariff.mileage.applies(elapsed.hours) {
            mileage_fee(tariff.rate_per_km, request.distance_km())
        } else {
            0
        };

        ProviderResult::quoted(
            FeeBreakdown::new(time.fee, mileage, tariff.insurance.fee(&elapsed)),
            time.plan_info(tariff.rate_per_km),
        )
    }

    fn rate_per_km(&self) -> u64 {
        TIMES_CAR_TARIFF.rate_per_km
    }
}
