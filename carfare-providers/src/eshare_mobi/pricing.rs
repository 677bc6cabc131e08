//! e-Share Mobi pricing.

use carfare_core::{
    Elapsed, FeeBreakdown, FeeEvaluator, HolidayCalendar, PlanInfo, ProviderKind, ProviderResult,
    QuoteRequest, Yen, is_at_or_after_hour, is_before_hour,
};
use chrono::NaiveDateTime;

use super::plan::{EShareMobiPlan, EShareMobiRates};
use crate::tariff::{HourPack, TimeCharge, quarter_hour_units};

/// Longest rentable duration.
pub const ESHARE_MOBI_MAX_HOURS: u32 = 72;

/// Insurance per started day.
const INSURANCE_PER_DAY: Yen = 330;

const MULTI_DAY_PACK_NAME: &str = "無限日パック";

/// Night packs, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightPack {
    /// Up to 6h, from 18:00 until midnight.
    EarlyNight,
    /// Up to 6h, inside midnight to 06:00.
    LateNight,
    /// Up to 12h, inside 18:00 to 06:00.
    DoubleNight,
    /// Up to 17h, inside 17:00 to 10:00.
    BusinessNight,
}

impl NightPack {
    /// Priority order.
    pub const ALL: [Self; 4] = [
        Self::EarlyNight,
        Self::LateNight,
        Self::DoubleNight,
        Self::BusinessNight,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::EarlyNight => "アーリーナイトパック",
            Self::LateNight => "レイトナイトパック",
            Self::DoubleNight => "ダブルナイトパック",
            Self::BusinessNight => "ビジネスナイトパック",
        }
    }

    /// Fee under a plan class.
    pub fn fee(self, rates: &EShareMobiRates) -> Yen {
        match self {
            Self::EarlyNight => rates.early_night,
            Self::LateNight => rates.late_night,
            Self::DoubleNight => rates.double_night,
            Self::BusinessNight => rates.business_night,
        }
    }

    /// Returns true if the rental window fits this pack.
    pub fn fits(self, start: NaiveDateTime, end: NaiveDateTime, hours: f64) -> bool {
        match self {
            Self::EarlyNight => {
                // Ending exactly at midnight still counts.
                hours <= 6.0
                    && is_at_or_after_hour(start, 18)
                    && (is_at_or_after_hour(end, 18) || is_before_hour(end, 0))
            }
            Self::LateNight => hours <= 6.0 && is_before_hour(start, 6) && is_before_hour(end, 6),
            Self::DoubleNight => hours <= 12.0 && overnight(start, 18, 6) && overnight(end, 18, 6),
            Self::BusinessNight => {
                hours <= 17.0 && overnight(start, 17, 10) && overnight(end, 17, 10)
            }
        }
    }
}

fn overnight(instant: NaiveDateTime, from: u32, until: u32) -> bool {
    is_at_or_after_hour(instant, from) || is_before_hour(instant, until)
}

/// e-Share Mobi pricing policy for one plan class.
#[derive(Debug, Clone, Copy, Default)]
pub struct EShareMobiPricing {
    plan: EShareMobiPlan,
}

impl EShareMobiPricing {
    /// Creates the policy for a plan class.
    pub fn new(plan: EShareMobiPlan) -> Self {
        Self { plan }
    }

    /// The plan class.
    pub fn plan(&self) -> EShareMobiPlan {
        self.plan
    }

    /// First pack in priority order that fits and beats pay-as-you-go.
    fn priority_pack(
        rates: &EShareMobiRates,
        request: &QuoteRequest,
        elapsed: &Elapsed,
        pay_as_you_go: Yen,
    ) -> Option<TimeCharge> {
        let night = NightPack::ALL
            .into_iter()
            .filter(|p| p.fits(request.start(), request.end(), elapsed.hours))
            .map(|p| (p.name().to_string(), p.fee(rates)));

        let hour_packs = [
            HourPack::new(6, rates.six),
            HourPack::new(12, rates.twelve),
            HourPack::new(24, rates.one_day),
        ]
        .into_iter()
        .filter(|p| p.covers(elapsed.hours))
        .map(|p| (p.name(), p.fee));

        night
            .chain(hour_packs)
            .find(|(_, fee)| *fee < pay_as_you_go)
            .map(|(name, fee)| TimeCharge::pack(name, fee))
    }
}

impl FeeEvaluator for EShareMobiPricing {
    fn kind(&self) -> ProviderKind {
        ProviderKind::EShareMobi
    }

    fn evaluate(&self, request: &QuoteRequest, _calendar: &dyn HolidayCalendar) -> ProviderResult {
        let elapsed = request.elapsed();
        if elapsed.hours > f64::from(ESHARE_MOBI_MAX_HOURS) {
            return ProviderResult::Unavailable {
                max_hours: ESHARE_MOBI_MAX_HOURS,
            };
        }

        let rates = self.plan.rates();
        let pay_as_you_go = rates.quarter * quarter_hour_units(elapsed.minutes);

        if let Some(time) = Self::priority_pack(&rates, request, &elapsed, pay_as_you_go) {
            return ProviderResult::quoted(
                FeeBreakdown::new(time.fee, 0, INSURANCE_PER_DAY),
                time.plan_info(0),
            );
        }

        let days = elapsed.started_days();
        if days > 1 {
            let fee = rates.one_day * days;
            return ProviderResult::quoted(
                FeeBreakdown::new(fee, 0, INSURANCE_PER_DAY * days),
                PlanInfo::with_plan(0, MULTI_DAY_PACK_NAME, fee),
            );
        }

        ProviderResult::quoted(
            FeeBreakdown::new(pay_as_you_go, 0, INSURANCE_PER_DAY),
            PlanInfo::pay_as_you_go(0),
        )
    }

    fn rate_per_km(&self) -> u64 {
        0
    }

    fn max_hours(&self) -> Option<u32> {
        Some(ESHARE_MOBI_MAX_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carfare_core::WeekendCalendar;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn quote(start: NaiveDateTime, end: NaiveDateTime, km: f64) -> ProviderResult {
        let req = QuoteRequest::new(start, end, km).unwrap();
        EShareMobiPricing::default().evaluate(&req, &WeekendCalendar)
    }

    fn plan_name(result: &ProviderResult) -> Option<&str> {
        result.plan().unwrap().applied_plan_name.as_deref()
    }

    #[test]
    fn test_short_daytime_rental() {
        let result = quote(at(1, 10, 0), at(1, 11, 0), 40.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 800);
        assert_eq!(fees.mileage_fee, 0);
        assert_eq!(fees.insurance_fee, 330);
        assert!(!result.plan().unwrap().has_plan());
    }

    #[test]
    fn test_early_night_until_midnight() {
        // 18:00 -> 00:00: 24 units * 200 = 4800 > 2600.
        let result = quote(at(1, 18, 0), at(2, 0, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 2600);
        assert_eq!(plan_name(&result), Some("アーリーナイトパック"));
    }

    #[test]
    fn test_double_night_after_midnight() {
        // 19:00 -> 01:00 ends after midnight, so early night does not fit.
        let result = quote(at(1, 19, 0), at(2, 1, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 3800);
        assert_eq!(plan_name(&result), Some("ダブルナイトパック"));
    }

    #[test]
    fn test_late_night() {
        let result = quote(at(2, 0, 30), at(2, 6, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 3000);
        assert_eq!(plan_name(&result), Some("レイトナイトパック"));
    }

    #[test]
    fn test_business_night() {
        // 17:00 -> 09:00 next day is 16h.
        let result = quote(at(1, 17, 0), at(2, 9, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 4300);
        assert_eq!(plan_name(&result), Some("ビジネスナイトパック"));
    }

    #[test]
    fn test_first_fitting_pack_wins_over_cheaper_later_pack() {
        // 17:00 -> 23:00: business night 4300 comes before the 6h pack 4100.
        let result = quote(at(1, 17, 0), at(1, 23, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 4300);
        assert_eq!(plan_name(&result), Some("ビジネスナイトパック"));
    }

    #[test]
    fn test_pack_must_beat_pay_as_you_go() {
        // 18:00 -> 19:00: 800 < 2600, stays pay-as-you-go.
        let result = quote(at(1, 18, 0), at(1, 19, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 800);
        assert!(!result.plan().unwrap().has_plan());
    }

    #[test]
    fn test_hour_packs() {
        let result = quote(at(1, 9, 0), at(1, 15, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 4100);
        assert_eq!(plan_name(&result), Some("6時間パック"));

        let result = quote(at(1, 9, 0), at(2, 9, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 9600);
        assert_eq!(plan_name(&result), Some("24時間パック"));
    }

    #[test]
    fn test_multi_day_pack() {
        // 30h: 2 days * 9600, insurance 2 * 330.
        let result = quote(at(1, 9, 0), at(2, 15, 0), 300.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 19200);
        assert_eq!(fees.mileage_fee, 0);
        assert_eq!(fees.insurance_fee, 660);
        assert_eq!(plan_name(&result), Some("無限日パック"));
    }

    #[test]
    fn test_plan_class_rates() {
        let req = QuoteRequest::new(at(1, 18, 0), at(2, 0, 0), 0.0).unwrap();
        let result = EShareMobiPricing::new(EShareMobiPlan::E4).evaluate(&req, &WeekendCalendar);
        assert_eq!(result.fees().unwrap().time_fee, 4600);
    }

    #[test]
    fn test_beyond_72_hours_is_unavailable() {
        let result = quote(at(1, 9, 0), at(4, 10, 0), 0.0);
        assert_eq!(result, ProviderResult::Unavailable { max_hours: 72 });
        assert!(quote(at(1, 9, 0), at(4, 9, 0), 0.0).is_quoted());
    }
}
