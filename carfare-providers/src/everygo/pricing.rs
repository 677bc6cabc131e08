//! EveryGo pricing.

use carfare_core::{
    Elapsed, FeeBreakdown, FeeEvaluator, HolidayCalendar, ProviderKind, ProviderResult,
    QuoteRequest, Yen, is_at_or_after_hour, is_before_hour,
};
use chrono::NaiveDateTime;

use super::plan::{EveryGoPlan, EveryGoRates};
use crate::tariff::{TimeCharge, mileage_fee, quarter_hour_units};

/// Longest rentable duration (one week minus an hour).
pub const EVERYGO_MAX_HOURS: u32 = 167;

const RATE_PER_KM: Yen = 17;
const INSURANCE_FEE: Yen = 550;

const NIGHT_MAX_HOURS: f64 = 10.0;
const NIGHT_FROM: u32 = 21;
const NIGHT_UNTIL: u32 = 7;

/// EveryGo pricing policy for one plan class.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryGoPricing {
    plan: EveryGoPlan,
}

impl EveryGoPricing {
    /// Creates the policy for a plan class.
    pub fn new(plan: EveryGoPlan) -> Self {
        Self { plan }
    }

    /// The plan class.
    pub fn plan(&self) -> EveryGoPlan {
        self.plan
    }

    /// Eligible time charges in tie-break order.
    fn candidates(
        rates: &EveryGoRates,
        request: &QuoteRequest,
        elapsed: &Elapsed,
        weekday: bool,
    ) -> Vec<TimeCharge> {
        let mut candidates = Vec::with_capacity(5);

        if weekday {
            candidates.push(TimeCharge::pay_as_you_go(
                rates.quarter * quarter_hour_units(elapsed.minutes),
            ));
            candidates.push(extended_pack("4時間[平日]", rates.four, 4, rates.quarter, elapsed));
        }
        candidates.push(extended_pack("8時間", rates.eight, 8, rates.extend, elapsed));
        candidates.push(extended_pack("16時間", rates.sixteen, 16, rates.extend, elapsed));

        if elapsed.hours <= NIGHT_MAX_HOURS
            && in_night_window(request.start())
            && in_night_window(request.end())
        {
            candidates.push(TimeCharge::pack("ナイトパック", rates.night));
        }

        candidates
    }
}

/// A pack of `hours` plus `quarter_rate` per started 15 minutes beyond it.
fn extended_pack(
    name: &str,
    fee: Yen,
    hours: u32,
    quarter_rate: Yen,
    elapsed: &Elapsed,
) -> TimeCharge {
    if elapsed.hours < f64::from(hours) {
        return TimeCharge::pack(name, fee);
    }
    let beyond = elapsed.minutes - f64::from(hours * 60);
    TimeCharge::extended(name, fee, quarter_rate * quarter_hour_units(beyond))
}

fn in_night_window(instant: NaiveDateTime) -> bool {
    is_at_or_after_hour(instant, NIGHT_FROM) || is_before_hour(instant, NIGHT_UNTIL)
}

impl FeeEvaluator for EveryGoPricing {
    fn kind(&self) -> ProviderKind {
        ProviderKind::EveryGo
    }

    fn evaluate(&self, request: &QuoteRequest, calendar: &dyn HolidayCalendar) -> ProviderResult {
        let elapsed = request.elapsed();
        if elapsed.hours > f64::from(EVERYGO_MAX_HOURS) {
            return ProviderResult::Unavailable {
                max_hours: EVERYGO_MAX_HOURS,
            };
        }

        let rates = self.plan.rates();
        let weekday = !calendar.is_holiday(request.start().date());

        // Strictly cheaper replaces, so earlier candidates win ties.
        let mut best: Option<TimeCharge> = None;
        for candidate in Self::candidates(&rates, request, &elapsed, weekday) {
            if best.as_ref().is_none_or(|b| candidate.fee < b.fee) {
                best = Some(candidate);
            }
        }
        // The 8h and 16h packs are always eligible.
        let time = best.unwrap_or_else(|| TimeCharge::pack("16時間", rates.sixteen));

        ProviderResult::quoted(
            FeeBreakdown::new(
                time.fee,
                mileage_fee(RATE_PER_KM, request.distance_km()),
                INSURANCE_FEE,
            ),
            time.plan_info(RATE_PER_KM),
        )
    }

    fn rate_per_km(&self) -> u64 {
        RATE_PER_KM
    }

    fn max_hours(&self) -> Option<u32> {
        Some(EVERYGO_MAX_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carfare_core::{HolidaySet, WeekendCalendar};
    use chrono::NaiveDate;

    // 2024-04-01 is a Monday, 2024-04-06 a Saturday.
    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn quote(plan: EveryGoPlan, start: NaiveDateTime, end: NaiveDateTime, km: f64) -> ProviderResult {
        let req = QuoteRequest::new(start, end, km).unwrap();
        EveryGoPricing::new(plan).evaluate(&req, &WeekendCalendar)
    }

    #[test]
    fn test_weekday_short_rental_pays_per_quarter() {
        // 1h weekday: 4 * 200 = 800 beats the 4h pack 2780.
        let result = quote(EveryGoPlan::Entry, at(1, 10, 0), at(1, 11, 0), 10.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 800);
        assert_eq!(fees.mileage_fee, 170);
        assert_eq!(fees.insurance_fee, 550);
        assert_eq!(fees.total_fee, 1520);
        assert!(!result.plan().unwrap().has_plan());
    }

    #[test]
    fn test_weekend_skips_weekday_candidates() {
        // Saturday 1h: only the 8h pack (and 16h) are eligible.
        let result = quote(EveryGoPlan::Entry, at(6, 10, 0), at(6, 11, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 4780);
        assert_eq!(result.plan().unwrap().applied_plan_name.as_deref(), Some("8時間"));
    }

    #[test]
    fn test_public_holiday_skips_weekday_candidates() {
        let holidays: HolidaySet = [NaiveDate::from_ymd_opt(2024, 4, 29).unwrap()]
            .into_iter()
            .collect();
        let start = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap().and_hms_opt(10, 0, 0).unwrap();
        let req = QuoteRequest::for_hours(start, 1, 0.0).unwrap();
        let result = EveryGoPricing::new(EveryGoPlan::Entry).evaluate(&req, &holidays);
        assert_eq!(result.fees().unwrap().time_fee, 4780);
    }

    #[test]
    fn test_four_hour_pack_extends_at_quarter_rate() {
        // 4h30m weekday: 2780 + 2 * 200 = 3180 < 18 * 200 = 3600.
        let result = quote(EveryGoPlan::Entry, at(1, 10, 0), at(1, 14, 30), 0.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 3180);
        let plan = result.plan().unwrap();
        assert_eq!(plan.applied_plan_name.as_deref(), Some("4時間[平日]"));
        assert_eq!(plan.applied_plan_fee, Some(2780));
        assert_eq!(plan.extension_fee, Some(400));
    }

    #[test]
    fn test_eight_hour_pack_extension() {
        // Saturday 9h: 4780 + 4 * 75 = 5080 vs 16h pack 5780.
        let result = quote(EveryGoPlan::Entry, at(6, 9, 0), at(6, 18, 0), 0.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 5080);
        assert_eq!(result.plan().unwrap().extension_fee, Some(300));
        assert_eq!(fees.total_fee, fees.time_fee + fees.mileage_fee + fees.insurance_fee);
    }

    #[test]
    fn test_exactly_eight_hours_has_no_extension() {
        let result = quote(EveryGoPlan::Entry, at(6, 9, 0), at(6, 17, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 4780);
        assert_eq!(result.plan().unwrap().extension_fee, None);
    }

    #[test]
    fn test_night_pack() {
        // Saturday 22:00 -> Sunday 06:00: night 2500 beats 8h pack 4780.
        let result = quote(EveryGoPlan::Entry, at(6, 22, 0), at(7, 6, 0), 30.0);
        let fees = result.fees().unwrap();
        assert_eq!(fees.time_fee, 2500);
        assert_eq!(fees.mileage_fee, 510);
        assert_eq!(result.plan().unwrap().applied_plan_name.as_deref(), Some("ナイトパック"));
    }

    #[test]
    fn test_night_window_includes_seven_oclock_sharp() {
        let result = quote(EveryGoPlan::Entry, at(6, 21, 0), at(7, 7, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 2500);

        let result = quote(EveryGoPlan::Entry, at(6, 21, 0), at(7, 7, 15), 0.0);
        assert_ne!(result.fees().unwrap().time_fee, 2500);
    }

    #[test]
    fn test_plan_class_rates() {
        let result = quote(EveryGoPlan::Premium, at(6, 22, 0), at(7, 6, 0), 0.0);
        assert_eq!(result.fees().unwrap().time_fee, 4600);
    }

    #[test]
    fn test_beyond_one_week_is_unavailable() {
        let start = at(1, 10, 0);
        let req = QuoteRequest::for_hours(start, 168, 0.0).unwrap();
        let result = EveryGoPricing::default().evaluate(&req, &WeekendCalendar);
        assert_eq!(result, ProviderResult::Unavailable { max_hours: 167 });

        let req = QuoteRequest::for_hours(start, 167, 0.0).unwrap();
        assert!(EveryGoPricing::default().evaluate(&req, &WeekendCalendar).is_quoted());
    }
}
