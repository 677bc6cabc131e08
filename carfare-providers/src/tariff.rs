//! Shared tariff arithmetic.
//!
//! Most providers bill the same way and differ only in their constants:
//! pay-as-you-go per 15 minutes, capped (or replaced) by the first hour pack
//! that covers the rental, a mileage fee, an insurance fee, and a recurrence
//! once the rental outgrows the largest pack. A [`Tariff`] is that shape as
//! data; providers with night or weekday packs build on its pieces.

use carfare_core::clock::ceil_units;
use carfare_core::{
    Elapsed, FeeBreakdown, FeeEvaluator, HolidayCalendar, PlanInfo, ProviderKind, ProviderResult,
    QuoteRequest, Yen,
};
use tracing::trace;

// ============================================================================
// Helpers
// ============================================================================

/// Number of started 15-minute units.
pub fn quarter_hour_units(minutes: f64) -> u64 {
    ceil_units(minutes / 15.0)
}

/// Mileage fee in whole yen, rounded up.
pub fn mileage_fee(rate_per_km: Yen, distance_km: f64) -> Yen {
    #[allow(clippy::cast_precision_loss)]
    let raw = rate_per_km as f64 * distance_km;
    ceil_units(raw)
}

// ============================================================================
// Hour Packs
// ============================================================================

/// Flat fee covering a rental of up to `hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourPack {
    /// Longest rental the pack covers.
    pub hours: u32,
    /// Flat fee.
    pub fee: Yen,
}

impl HourPack {
    /// Creates a pack.
    pub const fn new(hours: u32, fee: Yen) -> Self {
        Self { hours, fee }
    }

    /// Display name, e.g. `6時間パック`.
    pub fn name(&self) -> String {
        format!("{}時間パック", self.hours)
    }

    /// Returns true if a rental of `hours` fits in this pack.
    pub fn covers(&self, hours: f64) -> bool {
        hours <= f64::from(self.hours)
    }
}

/// Hour packs sorted by ascending duration.
#[derive(Debug, Clone, Copy)]
pub struct HourPackTable {
    packs: &'static [HourPack],
}

impl HourPackTable {
    /// Wraps a table. Packs must be sorted by `hours`.
    pub const fn new(packs: &'static [HourPack]) -> Self {
        Self { packs }
    }

    /// First pack whose duration covers `hours`.
    ///
    /// A linear scan: a rental exactly as long as a pack selects that pack.
    pub fn find(&self, hours: f64) -> Option<&'static HourPack> {
        self.packs.iter().find(|p| p.covers(hours))
    }

    /// The longest pack.
    pub fn largest(&self) -> Option<&'static HourPack> {
        self.packs.last()
    }

    /// All packs.
    pub fn packs(&self) -> &'static [HourPack] {
        self.packs
    }
}

/// How a covering hour pack relates to pay-as-you-go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackPolicy {
    /// Pay-as-you-go per started 15 minutes; the pack caps it when cheaper.
    CapPayAsYouGo {
        /// Fee per started 15 minutes.
        quarter_rate: Yen,
    },
    /// The covering pack is always charged (counter rentals).
    Flat,
}

// ============================================================================
// Mileage & Insurance
// ============================================================================

/// When the distance is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MileagePolicy {
    /// Every kilometre is billed.
    Always,
    /// Distance is free for rentals of up to this many hours.
    FreeUpToHours(u32),
}

impl MileagePolicy {
    /// Returns true if a rental of `hours` pays for distance.
    pub fn applies(&self, hours: f64) -> bool {
        match self {
            Self::Always => true,
            Self::FreeUpToHours(limit) => hours > f64::from(*limit),
        }
    }
}

/// Insurance / no-deposit fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsurancePolicy {
    /// Charged per started 24 hours.
    PerDay(Yen),
    /// Per started 24 hours, but a fixed fee for rentals shorter than
    /// `below_hours`.
    PerDayWithShortFee {
        /// Fee per started 24 hours.
        per_day: Yen,
        /// Fee for short rentals.
        short_fee: Yen,
        /// Rentals strictly shorter than this pay `short_fee`.
        below_hours: u32,
    },
    /// Charged once per rental.
    PerRental(Yen),
}

impl InsurancePolicy {
    /// Fee for a rental of the given length.
    pub fn fee(&self, elapsed: &Elapsed) -> Yen {
        match *self {
            Self::PerDay(per_day) => per_day * elapsed.started_days(),
            Self::PerDayWithShortFee {
                per_day,
                short_fee,
                below_hours,
            } => {
                if elapsed.hours < f64::from(below_hours) {
                    short_fee
                } else {
                    per_day * elapsed.started_days()
                }
            }
            Self::PerRental(fee) => fee,
        }
    }
}

// ============================================================================
// Overflow
// ============================================================================

/// How excess days are counted for [`Overflow::HourlyUntilDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcessDayCount {
    /// `ceil(excess / 24)`.
    Ceil,
    /// `ceil((excess + 1) / 24)`: a whole excess day opens the next one.
    CeilPlusOneHour,
}

/// Billing once the rental outgrows the largest pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// The largest pack is the longest rentable duration.
    Unavailable,
    /// A flat fee per started excess day.
    Daily {
        /// Fee per started excess day.
        per_day: Yen,
    },
    /// Per started hour in the last excess day until the day rate is
    /// cheaper, plus the day rate for every earlier excess day.
    ///
    /// Break-even compares started hours, not fractional ones: 5h15m of
    /// excess counts as six hours against `per_day / per_hour`.
    HourlyUntilDay {
        /// Fee per started excess hour.
        per_hour: Yen,
        /// Fee per excess day.
        per_day: Yen,
        /// How excess days are counted.
        day_count: ExcessDayCount,
        /// An excess that ends exactly on a day boundary bills whole days.
        whole_days_on_boundary: bool,
    },
}

impl Overflow {
    /// Fee for `excess_hours` beyond the largest pack, or `None` when the
    /// provider does not rent that long.
    pub fn excess_fee(&self, excess_hours: f64) -> Option<Yen> {
        match *self {
            Self::Unavailable => None,
            Self::Daily { per_day } => Some(per_day * ceil_units(excess_hours / 24.0)),
            Self::HourlyUntilDay {
                per_hour,
                per_day,
                day_count,
                whole_days_on_boundary,
            } => {
                let days = match day_count {
                    ExcessDayCount::Ceil => ceil_units(excess_hours / 24.0),
                    ExcessDayCount::CeilPlusOneHour => ceil_units((excess_hours + 1.0) / 24.0),
                };
                let last_day_hours = excess_hours % 24.0;
                let started_hours = ceil_units(last_day_hours);
                #[allow(clippy::cast_precision_loss)]
                let break_even = per_day as f64 / per_hour as f64;
                #[allow(clippy::cast_precision_loss)]
                let past_break_even = started_hours as f64 > break_even;

                trace!(excess_hours, days, last_day_hours, break_even, "Overflow recurrence");

                if past_break_even || (whole_days_on_boundary && last_day_hours == 0.0) {
                    Some(per_day * days)
                } else {
                    Some(per_hour * started_hours + per_day * days.saturating_sub(1))
                }
            }
        }
    }
}

// ============================================================================
// Time Charge
// ============================================================================

/// The time component of a quote and what set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCharge {
    /// Time fee.
    pub fee: Yen,
    /// Applied pack name and nominal fee.
    pub pack: Option<(String, Yen)>,
    /// Charge beyond the pack's nominal duration.
    pub extension: Yen,
}

impl TimeCharge {
    /// Pay-as-you-go charge.
    pub fn pay_as_you_go(fee: Yen) -> Self {
        Self {
            fee,
            pack: None,
            extension: 0,
        }
    }

    /// A pack covering the whole rental.
    pub fn pack(name: impl Into<String>, fee: Yen) -> Self {
        Self {
            fee,
            pack: Some((name.into(), fee)),
            extension: 0,
        }
    }

    /// A pack plus an extension charge.
    pub fn extended(name: impl Into<String>, pack_fee: Yen, extension: Yen) -> Self {
        Self {
            fee: pack_fee.saturating_add(extension),
            pack: Some((name.into(), pack_fee)),
            extension,
        }
    }

    /// Display metadata for this charge.
    pub fn plan_info(&self, rate_per_km: Yen) -> PlanInfo {
        match &self.pack {
            Some((name, fee)) => {
                PlanInfo::with_plan(rate_per_km, name.clone(), *fee).extended_by(self.extension)
            }
            None => PlanInfo::pay_as_you_go(rate_per_km),
        }
    }
}

// ============================================================================
// Tariff
// ============================================================================

/// Declarative pricing table shared by the tiered providers.
#[derive(Debug, Clone, Copy)]
pub struct Tariff {
    /// How packs relate to pay-as-you-go.
    pub pack_policy: PackPolicy,
    /// Hour packs, ascending.
    pub packs: HourPackTable,
    /// Mileage rate per kilometre.
    pub rate_per_km: Yen,
    /// When distance is billed.
    pub mileage: MileagePolicy,
    /// Insurance schedule.
    pub insurance: InsurancePolicy,
    /// Billing beyond the largest pack.
    pub overflow: Overflow,
}

impl Tariff {
    /// Longest rentable duration, if capped.
    pub fn max_hours(&self) -> Option<u32> {
        match self.overflow {
            Overflow::Unavailable => self.packs.largest().map(|p| p.hours),
            _ => None,
        }
    }

    /// Pay-as-you-go fee, if the tariff has one.
    pub fn pay_as_you_go_fee(&self, elapsed: &Elapsed) -> Option<Yen> {
        match self.pack_policy {
            PackPolicy::CapPayAsYouGo { quarter_rate } => {
                Some(quarter_rate * quarter_hour_units(elapsed.minutes))
            }
            PackPolicy::Flat => None,
        }
    }

    /// Time component, or `None` if the rental is too long.
    pub fn time_charge(&self, elapsed: &Elapsed) -> Option<TimeCharge> {
        let pay_as_you_go = self.pay_as_you_go_fee(elapsed);

        if let Some(largest) = self.packs.largest() {
            if !largest.covers(elapsed.hours) {
                let excess = self.overflow.excess_fee(elapsed.hours - f64::from(largest.hours))?;
                return Some(TimeCharge::extended(
                    format!("{}+延長", largest.name()),
                    largest.fee,
                    excess,
                ));
            }
        }

        let charge = match (self.packs.find(elapsed.hours), pay_as_you_go) {
            (Some(pack), Some(base)) if base > pack.fee => TimeCharge::pack(pack.name(), pack.fee),
            (Some(pack), None) => TimeCharge::pack(pack.name(), pack.fee),
            (_, Some(base)) => TimeCharge::pay_as_you_go(base),
            (None, None) => TimeCharge::pay_as_you_go(0),
        };
        Some(charge)
    }

    /// Mileage fee for a rental of the given length.
    pub fn mileage_fee(&self, elapsed: &Elapsed, distance_km: f64) -> Yen {
        if self.mileage.applies(elapsed.hours) {
            mileage_fee(self.rate_per_km, distance_km)
        } else {
            0
        }
    }

    /// Full quote for the standard tier shape.
    pub fn quote(&self, elapsed: &Elapsed, distance_km: f64) -> ProviderResult {
        let Some(time) = self.time_charge(elapsed) else {
            return ProviderResult::Unavailable {
                max_hours: self.max_hours().unwrap_or_default(),
            };
        };
        let fees = FeeBreakdown::new(
            time.fee,
            self.mileage_fee(elapsed, distance_km),
            self.insurance.fee(elapsed),
        );
        ProviderResult::quoted(fees, time.plan_info(self.rate_per_km))
    }
}

// ============================================================================
// Tariff Pricing
// ============================================================================

/// Evaluator for providers fully described by a [`Tariff`].
#[derive(Debug, Clone, Copy)]
pub struct TariffPricing {
    kind: ProviderKind,
    tariff: &'static Tariff,
}

impl TariffPricing {
    /// Binds a tariff to its provider.
    pub const fn new(kind: ProviderKind, tariff: &'static Tariff) -> Self {
        Self { kind, tariff }
    }
}

impl FeeEvaluator for TariffPricing {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn evaluate(&self, request: &QuoteRequest, _calendar: &dyn HolidayCalendar) -> ProviderResult {
        self.tariff.quote(&request.elapsed(), request.distance_km())
    }

    fn rate_per_km(&self) -> u64 {
        self.tariff.rate_per_km
    }

    fn max_hours(&self) -> Option<u32> {
        self.tariff.max_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKS: &[HourPack] = &[HourPack::new(6, 3960), HourPack::new(12, 5500), HourPack::new(24, 6600)];

    fn hours(h: i64) -> Elapsed {
        Elapsed::from_minutes(h * 60)
    }

    #[test]
    fn test_quarter_hour_units() {
        assert_eq!(quarter_hour_units(0.5), 1);
        assert_eq!(quarter_hour_units(15.0), 1);
        assert_eq!(quarter_hour_units(15.5), 2);
        assert_eq!(quarter_hour_units(180.0), 12);
    }

    #[test]
    fn test_mileage_fee_rounds_up() {
        assert_eq!(mileage_fee(18, 200.0), 3600);
        assert_eq!(mileage_fee(15, 0.5), 8);
        assert_eq!(mileage_fee(15, 0.0), 0);
    }

    #[test]
    fn test_mileage_fee_saturates() {
        assert_eq!(mileage_fee(20, 1e18), Yen::MAX);
        assert_eq!(mileage_fee(20, f64::MAX), Yen::MAX);
    }

    #[test]
    fn test_pack_table_boundary_selects_exact_pack() {
        let table = HourPackTable::new(PACKS);
        assert_eq!(table.find(6.0).unwrap().hours, 6);
        assert_eq!(table.find(6.01).unwrap().hours, 12);
        assert_eq!(table.find(0.25).unwrap().hours, 6);
        assert!(table.find(24.5).is_none());
    }

    #[test]
    fn test_mileage_policy() {
        assert!(MileagePolicy::Always.applies(0.25));
        assert!(!MileagePolicy::FreeUpToHours(6).applies(6.0));
        assert!(MileagePolicy::FreeUpToHours(6).applies(6.25));
    }

    #[test]
    fn test_insurance_policies() {
        assert_eq!(InsurancePolicy::PerDay(660).fee(&hours(3)), 660);
        assert_eq!(InsurancePolicy::PerDay(660).fee(&hours(24)), 660);
        assert_eq!(InsurancePolicy::PerDay(660).fee(&hours(30)), 1320);

        let short = InsurancePolicy::PerDayWithShortFee {
            per_day: 1650,
            short_fee: 330,
            below_hours: 6,
        };
        assert_eq!(short.fee(&Elapsed::from_minutes(345)), 330);
        assert_eq!(short.fee(&hours(6)), 1650);
        assert_eq!(short.fee(&hours(25)), 3300);

        assert_eq!(InsurancePolicy::PerRental(550).fee(&hours(70)), 550);
    }

    #[test]
    fn test_daily_overflow() {
        let overflow = Overflow::Daily { per_day: 2640 };
        assert_eq!(overflow.excess_fee(1.0), Some(2640));
        assert_eq!(overflow.excess_fee(24.0), Some(2640));
        assert_eq!(overflow.excess_fee(24.5), Some(5280));
        assert_eq!(Overflow::Unavailable.excess_fee(1.0), None);
    }

    #[test]
    fn test_hourly_until_day_plus_one() {
        let overflow = Overflow::HourlyUntilDay {
            per_hour: 1210,
            per_day: 6600,
            day_count: ExcessDayCount::CeilPlusOneHour,
            whole_days_on_boundary: false,
        };
        // 5 hours stays hourly (5 < 6600/1210).
        assert_eq!(overflow.excess_fee(5.0), Some(6050));
        // 6 hours rounds up to the day rate.
        assert_eq!(overflow.excess_fee(6.0), Some(6600));
        // 5h15m is six started hours, past break-even.
        assert_eq!(overflow.excess_fee(5.25), Some(6600));
        // Exactly one excess day.
        assert_eq!(overflow.excess_fee(24.0), Some(6600));
        // One day plus two hours.
        assert_eq!(overflow.excess_fee(26.0), Some(6600 + 2420));
    }

    #[test]
    fn test_hourly_until_day_whole_days_on_boundary() {
        let overflow = Overflow::HourlyUntilDay {
            per_hour: 616,
            per_day: 4488,
            day_count: ExcessDayCount::Ceil,
            whole_days_on_boundary: true,
        };
        assert_eq!(overflow.excess_fee(2.0), Some(1232));
        assert_eq!(overflow.excess_fee(8.0), Some(4488));
        assert_eq!(overflow.excess_fee(24.0), Some(4488));
        assert_eq!(overflow.excess_fee(48.0), Some(8976));
        assert_eq!(overflow.excess_fee(27.0), Some(4488 + 1848));
    }

    #[test]
    fn test_cap_policy_keeps_cheaper_base() {
        let tariff = Tariff {
            pack_policy: PackPolicy::CapPayAsYouGo { quarter_rate: 198 },
            packs: HourPackTable::new(PACKS),
            rate_per_km: 18,
            mileage: MileagePolicy::FreeUpToHours(6),
            insurance: InsurancePolicy::PerDay(660),
            overflow: Overflow::Unavailable,
        };
        let charge = tariff.time_charge(&hours(3)).unwrap();
        assert_eq!(charge.fee, 2376);
        assert!(charge.pack.is_none());

        let charge = tariff.time_charge(&hours(6)).unwrap();
        assert_eq!(charge.fee, 3960);
        assert_eq!(charge.pack, Some(("6時間パック".to_string(), 3960)));

        assert!(tariff.time_charge(&hours(25)).is_none());
        assert_eq!(tariff.max_hours(), Some(24));
    }

    #[test]
    fn test_flat_policy_always_charges_pack() {
        let tariff = Tariff {
            pack_policy: PackPolicy::Flat,
            packs: HourPackTable::new(PACKS),
            rate_per_km: 15,
            mileage: MileagePolicy::Always,
            insurance: InsurancePolicy::PerDay(1100),
            overflow: Overflow::Daily { per_day: 5000 },
        };
        let charge = tariff.time_charge(&Elapsed::from_minutes(15)).unwrap();
        assert_eq!(charge.fee, 3960);

        let charge = tariff.time_charge(&hours(30)).unwrap();
        assert_eq!(charge.fee, 6600 + 5000);
        assert_eq!(charge.extension, 5000);
        assert_eq!(tariff.max_hours(), None);
    }
}
