//! Holiday calendar collaborator.
//!
//! The engine never embeds holiday data. The host supplies a
//! [`HolidayCalendar`]; weekends always count as holidays regardless of the
//! public-holiday source.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only holiday lookup.
///
/// Implementations must be referentially transparent: the same date yields
/// the same answer for the lifetime of a comparison.
pub trait HolidayCalendar: Send + Sync {
    /// Returns true if `date` is a public holiday.
    fn is_public_holiday(&self, date: NaiveDate) -> bool;

    /// Returns true if `date` is a public holiday or falls on a weekend.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || self.is_public_holiday(date)
    }
}

/// Calendar with no public holidays; only weekends count.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl HolidayCalendar for WeekendCalendar {
    fn is_public_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Calendar backed by an explicit set of public-holiday dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a public holiday.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Number of public holidays in the set.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no public holidays are registered.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}
