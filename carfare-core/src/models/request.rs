//! Quote request.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock::{Elapsed, elapsed};
use crate::error::CoreError;

/// A rental window plus the distance the renter plans to drive.
///
/// Construction validates the request, so every value of this type satisfies
/// `end > start` and a finite, non-negative distance. Evaluators rely on that
/// and never re-check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuoteRequest")]
pub struct QuoteRequest {
    start: NaiveDateTime,
    end: NaiveDateTime,
    distance_km: f64,
}

/// Unvalidated wire form of [`QuoteRequest`].
#[derive(Deserialize)]
struct RawQuoteRequest {
    start: NaiveDateTime,
    end: NaiveDateTime,
    distance_km: f64,
}

impl TryFrom<RawQuoteRequest> for QuoteRequest {
    type Error = CoreError;

    fn try_from(raw: RawQuoteRequest) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.distance_km)
    }
}

impl QuoteRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRequest`] if `end` is not after `start` or
    /// the distance is negative or not finite.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, distance_km: f64) -> Result<Self, CoreError> {
        validate(start, end, distance_km)?;
        Ok(Self {
            start,
            end,
            distance_km,
        })
    }

    /// Creates a request covering `hours` whole hours from `start`.
    ///
    /// # Errors
    ///
    /// Same as [`QuoteRequest::new`]; zero hours is rejected, and so is an
    /// end past the last representable date.
    pub fn for_hours(start: NaiveDateTime, hours: u32, distance_km: f64) -> Result<Self, CoreError> {
        let end = start
            .checked_add_signed(Duration::hours(i64::from(hours)))
            .ok_or_else(|| {
                CoreError::InvalidRequest(format!("{hours} hours from {start} is out of range"))
            })?;
        Self::new(start, end, distance_km)
    }

    /// Rental start.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Rental end.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Planned driving distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Elapsed duration of the rental window.
    pub fn elapsed(&self) -> Elapsed {
        elapsed(self.start, self.end)
    }
}

fn validate(start: NaiveDateTime, end: NaiveDateTime, distance_km: f64) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::InvalidRequest(format!(
            "end ({end}) must be after start ({start})"
        )));
    }
    if !distance_km.is_finite() {
        return Err(CoreError::InvalidRequest(
            "distance_km must be a finite number".to_string(),
        ));
    }
    if distance_km < 0.0 {
        return Err(CoreError::InvalidRequest(format!(
            "distance_km must not be negative, got {distance_km}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = QuoteRequest::new(at(9), at(12), 50.0).unwrap();
        assert_eq!(req.elapsed().hours, 3.0);
        assert_eq!(req.distance_km(), 50.0);
    }

    #[test]
    fn test_zero_distance_allowed() {
        assert!(QuoteRequest::new(at(9), at(12), 0.0).is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = QuoteRequest::new(at(12), at(9), 10.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_window_rejected() {
        assert!(QuoteRequest::new(at(9), at(9), 10.0).is_err());
        assert!(QuoteRequest::for_hours(at(9), 0, 10.0).is_err());
    }

    #[test]
    fn test_negative_distance_rejected() {
        assert!(QuoteRequest::new(at(9), at(12), -1.0).is_err());
        assert!(QuoteRequest::new(at(9), at(12), f64::NAN).is_err());
        assert!(QuoteRequest::new(at(9), at(12), f64::INFINITY).is_err());
    }

    #[test]
    fn test_for_hours() {
        let req = QuoteRequest::for_hours(at(9), 30, 0.0).unwrap();
        assert_eq!(req.elapsed().hours, 30.0);
    }

    #[test]
    fn test_for_hours_out_of_range() {
        let err = QuoteRequest::for_hours(at(9), u32::MAX, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest(_)));

        let late = NaiveDateTime::MAX - Duration::hours(2);
        assert!(QuoteRequest::for_hours(late, 1, 0.0).is_ok());
        assert!(QuoteRequest::for_hours(late, 3, 0.0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"start":"2024-04-01T09:00:00","end":"2024-04-01T12:00:00","distance_km":5}"#;
        assert!(serde_json::from_str::<QuoteRequest>(ok).is_ok());

        let bad = r#"{"start":"2024-04-01T12:00:00","end":"2024-04-01T09:00:00","distance_km":5}"#;
        assert!(serde_json::from_str::<QuoteRequest>(bad).is_err());
    }
}
