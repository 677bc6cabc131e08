//! Integration tests for core request and result types.

use carfare_core::{FeeBreakdown, PlanInfo, ProviderResult, QuoteRequest};
use chrono::NaiveDate;

#[test]
fn test_request_roundtrip_keeps_window() {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(21, 30, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(6, 45, 0).unwrap();
    let req = QuoteRequest::new(start, end, 12.5).unwrap();

    let json = serde_json::to_string(&req).unwrap();
    let parsed: QuoteRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, req);
    assert_eq!(parsed.elapsed().minutes, 555.0);
}

#[test]
fn test_negative_distance_rejected_from_json() {
    let json = r#"{"start":"2024-05-01T09:00:00","end":"2024-05-01T10:00:00","distance_km":-3}"#;
    let err = serde_json::from_str::<QuoteRequest>(json).unwrap_err();
    assert!(err.to_string().contains("negative"));
}

#[test]
fn test_quoted_result_roundtrip() {
    let result = ProviderResult::quoted(
        FeeBreakdown::new(8800, 3600, 1320),
        PlanInfo::with_plan(18, "36時間パック", 8800),
    );
    let json = serde_json::to_string(&result).unwrap();
    let parsed: ProviderResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
    assert_eq!(parsed.total_fee(), Some(13720));
}
