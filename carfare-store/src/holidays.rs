//! Public-holiday files.
//!
//! A holiday file is JSON, either an array of dates or an object keyed by
//! date (the value, usually the holiday's name, is ignored):
//!
//! ```json
//! ["2024-01-01", "2024-01-08"]
//! {"2024-01-01": "元日", "2024-01-08": "成人の日"}
//! ```

use carfare_core::HolidaySet;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::StoreError;

#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayFile {
    Dates(Vec<NaiveDate>),
    Named(BTreeMap<NaiveDate, serde_json::Value>),
}

/// Parses holiday JSON.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] if the text is neither a date array nor a
/// date-keyed object.
pub fn parse_holidays(json: &str) -> Result<HolidaySet, StoreError> {
    let file: HolidayFile = serde_json::from_str(json).map_err(|e| {
        StoreError::Parse(format!("expected a list of YYYY-MM-DD dates or a date map: {e}"))
    })?;
    let set = match file {
        HolidayFile::Dates(dates) => dates.into_iter().collect(),
        HolidayFile::Named(named) => named.into_keys().collect(),
    };
    Ok(set)
}

/// Loads a holiday file.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed.
pub async fn load_holidays(path: &Path) -> Result<HolidaySet, StoreError> {
    let content = tokio::fs::read_to_string(path).await?;
    let set = parse_holidays(&content)?;
    debug!(path = %path.display(), count = set.len(), "Loaded holidays");
    Ok(set)
}
