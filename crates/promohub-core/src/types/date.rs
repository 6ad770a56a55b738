//! Calendar-date parsing for procedure inputs.
//!
//! Dates are stored without a time component. Clients may send either a
//! plain `YYYY-MM-DD` date or a full RFC 3339 timestamp; timestamps are
//! converted to UTC and truncated to their calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|ts| ts.with_timezone(&Utc).date_naive())
}

/// `#[serde(deserialize_with = "calendar_date")]` for a required date field.
pub fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    })
}
