//! Calendar-date helpers for travel options.
//!
//! Dates travel as `YYYY-MM-DD` strings, with the empty string meaning
//! "not set". Stored records use the same convention so files written by
//! older versions (which always wrote both date fields) keep loading.

use chrono::NaiveDate;

use super::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an optional date from user input; blank input means unset
pub fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

/// End date may be unset; when both are set it cannot precede the start
pub fn validate_date_order(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::EndBeforeStart {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        }),
        _ => Ok(()),
    }
}

/// Serde adapter: `Option<NaiveDate>` <-> `"YYYY-MM-DD"` / `""`
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_optional_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
