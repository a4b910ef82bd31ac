use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, Utc};

use crate::domain::errors::PayloadError;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a chart label the way the server emits them.
///
/// Accepts RFC 3339 timestamps, naive ISO datetimes (taken as UTC) and
/// plain `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_label(label: &str) -> Result<DateTime<Utc>, PayloadError> {
    let label = label.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(label) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(label, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| PayloadError::InvalidLabel(label.to_string()))
}

/// Step back whole calendar months, clamping the day to the target month.
pub fn months_before(instant: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    instant.checked_sub_months(Months::new(months))
}
