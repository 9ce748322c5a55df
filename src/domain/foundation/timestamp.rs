//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses an RFC 3339 string, normalizing any offset to UTC.
    pub fn parse_rfc3339(value: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::invalid_format("timestamp", e.to_string()))
    }

    /// Parses RFC 3339, falling back to an offset-less date-time or a bare
    /// date. Both fallbacks are read as UTC; a bare date is midnight.
    pub fn parse_iso8601(value: &str) -> Result<Self, ValidationError> {
        if let Ok(ts) = Self::parse_rfc3339(value) {
            return Ok(ts);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(naive.and_utc()));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ValidationError::invalid_format("timestamp", "not an ISO 8601 date"))
    }

    /// Creates a timestamp from fractional Unix seconds.
    ///
    /// ADK reports `last_update_time` this way.
    pub fn from_unix_secs_f64(secs: f64) -> Result<Self, ValidationError> {
        if !secs.is_finite() {
            return Err(ValidationError::invalid_format("timestamp", "not a finite number"));
        }
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
        Utc.timestamp_opt(whole as i64, nanos.min(999_999_999))
            .single()
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("timestamp", "out of range"))
    }
}
