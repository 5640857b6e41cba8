//! # Temporal Coercion — Raw Values to UTC Dates
//!
//! Converts the raw JSON forms a client may send for a date into a
//! `DateTime<Utc>`:
//!
//! - numbers are milliseconds since the Unix epoch (fractions truncated);
//! - strings are RFC 3339 (`2026-01-15T12:00:00Z`, `...+05:30`), naive
//!   date-times assumed UTC (`2026-01-15T12:00:00`), or bare dates taken at
//!   midnight UTC (`2026-01-15`).
//!
//! Dates are rendered back as RFC 3339 with millisecond precision and a `Z`
//! suffix, e.g. `2026-01-15T12:00:00.000Z`.
//!
//! Any timezone offset on input is converted to UTC; the offset itself is
//! not preserved.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Magnitude cap for epoch milliseconds, checked before conversion.
///
/// This is an upper bound only. `chrono` represents years up to roughly
/// ±262,000, about -8.33e15 to +8.21e15 ms, so values inside the cap but
/// outside that range are also rejected.
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Build a date from milliseconds since the Unix epoch.
///
/// Returns `None` for non-finite input, magnitudes above [`MAX_EPOCH_MILLIS`],
/// or instants `chrono` cannot represent.
pub fn from_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

/// Parse a date string. Returns `None` if no accepted format matches.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render as RFC 3339, milliseconds, `Z` suffix.
pub fn to_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn epoch_millis_zero_is_unix_epoch() {
        let dt = from_epoch_millis(0.0).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn epoch_millis_truncates_fraction() {
        let a = from_epoch_millis(1_500.9).unwrap();
        let b = from_epoch_millis(1_500.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn epoch_millis_rejects_out_of_range() {
        assert!(from_epoch_millis(f64::NAN).is_none());
        assert!(from_epoch_millis(f64::INFINITY).is_none());
        assert!(from_epoch_millis(9.0e15).is_none());
        assert!(from_epoch_millis(-9.0e15).is_none());
    }

    #[test]
    fn epoch_millis_limited_by_chrono_range() {
        assert!(from_epoch_millis(8.1e15).is_some());
        assert!(from_epoch_millis(-8.1e15).is_some());
        // Inside the cap, outside what chrono represents.
        assert!(from_epoch_millis(8.3e15).is_none());
        assert!(from_epoch_millis(-8.4e15).is_none());
        assert!(from_epoch_millis(MAX_EPOCH_MILLIS).is_none());
        assert!(from_epoch_millis(-MAX_EPOCH_MILLIS).is_none());
    }

    #[test]
    fn parses_rfc3339_with_z() {
        let dt = parse_date("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn offsets_are_converted_to_utc() {
        let dt = parse_date("2026-01-15T17:30:00+05:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn naive_datetime_is_assumed_utc() {
        let dt = parse_date("2026-01-15T12:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());
        assert!(parse_date("2026-01-15T12:00:00.250").is_some());
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let dt = parse_date("2026-01-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date("").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2026-13-40").is_none());
    }

    #[test]
    fn renders_millis_with_z_suffix() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(to_iso8601(&dt), "2026-01-15T12:00:00.000Z");
    }

    #[test]
    fn render_then_parse_is_stable() {
        let dt = from_epoch_millis(1_768_478_400_123.0).unwrap();
        assert_eq!(parse_date(&to_iso8601(&dt)), Some(dt));
    }
}
