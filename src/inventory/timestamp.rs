// Timestamp normalization
//
// Every timestamp in a report is rendered as UTC ISO-8601 with a literal `Z`.
// Text that cannot be read as a timestamp is passed through untouched.

use super::types::Timestamp;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Timelike, Utc};

/// Render an instant as canonical UTC ISO-8601
///
/// Fractional seconds are printed only when non-zero, at microsecond precision.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    let precision = if dt.nanosecond() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    dt.to_rfc3339_opts(precision, true)
}

/// Whether `input` is already `dt` written as `YYYY-MM-DDTHH:MM:SS[.fff...]Z`
fn is_canonical(input: &str, dt: &DateTime<Utc>) -> bool {
    let seconds = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    match input
        .strip_prefix(seconds.as_str())
        .and_then(|rest| rest.strip_suffix('Z'))
    {
        Some("") => true,
        Some(fraction) => fraction
            .strip_prefix('.')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())),
        None => false,
    }
}

/// Parse RFC 3339 text; a timezone-less ISO-8601 date-time is read as UTC
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Normalize a raw string; returns the input unchanged when it does not parse
pub fn normalize_str(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    match parse_timestamp(input) {
        Some(dt) if is_canonical(input, &dt) => input.to_string(),
        Some(dt) => format_utc(&dt),
        None => input.to_string(),
    }
}

/// Normalize an optional timestamp; absent becomes the empty string
pub fn normalize(input: Option<&Timestamp>) -> String {
    match input {
        None => String::new(),
        Some(Timestamp::Instant(dt)) => format_utc(dt),
        Some(Timestamp::Raw(raw)) => normalize_str(raw),
    }
}
