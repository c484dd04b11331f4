//! Timestamp parsing and pt-BR style formatting.
//!
//! The ticket service sends timestamps as loosely formatted strings. Parsing
//! never fails loudly: anything unrecognised is passed through as-is.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

/// Placeholder shown when no timestamp is available at all
pub const MISSING_TIMESTAMP: &str = "--";

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Parse a service timestamp into an instant.
///
/// Accepts RFC 3339 instants (`2024-01-01T10:00:00Z`, with or without
/// fractional seconds or a numeric offset), civil date-times without an
/// offset (interpreted in `tz`) and bare dates (midnight UTC).
///
/// ```
/// use jiff::tz::TimeZone;
/// use multidesk::display::parse_timestamp;
///
/// let ts = parse_timestamp("2024-01-01T10:00:00Z", &TimeZone::UTC).unwrap();
/// assert_eq!(ts.as_second(), 1_704_103_200);
/// assert!(parse_timestamp("ontem", &TimeZone::UTC).is_none());
/// ```
pub fn parse_timestamp(value: &str, tz: &TimeZone) -> Option<Timestamp> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = value.parse::<Timestamp>() {
        return Some(ts);
    }

    // Date-only strings are UTC midnight, date-times without offset are local
    if value.len() == 10
        && let Ok(date) = value.parse::<Date>()
    {
        return date.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp());
    }

    value
        .parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(tz.clone()).ok())
        .map(|z| z.timestamp())
}

/// Milliseconds since the epoch, used as a sort key
pub fn timestamp_millis(value: Option<&str>, tz: &TimeZone) -> Option<i64> {
    value
        .and_then(|v| parse_timestamp(v, tz))
        .map(|ts| ts.as_millisecond())
}

/// `None` for a missing, empty or whitespace-only value
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Format an optional service timestamp for display.
///
/// ```
/// use jiff::tz::TimeZone;
/// use multidesk::display::format_timestamp;
///
/// assert_eq!(format_timestamp(Some("2024-01-01T10:00:00Z"), &TimeZone::UTC), "01/01/2024, 10:00");
/// assert_eq!(format_timestamp(Some("amanhã cedo"), &TimeZone::UTC), "amanhã cedo");
/// assert_eq!(format_timestamp(None, &TimeZone::UTC), "--");
/// assert_eq!(format_timestamp(Some(""), &TimeZone::UTC), "--");
/// ```
pub fn format_timestamp(value: Option<&str>, tz: &TimeZone) -> String {
    let Some(raw) = non_blank(value) else {
        return MISSING_TIMESTAMP.to_string();
    };

    match parse_timestamp(raw, tz) {
        Some(ts) => ts.to_zoned(tz.clone()).strftime(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
