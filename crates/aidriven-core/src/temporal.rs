//! # Temporal Types and Date Formatting
//!
//! `Timestamp` is a UTC instant truncated to whole seconds. Every formatter
//! in this module takes `impl Into<Timestamp>`, so a `chrono::DateTime<Utc>`
//! can be passed directly.
//!
//! ## Absolute formatting
//!
//! - [`format_date`]: long calendar form without a time of day:
//!   `January 15, 2024`.
//! - [`format_date_short`]: abbreviated month plus clock time:
//!   `Jan 15, 2024 at 12:00 PM`.
//!
//! Both free functions render in UTC. [`DateFormatter`] carries a fixed UTC
//! offset for callers that want a different zone. Output is deterministic
//! for a given instant and offset, and always contains the year.
//!
//! ## Relative formatting
//!
//! [`format_relative_time`] describes an instant relative to now, e.g.
//! `1 hour ago`, `in 3 days`, or `now` for a zero difference. The unit is
//! the largest of seconds, minutes, hours, days, weeks, months (30 days)
//! and years (365 days) that fits, and the count is truncated toward zero.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UtilityError;

/// A UTC timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`]: from an RFC 3339 string with a `Z` suffix.
/// - [`Timestamp::parse_lenient()`]: from an RFC 3339 string with any offset.
///
/// Deserialization goes through [`Timestamp::from_utc()`], so sub-second
/// input is truncated there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "DateTime<Utc>")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// Only the `Z` suffix is accepted; explicit offsets, even `+00:00`,
    /// are rejected. Use [`Timestamp::parse_lenient()`] for those.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339 or does not end in `Z`.
    pub fn parse(s: &str) -> Result<Self, UtilityError> {
        if !s.ends_with('Z') {
            return Err(UtilityError::InvalidTimestamp(format!(
                "timestamp must use Z suffix, got: {s:?}"
            )));
        }
        Self::parse_lenient(s)
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any offset and
    /// converting to UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, UtilityError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            UtilityError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, UtilityError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            UtilityError::InvalidTimestamp(format!("Unix timestamp out of range: {secs}"))
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2024-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

const LONG_FORMAT: &str = "%B %-d, %Y";
const SHORT_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Which absolute form to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `January 15, 2024`
    #[default]
    Long,
    /// `Jan 15, 2024 at 12:00 PM`
    Short,
}

impl DateStyle {
    /// Returns the style name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::Long => LONG_FORMAT,
            Self::Short => SHORT_FORMAT,
        }
    }
}

impl std::fmt::Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute date formatter pinned to a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl DateFormatter {
    /// A formatter rendering in UTC.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// A formatter rendering at the given offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build a formatter from an offset string: `Z`, `UTC`, or `±HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidOffset`] for any other shape, or for
    /// hours above 23 or minutes above 59.
    pub fn parse_offset(s: &str) -> Result<Self, UtilityError> {
        parse_utc_offset(s).map(Self::with_offset)
    }

    /// The offset this formatter renders at.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Long calendar form, no time of day.
    pub fn long(&self, moment: impl Into<Timestamp>) -> String {
        self.style(moment, DateStyle::Long)
    }

    /// Abbreviated date plus clock time.
    pub fn short(&self, moment: impl Into<Timestamp>) -> String {
        self.style(moment, DateStyle::Short)
    }

    /// Render `moment` in the requested style.
    pub fn style(&self, moment: impl Into<Timestamp>, style: DateStyle) -> String {
        let ts: Timestamp = moment.into();
        ts.as_datetime()
            .with_timezone(&self.offset)
            .format(style.pattern())
            .to_string()
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

fn parse_utc_offset(s: &str) -> Result<FixedOffset, UtilityError> {
    let invalid = || UtilityError::InvalidOffset(s.to_string());

    if s == "Z" || s.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    let (hh, mm) = rest.split_once(':').ok_or_else(invalid)?;
    let two_digits = |p: &str| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hh) || !two_digits(mm) {
        return Err(invalid());
    }
    let hours: i32 = hh.parse().map_err(|_| invalid())?;
    let minutes: i32 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Long calendar form in UTC: `January 15, 2024`.
pub fn format_date(moment: impl Into<Timestamp>) -> String {
    DateFormatter::utc().long(moment)
}

/// Abbreviated date with clock time in UTC: `Jan 15, 2024 at 12:00 PM`.
pub fn format_date_short(moment: impl Into<Timestamp>) -> String {
    DateFormatter::utc().short(moment)
}

/// Describe `moment` relative to the current instant.
pub fn format_relative_time(moment: impl Into<Timestamp>) -> String {
    format_relative_time_from(moment, Timestamp::now())
}

/// Describe `moment` relative to `reference`.
///
/// ```
/// use aidriven_core::temporal::{format_relative_time_from, Timestamp};
///
/// let reference = Timestamp::parse("2024-01-15T12:00:00Z").unwrap();
/// let earlier = Timestamp::parse("2024-01-15T11:00:00Z").unwrap();
/// assert_eq!(format_relative_time_from(earlier, reference), "1 hour ago");
/// ```
pub fn format_relative_time_from(
    moment: impl Into<Timestamp>,
    reference: impl Into<Timestamp>,
) -> String {
    let delta = moment.into().epoch_secs() - reference.into().epoch_secs();
    relative_phrase(delta)
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

// Largest unit first.
const UNITS: [(u64, &str); 6] = [
    (YEAR, "year"),
    (MONTH, "month"),
    (WEEK, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
];

fn relative_phrase(delta_secs: i64) -> String {
    if delta_secs == 0 {
        return "now".to_string();
    }

    let magnitude = delta_secs.unsigned_abs();
    let (count, unit) = UNITS
        .iter()
        .find(|(secs, _)| magnitude >= *secs)
        .map(|(secs, name)| (magnitude / secs, *name))
        .unwrap_or((magnitude, "second"));
    let plural = if count == 1 { "" } else { "s" };

    if delta_secs < 0 {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(Timestamp::now().as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.to_iso8601(), "2024-01-15T12:30:45Z");
    }

    #[test]
    fn test_parse_requires_z() {
        assert!(Timestamp::parse("2024-01-15T12:00:00Z").is_ok());
        assert!(Timestamp::parse("2024-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2024-01-15T21:00:00+09:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T12:00:00Z");
    }

    #[test]
    fn test_epoch_roundtrip() {
        let t = ts("2024-01-15T12:00:00Z");
        assert_eq!(Timestamp::from_epoch_secs(t.epoch_secs()).unwrap(), t);
        assert!(Timestamp::from_epoch_secs(i64::MAX).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let t = ts("2024-01-15T12:00:00Z");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), t);
    }

    #[test]
    fn test_deserialize_truncates_subseconds() {
        let t: Timestamp = serde_json::from_str(r#""2024-01-15T12:00:00.750Z""#).unwrap();
        assert_eq!(t.as_datetime().nanosecond(), 0);
        assert_eq!(t, ts("2024-01-15T12:00:00Z"));
    }

    #[test]
    fn test_deserialize_converts_offset() {
        let t: Timestamp = serde_json::from_str(r#""2024-01-15T21:00:00.999+09:00""#).unwrap();
        assert_eq!(t.to_iso8601(), "2024-01-15T12:00:00Z");
    }

    // ---- absolute formatting ----

    #[test]
    fn test_format_date_long() {
        let formatted = format_date(ts("2024-01-15T12:00:00Z"));
        assert_eq!(formatted, "January 15, 2024");
    }

    #[test]
    fn test_format_date_short_includes_clock_time() {
        assert_eq!(
            format_date_short(ts("2024-01-15T12:00:00Z")),
            "Jan 15, 2024 at 12:00 PM"
        );
        assert_eq!(
            format_date_short(ts("2024-03-05T09:07:00Z")),
            "Mar 5, 2024 at 9:07 AM"
        );
    }

    #[test]
    fn test_format_date_accepts_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_date(dt), "January 15, 2024");
    }

    #[test]
    fn test_format_date_is_deterministic() {
        let t = ts("2024-01-15T12:00:00Z");
        assert_eq!(format_date(t), format_date(t));
    }

    #[test]
    fn test_format_date_extremes() {
        let year_one = Timestamp::from_epoch_secs(-62_135_596_800).unwrap();
        assert_eq!(format_date(year_one), "January 1, 0001");

        let late = ts("9999-12-31T23:59:59Z");
        assert!(format_date(late).contains("9999"));

        for dt in [DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
            assert!(!format_date(dt).is_empty());
            assert!(!format_date_short(dt).is_empty());
        }
    }

    #[test]
    fn test_formatter_offset_moves_calendar_day() {
        let fmt = DateFormatter::parse_offset("+09:00").unwrap();
        let t = ts("2024-01-15T20:00:00Z");
        assert_eq!(fmt.long(t), "January 16, 2024");
        assert_eq!(fmt.short(t), "Jan 16, 2024 at 5:00 AM");
        assert_eq!(DateFormatter::utc().long(t), "January 15, 2024");
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(DateFormatter::parse_offset("Z").unwrap(), DateFormatter::utc());
        assert_eq!(DateFormatter::parse_offset("UTC").unwrap(), DateFormatter::utc());
        assert_eq!(
            DateFormatter::parse_offset("-05:30").unwrap().offset().local_minus_utc(),
            -(5 * 3600 + 30 * 60)
        );
        for bad in ["", "09:00", "+9:00", "+24:00", "+09:60", "+0900", "+ab:cd", "+-1:00"] {
            assert!(
                matches!(DateFormatter::parse_offset(bad), Err(UtilityError::InvalidOffset(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_date_style_serde() {
        assert_eq!(serde_json::to_string(&DateStyle::Short).unwrap(), r#""short""#);
        let style: DateStyle = serde_json::from_str(r#""long""#).unwrap();
        assert_eq!(style, DateStyle::Long);
    }

    // ---- relative formatting ----

    #[test]
    fn test_relative_one_hour_ago() {
        let reference = ts("2024-01-15T12:00:00Z");
        let moment = ts("2024-01-15T11:00:00Z");
        assert_eq!(format_relative_time_from(moment, reference), "1 hour ago");
    }

    #[test]
    fn test_relative_zero_is_now() {
        let t = ts("2024-01-15T12:00:00Z");
        assert_eq!(format_relative_time_from(t, t), "now");
    }

    #[test]
    fn test_relative_unit_selection() {
        let cases = [
            (-1, "1 second ago"),
            (-59, "59 seconds ago"),
            (-60, "1 minute ago"),
            (-7_199, "1 hour ago"),
            (-7_200, "2 hours ago"),
            (-86_400 * 3, "3 days ago"),
            (-86_400 * 8, "1 week ago"),
            (-86_400 * 30, "1 month ago"),
            (-86_400 * 400, "1 year ago"),
            (90, "in 1 minute"),
            (86_400 * 2, "in 2 days"),
            (86_400 * 365 * 3, "in 3 years"),
        ];
        for (delta, expected) in cases {
            assert_eq!(relative_phrase(delta), expected, "delta {delta}");
        }
    }

    #[test]
    fn test_relative_extremes_do_not_overflow() {
        let min = Timestamp::from_utc(DateTime::<Utc>::MIN_UTC);
        let max = Timestamp::from_utc(DateTime::<Utc>::MAX_UTC);
        assert!(format_relative_time_from(min, max).ends_with("years ago"));
        assert!(format_relative_time_from(max, min).starts_with("in "));
    }

    #[test]
    fn test_relative_against_now() {
        let past = Utc::now() - chrono::Duration::seconds(3600);
        let phrase = format_relative_time(past);
        assert!(phrase.contains("hour") && phrase.contains("ago"), "{phrase}");
        assert!(!format_relative_time(Timestamp::now()).is_empty());
    }
}
