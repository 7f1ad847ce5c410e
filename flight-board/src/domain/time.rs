//! Flight timestamp handling.
//!
//! The flight-status API reports every time as a fixed-width 12-digit
//! string ("YYYYMMDDHHmm") in Korea Standard Time, with no offset.
//!
//! There are two ways in:
//! - [`FlightTime::parse`] is strict and returns an error for anything that
//!   is not a real calendar instant. Comparison and sorting code uses it.
//! - [`format_date`], [`format_time`] and [`format_hhmm`] never fail. Any
//!   absent, placeholder or malformed input renders as [`PLACEHOLDER`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use std::fmt;

/// Rendered in place of any value that is missing or unreadable.
pub const PLACEHOLDER: &str = "-";

/// Korea Standard Time is UTC+9 with no daylight saving.
const KST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Length of a raw API timestamp.
const RAW_LEN: usize = 12;

/// The airport's local timezone.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// Current instant in local airport time.
pub fn now_kst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst())
}

/// Current calendar day in local airport time.
pub fn today_kst() -> NaiveDate {
    now_kst().date_naive()
}

/// The instant at `time` on `day`, in local airport time.
pub fn local_instant(day: NaiveDate, time: NaiveTime) -> DateTime<FixedOffset> {
    let offset = kst();
    DateTime::from_naive_utc_and_offset(day.and_time(time) - offset, offset)
}

/// Error returned when a raw timestamp does not match `YYYYMMDDHHmm`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A local (KST) wall-clock instant taken from the flight-status API.
///
/// # Examples
///
/// ```
/// use flight_board::domain::FlightTime;
///
/// let t = FlightTime::parse("202412220005").unwrap();
/// assert_eq!(t.date_string(), "2024-12-22");
/// assert_eq!(t.hhmm(), "0005");
/// assert_eq!(t.hh_mm(), "00:05");
///
/// assert!(FlightTime::parse("2024122200").is_err());
/// assert!(FlightTime::parse("202413220005").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Strictly parse a raw `YYYYMMDDHHmm` timestamp.
    ///
    /// Surrounding whitespace is ignored; anything else that is not exactly
    /// twelve ASCII digits forming a valid date and time is rejected.
    pub fn parse(raw: &str) -> Result<Self, TimeError> {
        let s = raw.trim();
        if s.len() != RAW_LEN {
            return Err(TimeError::new("expected YYYYMMDDHHmm"));
        }

        let bytes = s.as_bytes();
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(TimeError::new("expected only digits"));
        }

        let year = parse_digits(&bytes[0..4]) as i32;
        let month = parse_digits(&bytes[4..6]);
        let day = parse_digits(&bytes[6..8]);
        let hour = parse_digits(&bytes[8..10]);
        let minute = parse_digits(&bytes[10..12]);

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| TimeError::new("no such calendar date"))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("no such time of day"))?;

        Ok(Self(date.and_time(time)))
    }

    /// Parse a raw field, treating absence and the placeholder as `None`.
    ///
    /// Malformed values are still an error so callers can tell
    /// "unknown" apart from "unreadable".
    pub fn parse_field(raw: Option<&str>) -> Result<Option<Self>, TimeError> {
        match raw.map(str::trim) {
            None | Some("") | Some(PLACEHOLDER) => Ok(None),
            Some(s) => Self::parse(s).map(Some),
        }
    }

    /// The local calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `HHmm`, as used in the spreadsheet export.
    pub fn hhmm(&self) -> String {
        self.0.format("%H%M").to_string()
    }

    /// `HH:MM`, as used in the gate view.
    pub fn hh_mm(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// The raw `YYYYMMDDHHmm` form.
    pub fn to_raw(&self) -> String {
        self.0.format("%Y%m%d%H%M").to_string()
    }

    /// Whether this instant is at or after `cutoff`.
    ///
    /// The cutoff may carry any offset; it is compared in local airport time,
    /// truncated to the minute, since API times carry no seconds.
    pub fn is_at_or_after(&self, cutoff: &DateTime<FixedOffset>) -> bool {
        let local = cutoff.with_timezone(&kst()).naive_local();
        self.0 >= truncate_to_minute(local)
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({})", self.0.format("%Y-%m-%d %H:%M"))
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(local: NaiveDateTime) -> NaiveDateTime {
    local
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(local)
}

/// Only called on slices already checked to be ASCII digits.
fn parse_digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn render(raw: Option<&str>, f: impl FnOnce(&FlightTime) -> String) -> String {
    match FlightTime::parse_field(raw) {
        Ok(Some(t)) => f(&t),
        Ok(None) | Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Date part of a raw timestamp as `YYYY-MM-DD`, or `-`.
pub fn format_date(raw: Option<&str>) -> String {
    render(raw, FlightTime::date_string)
}

/// Time part of a raw timestamp as `HHmm`, or `-`.
pub fn format_time(raw: Option<&str>) -> String {
    render(raw, FlightTime::hhmm)
}

/// Time part of a raw timestamp as `HH:MM`, or `-`.
pub fn format_hhmm(raw: Option<&str>) -> String {
    render(raw, FlightTime::hh_mm)
}
