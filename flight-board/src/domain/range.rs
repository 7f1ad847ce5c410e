//! Query day ranges.
//!
//! The flight-status API only serves a short window around today, so every
//! user-facing query is validated against it before any request is made.

use chrono::{Days, NaiveDate, NaiveTime};

use super::DomainError;

/// How many days before today may be queried.
pub const LOOKBACK_DAYS: u64 = 3;

/// How many days after today may be queried.
pub const LOOKAHEAD_DAYS: u64 = 6;

/// Parse a day in either `YYYYMMDD` or `YYYY-MM-DD` form.
pub fn parse_day(s: &str) -> Result<NaiveDate, DomainError> {
    let s = s.trim();
    let format = if s.contains('-') { "%Y-%m-%d" } else { "%Y%m%d" };
    if (format == "%Y%m%d" && s.len() != 8) || (format == "%Y-%m-%d" && s.len() != 10) {
        return Err(DomainError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, format).map_err(|_| DomainError::InvalidDate(s.to_string()))
}

/// Parse a time of day in `HH:MM` form.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, DomainError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| DomainError::InvalidTimeOfDay(s.to_string()))
}

/// The `searchDate` form sent to the API (`YYYYMMDD`).
pub fn api_day(day: NaiveDate) -> String {
    day.format("%Y%m%d").to_string()
}

/// An inclusive, validated range of days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use flight_board::domain::QueryRange;
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 26).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
///
/// let range = QueryRange::new(today, end, today).unwrap();
/// assert_eq!(range.days().count(), 3);
///
/// // Ten days ahead is outside the window
/// let too_far = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
/// assert!(QueryRange::new(today, too_far, today).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl QueryRange {
    /// Validate `start..=end` against the window around `today`.
    pub fn new(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::StartAfterEnd { start, end });
        }

        let (min, max) = Self::window(today);
        if start < min || end > max {
            return Err(DomainError::OutOfWindow {
                start,
                end,
                min,
                max,
            });
        }

        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub fn single(day: NaiveDate, today: NaiveDate) -> Result<Self, DomainError> {
        Self::new(day, day, today)
    }

    /// The earliest and latest queryable days around `today`.
    pub fn window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let min = today
            .checked_sub_days(Days::new(LOOKBACK_DAYS))
            .unwrap_or(NaiveDate::MIN);
        let max = today
            .checked_add_days(Days::new(LOOKAHEAD_DAYS))
            .unwrap_or(NaiveDate::MAX);
        (min, max)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_both_forms() {
        assert_eq!(parse_day("20250226").unwrap(), day(2025, 2, 26));
        assert_eq!(parse_day("2025-02-26").unwrap(), day(2025, 2, 26));
        assert_eq!(parse_day(" 2025-02-26 ").unwrap(), day(2025, 2, 26));
    }

    #[test]
    fn parse_rejects_bad_days() {
        assert!(parse_day("").is_err());
        assert!(parse_day("2025022").is_err());
        assert!(parse_day("20250230").is_err());
        assert!(parse_day("2025-2-6").is_err());
        assert!(parse_day("tomorrow").is_err());
    }

    #[test]
    fn parse_time() {
        assert_eq!(
            parse_time_of_day("09:05").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap()
        );
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("0905").is_err());
    }

    #[test]
    fn api_day_format() {
        assert_eq!(api_day(day(2025, 2, 6)), "20250206");
    }

    #[test]
    fn window_edges_accepted() {
        let today = day(2025, 2, 26);
        let range = QueryRange::new(day(2025, 2, 23), day(2025, 3, 4), today).unwrap();
        assert_eq!(range.days().count(), 10);
        assert_eq!(range.days().next(), Some(day(2025, 2, 23)));
        assert_eq!(range.days().last(), Some(day(2025, 3, 4)));
    }

    #[test]
    fn outside_window_rejected() {
        let today = day(2025, 2, 26);
        assert!(matches!(
            QueryRange::new(day(2025, 2, 22), day(2025, 2, 26), today),
            Err(DomainError::OutOfWindow { .. })
        ));
        assert!(matches!(
            QueryRange::new(day(2025, 2, 26), day(2025, 3, 5), today),
            Err(DomainError::OutOfWindow { .. })
        ));
    }

    #[test]
    fn start_after_end_rejected() {
        let today = day(2025, 2, 26);
        assert!(matches!(
            QueryRange::new(day(2025, 2, 27), day(2025, 2, 26), today),
            Err(DomainError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn single_day() {
        let today = day(2025, 2, 26);
        let range = QueryRange::single(today, today).unwrap();
        assert!(range.is_single_day());
        assert_eq!(range.days().collect::<Vec<_>>(), vec![today]);
    }
}
