//! Domain error types.
//!
//! These errors represent rejected user input. They are raised before any
//! network call and are distinct from API/IO errors.

use chrono::NaiveDate;

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A day string that is neither `YYYYMMDD` nor `YYYY-MM-DD`
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A time-of-day string that is not `HH:MM`
    #[error("invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    /// Blank gate query
    #[error("gate number is required (got {0:?})")]
    InvalidGate(String),

    /// Range whose start is later than its end
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    /// Range reaching outside the queryable window
    #[error("dates must be between {min} and {max} (requested {start} to {end})")]
    OutOfWindow {
        start: NaiveDate,
        end: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}
