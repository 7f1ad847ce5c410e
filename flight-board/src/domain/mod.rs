//! Domain types for the airport flight board.
//!
//! This module contains the typed model that everything past the API
//! boundary works with. Validation happens at construction, so code that
//! receives a `GateQuery` or `QueryRange` can trust it.

mod direction;
mod error;
mod flight;
mod gate;
mod range;
mod terminal;
mod time;

pub use direction::Direction;
pub use error::DomainError;
pub use flight::{CodeshareRole, FlightKind, FlightRecord};
pub use gate::{GateQuery, normalize_gate};
pub use range::{
    LOOKAHEAD_DAYS, LOOKBACK_DAYS, QueryRange, api_day, parse_day, parse_time_of_day,
};
pub use terminal::Terminal;
pub use time::{
    FlightTime, PLACEHOLDER, TimeError, format_date, format_hhmm, format_time, kst, local_instant,
    now_kst, today_kst, truncate_to_minute,
};
