//! The acquisition and selection pipeline.
//!
//! Raw pages become normalized flights (`crate::flights`), which are
//! merged into direction-tagged records here and then filtered for one of
//! two consumers: the gate lookup or the terminal report.

mod merge;
mod next_flight;
mod query;

pub use merge::{
    TerminalBuckets, at_gate, merge, operating_only, passenger_terminals_only, tag,
};
pub use next_flight::{GateOutcome, GateSelection, select_next};
pub use query::{FlightSet, fetch_range, lookup_gate};
