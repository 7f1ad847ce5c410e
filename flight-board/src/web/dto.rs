//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, FlightRecord, format_hhmm};
use crate::pipeline::{GateOutcome, GateSelection};

/// Request to look up what's at a gate.
#[derive(Debug, Deserialize)]
pub struct GateLookupRequest {
    /// Gate (stand) number, e.g. "43"
    #[serde(default)]
    pub gate: String,

    /// Day in YYYY-MM-DD or YYYYMMDD form (defaults to today)
    pub date: Option<String>,

    /// Time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// Request to export a date range as a workbook.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// First day (defaults to today)
    pub start: Option<String>,

    /// Last day (defaults to `start`)
    pub end: Option<String>,
}

/// Treat a blank form field as absent.
pub(crate) fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A flight in a gate lookup response.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub direction: Direction,
    pub flight_number: Option<String>,

    /// Remote airport: origin for arrivals, destination for departures
    pub airport_name: Option<String>,

    /// Scheduled time as HH:MM
    pub scheduled: String,

    /// Actual or estimated time as HH:MM
    pub estimated: String,

    pub gate_number: Option<String>,
    pub terminal: Option<String>,
    pub aircraft_type: Option<String>,
    pub registration_number: Option<String>,
    pub remark: Option<String>,
}

/// Response from a gate lookup.
#[derive(Debug, Serialize)]
pub struct GateLookupResponse {
    pub gate: String,
    pub date: String,
    pub cutoff: String,

    /// One of "no_flights", "upcoming" or "none_after_cutoff"
    pub status: &'static str,

    /// The next flight, when one is at or after the cutoff
    pub next: Option<FlightResult>,

    /// Later flights, or every flight when none is upcoming
    pub flights: Vec<FlightResult>,

    /// Flights skipped for an unreadable time
    pub excluded: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl FlightResult {
    /// Create from a flight record.
    pub fn from_record(record: &FlightRecord) -> Self {
        Self {
            direction: record.direction,
            flight_number: record.flight_number.clone(),
            airport_name: record.airport_name.clone(),
            scheduled: format_hhmm(record.scheduled_datetime.as_deref()),
            estimated: format_hhmm(record.actual_datetime.as_deref()),
            gate_number: record.gate_number.clone(),
            terminal: record.terminal().map(|t| t.display_name().to_string()),
            aircraft_type: record.aircraft_type.clone(),
            registration_number: record.registration_number.clone(),
            remark: record.remark.clone(),
        }
    }
}

impl GateLookupResponse {
    /// Create from a selection.
    pub fn from_selection(
        gate: String,
        date: String,
        cutoff: String,
        selection: &GateSelection,
    ) -> Self {
        let (status, next, flights) = match &selection.outcome {
            GateOutcome::NoFlights => ("no_flights", None, Vec::new()),
            GateOutcome::Upcoming { next, later } => (
                "upcoming",
                Some(FlightResult::from_record(next)),
                later.iter().map(FlightResult::from_record).collect(),
            ),
            GateOutcome::NoneAfterCutoff { all } => (
                "none_after_cutoff",
                None,
                all.iter().map(FlightResult::from_record).collect(),
            ),
        };

        Self {
            gate,
            date,
            cutoff,
            status,
            next,
            flights,
            excluded: selection.excluded,
        }
    }
}
