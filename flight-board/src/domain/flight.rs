//! The merged flight record and its typed fields.

use serde::Serialize;

use super::time::{FlightTime, PLACEHOLDER, TimeError};
use super::{Direction, Terminal};

/// Marker distinguishing the operating flight from codeshare duplicates.
///
/// Several airline designators may be sold on one physical flight. The API
/// lists each designator as its own record; only the `Master` record
/// represents the real movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeshareRole {
    /// The operating carrier's record.
    Master,
    /// A shared-designator duplicate (the API sends `Slave`).
    Shared(String),
}

impl CodeshareRole {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Master" => CodeshareRole::Master,
            other => CodeshareRole::Shared(other.to_string()),
        }
    }

    pub fn is_operating(&self) -> bool {
        matches!(self, CodeshareRole::Master)
    }
}

/// International/domestic marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum FlightKind {
    International,
    Domestic,
    Other(String),
}

impl FlightKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "I" => FlightKind::International,
            "D" => FlightKind::Domestic,
            other => FlightKind::Other(other.to_string()),
        }
    }

    /// The API's code for this kind.
    pub fn code(&self) -> &str {
        match self {
            FlightKind::International => "I",
            FlightKind::Domestic => "D",
            FlightKind::Other(code) => code,
        }
    }
}

/// One direction-tagged flight movement.
///
/// Every field except `direction` comes straight from the API, and each may
/// be absent. Absence is kept as `None` rather than an empty string so
/// presentation code can tell "no data" from "blank".
///
/// The two timestamps are kept raw. Use [`FlightRecord::effective_time`] to
/// compare them, or the `format_*` helpers to display them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    pub direction: Direction,
    pub flight_number: Option<String>,
    pub scheduled_datetime: Option<String>,
    pub actual_datetime: Option<String>,
    pub airport_name: Option<String>,
    pub aircraft_type: Option<String>,
    pub registration_number: Option<String>,
    pub gate_number: Option<String>,
    pub remark: Option<String>,
    pub terminal_id: Option<String>,
    pub codeshare_role: Option<CodeshareRole>,
    pub flight_kind: Option<FlightKind>,
}

impl FlightRecord {
    /// An otherwise-empty record for the given direction.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            flight_number: None,
            scheduled_datetime: None,
            actual_datetime: None,
            airport_name: None,
            aircraft_type: None,
            registration_number: None,
            gate_number: None,
            remark: None,
            terminal_id: None,
            codeshare_role: None,
            flight_kind: None,
        }
    }

    /// The passenger terminal, if `terminal_id` names one.
    pub fn terminal(&self) -> Option<Terminal> {
        self.terminal_id.as_deref().and_then(Terminal::from_code)
    }

    /// Whether this is the operating carrier's record.
    pub fn is_operating(&self) -> bool {
        self.codeshare_role
            .as_ref()
            .is_some_and(CodeshareRole::is_operating)
    }

    /// Raw time used for "next flight" comparisons.
    ///
    /// The actual/estimated time if one is reported, else the scheduled time.
    pub fn effective_raw(&self) -> Option<&str> {
        match self.actual_datetime.as_deref() {
            Some(actual) if !actual.trim().is_empty() && actual.trim() != PLACEHOLDER => {
                Some(actual)
            }
            _ => self.scheduled_datetime.as_deref(),
        }
    }

    /// Parsed effective time. `Ok(None)` means neither time is known.
    pub fn effective_time(&self) -> Result<Option<FlightTime>, TimeError> {
        FlightTime::parse_field(self.effective_raw())
    }

    /// Sort key for scheduled-time ordering; absent sorts first.
    pub fn scheduled_sort_key(&self) -> &str {
        self.scheduled_datetime.as_deref().unwrap_or("")
    }
}
