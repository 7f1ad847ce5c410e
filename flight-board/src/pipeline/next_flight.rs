//! "What's at this gate next" selection.

use chrono::{DateTime, FixedOffset};

use crate::domain::{FlightRecord, FlightTime};

/// What the gate view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Nothing at this gate on the requested day.
    NoFlights,

    /// At least one flight at or after the cutoff.
    Upcoming {
        /// The nearest future flight.
        next: FlightRecord,
        /// The remaining future flights, ascending by effective time.
        later: Vec<FlightRecord>,
    },

    /// Flights exist, but none at or after the cutoff. All of them, by
    /// scheduled time.
    NoneAfterCutoff { all: Vec<FlightRecord> },
}

/// Result of a next-flight selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSelection {
    pub outcome: GateOutcome,
    /// Records left out of the future candidates because their effective
    /// time was absent or unreadable.
    pub excluded: usize,
}

/// Select the next flight at or after `cutoff`.
///
/// `flights` must already be gate-matched and codeshare-filtered. Each
/// flight's effective time is its actual time if known, else its scheduled
/// time. A flight whose effective time is missing or fails to parse can't
/// be compared and is never a future candidate.
///
/// Ties keep their input order.
pub fn select_next(flights: Vec<FlightRecord>, cutoff: &DateTime<FixedOffset>) -> GateSelection {
    if flights.is_empty() {
        return GateSelection {
            outcome: GateOutcome::NoFlights,
            excluded: 0,
        };
    }

    let mut excluded = 0;
    let mut future: Vec<(FlightTime, &FlightRecord)> = Vec::new();
    for record in &flights {
        match record.effective_time() {
            Ok(Some(t)) if t.is_at_or_after(cutoff) => future.push((t, record)),
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => excluded += 1,
        }
    }

    if future.is_empty() {
        let mut all = flights;
        all.sort_by(|a, b| a.scheduled_sort_key().cmp(b.scheduled_sort_key()));
        return GateSelection {
            outcome: GateOutcome::NoneAfterCutoff { all },
            excluded,
        };
    }

    future.sort_by_key(|(t, _)| *t);
    let mut ordered = future.into_iter().map(|(_, r)| r.clone());
    let outcome = match ordered.next() {
        Some(next) => GateOutcome::Upcoming {
            next,
            later: ordered.collect(),
        },
        None => GateOutcome::NoFlights,
    };

    GateSelection { outcome, excluded }
}
