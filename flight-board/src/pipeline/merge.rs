//! Merging the arrival and departure streams, and the filters over them.

use std::collections::BTreeMap;

use crate::domain::{Direction, FlightRecord, GateQuery, Terminal};
use crate::flights::NormalizedFlight;

/// Attach a direction to a normalized flight.
pub fn tag(flight: NormalizedFlight, direction: Direction) -> FlightRecord {
    let NormalizedFlight {
        flight_number,
        scheduled_datetime,
        actual_datetime,
        airport_name,
        aircraft_type,
        registration_number,
        gate_number,
        remark,
        terminal_id,
        codeshare_role,
        flight_kind,
    } = flight;

    FlightRecord {
        direction,
        flight_number,
        scheduled_datetime,
        actual_datetime,
        airport_name,
        aircraft_type,
        registration_number,
        gate_number,
        remark,
        terminal_id,
        codeshare_role,
        flight_kind,
    }
}

/// Tag and concatenate: all arrivals first, then all departures.
///
/// Later stable sorts rely on this order as their tie-break.
pub fn merge(
    arrivals: Vec<NormalizedFlight>,
    departures: Vec<NormalizedFlight>,
) -> Vec<FlightRecord> {
    let mut merged = Vec::with_capacity(arrivals.len() + departures.len());
    merged.extend(arrivals.into_iter().map(|f| tag(f, Direction::Arrival)));
    merged.extend(departures.into_iter().map(|f| tag(f, Direction::Departure)));
    merged
}

/// Keep only operating-carrier records, dropping codeshare duplicates.
pub fn operating_only(records: Vec<FlightRecord>) -> Vec<FlightRecord> {
    records.into_iter().filter(FlightRecord::is_operating).collect()
}

/// Keep only records at a passenger terminal.
pub fn passenger_terminals_only(records: Vec<FlightRecord>) -> Vec<FlightRecord> {
    records
        .into_iter()
        .filter(|r| r.terminal().is_some())
        .collect()
}

/// Keep only records assigned to `gate`.
pub fn at_gate(records: Vec<FlightRecord>, gate: &GateQuery) -> Vec<FlightRecord> {
    records
        .into_iter()
        .filter(|r| gate.matches(r.gate_number.as_deref()))
        .collect()
}

/// Records grouped by passenger terminal.
///
/// Every terminal has an entry, possibly empty. Iteration follows sheet
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalBuckets(BTreeMap<Terminal, Vec<FlightRecord>>);

impl TerminalBuckets {
    /// Bucket records by terminal, dropping any not at a passenger terminal.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let mut buckets: BTreeMap<Terminal, Vec<FlightRecord>> =
            Terminal::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for record in records {
            if let Some(terminal) = record.terminal() {
                buckets.entry(terminal).or_default().push(record);
            }
        }
        Self(buckets)
    }

    pub fn get(&self, terminal: Terminal) -> &[FlightRecord] {
        self.0.get(&terminal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_iter_ordered(self) -> impl Iterator<Item = (Terminal, Vec<FlightRecord>)> {
        self.0.into_iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(numbers: &[String]) -> Vec<NormalizedFlight> {
        numbers
            .iter()
            .map(|n| NormalizedFlight {
                flight_number: Some(n.clone()),
                ..Default::default()
            })
            .collect()
    }

    proptest! {
        /// Each stream's records keep their order and get that stream's direction.
        #[test]
        fn merge_tags_by_source_stream(
            arrivals in prop::collection::vec("[A-Z0-9]{2,6}", 0..20),
            departures in prop::collection::vec("[A-Z0-9]{2,6}", 0..20),
        ) {
            let merged = merge(numbered(&arrivals), numbered(&departures));
            prop_assert_eq!(merged.len(), arrivals.len() + departures.len());

            let (head, tail) = merged.split_at(arrivals.len());
            for (record, number) in head.iter().zip(&arrivals) {
                prop_assert_eq!(record.direction, Direction::Arrival);
                prop_assert_eq!(record.flight_number.as_ref(), Some(number));
            }
            for (record, number) in tail.iter().zip(&departures) {
                prop_assert_eq!(record.direction, Direction::Departure);
                prop_assert_eq!(record.flight_number.as_ref(), Some(number));
            }
        }
    }
}
