//! Multi-day queries: fetch, normalize, merge.
//!
//! Everything here is strictly sequential. For each day, departures are
//! paged to completion, then arrivals, before the next day starts. The
//! first failure aborts the whole query.

use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::info;

use crate::domain::{FlightRecord, GateQuery, QueryRange};
use crate::flights::{
    FlightApiError, NormalizedFlight, Operation, PageSource, RawFlightItem, fetch_day,
    normalize_all,
};

use super::merge::{at_gate, merge, operating_only};
use super::next_flight::{GateSelection, select_next};

/// Normalized arrivals and departures for a query, not yet merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightSet {
    pub arrivals: Vec<NormalizedFlight>,
    pub departures: Vec<NormalizedFlight>,
    /// Source fields the normalizer dropped across all items.
    pub dropped_fields: usize,
}

impl FlightSet {
    /// Tag and concatenate arrivals then departures.
    pub fn merged(self) -> Vec<FlightRecord> {
        merge(self.arrivals, self.departures)
    }

    fn absorb(&mut self, operation: Operation, items: &[RawFlightItem]) {
        let normalized = normalize_all(items);
        self.dropped_fields += normalized.dropped_fields;
        match operation {
            Operation::Arrivals => self.arrivals.extend(normalized.flights),
            Operation::Departures => self.departures.extend(normalized.flights),
        }
    }
}

/// Fetch and normalize both operations for every day in `range`.
pub async fn fetch_range<P: PageSource>(
    source: &P,
    range: &QueryRange,
    page_size: u32,
) -> Result<FlightSet, FlightApiError> {
    let mut set = FlightSet::default();

    for day in range.days() {
        for operation in [Operation::Departures, Operation::Arrivals] {
            let items = fetch_day(source, operation, day, page_size).await?;
            info!(%day, %operation, count = items.len(), "fetched");
            set.absorb(operation, &items);
        }
    }

    Ok(set)
}

/// Gate lookup: the flights at `gate` on `day`, relative to `cutoff`.
///
/// Terminal filtering is skipped; gate numbers are unique across terminals.
pub async fn lookup_gate<P: PageSource>(
    source: &P,
    day: NaiveDate,
    gate: &GateQuery,
    cutoff: &DateTime<FixedOffset>,
    page_size: u32,
) -> Result<GateSelection, FlightApiError> {
    let mut set = FlightSet::default();
    for operation in [Operation::Arrivals, Operation::Departures] {
        let items = fetch_day(source, operation, day, page_size).await?;
        set.absorb(operation, &items);
    }

    let at_this_gate = at_gate(operating_only(set.merged()), gate);
    let selection = select_next(at_this_gate, cutoff);
    info!(
        %day,
        %gate,
        excluded = selection.excluded,
        "gate lookup complete"
    );
    Ok(selection)
}
