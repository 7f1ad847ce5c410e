//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{FlightRecord, LOOKAHEAD_DAYS, LOOKBACK_DAYS, PLACEHOLDER, format_hhmm};
use crate::pipeline::{GateOutcome, GateSelection};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the gate lookup and export forms.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Default day, YYYY-MM-DD
    pub today: String,
    /// Default time, HH:MM
    pub now: String,
    /// Earliest selectable day
    pub min_day: String,
    /// Latest selectable day
    pub max_day: String,
}

impl IndexTemplate {
    pub fn lookback_days(&self) -> u64 {
        LOOKBACK_DAYS
    }

    pub fn lookahead_days(&self) -> u64 {
        LOOKAHEAD_DAYS
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Gate lookup results fragment.
#[derive(Template)]
#[template(path = "gate_results.html")]
pub struct GateResultsTemplate {
    pub gate: String,
    pub date: String,
    pub cutoff: String,
    pub no_flights: bool,
    pub next: Option<FlightCardView>,
    pub later: Vec<FlightCardView>,
    /// Shown only when nothing is at or after the cutoff.
    pub fallback: Vec<FlightCardView>,
    pub excluded: usize,
}

impl GateResultsTemplate {
    pub fn from_selection(
        gate: String,
        date: String,
        cutoff: String,
        selection: &GateSelection,
    ) -> Self {
        let mut template = Self {
            gate,
            date,
            cutoff,
            no_flights: false,
            next: None,
            later: Vec::new(),
            fallback: Vec::new(),
            excluded: selection.excluded,
        };

        match &selection.outcome {
            GateOutcome::NoFlights => template.no_flights = true,
            GateOutcome::Upcoming { next, later } => {
                template.next = Some(FlightCardView::from_record(next));
                template.later = later.iter().map(FlightCardView::from_record).collect();
            }
            GateOutcome::NoneAfterCutoff { all } => {
                template.fallback = all.iter().map(FlightCardView::from_record).collect();
            }
        }

        template
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A flight as shown in the gate view.
///
/// Every field is pre-rendered; absent values are already the placeholder.
#[derive(Debug, Clone)]
pub struct FlightCardView {
    pub direction_label: &'static str,
    pub accent_color: &'static str,
    pub card_background: &'static str,
    pub flight_number: String,
    pub airport_label: &'static str,
    pub airport_name: String,
    pub scheduled_label: &'static str,
    pub scheduled: String,
    pub estimated_label: &'static str,
    pub estimated: String,
    /// Headline time: actual if known, else scheduled.
    pub effective: String,
    pub gate: String,
    pub terminal: &'static str,
    pub aircraft_type: String,
    pub registration_number: String,
    pub remark: String,
}

fn or_placeholder(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

impl FlightCardView {
    pub fn from_record(record: &FlightRecord) -> Self {
        let direction = record.direction;
        Self {
            direction_label: direction.label(),
            accent_color: direction.accent_color(),
            card_background: direction.card_background(),
            flight_number: or_placeholder(&record.flight_number),
            airport_label: direction.airport_label(),
            airport_name: or_placeholder(&record.airport_name),
            scheduled_label: direction.scheduled_label(),
            scheduled: format_hhmm(record.scheduled_datetime.as_deref()),
            estimated_label: direction.estimated_label(),
            estimated: format_hhmm(record.actual_datetime.as_deref()),
            effective: format_hhmm(record.effective_raw()),
            gate: or_placeholder(&record.gate_number),
            terminal: record
                .terminal()
                .map(|t| t.display_name())
                .unwrap_or(PLACEHOLDER),
            aircraft_type: or_placeholder(&record.aircraft_type),
            registration_number: or_placeholder(&record.registration_number),
            remark: or_placeholder(&record.remark),
        }
    }

    /// Whether the estimate differs from the schedule.
    pub fn is_changed(&self) -> bool {
        self.estimated != PLACEHOLDER && self.estimated != self.scheduled
    }
}
