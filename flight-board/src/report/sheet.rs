//! Terminal report sheets: one table per passenger terminal.

use unicode_width::UnicodeWidthStr;

use crate::domain::{
    Direction, FlightRecord, PLACEHOLDER, QueryRange, Terminal, api_day, format_date, format_time,
};
use crate::pipeline::{FlightSet, TerminalBuckets, operating_only, passenger_terminals_only};

/// Minimum rendered column width, in character cells.
const MIN_COLUMN_WIDTH: usize = 10;

/// Padding added to the widest cell of a column.
const COLUMN_PADDING: usize = 3;

/// Report columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    OperatingDate,
    Direction,
    FlightNumber,
    FlightKind,
    ScheduledTime,
    RegistrationNumber,
    ActualTime,
    Remark,
    GateNumber,
    AircraftType,
    DepartureAirport,
    ArrivalAirport,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::OperatingDate,
        Column::Direction,
        Column::FlightNumber,
        Column::FlightKind,
        Column::ScheduledTime,
        Column::RegistrationNumber,
        Column::ActualTime,
        Column::Remark,
        Column::GateNumber,
        Column::AircraftType,
        Column::DepartureAirport,
        Column::ArrivalAirport,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::OperatingDate => "운항일자",
            Column::Direction => "출도착",
            Column::FlightNumber => "편명",
            Column::FlightKind => "I/D",
            Column::ScheduledTime => "STA/STD",
            Column::RegistrationNumber => "등록기호",
            Column::ActualTime => "ATA/ATD",
            Column::Remark => "운항여부",
            Column::GateNumber => "주기장",
            Column::AircraftType => "기종",
            Column::DepartureAirport => "출발지공항명",
            Column::ArrivalAirport => "도착지공항명",
        }
    }

    /// Derive this column's cell for one record.
    pub fn cell(&self, record: &FlightRecord) -> Cell {
        match self {
            Column::OperatingDate => Cell::rendered(format_date(record.scheduled_datetime.as_deref())),
            Column::Direction => Cell::Text(record.direction.code().to_string()),
            Column::FlightNumber => Cell::field(record.flight_number.as_deref()),
            Column::FlightKind => Cell::field(record.flight_kind.as_ref().map(|k| k.code())),
            Column::ScheduledTime => Cell::rendered(format_time(record.scheduled_datetime.as_deref())),
            Column::RegistrationNumber => Cell::field(record.registration_number.as_deref()),
            Column::ActualTime => Cell::rendered(format_time(record.actual_datetime.as_deref())),
            Column::Remark => Cell::field(record.remark.as_deref()),
            Column::GateNumber => Cell::field(record.gate_number.as_deref()),
            Column::AircraftType => Cell::field(record.aircraft_type.as_deref()),
            Column::DepartureAirport => match record.direction {
                Direction::Arrival => Cell::field(record.airport_name.as_deref()),
                Direction::Departure => Cell::Missing,
            },
            Column::ArrivalAirport => match record.direction {
                Direction::Departure => Cell::field(record.airport_name.as_deref()),
                Direction::Arrival => Cell::Missing,
            },
        }
    }
}

/// One report cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// No data; rendered as the placeholder.
    Missing,
}

impl Cell {
    /// An optional source field. Absent and blank are both missing.
    fn field(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Cell::Text(v.to_string()),
            _ => Cell::Missing,
        }
    }

    /// Output of a never-failing formatter, which uses the placeholder for "missing".
    fn rendered(value: String) -> Self {
        if value == PLACEHOLDER {
            Cell::Missing
        } else {
            Cell::Text(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Missing => PLACEHOLDER,
        }
    }
}

/// Width of `s` in character cells; East Asian wide glyphs count as 2.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// One terminal's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub terminal: Terminal,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Build a sheet, sorting records by raw scheduled time.
    ///
    /// Absent scheduled times sort first; ties keep input order.
    pub fn new(terminal: Terminal, mut records: Vec<FlightRecord>) -> Self {
        records.sort_by(|a, b| a.scheduled_sort_key().cmp(b.scheduled_sort_key()));
        let rows = records
            .iter()
            .map(|r| Column::ALL.iter().map(|c| c.cell(r)).collect())
            .collect();
        Self { terminal, rows }
    }

    pub fn name(&self) -> &'static str {
        self.terminal.sheet_name()
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> {
        Column::ALL.iter().map(Column::header)
    }

    /// Auto-fit widths: widest cell (header included) plus padding, with a floor.
    pub fn column_widths(&self) -> Vec<usize> {
        Column::ALL
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell.as_str()))
                    .chain(std::iter::once(display_width(column.header())))
                    .max()
                    .unwrap_or(0);
                (widest + COLUMN_PADDING).max(MIN_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Counts for the user-facing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Arrival items fetched, before any filtering.
    pub arrivals_fetched: usize,
    /// Departure items fetched, before any filtering.
    pub departures_fetched: usize,
    /// Source fields the normalizer dropped.
    pub dropped_fields: usize,
    /// Rows written per sheet, in sheet order.
    pub rows_per_sheet: Vec<(Terminal, usize)>,
}

impl ReportSummary {
    pub fn total_rows(&self) -> usize {
        self.rows_per_sheet.iter().map(|(_, n)| n).sum()
    }
}

/// The full export: one sheet per passenger terminal, in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sheets: Vec<Sheet>,
}

impl Report {
    /// Assemble from records already codeshare-filtered and bucketed.
    pub fn assemble(buckets: TerminalBuckets) -> Self {
        let sheets = buckets
            .into_iter_ordered()
            .map(|(terminal, records)| Sheet::new(terminal, records))
            .collect();
        Self { sheets }
    }

    /// Run the report path over a fetched flight set.
    ///
    /// Codeshare duplicates are removed first, then anything outside the
    /// passenger terminals.
    pub fn build(set: FlightSet) -> (Self, ReportSummary) {
        let arrivals_fetched = set.arrivals.len();
        let departures_fetched = set.departures.len();
        let dropped_fields = set.dropped_fields;

        let kept = passenger_terminals_only(operating_only(set.merged()));
        let buckets = TerminalBuckets::from_records(kept);
        let report = Self::assemble(buckets);

        let summary = ReportSummary {
            arrivals_fetched,
            departures_fetched,
            dropped_fields,
            rows_per_sheet: report
                .sheets
                .iter()
                .map(|s| (s.terminal, s.rows.len()))
                .collect(),
        };
        (report, summary)
    }
}

/// File name for an export of `range`.
pub fn export_filename(range: &QueryRange) -> String {
    if range.is_single_day() {
        format!("icn_flight_status_{}.xlsx", api_day(range.start()))
    } else {
        format!(
            "icn_flight_status_{}_{}.xlsx",
            api_day(range.start()),
            api_day(range.end())
        )
    }
}
