//! Arrival/departure direction and the presentation choices that hang off it.

use serde::Serialize;
use std::fmt;

/// Whether a flight record is an arrival at or a departure from the airport.
///
/// The API never reports this; it is assigned when the arrivals and
/// departures streams are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Arrival,
    Departure,
}

impl Direction {
    /// Single-letter tag used in the export (`A` / `D`).
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Arrival => "A",
            Direction::Departure => "D",
        }
    }

    /// Label shown in the gate view.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Arrival => "🛬 도착",
            Direction::Departure => "🛫 출발",
        }
    }

    /// Accent colour for list rows.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Direction::Arrival => "#1e3a5f",
            Direction::Departure => "#5f1e3a",
        }
    }

    /// Background of the highlighted "next flight" card.
    pub fn card_background(&self) -> &'static str {
        match self {
            Direction::Arrival => "linear-gradient(135deg, #1e3a5f 0%, #2d5986 100%)",
            Direction::Departure => "linear-gradient(135deg, #5f1e3a 0%, #862d59 100%)",
        }
    }

    /// What the record's `airport_name` means for this direction.
    ///
    /// An arrival's remote airport is where it came from; a departure's is
    /// where it is going.
    pub fn airport_label(&self) -> &'static str {
        match self {
            Direction::Arrival => "출발지",
            Direction::Departure => "도착지",
        }
    }

    pub fn scheduled_label(&self) -> &'static str {
        match self {
            Direction::Arrival => "계획 도착(STA)",
            Direction::Departure => "계획 출발(STD)",
        }
    }

    pub fn estimated_label(&self) -> &'static str {
        match self {
            Direction::Arrival => "예상 도착(ETA)",
            Direction::Departure => "예상 출발(ETD)",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
