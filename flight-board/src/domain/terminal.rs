//! Passenger terminal codes.

use std::fmt;

/// One of the airport's passenger-facing terminals.
///
/// The API also reports cargo and other non-passenger terminal codes; those
/// have no `Terminal` value and are excluded from every user-facing view.
///
/// Variant order is the display order of the exported sheets.
///
/// # Examples
///
/// ```
/// use flight_board::domain::Terminal;
///
/// assert_eq!(Terminal::from_code("P03"), Some(Terminal::Two));
/// assert_eq!(Terminal::from_code("C01"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    /// Terminal 1 (`P01`).
    One,
    /// Terminal 1 concourse (`P02`).
    Concourse,
    /// Terminal 2 (`P03`).
    Two,
}

impl Terminal {
    /// All passenger terminals in sheet order.
    pub const ALL: [Terminal; 3] = [Terminal::One, Terminal::Concourse, Terminal::Two];

    /// Look up a passenger terminal by its API code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "P01" => Some(Terminal::One),
            "P02" => Some(Terminal::Concourse),
            "P03" => Some(Terminal::Two),
            _ => None,
        }
    }

    /// The API code.
    pub fn code(&self) -> &'static str {
        match self {
            Terminal::One => "P01",
            Terminal::Concourse => "P02",
            Terminal::Two => "P03",
        }
    }

    /// Short name used as the spreadsheet tab title.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Terminal::One => "T1",
            Terminal::Concourse => "탑승동",
            Terminal::Two => "T2",
        }
    }

    /// Long human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Terminal::One => "T1(제1터미널)",
            Terminal::Concourse => "탑승동",
            Terminal::Two => "T2(제2터미널)",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for t in Terminal::ALL {
            assert_eq!(Terminal::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn non_passenger_codes_rejected() {
        assert_eq!(Terminal::from_code(""), None);
        assert_eq!(Terminal::from_code("C01"), None);
        assert_eq!(Terminal::from_code("p01"), None);
        assert_eq!(Terminal::from_code("P04"), None);
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(Terminal::from_code(" P02 "), Some(Terminal::Concourse));
    }

    #[test]
    fn sheet_order() {
        let names: Vec<_> = Terminal::ALL.iter().map(Terminal::sheet_name).collect();
        assert_eq!(names, ["T1", "탑승동", "T2"]);
        assert!(Terminal::One < Terminal::Concourse && Terminal::Concourse < Terminal::Two);
    }
}
