//! Gate (stand) lookup keys.

use std::fmt;

use super::DomainError;

/// Normalise a gate string for comparison: trim and uppercase.
pub fn normalize_gate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A validated gate query.
///
/// Gates are compared case-insensitively after trimming, so `" 43a "` and
/// `"43A"` name the same stand.
///
/// # Examples
///
/// ```
/// use flight_board::domain::GateQuery;
///
/// let q = GateQuery::parse(" 43a ").unwrap();
/// assert_eq!(q.as_str(), "43A");
/// assert!(q.matches(Some("43A")));
/// assert!(!q.matches(None));
///
/// assert!(GateQuery::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GateQuery(String);

impl GateQuery {
    /// Parse a user-supplied gate. Blank input is rejected.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_gate(raw);
        if normalized.is_empty() {
            return Err(DomainError::InvalidGate(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a record's gate field names this gate.
    pub fn matches(&self, gate: Option<&str>) -> bool {
        gate.is_some_and(|g| normalize_gate(g) == self.0)
    }
}

impl fmt::Debug for GateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GateQuery({})", self.0)
    }
}

impl fmt::Display for GateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
