//! Allow-list normalization of raw API items.
//!
//! This is the only place untyped API data is read. Each raw item is
//! mapped through a fixed table of external → internal field names; fields
//! outside the table are dropped, and absent or `null` fields stay absent.

use serde_json::Value;

use crate::domain::{CodeshareRole, FlightKind};

use super::types::RawFlightItem;

/// Internal schema fields, keyed by their external API name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FlightNumber,
    ScheduledDatetime,
    ActualDatetime,
    AirportName,
    AircraftType,
    RegistrationNumber,
    GateNumber,
    Remark,
    TerminalId,
    CodeshareRole,
    FlightKind,
}

impl Field {
    /// The allow-list: every external name the normalizer keeps.
    pub const ALL: [(&'static str, Field); 11] = [
        ("flightId", Field::FlightNumber),
        ("scheduleDatetime", Field::ScheduledDatetime),
        ("estimatedDatetime", Field::ActualDatetime),
        ("airport", Field::AirportName),
        ("aircraftSubtype", Field::AircraftType),
        ("aircraftRegNo", Field::RegistrationNumber),
        ("fstandPosition", Field::GateNumber),
        ("remark", Field::Remark),
        ("terminalId", Field::TerminalId),
        ("codeshare", Field::CodeshareRole),
        ("typeOfFlight", Field::FlightKind),
    ];

    pub fn from_external(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(external, _)| *external == name)
            .map(|(_, field)| *field)
    }
}

/// A flight item in the internal schema, not yet tagged with a direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFlight {
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

impl NormalizedFlight {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FlightNumber => self.flight_number = Some(value),
            Field::ScheduledDatetime => self.scheduled_datetime = Some(value),
            Field::ActualDatetime => self.actual_datetime = Some(value),
            Field::AirportName => self.airport_name = Some(value),
            Field::AircraftType => self.aircraft_type = Some(value),
            Field::RegistrationNumber => self.registration_number = Some(value),
            Field::GateNumber => self.gate_number = Some(value),
            Field::Remark => self.remark = Some(value),
            Field::TerminalId => self.terminal_id = Some(value),
            Field::CodeshareRole => self.codeshare_role = Some(CodeshareRole::parse(&value)),
            Field::FlightKind => self.flight_kind = Some(FlightKind::parse(&value)),
        }
    }
}

/// A batch of normalized flights plus how much was thrown away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub flights: Vec<NormalizedFlight>,
    /// Fields present in the source but outside the allow-list, or with a
    /// value that is not a scalar.
    pub dropped_fields: usize,
}

/// Scalar JSON values become strings; `null`, arrays and objects do not.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Normalize one raw item. Returns the flight and the number of dropped fields.
pub fn normalize_item(raw: &RawFlightItem) -> (NormalizedFlight, usize) {
    let mut flight = NormalizedFlight::default();
    let mut dropped = 0;

    for (name, value) in raw {
        if value.is_null() {
            continue;
        }
        match (Field::from_external(name), scalar_text(value)) {
            (Some(field), Some(text)) => flight.set(field, text),
            _ => dropped += 1,
        }
    }

    (flight, dropped)
}

/// Normalize a page (or day) of raw items.
pub fn normalize_all(items: &[RawFlightItem]) -> Normalized {
    let mut out = Normalized {
        flights: Vec::with_capacity(items.len()),
        dropped_fields: 0,
    };
    for raw in items {
        let (flight, dropped) = normalize_item(raw);
        out.flights.push(flight);
        out.dropped_fields += dropped;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFlightItem {
        match value {
            Value::Object(map) => map,
            _ => panic!("test item must be an object"),
        }
    }

    #[test]
    fn maps_every_allowed_field() {
        let item = raw(json!({
            "flightId": "KE001",
            "scheduleDatetime": "202502260900",
            "estimatedDatetime": "202502260915",
            "airport": "나리타",
            "aircraftSubtype": "B77W",
            "aircraftRegNo": "HL8008",
            "fstandPosition": "231",
            "remark": "도착",
            "terminalId": "P03",
            "codeshare": "Master",
            "typeOfFlight": "I"
        }));

        let (flight, dropped) = normalize_item(&item);
        assert_eq!(dropped, 0);
        assert_eq!(flight.flight_number.as_deref(), Some("KE001"));
        assert_eq!(flight.scheduled_datetime.as_deref(), Some("202502260900"));
        assert_eq!(flight.actual_datetime.as_deref(), Some("202502260915"));
        assert_eq!(flight.airport_name.as_deref(), Some("나리타"));
        assert_eq!(flight.aircraft_type.as_deref(), Some("B77W"));
        assert_eq!(flight.registration_number.as_deref(), Some("HL8008"));
        assert_eq!(flight.gate_number.as_deref(), Some("231"));
        assert_eq!(flight.remark.as_deref(), Some("도착"));
        assert_eq!(flight.terminal_id.as_deref(), Some("P03"));
        assert_eq!(flight.codeshare_role, Some(CodeshareRole::Master));
        assert_eq!(flight.flight_kind, Some(FlightKind::International));
    }

    #[test]
    fn absent_and_null_stay_absent() {
        let item = raw(json!({
            "flightId": "KE001",
            "estimatedDatetime": null,
        }));
        let (flight, dropped) = normalize_item(&item);
        assert_eq!(dropped, 0);
        assert_eq!(flight.actual_datetime, None);
        assert_eq!(flight.gate_number, None);
    }

    #[test]
    fn empty_string_is_kept() {
        let item = raw(json!({ "remark": "" }));
        let (flight, _) = normalize_item(&item);
        assert_eq!(flight.remark.as_deref(), Some(""));
    }

    #[test]
    fn unknown_fields_dropped_and_counted() {
        let item = raw(json!({
            "flightId": "KE001",
            "airline": "대한항공",
            "chkinRange": "A01-A12",
            "elapsetime": null,
        }));
        let (flight, dropped) = normalize_item(&item);
        assert_eq!(flight.flight_number.as_deref(), Some("KE001"));
        assert_eq!(dropped, 2);
    }

    #[test]
    fn numbers_become_text() {
        let item = raw(json!({ "fstandPosition": 43, "flightId": ["KE", "001"] }));
        let (flight, dropped) = normalize_item(&item);
        assert_eq!(flight.gate_number.as_deref(), Some("43"));
        assert_eq!(flight.flight_number, None);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn normalize_all_sums_drops() {
        let items = vec![
            raw(json!({ "flightId": "KE001", "x": 1 })),
            raw(json!({ "flightId": "OZ102", "y": 2, "z": 3 })),
        ];
        let out = normalize_all(&items);
        assert_eq!(out.flights.len(), 2);
        assert_eq!(out.dropped_fields, 3);
    }

    #[test]
    fn allow_list_is_complete_and_unique() {
        let fields: Vec<Field> = Field::ALL.iter().map(|(_, f)| *f).collect();
        assert_eq!(fields.len(), 11);
        for (i, field) in fields.iter().enumerate() {
            assert!(!fields[i + 1..].contains(field), "{field:?} mapped twice");
        }
        assert_eq!(Field::from_external("codeshare"), Some(Field::CodeshareRole));
        assert_eq!(Field::from_external("flight_number"), None);
    }
}
