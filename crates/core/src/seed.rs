//! Seed document import.
//!
//! The seed is the JSON export of the terminal collection:
//!
//! ```json
//! { "terminals": [
//!     { "terminalName": "Heathrow", "city": "London", "country": "United Kingdom",
//!       "iata": "LHR", "icao": "EGLL", "elevation": 83, "gmtOffset": 0,
//!       "tzCode": "GMT", "tzName": "Europe/London", "pinType": "CivilianAirport",
//!       "location": { "type": "Point", "coordinates": [-0.4543, 51.47] } }
//! ] }
//! ```
//!
//! A bare top-level array of the same objects is accepted too. Field values
//! are read leniently: missing strings become empty, missing or malformed
//! integers become 0.

use crate::{PinType, Result, TerminalRecord, TerminalsError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;
use terminals_geo::parse_geojson_point;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Wrapped { terminals: Vec<SeedTerminal> },
    Bare(Vec<SeedTerminal>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedTerminal {
    #[serde(default, deserialize_with = "lenient_string")]
    terminal_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    iata: String,
    #[serde(default, deserialize_with = "lenient_string")]
    icao: String,
    #[serde(default, deserialize_with = "lenient_int")]
    elevation: i32,
    #[serde(default, deserialize_with = "lenient_int")]
    gmt_offset: i32,
    #[serde(default, deserialize_with = "lenient_string")]
    tz_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    tz_name: String,
    #[serde(default)]
    pin_type: PinType,
    #[serde(default)]
    location: Value,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i32, D::Error> {
    let wide = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    };
    Ok(wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

impl SeedTerminal {
    fn into_record(self) -> TerminalRecord {
        let (latitude, longitude) = match parse_geojson_point(&self.location) {
            Ok(coord) => (coord.latitude, coord.longitude),
            Err(e) => {
                warn!(terminal = %self.terminal_name, error = %e, "Terminal has no usable location");
                (f64::NAN, f64::NAN)
            }
        };

        TerminalRecord {
            name: self.terminal_name,
            city: self.city,
            country: self.country,
            iata: self.iata,
            icao: self.icao,
            pin_type: self.pin_type,
            latitude,
            longitude,
            gmt_offset: self.gmt_offset,
            elevation: self.elevation,
            tz_code: self.tz_code,
            tz_name: self.tz_name,
        }
    }
}

/// Parses a seed document into terminal records.
///
/// Entries without a name are dropped. Entries whose location is missing or
/// malformed are kept with NaN coordinates, so every search and viewport
/// skips them.
///
/// # Example
/// ```
/// use terminals_core::seed::parse_seed;
///
/// let records = parse_seed(r#"{"terminals": [
///     {"terminalName": "Narita", "city": "Tokyo", "pinType": "CivilianAirport",
///      "location": {"type": "Point", "coordinates": [140.3929, 35.772]}}
/// ]}"#).unwrap();
///
/// assert_eq!(records[0].latitude, 35.772);
/// assert_eq!(records[0].longitude, 140.3929);
/// ```
pub fn parse_seed(json: &str) -> Result<Vec<TerminalRecord>> {
    let entries = match serde_json::from_str::<SeedDocument>(json)? {
        SeedDocument::Wrapped { terminals } => terminals,
        SeedDocument::Bare(terminals) => terminals,
    };
    let total = entries.len();

    let records: Vec<TerminalRecord> = entries
        .into_iter()
        .filter(|entry| {
            let named = !entry.terminal_name.trim().is_empty();
            if !named {
                warn!(city = %entry.city, "Dropping seed entry without a terminal name");
            }
            named
        })
        .map(SeedTerminal::into_record)
        .collect();

    let out_of_range = records.iter().filter(|r| !r.has_valid_location()).count();
    debug!(
        total,
        imported = records.len(),
        out_of_range,
        "Parsed terminal seed"
    );

    Ok(records)
}

/// Reads and parses a seed file.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<TerminalRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| TerminalsError::io(path.display().to_string(), e))?;

    parse_seed(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use std::io::Write;

    const HEATHROW: &str = r#"{
        "terminalName": "Heathrow", "city": "London", "country": "United Kingdom",
        "iata": "LHR", "icao": "EGLL", "elevation": 83, "gmtOffset": 0,
        "tzCode": "GMT", "tzName": "Europe/London", "pinType": "CivilianAirport",
        "location": { "type": "Point", "coordinates": [-0.4543, 51.47] }
    }"#;

    #[test]
    fn test_parse_wrapped_document() {
        let json = format!(r#"{{ "terminals": [{}] }}"#, HEATHROW);
        let records = parse_seed(&json).unwrap();

        assert_eq!(records.len(), 1);
        let lhr = &records[0];
        assert_eq!(lhr.name, "Heathrow");
        assert_eq!(lhr.city, "London");
        assert_eq!(lhr.iata, "LHR");
        assert_eq!(lhr.icao, "EGLL");
        assert_eq!(lhr.elevation, 83);
        assert_eq!(lhr.tz_name, "Europe/London");
        assert_eq!(lhr.pin_type, PinType::CivilianAirport);
    }

    #[test]
    fn test_coordinates_are_longitude_first() {
        let json = format!("[{}]", HEATHROW);
        let records = parse_seed(&json).unwrap();

        assert_eq!(records[0].latitude, 51.47);
        assert_eq!(records[0].longitude, -0.4543);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"[{ "terminalName": "Pier 7", "pinType": "Hovercraft",
                         "location": { "coordinates": [-122.39, 37.80] } }]"#;
        let records = parse_seed(json).unwrap();

        let pier = &records[0];
        assert!(pier.city.is_empty());
        assert!(pier.country.is_empty());
        assert_eq!(pier.gmt_offset, 0);
        assert_eq!(pier.elevation, 0);
        assert_eq!(pier.pin_type, PinType::CivilianAirport);
    }

    #[test]
    fn test_lenient_scalar_values() {
        let json = r#"[{ "terminalName": "Kathmandu", "iata": null, "icao": 1234,
                         "gmtOffset": 5.75, "elevation": "4390",
                         "location": { "coordinates": [85.359, 27.696] } }]"#;
        let records = parse_seed(json).unwrap();

        let ktm = &records[0];
        assert_eq!(ktm.iata, "");
        assert_eq!(ktm.icao, "1234");
        assert_eq!(ktm.gmt_offset, 5);
        assert_eq!(ktm.elevation, 4390);
    }

    #[test]
    fn test_missing_location_becomes_invalid() {
        let json = r#"{ "terminals": [
            { "terminalName": "Lost" },
            { "terminalName": "Broken", "location": { "coordinates": ["x", 1] } }
        ] }"#;
        let records = parse_seed(json).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.has_valid_location()));
    }

    #[test]
    fn test_out_of_range_location_is_kept_but_invalid() {
        let json = r#"[{ "terminalName": "Bad Data", "location": { "coordinates": [190.0, 10.0] } }]"#;
        let records = parse_seed(json).unwrap();

        assert_eq!(records.len(), 1);
        assert!(!records[0].has_valid_location());
    }

    #[test]
    fn test_nameless_entries_dropped() {
        let json = r#"[
            { "terminalName": "", "location": { "coordinates": [0.5, 0.5] } },
            { "location": { "coordinates": [0.5, 0.5] } },
            { "terminalName": "Named", "location": { "coordinates": [0.5, 0.5] } }
        ]"#;
        let records = parse_seed(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Named");
    }

    #[test]
    fn test_invalid_documents() {
        for json in ["not json", r#"{"airports": []}"#, "42"] {
            let err = parse_seed(json).unwrap_err();
            assert_eq!(err.code(), ErrorCode::SeedParseError, "{}", json);
        }
    }

    #[test]
    fn test_empty_terminals() {
        assert!(parse_seed(r#"{"terminals": []}"#).unwrap().is_empty());
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "terminals": [{}] }}"#, HEATHROW).unwrap();

        let records = load_seed(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_seed("/definitely/not/here/terminals.json").unwrap_err();
        assert_eq!(err.code(), ErrorCode::IoError);
    }
}
