//! Map annotations handed to the render surface.

use crate::TerminalRecord;
use serde::Serialize;
use terminals_geo::Coordinate;

/// A pin to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Where the pin goes, serialized as top-level `latitude`/`longitude`
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Terminal name
    pub title: String,
    /// City the terminal serves
    pub subtitle: String,
    /// Icon key, `Pin_<Tag>`
    pub icon: &'static str,
}

impl From<&TerminalRecord> for Annotation {
    fn from(record: &TerminalRecord) -> Self {
        Self {
            coordinate: record.coordinate(),
            title: record.name.clone(),
            subtitle: record.city.clone(),
            icon: record.icon(),
        }
    }
}

/// Builds annotations for records with valid locations, keeping their order.
pub fn annotations_for(records: &[TerminalRecord]) -> Vec<Annotation> {
    records
        .iter()
        .filter(|record| record.has_valid_location())
        .map(Annotation::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PinType;

    #[test]
    fn test_annotation_from_record() {
        let record = TerminalRecord::new("Port of Miami", Coordinate::new(25.7781, -80.1794))
            .with_city("Miami")
            .with_pin_type(PinType::SeaPort);

        let annotation = Annotation::from(&record);
        assert_eq!(annotation.title, "Port of Miami");
        assert_eq!(annotation.subtitle, "Miami");
        assert_eq!(annotation.icon, "Pin_SeaPort");
        assert_eq!(annotation.coordinate, Coordinate::new(25.7781, -80.1794));
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let record = TerminalRecord::new("Union Station", Coordinate::new(41.8787, -87.6403))
            .with_city("Chicago")
            .with_pin_type(PinType::RailStation);

        let value = serde_json::to_value(Annotation::from(&record)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "latitude": 41.8787,
                "longitude": -87.6403,
                "title": "Union Station",
                "subtitle": "Chicago",
                "icon": "Pin_RailStation",
            })
        );
    }

    #[test]
    fn test_invalid_records_are_never_plotted() {
        let records = vec![
            TerminalRecord::new("Good", Coordinate::new(1.0, 1.0)),
            TerminalRecord::new("Bad", Coordinate::new(-91.0, 1.0)),
        ];

        let annotations = annotations_for(&records);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].title, "Good");
    }
}
