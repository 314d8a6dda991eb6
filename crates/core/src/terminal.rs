//! Terminal records and pin types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use terminals_geo::{haversine_distance_meters, Coordinate};

/// Category of a terminal, selecting its map icon.
///
/// Unknown or missing tags resolve to [`PinType::CivilianAirport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PinType {
    /// Civil airport (also the fallback)
    #[default]
    CivilianAirport,
    /// Military air base
    MilitaryAirport,
    /// Seaport or ferry terminal
    SeaPort,
    /// Bus station
    BusStation,
    /// Rail station
    RailStation,
}

impl PinType {
    /// Every pin type, in declaration order.
    pub const ALL: [PinType; 5] = [
        PinType::CivilianAirport,
        PinType::MilitaryAirport,
        PinType::SeaPort,
        PinType::BusStation,
        PinType::RailStation,
    ];

    /// Resolves a raw tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "MilitaryAirport" => PinType::MilitaryAirport,
            "SeaPort" => PinType::SeaPort,
            "BusStation" => PinType::BusStation,
            "RailStation" => PinType::RailStation,
            _ => PinType::CivilianAirport,
        }
    }

    /// The tag as stored in seed data.
    pub fn tag(&self) -> &'static str {
        match self {
            PinType::CivilianAirport => "CivilianAirport",
            PinType::MilitaryAirport => "MilitaryAirport",
            PinType::SeaPort => "SeaPort",
            PinType::BusStation => "BusStation",
            PinType::RailStation => "RailStation",
        }
    }

    /// Icon key used by the render surface, `Pin_<Tag>`.
    pub fn icon_key(&self) -> &'static str {
        match self {
            PinType::CivilianAirport => "Pin_CivilianAirport",
            PinType::MilitaryAirport => "Pin_MilitaryAirport",
            PinType::SeaPort => "Pin_SeaPort",
            PinType::BusStation => "Pin_BusStation",
            PinType::RailStation => "Pin_RailStation",
        }
    }
}

impl From<&str> for PinType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for PinType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(PinType::from_tag).unwrap_or_default())
    }
}

/// Resolves a raw pin tag to its icon key.
///
/// # Example
/// ```
/// use terminals_core::resolve_icon;
///
/// assert_eq!(resolve_icon("SeaPort"), "Pin_SeaPort");
/// assert_eq!(resolve_icon(""), "Pin_CivilianAirport");
/// assert_eq!(resolve_icon("Blimp"), "Pin_CivilianAirport");
/// ```
pub fn resolve_icon(tag: &str) -> &'static str {
    PinType::from_tag(tag).icon_key()
}

/// One physical terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalRecord {
    /// Display name
    pub name: String,
    /// City the terminal serves
    #[serde(default)]
    pub city: String,
    /// Country, empty when unknown
    #[serde(default)]
    pub country: String,
    /// IATA code, empty when unknown
    #[serde(default)]
    pub iata: String,
    /// ICAO code, empty when unknown
    #[serde(default)]
    pub icao: String,
    /// Icon category
    #[serde(default)]
    pub pin_type: PinType,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Offset from GMT as carried by the source data
    #[serde(default)]
    pub gmt_offset: i32,
    /// Elevation as carried by the source data
    #[serde(default)]
    pub elevation: i32,
    /// Time zone abbreviation
    #[serde(default)]
    pub tz_code: String,
    /// Time zone name
    #[serde(default)]
    pub tz_name: String,
}

impl TerminalRecord {
    /// Creates a record with a name and location; every other field is empty.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            city: String::new(),
            country: String::new(),
            iata: String::new(),
            icao: String::new(),
            pin_type: PinType::default(),
            latitude: location.latitude,
            longitude: location.longitude,
            gmt_offset: 0,
            elevation: 0,
            tz_code: String::new(),
            tz_name: String::new(),
        }
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the IATA and ICAO codes.
    pub fn with_codes(mut self, iata: impl Into<String>, icao: impl Into<String>) -> Self {
        self.iata = iata.into();
        self.icao = icao.into();
        self
    }

    /// Sets the pin type.
    pub fn with_pin_type(mut self, pin_type: PinType) -> Self {
        self.pin_type = pin_type;
        self
    }

    /// The record's location.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// True when latitude and longitude are inside the valid ranges.
    #[inline]
    pub fn has_valid_location(&self) -> bool {
        self.coordinate().is_valid()
    }

    /// Great-circle distance to `point` in meters.
    #[inline]
    pub fn distance_meters(&self, point: &Coordinate) -> f64 {
        haversine_distance_meters(&self.coordinate(), point)
    }

    /// Icon key for this record.
    #[inline]
    pub fn icon(&self) -> &'static str {
        self.pin_type.icon_key()
    }
}
