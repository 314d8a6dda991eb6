//! City directory: name lookup and autocomplete.

use crate::{Result, TerminalRecord, TerminalsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use terminals_geo::Coordinate;
use tracing::debug;

/// A city picked as the center of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCity {
    /// Display name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl SelectedCity {
    /// Creates a city at `location`.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    /// The city's reference point.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Resolves city display names to reference points.
pub trait CityDirectory {
    /// Looks a city up by display name.
    fn resolve(&self, name: &str) -> Option<SelectedCity>;

    /// Every city name, sorted.
    fn city_names(&self) -> Vec<String>;

    /// Names containing `query`, ignoring case. An empty query matches all.
    fn autocomplete(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.city_names()
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// In-memory city directory keyed by display name.
#[derive(Debug, Clone, Default)]
pub struct CityIndex {
    cities: BTreeMap<String, Coordinate>,
    // Only populated for cities derived from terminals.
    terminal_counts: BTreeMap<String, usize>,
}

impl CityIndex {
    /// Builds an index from explicit entries. Later duplicates win.
    pub fn new(cities: impl IntoIterator<Item = SelectedCity>) -> Self {
        Self {
            cities: cities
                .into_iter()
                .map(|city| {
                    let location = city.coordinate();
                    (city.name, location)
                })
                .collect(),
            terminal_counts: BTreeMap::new(),
        }
    }

    /// Derives cities from terminal records.
    ///
    /// Each city is placed at the mean position of its terminals. Records
    /// with an empty city or an invalid location are ignored.
    pub fn from_terminals(records: &[TerminalRecord]) -> Self {
        let mut sums: BTreeMap<&str, (f64, f64, usize)> = BTreeMap::new();

        for record in records.iter().filter(|r| r.has_valid_location()) {
            let city = record.city.trim();
            if city.is_empty() {
                continue;
            }
            let entry = sums.entry(city).or_insert((0.0, 0.0, 0));
            entry.0 += record.latitude;
            entry.1 += record.longitude;
            entry.2 += 1;
        }

        let mut cities = BTreeMap::new();
        let mut terminal_counts = BTreeMap::new();
        for (name, (lat, lon, n)) in sums {
            let count = n as f64;
            cities.insert(name.to_string(), Coordinate::new(lat / count, lon / count));
            terminal_counts.insert(name.to_string(), n);
        }

        debug!(count = cities.len(), "Derived city index from terminals");
        Self {
            cities,
            terminal_counts,
        }
    }

    /// Number of terminals a derived city was averaged from.
    ///
    /// `None` for cities given explicitly. A city derived from a single
    /// terminal sits exactly on it, and the radius rule excludes distance 0,
    /// so a search from that city cannot return its own terminal.
    pub fn derived_terminal_count(&self, name: &str) -> Option<usize> {
        self.terminal_counts.get(name).copied()
    }

    /// Loads `[{"name", "latitude", "longitude"}]` from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TerminalsError::io(path.display().to_string(), e))?;
        let cities: Vec<SelectedCity> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = cities.len(), "Loaded city index");
        Ok(Self::new(cities))
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True when no cities are known.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl CityDirectory for CityIndex {
    fn resolve(&self, name: &str) -> Option<SelectedCity> {
        if let Some(location) = self.cities.get(name) {
            return Some(SelectedCity::new(name, *location));
        }

        let wanted = name.trim().to_lowercase();
        self.cities
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == wanted)
            .map(|(candidate, location)| SelectedCity::new(candidate.clone(), *location))
    }

    fn city_names(&self) -> Vec<String> {
        self.cities.keys().cloned().collect()
    }
}
