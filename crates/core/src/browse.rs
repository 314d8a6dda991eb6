//! Search flows behind the map screen.
//!
//! [`TerminalBrowser`] holds what the map needs to run a search: the data
//! source, the location provider, and the search settings. Every flow returns
//! a fresh [`SearchOutcome`]; applying it to a map is the caller's job.

use crate::annotation::{annotations_for, Annotation};
use crate::city::{CityDirectory, SelectedCity};
use crate::location::LocationProvider;
use crate::source::TerminalSource;
use crate::{Result, TerminalRecord, TerminalsError};
use serde::Serialize;
use terminals_geo::{fit_viewport_with, Coordinate, FitOptions, Viewport};
use tracing::{debug, info};

/// Radius used for city and current-location searches, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: f64 = 100_000.0;

/// Region searches at or above this radius are skipped, in meters.
pub const MAX_REGION_SEARCH_RADIUS_M: f64 = 500_000.0;

/// Search tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// Radius for city and current-location searches
    pub radius_meters: f64,
    /// Exclusive upper bound for region searches
    pub max_region_radius_meters: f64,
    /// Viewport fitting options
    pub fit: FitOptions,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_SEARCH_RADIUS_M,
            max_region_radius_meters: MAX_REGION_SEARCH_RADIUS_M,
            fit: FitOptions::default(),
        }
    }
}

/// Result of one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Center of the search
    pub reference: Coordinate,
    /// Radius searched, in meters
    pub radius_meters: f64,
    /// Matching terminals, sorted by name
    pub terminals: Vec<TerminalRecord>,
    /// One pin per matching terminal
    pub annotations: Vec<Annotation>,
    /// Region framing the matches; `None` when not auto-fitting or nothing to frame
    pub viewport: Option<Viewport>,
}

impl SearchOutcome {
    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }
}

/// Search radius for a visible map region.
///
/// Half of the larger of the region's north-south and east-west ground
/// extents. `None` when that reaches `max_radius_meters`.
pub fn region_search_radius(region: &Viewport, max_radius_meters: f64) -> Option<f64> {
    let (north_south, east_west) = region.ground_extent_meters();
    let radius = north_south.max(east_west) / 2.0;

    if radius < max_radius_meters {
        Some(radius)
    } else {
        None
    }
}

/// Explicit search context for the map screen.
#[derive(Debug, Clone)]
pub struct TerminalBrowser<S, L> {
    source: S,
    location: L,
    settings: SearchSettings,
}

impl<S: TerminalSource, L: LocationProvider> TerminalBrowser<S, L> {
    /// Creates a browser with default settings.
    pub fn new(source: S, location: L) -> Self {
        Self {
            source,
            location,
            settings: SearchSettings::default(),
        }
    }

    /// Replaces the search settings.
    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// The underlying data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Searches around an arbitrary point.
    ///
    /// With `auto_fit`, the outcome carries a viewport framing the matches.
    pub fn search_from_point(
        &self,
        reference: Coordinate,
        radius_meters: f64,
        auto_fit: bool,
    ) -> Result<SearchOutcome> {
        let terminals = self.source.search(&reference, radius_meters)?;
        let annotations = annotations_for(&terminals);

        let viewport = if auto_fit {
            fit_viewport_with(annotations.iter().map(|a| a.coordinate), &self.settings.fit)
        } else {
            None
        };

        debug!(
            lat = reference.latitude,
            lon = reference.longitude,
            radius_meters,
            found = terminals.len(),
            "Radius search complete"
        );

        Ok(SearchOutcome {
            reference,
            radius_meters,
            terminals,
            annotations,
            viewport,
        })
    }

    /// Searches around a selected city using the configured radius.
    pub fn search_from_city(&self, city: &SelectedCity) -> Result<SearchOutcome> {
        info!(city = %city.name, "Searching from city");
        self.search_from_point(city.coordinate(), self.settings.radius_meters, true)
    }

    /// Resolves `name` through `directory`, then searches from that city.
    pub fn search_from_city_name<D>(&self, directory: &D, name: &str) -> Result<SearchOutcome>
    where
        D: CityDirectory + ?Sized,
    {
        let city = directory
            .resolve(name)
            .ok_or_else(|| TerminalsError::UnknownCity(name.to_string()))?;
        self.search_from_city(&city)
    }

    /// Searches around the device location.
    ///
    /// `Ok(None)` when the provider has no fix; no search runs.
    pub fn search_from_current_location(&self) -> Result<Option<SearchOutcome>> {
        match self.location.current_location() {
            Some(here) => self
                .search_from_point(here, self.settings.radius_meters, true)
                .map(Some),
            None => {
                debug!("No device location available, skipping search");
                Ok(None)
            }
        }
    }

    /// Searches the area the user panned or zoomed to.
    ///
    /// `Ok(None)` when the region is too large to search. The outcome keeps
    /// the user's framing, so it has no viewport.
    pub fn search_visible_region(&self, region: &Viewport) -> Result<Option<SearchOutcome>> {
        match region_search_radius(region, self.settings.max_region_radius_meters) {
            Some(radius) => self.search_from_point(region.center, radius, false).map(Some),
            None => {
                debug!(
                    lat_delta = region.span.latitude_delta,
                    lon_delta = region.span.longitude_delta,
                    "Region too large, skipping search"
                );
                Ok(None)
            }
        }
    }
}
