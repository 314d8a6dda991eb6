//! Geospatial primitives for the Terminals map.
//!
//! This crate provides:
//! - Haversine great-circle distance
//! - Viewport fitting (center + angular span enclosing a set of points)
//! - GeoJSON point parsing (`[longitude, latitude]` order)
//!
//! # Example
//!
//! ```
//! use terminals_geo::{fit_viewport, haversine_distance_meters, Coordinate};
//!
//! let jfk = Coordinate::new(40.6413, -73.7781);
//! let lga = Coordinate::new(40.7769, -73.8740);
//!
//! let meters = haversine_distance_meters(&jfk, &lga);
//! assert!((meters - 17_000.0).abs() < 1_000.0);
//!
//! let viewport = fit_viewport([jfk, lga]).unwrap();
//! assert!(viewport.span.latitude_delta > 0.1355);
//! ```

#![warn(missing_docs)]

mod error;
mod geojson;
mod haversine;
pub mod viewport;

pub use error::{GeoError, GeoErrorCode, Result};
pub use geojson::{parse_geojson_point, GeoJsonPoint};
pub use haversine::{
    haversine_distance, haversine_distance_meters, meters_per_degree_longitude, EARTH_RADIUS_KM,
    EARTH_RADIUS_M, METERS_PER_DEGREE_LATITUDE,
};
pub use viewport::{fit_viewport, fit_viewport_with, FitOptions, Span, Viewport};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate without range checks.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting out-of-range or non-finite values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({}, {}) is outside lat [-90, 90] / lon [-180, 180]",
                latitude, longitude
            )))
        }
    }

    /// Returns true if the coordinate has valid values.
    ///
    /// NaN fails every comparison and is therefore invalid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
