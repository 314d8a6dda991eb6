//! Map viewport fitting.
//!
//! A [`Viewport`] is a center plus an angular span in degrees. [`fit_viewport`]
//! frames a set of points: a lone point gets a fixed ground-distance box, two
//! or more get their lat/lon bounding box padded and clamped to sane zoom
//! limits.

use crate::haversine::{
    haversine_distance_meters, meters_per_degree_longitude, METERS_PER_DEGREE_LATITUDE,
};
use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Extra margin applied to both spans of a multi-point fit.
pub const PADDING_FACTOR: f64 = 1.15;

/// Smallest span a fit may produce, roughly one statute mile of arc.
pub const MIN_SPAN_DEGREES: f64 = 0.014;

/// Largest span a fit may produce.
pub const MAX_SPAN_DEGREES: f64 = 360.0;

/// Ground distance framed around a single point, in meters.
pub const SINGLE_POINT_METERS: f64 = 10_000.0;

/// Angular size of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// North-south extent in degrees
    pub latitude_delta: f64,
    /// East-west extent in degrees
    pub longitude_delta: f64,
}

impl Span {
    /// Creates a span from its two deltas.
    #[inline]
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self { latitude_delta, longitude_delta }
    }
}

/// A map region: center coordinate and angular span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Center of the region
    pub center: Coordinate,
    /// Angular size of the region
    pub span: Span,
}

impl Viewport {
    /// Creates a viewport from a center and span.
    #[inline]
    pub fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Creates a viewport covering a ground distance around `center`.
    ///
    /// Longitude degrees widen with latitude; at a pole the east-west span
    /// saturates at [`MAX_SPAN_DEGREES`].
    pub fn from_distance(center: Coordinate, latitude_meters: f64, longitude_meters: f64) -> Self {
        let latitude_delta = latitude_meters / METERS_PER_DEGREE_LATITUDE;

        let per_degree_lon = meters_per_degree_longitude(center.latitude);
        let longitude_delta = if per_degree_lon > f64::EPSILON {
            longitude_meters / per_degree_lon
        } else {
            MAX_SPAN_DEGREES
        };

        Self::new(
            center,
            Span::new(
                latitude_delta.min(MAX_SPAN_DEGREES),
                longitude_delta.min(MAX_SPAN_DEGREES),
            ),
        )
    }

    /// Ground extent across the center lines, as (north-south, east-west) meters.
    ///
    /// Edge latitudes are clamped to the poles.
    pub fn ground_extent_meters(&self) -> (f64, f64) {
        let Coordinate { latitude, longitude } = self.center;
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lon = self.span.longitude_delta / 2.0;

        let south = Coordinate::new((latitude - half_lat).max(-90.0), longitude);
        let north = Coordinate::new((latitude + half_lat).min(90.0), longitude);
        let west = Coordinate::new(latitude, longitude - half_lon);
        let east = Coordinate::new(latitude, longitude + half_lon);

        (
            haversine_distance_meters(&south, &north),
            haversine_distance_meters(&west, &east),
        )
    }
}

/// Tunables for [`fit_viewport_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    /// Multiplier applied to both spans of a multi-point fit
    pub padding_factor: f64,
    /// Lower clamp for each span, in degrees
    pub min_span_degrees: f64,
    /// Upper clamp for each span, in degrees
    pub max_span_degrees: f64,
    /// Ground distance framed around a single point, in meters
    pub single_point_meters: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding_factor: PADDING_FACTOR,
            min_span_degrees: MIN_SPAN_DEGREES,
            max_span_degrees: MAX_SPAN_DEGREES,
            single_point_meters: SINGLE_POINT_METERS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Bounds {
    fn at(point: Coordinate) -> Self {
        Self {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lon: point.longitude,
            max_lon: point.longitude,
        }
    }

    fn extend(&mut self, point: Coordinate) {
        self.min_lat = self.min_lat.min(point.latitude);
        self.max_lat = self.max_lat.max(point.latitude);
        self.min_lon = self.min_lon.min(point.longitude);
        self.max_lon = self.max_lon.max(point.longitude);
    }

    fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Fits a viewport around `points` using the default [`FitOptions`].
///
/// Returns `None` when no point has a valid coordinate.
///
/// # Example
/// ```
/// use terminals_geo::{fit_viewport, Coordinate};
///
/// let viewport = fit_viewport([Coordinate::new(10.0, 20.0), Coordinate::new(12.0, 24.0)]).unwrap();
/// assert_eq!(viewport.center, Coordinate::new(11.0, 22.0));
/// assert!((viewport.span.latitude_delta - 2.3).abs() < 1e-9);
/// assert!((viewport.span.longitude_delta - 4.6).abs() < 1e-9);
///
/// assert!(fit_viewport([Coordinate::new(95.0, 0.0)]).is_none());
/// ```
pub fn fit_viewport<I>(points: I) -> Option<Viewport>
where
    I: IntoIterator<Item = Coordinate>,
{
    fit_viewport_with(points, &FitOptions::default())
}

/// Fits a viewport around `points` with explicit options.
pub fn fit_viewport_with<I>(points: I, options: &FitOptions) -> Option<Viewport>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut valid = points.into_iter().filter(Coordinate::is_valid);

    let first = valid.next()?;
    let mut bounds = Bounds::at(first);
    let mut count = 1usize;

    for point in valid {
        bounds.extend(point);
        count += 1;
    }

    if count == 1 {
        return Some(Viewport::from_distance(
            first,
            options.single_point_meters,
            options.single_point_meters,
        ));
    }

    let clamp = |raw: f64| {
        (raw * options.padding_factor)
            .min(options.max_span_degrees)
            .max(options.min_span_degrees)
    };

    Some(Viewport::new(
        bounds.center(),
        Span::new(
            clamp(bounds.max_lat - bounds.min_lat),
            clamp(bounds.max_lon - bounds.min_lon),
        ),
    ))
}
