//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Ground length of one degree of latitude on the mean sphere, in meters.
pub const METERS_PER_DEGREE_LATITUDE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use terminals_geo::{haversine_distance, Coordinate};
///
/// let jfk = Coordinate::new(40.6413, -73.7781);
/// let lhr = Coordinate::new(51.4700, -0.4543);
///
/// let distance = haversine_distance(&jfk, &lhr);
/// assert!((distance - 5540.0).abs() < 20.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
///
/// Identical coordinates yield exactly `0.0`.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Ground length of one degree of longitude at `latitude`, in meters.
///
/// Shrinks toward zero at the poles.
#[inline]
pub fn meters_per_degree_longitude(latitude: f64) -> f64 {
    METERS_PER_DEGREE_LATITUDE * latitude.to_radians().cos()
}
