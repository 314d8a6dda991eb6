//! GeoJSON point parsing.
//!
//! Terminal locations are stored as `{"type": "Point", "coordinates": [lng, lat]}`.
//! The array is longitude first, the reverse of [`Coordinate`]'s field order.

use crate::{Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};

/// GeoJSON Point format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonPoint {
    /// Should be "Point"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub point_type: Option<String>,
    /// [longitude, latitude] array
    pub coordinates: [f64; 2],
}

impl GeoJsonPoint {
    /// Builds a point from a coordinate, writing longitude first.
    pub fn from_coordinate(coord: &Coordinate) -> Self {
        Self {
            point_type: Some("Point".to_string()),
            coordinates: [coord.longitude, coord.latitude],
        }
    }

    /// Converts to a coordinate, swapping the array back into lat/lon order.
    pub fn to_coordinate(&self) -> Coordinate {
        let [lng, lat] = self.coordinates;
        Coordinate::new(lat, lng)
    }
}

/// Parse a GeoJSON point from a JSON value.
///
/// The `type` member is optional; only `coordinates` is required. Extra
/// array members (altitude) are ignored.
///
/// # Example
/// ```
/// use terminals_geo::parse_geojson_point;
/// use serde_json::json;
///
/// let value = json!({"type": "Point", "coordinates": [-73.7781, 40.6413]});
/// let coord = parse_geojson_point(&value).unwrap();
/// assert!((coord.latitude - 40.6413).abs() < 0.0001);
/// assert!((coord.longitude + 73.7781).abs() < 0.0001);
/// ```
pub fn parse_geojson_point(value: &serde_json::Value) -> Result<Coordinate> {
    if value.is_null() {
        return Err(GeoError::InvalidGeoJson("location is null".into()));
    }

    if let Some(kind) = value.get("type").and_then(|t| t.as_str()) {
        if kind != "Point" {
            return Err(GeoError::InvalidGeoJson(format!("Expected Point, got: {}", kind)));
        }
    }

    let coords = value
        .get("coordinates")
        .and_then(|c| c.as_array())
        .ok_or_else(|| GeoError::InvalidGeoJson("Missing coordinates array".into()))?;

    if coords.len() < 2 {
        return Err(GeoError::InvalidGeoJson(format!(
            "Expected 2 coordinates, got {}",
            coords.len()
        )));
    }

    let lng = coords[0]
        .as_f64()
        .ok_or_else(|| GeoError::InvalidGeoJson(format!("Invalid longitude: {}", coords[0])))?;
    let lat = coords[1]
        .as_f64()
        .ok_or_else(|| GeoError::InvalidGeoJson(format!("Invalid latitude: {}", coords[1])))?;

    Ok(Coordinate::new(lat, lng))
}
