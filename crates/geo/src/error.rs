//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Coordinate outside the valid latitude/longitude ranges
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Value is not a GeoJSON point
    #[error("Invalid GeoJSON point: {0}")]
    InvalidGeoJson(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with terminals-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Coordinate outside the valid ranges
    InvalidCoordinate = 10001,
    /// Value is not a GeoJSON point
    InvalidGeoJson = 10002,
    /// JSON parsing error
    JsonParsing = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::InvalidGeoJson(_) => GeoErrorCode::InvalidGeoJson,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}
