//! Error types for the Terminals core.
//!
//! The search and viewport functions never fail; errors only come from the
//! edges: reading seed and config files, resolving city names, and custom
//! data sources.

use serde::{Deserialize, Serialize};
use std::fmt;
use terminals_geo::GeoError;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, TerminalsError>;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // IO errors (2xxx)
    /// A file could not be read
    IoError = 2000,

    // Configuration errors (3xxx)
    /// Config parse or validation failure
    ConfigError = 3000,

    // Data errors (4xxx)
    /// Malformed seed document
    SeedParseError = 4001,
    /// Terminal source failure
    SourceError = 4002,
    /// City name not in the directory
    UnknownCity = 4003,

    // Geo errors (10xxx)
    /// Invalid coordinate or GeoJSON
    GeoError = 10000,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            4 => "Data",
            10 => "Geo",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Errors raised around the terminal search core.
#[derive(Debug, Error)]
pub enum TerminalsError {
    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid terminal JSON
    #[error("Invalid seed document: {0}")]
    Seed(#[from] serde_json::Error),

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A data source failed to produce its records
    #[error("Terminal source error: {0}")]
    Source(String),

    /// A city name did not resolve through the directory
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Coordinate or GeoJSON error
    #[error(transparent)]
    Geo(#[from] GeoError),
}

impl TerminalsError {
    /// Wraps an IO error with the path that produced it.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::IoError,
            Self::Seed(_) => ErrorCode::SeedParseError,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Source(_) => ErrorCode::SourceError,
            Self::UnknownCity(_) => ErrorCode::UnknownCity,
            Self::Geo(_) => ErrorCode::GeoError,
        }
    }
}
