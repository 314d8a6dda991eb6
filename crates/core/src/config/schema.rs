//! Configuration schema definitions

use crate::browse::{SearchSettings, DEFAULT_SEARCH_RADIUS_M, MAX_REGION_SEARCH_RADIUS_M};
use crate::{Result, TerminalsError};
use serde::{Deserialize, Serialize};
use terminals_geo::viewport::{
    MAX_SPAN_DEGREES, MIN_SPAN_DEGREES, PADDING_FACTOR, SINGLE_POINT_METERS,
};
use terminals_geo::FitOptions;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// `[data]`
    #[serde(default)]
    pub data: DataConfig,

    /// `[search]`
    #[serde(default)]
    pub search: SearchConfig,

    /// `[viewport]`
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// `[logging]`
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Rejects values the search core cannot work with.
    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if is_negative_or_nan(search.radius_meters) {
            return Err(TerminalsError::Config(format!(
                "search.radius_meters must be >= 0, got {}",
                search.radius_meters
            )));
        }
        if is_negative_or_nan(search.max_region_radius_meters) {
            return Err(TerminalsError::Config(format!(
                "search.max_region_radius_meters must be >= 0, got {}",
                search.max_region_radius_meters
            )));
        }

        let viewport = &self.viewport;
        if viewport.padding_factor.is_nan() || viewport.padding_factor < 1.0 {
            return Err(TerminalsError::Config(format!(
                "viewport.padding_factor must be >= 1, got {}",
                viewport.padding_factor
            )));
        }
        if viewport.min_span_degrees.is_nan()
            || viewport.min_span_degrees <= 0.0
            || viewport.min_span_degrees > viewport.max_span_degrees
        {
            return Err(TerminalsError::Config(format!(
                "viewport.min_span_degrees ({}) must be > 0 and <= max_span_degrees ({})",
                viewport.min_span_degrees, viewport.max_span_degrees
            )));
        }
        if viewport.max_span_degrees.is_nan() || viewport.max_span_degrees > MAX_SPAN_DEGREES {
            return Err(TerminalsError::Config(format!(
                "viewport.max_span_degrees cannot exceed {}, got {}",
                MAX_SPAN_DEGREES, viewport.max_span_degrees
            )));
        }
        if viewport.single_point_meters.is_nan() || viewport.single_point_meters <= 0.0 {
            return Err(TerminalsError::Config(format!(
                "viewport.single_point_meters must be > 0, got {}",
                viewport.single_point_meters
            )));
        }

        Ok(())
    }

    /// Search settings derived from the `[search]` and `[viewport]` tables.
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            radius_meters: self.search.radius_meters,
            max_region_radius_meters: self.search.max_region_radius_meters,
            fit: self.viewport.fit_options(),
        }
    }
}

fn is_negative_or_nan(value: f64) -> bool {
    value.is_nan() || value < 0.0
}

/// Where terminal and city data live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Seed document with the terminal collection
    #[serde(default = "default_seed_path")]
    pub seed_path: String,

    /// Optional city list; cities are derived from terminals when absent
    #[serde(default)]
    pub cities_path: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_path: default_seed_path(),
            cities_path: None,
        }
    }
}

fn default_seed_path() -> String {
    "terminals.json".to_string()
}

/// Radius search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius for city and current-location searches (meters)
    #[serde(default = "default_radius_meters")]
    pub radius_meters: f64,

    /// Region searches at or above this radius are skipped (meters)
    #[serde(default = "default_max_region_radius_meters")]
    pub max_region_radius_meters: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_meters: default_radius_meters(),
            max_region_radius_meters: default_max_region_radius_meters(),
        }
    }
}

fn default_radius_meters() -> f64 {
    DEFAULT_SEARCH_RADIUS_M
}

fn default_max_region_radius_meters() -> f64 {
    MAX_REGION_SEARCH_RADIUS_M
}

/// Viewport fitting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Multiplier applied to the bounding box of the matches
    #[serde(default = "default_padding_factor")]
    pub padding_factor: f64,

    /// Smallest span on either axis (degrees)
    #[serde(default = "default_min_span_degrees")]
    pub min_span_degrees: f64,

    /// Largest span on either axis (degrees)
    #[serde(default = "default_max_span_degrees")]
    pub max_span_degrees: f64,

    /// Box size around a lone match (meters)
    #[serde(default = "default_single_point_meters")]
    pub single_point_meters: f64,
}

impl ViewportConfig {
    /// Options for `fit_viewport_with`.
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            padding_factor: self.padding_factor,
            min_span_degrees: self.min_span_degrees,
            max_span_degrees: self.max_span_degrees,
            single_point_meters: self.single_point_meters,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding_factor: default_padding_factor(),
            min_span_degrees: default_min_span_degrees(),
            max_span_degrees: default_max_span_degrees(),
            single_point_meters: default_single_point_meters(),
        }
    }
}

fn default_padding_factor() -> f64 {
    PADDING_FACTOR
}

fn default_min_span_degrees() -> f64 {
    MIN_SPAN_DEGREES
}

fn default_max_span_degrees() -> f64 {
    MAX_SPAN_DEGREES
}

fn default_single_point_meters() -> f64 {
    SINGLE_POINT_METERS
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
