//! Core search logic for the Terminals map
//!
//! This crate provides everything behind the map screen except drawing:
//!
//! - **Terminal records**: the stored terminal attributes and pin types
//! - **Radius search**: great-circle filtering sorted by name
//! - **Seed import**: lenient parsing of the JSON terminal export
//! - **City directory**: name lookup and autocomplete
//! - **Search flows**: city, current-location, and visible-region searches
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust
//! use terminals_core::prelude::*;
//!
//! let source = InMemoryTerminalSource::new(vec![
//!     TerminalRecord::new("Narita", Coordinate::new(35.772, 140.3929)),
//!     TerminalRecord::new("Haneda", Coordinate::new(35.5494, 139.7798)),
//! ]);
//! let browser = TerminalBrowser::new(source, FixedLocation::unavailable());
//!
//! let tokyo = SelectedCity::new("Tokyo", Coordinate::new(35.6762, 139.6503));
//! let outcome = browser.search_from_city(&tokyo).unwrap();
//!
//! assert_eq!(outcome.terminals.len(), 2);
//! assert_eq!(outcome.terminals[0].name, "Haneda");
//! assert!(outcome.viewport.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod annotation;
pub mod browse;
pub mod city;
pub mod config;
pub mod error;
pub mod location;
pub mod search;
pub mod seed;
pub mod source;
pub mod terminal;

pub use error::{ErrorCode, Result, TerminalsError};
pub use search::radius_search;
pub use terminal::{resolve_icon, PinType, TerminalRecord};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::annotation::{annotations_for, Annotation};
    pub use crate::browse::{SearchOutcome, SearchSettings, TerminalBrowser};
    pub use crate::city::{CityDirectory, CityIndex, SelectedCity};
    pub use crate::config::Config;
    pub use crate::error::{ErrorCode, Result, TerminalsError};
    pub use crate::location::{FixedLocation, LocationProvider};
    pub use crate::search::radius_search;
    pub use crate::seed::{load_seed, parse_seed};
    pub use crate::source::{InMemoryTerminalSource, TerminalSource};
    pub use crate::terminal::{resolve_icon, PinType, TerminalRecord};
    pub use terminals_geo::{Coordinate, Span, Viewport};
}
