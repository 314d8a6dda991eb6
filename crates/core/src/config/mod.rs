//! Configuration loading and schema definitions
//!
//! TOML configuration for data paths, search radii, viewport fitting, and
//! logging. Every field has a default, so a missing file is not an error.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
