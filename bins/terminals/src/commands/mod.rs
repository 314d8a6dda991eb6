//! CLI command implementations

pub mod cities;
pub mod icon;
pub mod search;
