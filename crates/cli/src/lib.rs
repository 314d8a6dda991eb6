//! CLI utilities for the Terminals tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Distance and coordinate formatting
//! - Terminal tables

#![warn(missing_docs)]

pub mod output;
