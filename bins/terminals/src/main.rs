//! Terminals CLI - transport terminal search
//!
//! Finds airports, seaports, and stations around a city, a location, or a
//! visible map region, and frames the results in a map viewport.

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use terminals_core::config::Config;
use terminals_telemetry::TelemetryConfig;

mod commands;
mod context;

use commands::{cities, icon, search};
use context::Context;

/// Transport terminal search
#[derive(Parser)]
#[command(name = "terminals")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, env = "TERMINALS_CONFIG")]
    config: Option<PathBuf>,

    /// Seed file with the terminal collection (overrides the config)
    #[arg(short, long, global = true)]
    seed: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tables
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Search around a location, as if it were the device position
    Near {
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Search radius in meters (defaults to the configured radius)
        #[arg(short, long)]
        radius: Option<f64>,
    },

    /// Search around a city
    City {
        /// City name (case-insensitive)
        name: String,

        /// Search radius in meters (defaults to the configured radius)
        #[arg(short, long)]
        radius: Option<f64>,
    },

    /// Search the visible part of a map
    Region {
        /// Latitude of the region center
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the region center
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// North-south span in degrees
        #[arg(long)]
        lat_delta: f64,

        /// East-west span in degrees
        #[arg(long)]
        lon_delta: f64,
    },

    /// List cities matching a query
    Cities {
        /// Case-insensitive substring (lists every city if omitted)
        query: Option<String>,
    },

    /// Show the map icon for a pin type tag
    Icon {
        /// Pin type tag, e.g. SeaPort
        tag: String,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.logging.level.clone()
    };
    terminals_telemetry::init_with_config(TelemetryConfig::new(level, config.schema.logging.json))?;

    let ctx = Context::new(config, cli.seed, cli.format);

    match cli.command {
        Commands::Near { lat, lon, radius } => search::near(&ctx, lat, lon, radius),
        Commands::City { name, radius } => search::city(&ctx, &name, radius),
        Commands::Region {
            lat,
            lon,
            lat_delta,
            lon_delta,
        } => search::region(&ctx, lat, lon, lat_delta, lon_delta),
        Commands::Cities { query } => cities::run(&ctx, query.as_deref()),
        Commands::Icon { tag } => icon::run(&ctx, &tag),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
