//! Search commands - near, city, region

use crate::context::Context;
use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use terminals_cli::output::{
    format_coordinate, format_count, format_distance, format_viewport, terminal_table, Status,
};
use terminals_core::browse::SearchOutcome;
use terminals_core::city::CityDirectory;
use terminals_core::location::FixedLocation;
use terminals_geo::{Coordinate, Span, Viewport};

/// Run near command
pub fn near(ctx: &Context, lat: f64, lon: f64, radius: Option<f64>) -> Result<()> {
    let here = Coordinate::try_new(lat, lon)?;
    let browser = ctx.browser(ctx.load_source()?, FixedLocation::new(here), radius)?;

    let outcome = browser
        .search_from_current_location()?
        .ok_or_else(|| anyhow!("No location fix"))?;

    print_outcome(ctx, &format!("near {}", format_coordinate(&here)), &outcome)
}

/// Run city command
pub fn city(ctx: &Context, name: &str, radius: Option<f64>) -> Result<()> {
    terminals_telemetry::timed_span!("city_search");

    let source = ctx.load_source()?;
    let directory = ctx.city_index(&source)?;
    let browser = ctx.browser(source, FixedLocation::unavailable(), radius)?;

    if let Some(city) = directory.resolve(name) {
        if directory.derived_terminal_count(&city.name) == Some(1) {
            Status::warning(&format!(
                "{} has a single terminal and no configured city point; its own terminal \
                 sits at distance 0 and is not matched. Set data.cities_path to search \
                 from real city centers.",
                city.name
            ));
        }
    }

    let outcome = browser.search_from_city_name(&directory, name)?;
    print_outcome(ctx, &format!("around {}", name.trim()), &outcome)
}

/// Run region command
pub fn region(ctx: &Context, lat: f64, lon: f64, lat_delta: f64, lon_delta: f64) -> Result<()> {
    anyhow::ensure!(
        lat_delta >= 0.0 && lon_delta >= 0.0,
        "Region spans must be >= 0, got {} × {}",
        lat_delta,
        lon_delta
    );
    let region = Viewport::new(Coordinate::try_new(lat, lon)?, Span::new(lat_delta, lon_delta));
    let browser = ctx.browser(ctx.load_source()?, FixedLocation::unavailable(), None)?;

    match browser.search_visible_region(&region)? {
        Some(outcome) => print_outcome(ctx, &format!("in {}", format_viewport(&region)), &outcome),
        None if ctx.is_json() => {
            println!("null");
            Ok(())
        }
        None => {
            Status::warning(&format!(
                "Region too large to search (limit {} radius)",
                format_distance(browser.settings().max_region_radius_meters)
            ));
            Ok(())
        }
    }
}

fn print_outcome(ctx: &Context, label: &str, outcome: &SearchOutcome) -> Result<()> {
    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    Status::header(&format!(
        "Terminals within {} {}",
        format_distance(outcome.radius_meters),
        label
    ));
    println!();

    if outcome.is_empty() {
        println!("  {}", "No terminals found".dimmed());
        return Ok(());
    }

    let table = terminal_table(&outcome.terminals, &outcome.reference, console::colors_enabled());
    print!("{}", table.render(console::colors_enabled()));

    println!();
    println!(
        "  {}",
        format_count(outcome.terminals.len(), "terminal", "terminals").bold()
    );
    if let Some(viewport) = &outcome.viewport {
        println!("  {} {}", "Viewport:".dimmed(), format_viewport(viewport));
    }

    Ok(())
}
