//! Cities command - autocomplete over the city directory

use crate::context::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use terminals_cli::output::{format_count, Status};
use terminals_core::city::CityDirectory;

/// Run cities command
pub fn run(ctx: &Context, query: Option<&str>) -> Result<()> {
    let source = ctx.load_source()?;
    let directory = ctx.city_index(&source)?;
    let names = directory.autocomplete(query.unwrap_or(""));

    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        Status::warning("No matching cities");
        return Ok(());
    }

    for name in &names {
        println!("  {}", name);
    }
    println!();
    println!("  {}", format_count(names.len(), "city", "cities").dimmed());

    Ok(())
}
