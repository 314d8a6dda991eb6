//! Icon command - resolve a pin type tag

use crate::context::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use terminals_core::{resolve_icon, PinType};

#[derive(Debug, Serialize)]
struct JsonIconOutput<'a> {
    tag: &'a str,
    pin_type: PinType,
    icon: &'static str,
}

/// Run icon command
pub fn run(ctx: &Context, tag: &str) -> Result<()> {
    let pin_type = PinType::from_tag(tag);
    let icon = resolve_icon(tag);

    if ctx.is_json() {
        let output = JsonIconOutput { tag, pin_type, icon };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", icon);
    if pin_type.tag() != tag {
        eprintln!(
            "{}",
            format!("'{}' is not a known pin type, using {}", tag, pin_type).dimmed()
        );
    }

    Ok(())
}
