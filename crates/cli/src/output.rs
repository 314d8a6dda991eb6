//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use console::measure_text_width;
use owo_colors::OwoColorize;
use terminals_core::TerminalRecord;
use terminals_geo::{Coordinate, Viewport};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(measure_text_width(message)));
    }
}

/// Format a distance in meters for display
pub fn format_distance(meters: f64) -> String {
    if meters < 1_000.0 {
        format!("{:.0} m", meters)
    } else if meters < 100_000.0 {
        format!("{:.1} km", meters / 1_000.0)
    } else {
        format!("{:.0} km", meters / 1_000.0)
    }
}

/// Format a coordinate as `lat, lon` with hemisphere letters
pub fn format_coordinate(coordinate: &Coordinate) -> String {
    let ns = if coordinate.latitude < 0.0 { 'S' } else { 'N' };
    let ew = if coordinate.longitude < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.4}°{}, {:.4}°{}",
        coordinate.latitude.abs(),
        ns,
        coordinate.longitude.abs(),
        ew
    )
}

/// Format a viewport as center plus span
pub fn format_viewport(viewport: &Viewport) -> String {
    format!(
        "{} (span {:.4}° × {:.4}°)",
        format_coordinate(&viewport.center),
        viewport.span.latitude_delta,
        viewport.span.longitude_delta
    )
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Plain-text table with width-aware column padding
///
/// Cells may carry ANSI styling; widths are measured on visible text.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with a two-space indent and two spaces between columns
    pub fn render(&self, color: bool) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .chain(std::iter::once(&self.headers[col]))
                    .map(|cell| measure_text_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        let header = render_line(&self.headers, &widths);
        let rule = "─".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));
        if color {
            out.push_str(&format!("  {}\n  {}\n", header.dimmed(), rule.dimmed()));
        } else {
            out.push_str(&format!("  {}\n  {}\n", header, rule));
        }

        for row in &self.rows {
            out.push_str("  ");
            out.push_str(&render_line(row, &widths));
            out.push('\n');
        }

        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if i + 1 < widths.len() {
            line.push_str(&" ".repeat(width.saturating_sub(measure_text_width(cell))));
        }
    }
    line.trim_end().to_string()
}

/// Build the results table for a radius search
///
/// Columns: name, code (IATA, else ICAO), pin type, city, country, and
/// distance from `reference`.
pub fn terminal_table(terminals: &[TerminalRecord], reference: &Coordinate, color: bool) -> Table {
    let mut table = Table::new(["Name", "Code", "Type", "City", "Country", "Distance"]);

    for record in terminals {
        let code = if record.iata.is_empty() {
            record.icao.clone()
        } else {
            record.iata.clone()
        };
        let distance = format_distance(record.distance_meters(reference));

        let (name, code) = if color {
            (record.name.bold().to_string(), code.cyan().to_string())
        } else {
            (record.name.clone(), code)
        };

        table.push_row(vec![
            name,
            code,
            record.pin_type.tag().to_string(),
            record.city.clone(),
            record.country.clone(),
            distance,
        ]);
    }

    table
}
