//! Radius search over terminal records.
//!
//! A record matches when its great-circle distance `d` to the reference point
//! satisfies `0 < d <= radius`. A record sitting exactly on the reference point
//! is not a match. Records with out-of-range coordinates never match.

use crate::TerminalRecord;
use terminals_geo::Coordinate;

/// Returns true when `record` belongs in a radius search around `reference`.
#[inline]
pub fn is_within_radius(record: &TerminalRecord, reference: &Coordinate, radius_meters: f64) -> bool {
    if !record.has_valid_location() {
        return false;
    }

    let meters = record.distance_meters(reference);
    meters > 0.0 && meters <= radius_meters
}

/// Finds every record within `radius_meters` of `reference`, sorted by name.
///
/// Sorting is byte-wise on `name` and stable, so equal names keep their input
/// order. The input is never modified; matches are cloned into the result.
///
/// # Example
/// ```
/// use terminals_core::{radius_search, TerminalRecord};
/// use terminals_geo::Coordinate;
///
/// let records = vec![
///     TerminalRecord::new("A", Coordinate::new(40.0, -73.0)),
///     TerminalRecord::new("B", Coordinate::new(40.001, -73.001)),
///     TerminalRecord::new("C", Coordinate::new(10.0, 10.0)),
/// ];
///
/// let found = radius_search(&records, &Coordinate::new(40.0, -73.0), 1_000.0);
/// let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["B"]);
/// ```
pub fn radius_search(
    records: &[TerminalRecord],
    reference: &Coordinate,
    radius_meters: f64,
) -> Vec<TerminalRecord> {
    #[cfg(feature = "parallel")]
    let mut matches: Vec<TerminalRecord> = {
        use rayon::prelude::*;
        records
            .par_iter()
            .filter(|record| is_within_radius(record, reference, radius_meters))
            .cloned()
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut matches: Vec<TerminalRecord> = records
        .iter()
        .filter(|record| is_within_radius(record, reference, radius_meters))
        .cloned()
        .collect();

    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}
