//! Terminal data sources.
//!
//! The search core never owns the terminal collection. It reads it through
//! [`TerminalSource`], so an HTTP client, an embedded database, or a seed file
//! loaded into memory are interchangeable.

use crate::search::radius_search;
use crate::seed::load_seed;
use crate::{Result, TerminalRecord};
use std::path::Path;
use terminals_geo::Coordinate;
use tracing::info;

/// Read access to the terminal collection.
pub trait TerminalSource {
    /// Every terminal in the collection.
    fn all_terminals(&self) -> Result<Vec<TerminalRecord>>;

    /// Terminals within `radius_meters` of `reference`, sorted by name.
    ///
    /// The default runs [`radius_search`] over [`all_terminals`](Self::all_terminals).
    /// Sources that can pre-filter (a spatial index, a remote query) may
    /// override it, but must return the same records in the same order.
    fn search(&self, reference: &Coordinate, radius_meters: f64) -> Result<Vec<TerminalRecord>> {
        Ok(radius_search(&self.all_terminals()?, reference, radius_meters))
    }
}

impl<T: TerminalSource + ?Sized> TerminalSource for &T {
    fn all_terminals(&self) -> Result<Vec<TerminalRecord>> {
        (**self).all_terminals()
    }

    fn search(&self, reference: &Coordinate, radius_meters: f64) -> Result<Vec<TerminalRecord>> {
        (**self).search(reference, radius_meters)
    }
}

/// An owned, in-memory terminal collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTerminalSource {
    records: Vec<TerminalRecord>,
}

impl InMemoryTerminalSource {
    /// Wraps an existing record set.
    pub fn new(records: Vec<TerminalRecord>) -> Self {
        Self { records }
    }

    /// Loads the collection from a seed file.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let records = load_seed(path)?;
        info!(path = %path.display(), count = records.len(), "Loaded terminal seed");
        Ok(Self::new(records))
    }

    /// Borrowed view of the records.
    pub fn records(&self) -> &[TerminalRecord] {
        &self.records
    }

    /// Number of records, valid or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TerminalSource for InMemoryTerminalSource {
    fn all_terminals(&self) -> Result<Vec<TerminalRecord>> {
        Ok(self.records.clone())
    }

    fn search(&self, reference: &Coordinate, radius_meters: f64) -> Result<Vec<TerminalRecord>> {
        Ok(radius_search(&self.records, reference, radius_meters))
    }
}

impl From<Vec<TerminalRecord>> for InMemoryTerminalSource {
    fn from(records: Vec<TerminalRecord>) -> Self {
        Self::new(records)
    }
}
