//! Shared state for one CLI invocation

use crate::OutputFormat;
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use terminals_core::browse::TerminalBrowser;
use terminals_core::city::CityIndex;
use terminals_core::config::Config;
use terminals_core::location::FixedLocation;
use terminals_core::source::InMemoryTerminalSource;
use terminals_telemetry::Timer;

pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
    seed_override: Option<PathBuf>,
}

impl Context {
    pub fn new(config: Config, seed_override: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            seed_override,
        }
    }

    pub fn seed_path(&self) -> PathBuf {
        self.seed_override
            .clone()
            .unwrap_or_else(|| self.config.seed_path())
    }

    pub fn load_source(&self) -> Result<InMemoryTerminalSource> {
        let path = self.seed_path();
        let timer = Timer::start("load_seed");
        let source = InMemoryTerminalSource::from_seed_file(&path)
            .with_context(|| format!("Could not load terminals from {}", path.display()))?;
        timer.stop();
        Ok(source)
    }

    /// Browser over `source`, with `radius` replacing the configured radius.
    pub fn browser(
        &self,
        source: InMemoryTerminalSource,
        location: FixedLocation,
        radius: Option<f64>,
    ) -> Result<TerminalBrowser<InMemoryTerminalSource, FixedLocation>> {
        let mut settings = self.config.schema.search_settings();
        if let Some(radius) = radius {
            anyhow::ensure!(radius >= 0.0, "Radius must be >= 0, got {}", radius);
            settings.radius_meters = radius;
        }

        Ok(TerminalBrowser::new(source, location).with_settings(settings))
    }

    /// City list from the configured file, or derived from the terminals.
    pub fn city_index(&self, source: &InMemoryTerminalSource) -> Result<CityIndex> {
        match self.config.cities_path() {
            Some(path) => CityIndex::load(&path)
                .with_context(|| format!("Could not load cities from {}", path.display())),
            None => Ok(CityIndex::from_terminals(source.records())),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
