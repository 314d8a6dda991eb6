//! Configuration file loading

use super::schema::ConfigSchema;
use crate::{Result, TerminalsError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// tried and defaults are used if none exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        let config = Self {
            schema,
            path: config_path,
        };
        config.validate()?;

        debug!(path = ?config.path, "Configuration loaded");
        Ok(config)
    }

    /// Validate the loaded settings
    pub fn validate(&self) -> Result<()> {
        self.schema.validate()
    }

    /// Resolves a configured path. Relative paths are taken from the
    /// directory of the config file, or the working directory without one.
    pub fn resolve_path(&self, configured: &str) -> PathBuf {
        let configured = Path::new(configured);
        if configured.is_absolute() {
            return configured.to_path_buf();
        }

        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(configured),
            _ => configured.to_path_buf(),
        }
    }

    /// Seed path, resolved.
    pub fn seed_path(&self) -> PathBuf {
        self.resolve_path(&self.schema.data.seed_path)
    }

    /// City list path, resolved, if configured.
    pub fn cities_path(&self) -> Option<PathBuf> {
        self.schema
            .data
            .cities_path
            .as_deref()
            .map(|p| self.resolve_path(p))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(".terminals.toml"),
        PathBuf::from("terminals.toml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("terminals").join("terminals.toml"));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TerminalsError::io(path.display().to_string(), e))?;

    toml::from_str(&content).map_err(|e| {
        TerminalsError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}
