// Migration run configuration (optional TOML file, overridden by CLI flags)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings for one migration run.
///
/// Everything here can come from a TOML file, from CLI flags, or both; flags
/// win. The snapshot path is the only required setting for a real run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MigrationConfig {
    /// Path to the source snapshot JSON file.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Output directory for target documents.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Run the whole migration in memory without writing anything.
    #[serde(default)]
    pub dry_run: bool,
}

impl MigrationConfig {
    /// Parse a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_str(&content).map_err(|e| match e {
            ConfigError::Toml { error, .. } => ConfigError::Toml {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse a config from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<string>".into(),
            error: e.to_string(),
        })
    }

    /// Layer CLI-provided values over the file-provided ones.
    pub fn merge_cli(
        mut self,
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        dry_run: bool,
    ) -> Self {
        if source.is_some() {
            self.source = source;
        }
        if output.is_some() {
            self.output = output;
        }
        if dry_run {
            self.dry_run = true;
        }
        self
    }
}

/// Config parsing errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("TOML parsing error in {path}: {error}")]
    Toml { path: PathBuf, error: String },
}
