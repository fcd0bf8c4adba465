use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StackError};
use crate::exchange::{default_filename, DEFAULT_FILE_PREFIX};
use crate::transport::FsTransport;

/// Project-level configuration, loaded from `.iiotstack.toml`.
///
/// Every field has a sensible default so the tool works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) exports are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Prefix of the dated export file name.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Whether an export may replace an existing file.
    #[serde(default)]
    pub overwrite: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_filename_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            filename_prefix: default_filename_prefix(),
            overwrite: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".iiotstack.toml";

    /// Load settings from `<project_dir>/.iiotstack.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            StackError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.filename_prefix.is_empty() {
            return Err(StackError::ConfigError(
                "filename_prefix cannot be empty".into(),
            ));
        }

        Ok(settings)
    }

    /// Resolve the export directory against `project_dir`.
    pub fn export_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.export_dir)
    }

    /// Dated export file name for `date` with the configured prefix.
    pub fn export_filename(&self, date: chrono::NaiveDate) -> String {
        default_filename(&self.filename_prefix, date)
    }

    /// Build the filesystem transport these settings describe.
    pub fn transport(&self, project_dir: &Path) -> FsTransport {
        FsTransport::new(self.export_path(project_dir)).with_overwrite(self.overwrite)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
