//! Configuration management

use crate::domain::ReportKind;
use crate::error::{PlanError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "trainplan.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory relative report file names resolve against
    pub output_dir: PathBuf,
    pub summary_file: PathBuf,
    pub detail_file: PathBuf,
    pub html_file: PathBuf,
    /// Place sessions into weekday cells of the HTML tables
    pub html_day_cells: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("."),
            summary_file: PathBuf::from("summary.txt"),
            detail_file: PathBuf::from("detailed.txt"),
            html_file: PathBuf::from("detailed.html"),
            html_day_cells: true,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub summary_file: Option<PathBuf>,
    pub detail_file: Option<PathBuf>,
    pub html_file: Option<PathBuf>,
}

impl Config {
    /// Load config from an explicit file, which must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlanError::Config(format!("Config file not found: {}", path.display()))
            } else {
                PlanError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(PlanError::TomlDeserialize)
    }

    /// Load trainplan.toml from the given directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "Loading config");
            Self::load_from_file(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolve the config for a run: explicit file, else the working directory
    pub fn resolve(explicit: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_from_dir(&std::env::current_dir()?)?,
        };
        Ok(config.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(file) = overrides.summary_file {
            self.summary_file = file;
        }
        if let Some(file) = overrides.detail_file {
            self.detail_file = file;
        }
        if let Some(file) = overrides.html_file {
            self.html_file = file;
        }
        self
    }

    /// Target path for a report; absolute file names are used as-is
    pub fn report_path(&self, kind: ReportKind) -> PathBuf {
        let file = match kind {
            ReportKind::Summary => &self.summary_file,
            ReportKind::DetailedText => &self.detail_file,
            ReportKind::DetailedHtml => &self.html_file,
        };
        self.output_dir.join(file)
    }
}
