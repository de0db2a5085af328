//! Report output files

use crate::domain::ReportKind;
use crate::error::{PlanError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// A rendered report ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub kind: ReportKind,
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Writes rendered reports to their target paths
#[derive(Debug, Clone)]
pub struct ReportFiles {
    config: Config,
}

impl ReportFiles {
    pub fn new(config: Config) -> Self {
        ReportFiles { config }
    }

    pub fn path_for(&self, kind: ReportKind) -> PathBuf {
        self.config.report_path(kind)
    }

    /// Write one report, creating parent directories if needed
    pub fn write(&self, report: &RenderedReport) -> Result<()> {
        write_file(&report.path, &report.content)?;
        tracing::info!(
            report = report.kind.label(),
            path = %report.path.display(),
            bytes = report.content.len(),
            "Wrote report"
        );
        Ok(())
    }

    /// Write every report in order, stopping at the first failure
    pub fn write_all(&self, reports: &[RenderedReport]) -> Result<()> {
        for report in reports {
            self.write(report)?;
        }
        Ok(())
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content).map_err(PlanError::Io)
}
