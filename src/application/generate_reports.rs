//! Generate reports use case
//!
//! Orchestrates the full run: read the document, build the plan, render the
//! three reports, then write them out.

use crate::application::load_plan::PlanLoader;
use crate::domain::{ReportKind, ReportRenderer, TrainingPlan};
use crate::error::Result;
use crate::infrastructure::{Config, RenderedReport, ReportFiles, XmlElement};
use std::path::{Path, PathBuf};

/// Service for turning a plan document into report files
pub struct GenerateReportsService {
    renderer: ReportRenderer,
    files: ReportFiles,
}

impl GenerateReportsService {
    /// Create new generate reports service
    pub fn new(config: Config) -> Self {
        GenerateReportsService {
            renderer: ReportRenderer::new(config.html_day_cells),
            files: ReportFiles::new(config),
        }
    }

    /// Read and validate the document without writing anything
    pub fn check(&self, input: &Path) -> Result<TrainingPlan> {
        tracing::info!(input = %input.display(), "Reading plan document");
        let root = XmlElement::load_from_path(input)?;
        PlanLoader::load(&root)
    }

    /// Execute the full run
    ///
    /// Returns the written report kinds with their paths, in write order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document cannot be read or is not well-formed XML
    /// - A required element is missing or a field fails validation
    /// - A report file cannot be written
    ///
    /// All reports are rendered before the first file is written, so a load
    /// failure leaves no output behind.
    pub fn execute(&self, input: &Path) -> Result<Vec<(ReportKind, PathBuf)>> {
        // 1. Load and validate the whole plan
        let plan = self.check(input)?;

        // 2. Render every report into memory
        let reports = self.render_all(&plan)?;

        // 3. Write report files
        self.files.write_all(&reports)?;

        Ok(reports
            .into_iter()
            .map(|report| (report.kind, report.path))
            .collect())
    }

    /// Render all three reports for a plan
    pub fn render_all(&self, plan: &TrainingPlan) -> Result<Vec<RenderedReport>> {
        ReportKind::ALL
            .iter()
            .map(|&kind| -> Result<RenderedReport> {
                Ok(RenderedReport {
                    kind,
                    path: self.files.path_for(kind),
                    content: self.renderer.render_to_vec(kind, plan)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::infrastructure::ConfigOverrides;
    use std::fs;
    use tempfile::TempDir;

    const PLAN: &str = "<data><name>Base</name><weeks><week><wload>Low</wload><records>\
        <record><date>01-January-2024</date><title>Easy run</title>\
        <done>yes</done><distance>6.0</distance><load>Low</load></record>\
        </records></week></weeks></data>";

    fn service(temp: &TempDir) -> GenerateReportsService {
        GenerateReportsService::new(Config::default().with_overrides(ConfigOverrides {
            output_dir: Some(temp.path().join("out")),
            ..ConfigOverrides::default()
        }))
    }

    #[test]
    fn test_execute_writes_three_reports() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("plan.xml");
        fs::write(&input, PLAN).unwrap();

        let written = service(&temp).execute(&input).unwrap();
        let kinds: Vec<ReportKind> = written.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, ReportKind::ALL.to_vec());

        let out = temp.path().join("out");
        let summary = fs::read_to_string(out.join("summary.txt")).unwrap();
        assert_eq!(
            summary,
            "Week 1, load Low, date Monday, 01-January-2024, 1 sessions.\n\
             \tTotal distance: 6.0k/3.73m\n"
        );
        assert!(fs::read_to_string(out.join("detailed.txt"))
            .unwrap()
            .contains("Easy run"));
        assert!(fs::read_to_string(out.join("detailed.html"))
            .unwrap()
            .contains("<h2>Base</h2>"));
    }

    #[test]
    fn test_execute_failure_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("plan.xml");
        fs::write(&input, PLAN.replace("<title>Easy run</title>", "")).unwrap();

        let result = service(&temp).execute(&input);
        assert!(matches!(result, Err(PlanError::Structural(_))));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_check_does_not_write() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("plan.xml");
        fs::write(&input, PLAN).unwrap();

        let plan = service(&temp).check(&input).unwrap();
        assert_eq!(plan.session_count(), 1);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = service(&temp).execute(&temp.path().join("nope.xml"));
        assert!(matches!(result, Err(PlanError::Io(_))));
    }
}
