//! Report rendering
//!
//! Three independent renderings of a [`TrainingPlan`]: a weekly summary, a
//! detailed text log and an HTML report. Each writes to a caller-provided
//! target and never opens or closes it.

pub mod html;
pub mod text;

use crate::domain::TrainingPlan;
use std::io::{self, Write};

pub use text::{format_km, format_long_date, format_miles, KM_PER_MILE};

/// The three report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Summary,
    DetailedText,
    DetailedHtml,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Summary,
        ReportKind::DetailedText,
        ReportKind::DetailedHtml,
    ];

    /// Label used in console output and logs
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::DetailedText => "detailed log",
            ReportKind::DetailedHtml => "HTML report",
        }
    }
}

/// Renders a plan into any of the report kinds
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    html_day_cells: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        ReportRenderer {
            html_day_cells: true,
        }
    }
}

impl ReportRenderer {
    pub fn new(html_day_cells: bool) -> Self {
        ReportRenderer { html_day_cells }
    }

    pub fn summary<W: Write>(&self, plan: &TrainingPlan, out: &mut W) -> io::Result<()> {
        text::write_summary(plan, out)
    }

    pub fn detailed_text<W: Write>(&self, plan: &TrainingPlan, out: &mut W) -> io::Result<()> {
        text::write_detailed(plan, out)
    }

    pub fn detailed_html<W: Write>(&self, plan: &TrainingPlan, out: &mut W) -> io::Result<()> {
        html::write_html(plan, self.html_day_cells, out)
    }

    pub fn render<W: Write>(
        &self,
        kind: ReportKind,
        plan: &TrainingPlan,
        out: &mut W,
    ) -> io::Result<()> {
        match kind {
            ReportKind::Summary => self.summary(plan, out),
            ReportKind::DetailedText => self.detailed_text(plan, out),
            ReportKind::DetailedHtml => self.detailed_html(plan, out),
        }
    }

    /// Render a report into memory
    pub fn render_to_vec(&self, kind: ReportKind, plan: &TrainingPlan) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render(kind, plan, &mut buf)?;
        Ok(buf)
    }
}
