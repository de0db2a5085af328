//! Output formatting utilities

use crate::domain::{ReportKind, TrainingPlan};
use std::path::PathBuf;

/// One line per written report
pub fn format_written_reports(written: &[(ReportKind, PathBuf)]) -> String {
    let mut output = String::new();
    for (kind, path) in written {
        output.push_str(&format!("Wrote {}: {}\n", kind.label(), path.display()));
    }
    output
}

/// Result line for `--check`
pub fn format_check_result(plan: &TrainingPlan) -> String {
    format!(
        "Plan '{}' is valid: {} weeks, {} sessions",
        plan.name(),
        plan.week_count(),
        plan.session_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::parse_multi_token;
    use crate::domain::{SessionRecord, Week};

    #[test]
    fn test_format_written_reports() {
        let written = vec![
            (ReportKind::Summary, PathBuf::from("out/summary.txt")),
            (ReportKind::DetailedHtml, PathBuf::from("out/detailed.html")),
        ];

        let output = format_written_reports(&written);
        assert_eq!(
            output,
            "Wrote summary: out/summary.txt\nWrote HTML report: out/detailed.html\n"
        );
    }

    #[test]
    fn test_format_written_reports_empty() {
        assert_eq!(format_written_reports(&[]), "");
    }

    #[test]
    fn test_format_check_result() {
        let mut week = Week::new(parse_multi_token("Low").unwrap());
        week.add_session(SessionRecord::from_text("01-January-2024", "Run").unwrap());
        week.add_session(SessionRecord::from_text("02-January-2024", "Swim").unwrap());
        let mut plan = TrainingPlan::new("Base");
        plan.add_week(week);

        assert_eq!(
            format_check_result(&plan),
            "Plan 'Base' is valid: 1 weeks, 2 sessions"
        );
    }
}
