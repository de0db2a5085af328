//! Load plan use case
//!
//! Walks a document tree top-down and feeds element text to the domain
//! setters. Required elements that are missing or empty are structural
//! errors; missing or empty optional elements are skipped.

use crate::domain::fields::{parse_multi_token, LoadTags};
use crate::domain::{DocumentNode, SessionRecord, TrainingPlan, Week};
use crate::error::{PlanError, Result};

/// Builds a [`TrainingPlan`] from any [`DocumentNode`] tree
pub struct PlanLoader;

impl PlanLoader {
    /// Load a whole plan, stopping at the first error in document order.
    ///
    /// The root holds a `name` and either a `weeks` list of `week` elements or,
    /// in the single-week form, a `records` list directly.
    pub fn load<N: DocumentNode>(root: &N) -> Result<TrainingPlan> {
        let name = required_text(root, "name").map_err(|e| in_context(e, "plan"))?;
        let mut plan = TrainingPlan::new(name);

        if let Some(weeks) = root.child("weeks") {
            let week_nodes = weeks.children("week");
            if week_nodes.is_empty() {
                return Err(PlanError::Structural(
                    "plan: <weeks> contains no <week> elements".to_string(),
                ));
            }

            for (idx, node) in week_nodes.into_iter().enumerate() {
                plan.add_week(Self::load_week(node, idx + 1)?);
            }
        } else if let Some(records) = root.child("records") {
            let load_tags = match optional_text(root, "wload") {
                Some(text) => parse_multi_token(text).map_err(|e| in_context(e, "week 1"))?,
                None => LoadTags::empty(),
            };
            plan.add_week(Self::load_records(records, Week::new(load_tags), 1)?);
        } else {
            return Err(PlanError::Structural(
                "plan: missing <weeks> or <records> element".to_string(),
            ));
        }

        tracing::info!(
            plan = plan.name(),
            weeks = plan.week_count(),
            sessions = plan.session_count(),
            "Loaded training plan"
        );

        Ok(plan)
    }

    fn load_week<N: DocumentNode>(node: &N, week_no: usize) -> Result<Week> {
        let context = format!("week {}", week_no);

        let wload = required_text(node, "wload").map_err(|e| in_context(e, &context))?;
        let load_tags = parse_multi_token(wload).map_err(|e| in_context(e, &context))?;

        let records = node.child("records").ok_or_else(|| {
            PlanError::Structural(format!("{}: missing <records> element", context))
        })?;

        Self::load_records(records, Week::new(load_tags), week_no)
    }

    fn load_records<N: DocumentNode>(records: &N, mut week: Week, week_no: usize) -> Result<Week> {
        let record_nodes = records.children("record");
        if record_nodes.is_empty() {
            return Err(PlanError::Structural(format!(
                "week {}: <records> contains no <record> elements",
                week_no
            )));
        }

        for (idx, node) in record_nodes.into_iter().enumerate() {
            let record = Self::load_record(node)
                .map_err(|e| in_context(e, &format!("week {}, record {}", week_no, idx + 1)))?;
            week.add_session(record);
        }

        tracing::debug!(
            week = week_no,
            sessions = week.session_count(),
            completed = week.completed_count(),
            "Loaded week"
        );

        Ok(week)
    }

    /// Build one session record from a `record` element
    pub fn load_record<N: DocumentNode>(node: &N) -> Result<SessionRecord> {
        let date = required_text(node, "date")?;
        let title = required_text(node, "title")?;
        let mut record = SessionRecord::from_text(date, title)?;

        if let Some(text) = optional_text(node, "emphasis") {
            record.set_emphasis(text);
        }
        if let Some(text) = optional_text(node, "esystem") {
            record.set_energy_systems(text)?;
        }
        if let Some(text) = optional_text(node, "load") {
            record.set_load(text)?;
        }
        if let Some(text) = optional_text(node, "done") {
            record.set_done(text);
        }
        if let Some(text) = optional_text(node, "tired") {
            record.set_perceived_tiredness(text)?;
        }
        if let Some(text) = optional_text(node, "motivation") {
            record.set_motivation(text)?;
        }
        if let Some(text) = optional_text(node, "session") {
            record.set_session_notes(text);
        }
        if let Some(text) = optional_text(node, "distance") {
            record.set_distance(text)?;
        }
        if let Some(text) = optional_text(node, "atired") {
            record.set_after_tiredness(text)?;
        }

        tracing::debug!(date = %record.date(), title = record.title(), "Loaded session");

        Ok(record)
    }
}

/// Trimmed text of a child element; None when absent or blank
fn optional_text<'a, N: DocumentNode>(node: &'a N, name: &str) -> Option<&'a str> {
    node.child(name)
        .map(|child| child.text().trim())
        .filter(|text| !text.is_empty())
}

fn required_text<'a, N: DocumentNode>(node: &'a N, name: &str) -> Result<&'a str> {
    let child = node
        .child(name)
        .ok_or_else(|| PlanError::Structural(format!("missing <{}> element", name)))?;

    let text = child.text().trim();
    if text.is_empty() {
        return Err(PlanError::Structural(format!("empty <{}> element", name)));
    }
    Ok(text)
}

/// Prefix the location to a load error, keeping its kind
fn in_context(err: PlanError, context: &str) -> PlanError {
    match err {
        PlanError::Structural(msg) => PlanError::Structural(format!("{}: {}", context, msg)),
        PlanError::Format(msg) => PlanError::Format(format!("{}: {}", context, msg)),
        PlanError::Validation(msg) => PlanError::Validation(format!("{}: {}", context, msg)),
        other => other,
    }
}
