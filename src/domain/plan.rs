//! Training plan aggregate root

use crate::domain::Week;

/// A named, ordered sequence of weeks
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    name: String,
    weeks: Vec<Week>,
}

impl TrainingPlan {
    pub fn new(name: impl Into<String>) -> Self {
        TrainingPlan {
            name: name.into(),
            weeks: Vec::new(),
        }
    }

    /// Append a week. Weeks are trusted to be chronological.
    pub fn add_week(&mut self, week: Week) {
        self.weeks.push(week);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Number of sessions across all weeks
    pub fn session_count(&self) -> usize {
        self.weeks.iter().map(Week::session_count).sum()
    }

    /// Completed distance across all weeks
    pub fn total_distance_km(&self) -> f64 {
        self.weeks.iter().map(Week::total_distance_km).sum()
    }
}
