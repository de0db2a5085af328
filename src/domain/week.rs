//! Training week aggregate

use crate::domain::fields::LoadTags;
use crate::domain::SessionRecord;
use chrono::{Datelike, NaiveDate, Weekday};

/// One training week: a weekly load classification and its sessions in
/// document order.
///
/// Derived statistics are computed on demand from the session list.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    load_tags: LoadTags,
    sessions: Vec<SessionRecord>,
}

impl Week {
    /// Create an empty week
    pub fn new(load_tags: LoadTags) -> Self {
        Week {
            load_tags,
            sessions: Vec::new(),
        }
    }

    /// Append a session, keeping insertion order
    pub fn add_session(&mut self, record: SessionRecord) {
        self.sessions.push(record);
    }

    pub fn load_tags(&self) -> &LoadTags {
        &self.load_tags
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Date of the first session, or None for an empty week
    pub fn first_session_date(&self) -> Option<NaiveDate> {
        self.sessions.first().map(SessionRecord::date)
    }

    /// Number of sessions marked done
    pub fn completed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_done()).count()
    }

    /// Sum of distances over completed sessions.
    ///
    /// A completed session without a recorded distance contributes 0.
    pub fn total_distance_km(&self) -> f64 {
        self.sessions
            .iter()
            .filter(|s| s.is_done())
            .filter_map(SessionRecord::distance_km)
            .sum()
    }

    /// Sessions whose date falls on `weekday`, in document order
    pub fn sessions_on(&self, weekday: Weekday) -> impl Iterator<Item = &SessionRecord> {
        self.sessions
            .iter()
            .filter(move |s| s.date().weekday() == weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{parse_multi_token, LoadLevel};

    fn session(date: &str, done: bool, distance: Option<&str>) -> SessionRecord {
        let mut rec = SessionRecord::from_text(date, "Run").unwrap();
        if done {
            rec.set_done("yes");
        }
        if let Some(d) = distance {
            rec.set_distance(d).unwrap();
        }
        rec
    }

    fn week() -> Week {
        Week::new(parse_multi_token("Medium/Low").unwrap())
    }

    #[test]
    fn test_empty_week() {
        let week = week();
        assert_eq!(week.session_count(), 0);
        assert_eq!(week.first_session_date(), None);
        assert_eq!(week.completed_count(), 0);
        assert_eq!(week.total_distance_km(), 0.0);
        assert_eq!(week.load_tags().first(), Some(LoadLevel::Medium));
        assert_eq!(week.load_tags().to_string(), "Medium/Low");
    }

    #[test]
    fn test_completed_distance_only() {
        let mut week = week();
        week.add_session(session("01-January-2024", true, Some("5.0")));
        week.add_session(session("02-January-2024", false, Some("3.0")));
        week.add_session(session("03-January-2024", true, Some("2.0")));

        assert_eq!(week.session_count(), 3);
        assert_eq!(week.completed_count(), 2);
        assert_eq!(week.total_distance_km(), 7.0);
    }

    #[test]
    fn test_done_without_distance_counts_zero() {
        let mut week = week();
        week.add_session(session("01-January-2024", true, None));
        week.add_session(session("02-January-2024", true, Some("4.5")));

        assert_eq!(week.completed_count(), 2);
        assert_eq!(week.total_distance_km(), 4.5);
    }

    #[test]
    fn test_first_session_date_follows_insertion_order() {
        let mut week = week();
        week.add_session(session("03-January-2024", false, None));
        week.add_session(session("01-January-2024", false, None));

        assert_eq!(
            week.first_session_date(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
        );
        assert_eq!(week.sessions()[1].date().day(), 1);
    }

    #[test]
    fn test_sessions_on_weekday() {
        let mut week = week();
        // 01-January-2024 is a Monday
        week.add_session(session("01-January-2024", false, None));
        week.add_session(session("03-January-2024", false, None));
        week.add_session(session("08-January-2024", false, None));

        assert_eq!(week.sessions_on(Weekday::Mon).count(), 2);
        assert_eq!(week.sessions_on(Weekday::Wed).count(), 1);
        assert_eq!(week.sessions_on(Weekday::Sun).count(), 0);
    }
}
