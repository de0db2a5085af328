//! Training session record

use crate::domain::fields::{
    parse_boolean, parse_bounded_int, parse_date, parse_distance, parse_multi_token,
    EnergySystems, LoadTags, SCORE_MAX,
};
use crate::error::Result;
use chrono::NaiveDate;

/// One planned or performed training session.
///
/// Built once by the loader through the `set_*` methods, then handed to a
/// [`Week`](crate::domain::Week) which only exposes it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    date: NaiveDate,
    title: String,
    emphasis: Option<String>,
    energy_systems: Option<EnergySystems>,
    load_tags: Option<LoadTags>,
    done: bool,
    perceived_tiredness: Option<u8>,
    motivation: Option<u8>,
    session_notes: Option<String>,
    distance_km: Option<f64>,
    after_tiredness: Option<u8>,
}

impl SessionRecord {
    /// Create a record from its two required fields
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        SessionRecord {
            date,
            title: title.into(),
            emphasis: None,
            energy_systems: None,
            load_tags: None,
            done: false,
            perceived_tiredness: None,
            motivation: None,
            session_notes: None,
            distance_km: None,
            after_tiredness: None,
        }
    }

    /// Create a record from raw `<date>` and `<title>` text
    pub fn from_text(date: &str, title: &str) -> Result<Self> {
        Ok(Self::new(parse_date(date)?, title))
    }

    pub fn set_emphasis(&mut self, text: &str) {
        self.emphasis = Some(text.to_string());
    }

    pub fn set_energy_systems(&mut self, text: &str) -> Result<()> {
        self.energy_systems = Some(parse_multi_token(text)?);
        Ok(())
    }

    pub fn set_load(&mut self, text: &str) -> Result<()> {
        self.load_tags = Some(parse_multi_token(text)?);
        Ok(())
    }

    /// Anything other than "true"/"yes" marks the session as not done
    pub fn set_done(&mut self, text: &str) {
        self.done = parse_boolean(text);
        if !self.done && !text.eq_ignore_ascii_case("false") && !text.eq_ignore_ascii_case("no") {
            tracing::warn!(
                date = %self.date,
                value = text,
                "Unrecognized done value, treating session as not done"
            );
        }
    }

    pub fn set_perceived_tiredness(&mut self, text: &str) -> Result<()> {
        self.perceived_tiredness = Some(parse_bounded_int(text, 0, SCORE_MAX, "tired")?);
        Ok(())
    }

    pub fn set_motivation(&mut self, text: &str) -> Result<()> {
        self.motivation = Some(parse_bounded_int(text, 0, SCORE_MAX, "motivation")?);
        Ok(())
    }

    pub fn set_session_notes(&mut self, text: &str) {
        self.session_notes = Some(text.to_string());
    }

    pub fn set_distance(&mut self, text: &str) -> Result<()> {
        self.distance_km = Some(parse_distance(text)?);
        Ok(())
    }

    pub fn set_after_tiredness(&mut self, text: &str) -> Result<()> {
        self.after_tiredness = Some(parse_bounded_int(text, 0, SCORE_MAX, "after tired")?);
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn emphasis(&self) -> Option<&str> {
        self.emphasis.as_deref()
    }

    pub fn energy_systems(&self) -> Option<&EnergySystems> {
        self.energy_systems.as_ref()
    }

    pub fn load_tags(&self) -> Option<&LoadTags> {
        self.load_tags.as_ref()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Tiredness reported before the session
    pub fn perceived_tiredness(&self) -> Option<u8> {
        self.perceived_tiredness
    }

    pub fn motivation(&self) -> Option<u8> {
        self.motivation
    }

    pub fn session_notes(&self) -> Option<&str> {
        self.session_notes.as_deref()
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Tiredness reported after the session
    pub fn after_tiredness(&self) -> Option<u8> {
        self.after_tiredness
    }
}
