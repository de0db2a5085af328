//! Field validation and normalization
//!
//! Turns the raw text of a document element into typed values. Multi-valued
//! fields (`esystem`, `load`, `wload`) are `/`-delimited lists of tokens drawn
//! from a small fixed set; see [`Token`] and [`TokenList`].

use crate::error::{PlanError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

/// Date format used by `<date>` elements, e.g. "05-March-2024"
pub const DATE_FORMAT: &str = "%d-%B-%Y";

/// Upper bound (inclusive) for tiredness and motivation scores
pub const SCORE_MAX: u8 = 10;

/// Upper bound (exclusive) for a single session distance in kilometers
pub const DISTANCE_LIMIT_KM: f64 = 100.0;

/// A member of a small, fixed vocabulary that may appear in a delimited field
pub trait Token: Copy + PartialEq + fmt::Debug + 'static {
    /// Field kind used in error messages (e.g. "energy system")
    const KIND: &'static str;

    /// Every recognized token, in canonical order
    const ALL: &'static [Self];

    /// Canonical spelling
    fn name(&self) -> &'static str;
}

/// Physiological pathway emphasized by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergySystem {
    Alactic,
    Lactic,
    Aerobic,
}

impl Token for EnergySystem {
    const KIND: &'static str = "energy system";
    const ALL: &'static [Self] = &[
        EnergySystem::Alactic,
        EnergySystem::Lactic,
        EnergySystem::Aerobic,
    ];

    fn name(&self) -> &'static str {
        match self {
            EnergySystem::Alactic => "Alactic",
            EnergySystem::Lactic => "Lactic",
            EnergySystem::Aerobic => "Aerobic",
        }
    }
}

/// Qualitative intensity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadLevel {
    Low,
    Medium,
    High,
}

impl Token for LoadLevel {
    const KIND: &'static str = "load";
    const ALL: &'static [Self] = &[LoadLevel::Low, LoadLevel::Medium, LoadLevel::High];

    fn name(&self) -> &'static str {
        match self {
            LoadLevel::Low => "Low",
            LoadLevel::Medium => "Medium",
            LoadLevel::High => "High",
        }
    }
}

/// Ordered list of tokens as written in the source text.
///
/// Order is preserved and repeated tokens are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenList<T: Token>(Vec<T>);

impl<T: Token> TokenList<T> {
    pub fn new(tokens: Vec<T>) -> Self {
        TokenList(tokens)
    }

    /// An empty list, used where a field is legitimately absent
    pub fn empty() -> Self {
        TokenList(Vec::new())
    }

    /// First token, used when a single summary tag is needed
    pub fn first(&self) -> Option<T> {
        self.0.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Token> fmt::Display for TokenList<T> {
    /// Joins canonical names with '/'
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(token.name())?;
        }
        Ok(())
    }
}

pub type EnergySystems = TokenList<EnergySystem>;
pub type LoadTags = TokenList<LoadLevel>;

/// Parse a date in "day-FullMonthName-year" form
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| PlanError::Format(format!("invalid date '{}'", text)))
}

/// Split `text` on '/' and match every part case-insensitively against `T::ALL`.
///
/// Stops at the first unrecognized part.
pub fn parse_multi_token<T: Token>(text: &str) -> Result<TokenList<T>> {
    let mut tokens = Vec::new();

    for part in text.split('/') {
        let token = T::ALL
            .iter()
            .find(|candidate| candidate.name().eq_ignore_ascii_case(part))
            .ok_or_else(|| PlanError::Validation(format!("invalid {} {}", T::KIND, part)))?;
        tokens.push(*token);
    }

    Ok(TokenList::new(tokens))
}

/// "true" or "yes" (any case) is true; any other text is false.
///
/// Never fails: unrecognized text is read as false.
pub fn parse_boolean(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes")
}

/// Parse an integer and check it lies in `min..=max`.
///
/// `field` names the value in error messages.
pub fn parse_bounded_int(text: &str, min: u8, max: u8, field: &str) -> Result<u8> {
    let value: i64 = text.parse().map_err(|e: ParseIntError| match e.kind() {
        // An integer too large for i64 is out of range, not malformed
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            PlanError::Validation(format!("invalid {} number {}", field, text))
        }
        _ => PlanError::Format(format!("invalid {} number '{}'", field, text)),
    })?;

    if value < i64::from(min) || value > i64::from(max) {
        return Err(PlanError::Validation(format!(
            "invalid {} number {}",
            field, value
        )));
    }

    Ok(value as u8)
}

/// Parse a session distance in kilometers, which must lie in `[0, 100)`
pub fn parse_distance(text: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| PlanError::Format(format!("invalid distance '{}'", text)))?;

    // NaN fails both comparisons, so test for membership rather than exclusion
    if (0.0..DISTANCE_LIMIT_KM).contains(&value) {
        Ok(value)
    } else {
        Err(PlanError::Validation(format!("invalid distance {}", text)))
    }
}
