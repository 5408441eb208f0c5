use serde::{Deserialize, Serialize};

use super::HoursError;

/// Canonical weekday, Monday-first. The fixed ordering drives range
/// expansion ("Mon-Thu") and the serializer's grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the Monday-first week, 0..=6.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Two-letter abbreviation used in the canonical output notation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
            Weekday::Saturday => "Sa",
            Weekday::Sunday => "Su",
        }
    }

    /// Resolve a raw day token ("Mon", "monday", "Tue") by case-insensitive
    /// prefix match against the canonical names. At least two letters are
    /// required to disambiguate Tuesday/Thursday and Saturday/Sunday.
    pub fn from_token(token: &str) -> Result<Weekday, HoursError> {
        let wanted = token.trim().to_lowercase();
        if wanted.len() >= 2 {
            for day in Weekday::ALL {
                if day.name().to_lowercase().starts_with(&wanted) {
                    return Ok(day);
                }
            }
        }
        Err(HoursError::UnrecognizedDayToken(token.trim().to_string()))
    }
}

/// Expand a day spec into the explicit weekday list: either a single token
/// ("Sat") or an inclusive range ("Mon-Thu") walking forward through the
/// Monday-first ordering. Wrapping ranges ("Sat-Mon") are not produced by
/// the feeds we consume and are rejected as unrecognized.
pub fn expand_day_range(spec: &str) -> Result<Vec<Weekday>, HoursError> {
    if let Some((start, end)) = spec.split_once('-') {
        let start = Weekday::from_token(start)?;
        let end = Weekday::from_token(end)?;
        if end.index() < start.index() {
            return Err(HoursError::UnrecognizedDayToken(spec.trim().to_string()));
        }
        Ok(Weekday::ALL[start.index()..=end.index()].to_vec())
    } else {
        Ok(vec![Weekday::from_token(spec)?])
    }
}

/// Literal substitutions applied to a raw hours string before any day
/// resolution, e.g. "Black Friday" -> "Fri". Retailers invent their own
/// labels, so spiders can extend the table per source.
#[derive(Debug, Clone)]
pub struct DayAliases {
    substitutions: Vec<(String, String)>,
}

impl DayAliases {
    pub fn new() -> Self {
        Self {
            substitutions: Vec::new(),
        }
    }

    pub fn with_alias(mut self, from: &str, to: &str) -> Self {
        self.substitutions.push((from.to_string(), to.to_string()));
        self
    }

    /// Apply every substitution in insertion order.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (from, to) in &self.substitutions {
            out = out.replace(from.as_str(), to);
        }
        out
    }
}

impl Default for DayAliases {
    fn default() -> Self {
        Self::new().with_alias("Black Friday", "Fri")
    }
}
