//! Journal entry model

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mood rating on a 1..=10 scale, serialized as a bare number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Create a mood rating, rejecting values outside 1..=10
    pub fn new(value: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Mood(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Mood {
    /// Midpoint of the scale, the form's initial value
    fn default() -> Self {
        Mood(5)
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Mood::new(value).ok_or_else(|| format!("Mood out of range (1-10): {}", value))
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> u8 {
        mood.0
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One journal record. `id` and `date` are fixed at creation; edits replace
/// the remaining fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub mood: Mood,
}

impl JournalEntry {
    /// The calendar day this entry falls on, in local time
    pub fn local_day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    /// The entry's day formatted for display
    pub fn day_string(&self, date_format: &str) -> String {
        self.local_day().format(date_format).to_string()
    }
}
