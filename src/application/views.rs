//! Derived views over the entry collection
//!
//! Read-only projections; none of these are persisted and all are
//! recomputed on every call.

use crate::application::store::EntryStore;
use crate::domain::JournalEntry;
use crate::infrastructure::BlobStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One point of the mood-over-time series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPoint {
    pub day: String,
    pub mood: u8,
}

/// Entry count for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyPoint {
    pub day: String,
    pub count: usize,
}

/// All-day calendar event projected from one entry. `entry_id` is a
/// back-reference, not ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub entry_id: u64,
    pub day: NaiveDate,
    pub title: String,
}

impl<S: BlobStore> EntryStore<S> {
    /// Entries passing both filters, in collection order. An empty
    /// `filter_tag` or `search_term` passes everything; the search is a
    /// case-insensitive substring match against title, content and tags,
    /// while the tag filter is an exact match.
    pub fn filter(&self, search_term: &str, filter_tag: &str) -> Vec<&JournalEntry> {
        let needle = search_term.to_lowercase();

        self.entries()
            .iter()
            .filter(|entry| {
                let tag_ok = filter_tag.is_empty() || entry.tags.iter().any(|t| t == filter_tag);
                let search_ok = needle.is_empty()
                    || entry.title.to_lowercase().contains(&needle)
                    || entry.content.to_lowercase().contains(&needle)
                    || entry.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                tag_ok && search_ok
            })
            .collect()
    }

    /// Every tag once, in order of first occurrence across the collection
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for entry in self.entries() {
            for tag in &entry.tags {
                if !seen.contains(tag) {
                    seen.push(tag.clone());
                }
            }
        }
        seen
    }

    /// One point per entry in collection order. Entries sharing a calendar
    /// day stay separate points.
    pub fn mood_series(&self, date_format: &str) -> Vec<MoodPoint> {
        self.entries()
            .iter()
            .map(|entry| MoodPoint {
                day: entry.day_string(date_format),
                mood: entry.mood.value(),
            })
            .collect()
    }

    /// Entries-per-day counts, sorted ascending by date
    pub fn frequency_series(&self, date_format: &str) -> Vec<FrequencyPoint> {
        let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for entry in self.entries() {
            *counts.entry(entry.local_day()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(day, count)| FrequencyPoint {
                day: day.format(date_format).to_string(),
                count,
            })
            .collect()
    }

    /// One all-day event per entry, keyed at the entry's local calendar day
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.entries()
            .iter()
            .map(|entry| CalendarEvent {
                entry_id: entry.id,
                day: entry.local_day(),
                title: entry.title.clone(),
            })
            .collect()
    }
}
