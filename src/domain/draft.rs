//! Edit draft scratch state

use crate::domain::entry::{JournalEntry, Mood};
use crate::domain::tags::join_tags;

/// Scratch state for the entry form. Holds the fields being typed and,
/// when editing, the id of the entry being replaced. Never validated,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tags_text: String,
    pub mood: Mood,
    pub editing_id: Option<u64>,
}

impl Draft {
    /// Populate the draft from an existing entry for editing
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Draft {
            title: entry.title.clone(),
            content: entry.content.clone(),
            tags_text: join_tags(&entry.tags),
            mood: entry.mood,
            editing_id: Some(entry.id),
        }
    }

    /// Reset to the empty form, leaving edit mode
    pub fn clear(&mut self) {
        *self = Draft::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_draft_is_empty() {
        let draft = Draft::default();
        assert!(draft.title.is_empty());
        assert!(draft.content.is_empty());
        assert!(draft.tags_text.is_empty());
        assert_eq!(draft.mood.value(), 5);
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_from_entry_carries_fields_and_id() {
        let entry = JournalEntry {
            id: 7,
            date: Utc::now(),
            title: "Title".to_string(),
            content: "Body".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            mood: Mood::new(9).unwrap(),
        };

        let draft = Draft::from_entry(&entry);
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.content, "Body");
        assert_eq!(draft.tags_text, "a, b");
        assert_eq!(draft.mood.value(), 9);
        assert_eq!(draft.editing_id, Some(7));
        assert!(draft.is_editing());
    }

    #[test]
    fn test_clear_leaves_edit_mode() {
        let entry = JournalEntry {
            id: 7,
            date: Utc::now(),
            title: "Title".to_string(),
            content: "Body".to_string(),
            tags: vec![],
            mood: Mood::new(3).unwrap(),
        };

        let mut draft = Draft::from_entry(&entry);
        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
