//! Entry store - owns the journal collection and all mutations

use crate::domain::{parse_tags, Draft, JournalEntry, Mood};
use crate::error::Result;
use crate::infrastructure::{BlobStore, DARK_MODE_KEY, ENTRIES_KEY};
use chrono::Utc;

/// Owns the in-memory entry collection (newest first) and the edit draft,
/// and writes the whole collection back through the blob store after every
/// successful mutation.
///
/// Derived views live in [`crate::application::views`]. Callers observe
/// [`EntryStore::revision`] and re-query views after mutating calls.
pub struct EntryStore<S: BlobStore> {
    blobs: S,
    entries: Vec<JournalEntry>,
    draft: Draft,
    revision: u64,
    recovered: bool,
}

impl<S: BlobStore> EntryStore<S> {
    /// Load the collection from the blob store. A missing blob starts an
    /// empty journal; a malformed blob is discarded and the store opens
    /// empty with [`EntryStore::recovered_from_corruption`] set, so the
    /// caller can surface a warning.
    pub fn open(blobs: S) -> Result<Self> {
        let mut recovered = false;
        let entries = match blobs.get(ENTRIES_KEY)? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<JournalEntry>>(&blob) {
                Ok(entries) => entries,
                Err(_) => {
                    recovered = true;
                    Vec::new()
                }
            },
        };

        Ok(EntryStore {
            blobs,
            entries,
            draft: Draft::default(),
            revision: 0,
            recovered,
        })
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Bumped once per successful mutation; unchanged by rejected submits
    /// and missing-id deletes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the persisted collection was malformed and discarded at open
    pub fn recovered_from_corruption(&self) -> bool {
        self.recovered
    }

    /// Find an entry by id
    pub fn entry(&self, id: u64) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Create a new entry or, when `editing_id` matches an existing one,
    /// replace its title/content/tags/mood in place (`id` and `date` stay).
    ///
    /// Returns false without touching the collection when title or content
    /// trims to empty; the draft keeps whatever the user typed. On success
    /// the draft is reset and the collection is persisted.
    pub fn create_or_update(
        &mut self,
        title: &str,
        content: &str,
        tags_text: &str,
        mood: Mood,
        editing_id: Option<u64>,
    ) -> Result<bool> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Ok(false);
        }

        let tags = parse_tags(tags_text);

        match editing_id.and_then(|id| self.entries.iter().position(|e| e.id == id)) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.title = title.to_string();
                entry.content = content.to_string();
                entry.tags = tags;
                entry.mood = mood;
            }
            None => {
                let entry = JournalEntry {
                    id: self.next_id(),
                    date: Utc::now(),
                    title: title.to_string(),
                    content: content.to_string(),
                    tags,
                    mood,
                };
                self.entries.insert(0, entry);
            }
        }

        self.draft.clear();
        self.persist()?;
        Ok(true)
    }

    /// Submit the current draft through [`EntryStore::create_or_update`]
    pub fn submit_draft(&mut self) -> Result<bool> {
        let draft = self.draft.clone();
        self.create_or_update(
            &draft.title,
            &draft.content,
            &draft.tags_text,
            draft.mood,
            draft.editing_id,
        )
    }

    /// Remove the entry with the given id. Missing ids are a no-op, so the
    /// call is idempotent. Returns whether an entry was removed.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Populate the draft from an existing entry and enter edit mode.
    /// Returns false (draft untouched) when the id is unknown.
    pub fn begin_edit(&mut self, id: u64) -> bool {
        let draft = match self.entry(id) {
            Some(entry) => Draft::from_entry(entry),
            None => return false,
        };
        self.draft = draft;
        true
    }

    /// Reset the draft and leave edit mode. Never persists.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
    }

    /// Read the dark-mode preference; absent or unparsable reads as light
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self
            .blobs
            .get(DARK_MODE_KEY)?
            .map(|v| v.trim() == "true")
            .unwrap_or(false))
    }

    /// Persist the dark-mode preference
    pub fn set_dark_mode(&mut self, dark: bool) -> Result<()> {
        self.blobs.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
    }

    /// Ids are creation epoch-milliseconds, clamped past the current
    /// maximum so they stay unique and monotonic even within one
    /// millisecond, and are never reused after a delete.
    fn next_id(&self) -> u64 {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        let max_id = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        now_ms.max(max_id + 1)
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.entries)?;
        self.blobs.set(ENTRIES_KEY, &blob)?;
        self.revision += 1;
        Ok(())
    }
}
