//! Domain layer - Entry model and domain logic

pub mod draft;
pub mod entry;
pub mod tags;

pub use draft::Draft;
pub use entry::{JournalEntry, Mood};
pub use tags::parse_tags;
