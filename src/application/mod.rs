//! Application layer - Entry store and use cases

pub mod init;
pub mod store;
pub mod views;

pub use store::EntryStore;
pub use views::{CalendarEvent, FrequencyPoint, MoodPoint};
