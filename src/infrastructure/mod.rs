//! Infrastructure layer - Persistence adapter and configuration

pub mod blob_store;
pub mod config;

pub use blob_store::{BlobStore, DirBlobStore, MemoryBlobStore, DARK_MODE_KEY, ENTRIES_KEY};
pub use config::Config;
