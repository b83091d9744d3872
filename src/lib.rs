//! daybook - Terminal journaling application
//!
//! A command-line journal that keeps free-text entries with tags and a mood
//! rating, and derives mood/frequency series and calendar projections from
//! the entry collection.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
