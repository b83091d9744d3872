//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_calendar, format_entry_list, format_frequency_series, format_mood_series,
    format_tag_list,
};
