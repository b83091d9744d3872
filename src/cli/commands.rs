//! CLI command definitions

use crate::domain::Mood;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clap value parser for the --mood flag; the single place the 1..=10
/// range is enforced for CLI input
fn mood_value(s: &str) -> Result<Mood, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    Mood::new(value).ok_or_else(|| format!("mood must be between 1 and 10, got {}", value))
}

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Terminal journaling application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a new entry
    Add {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Entry text
        #[arg(short, long)]
        content: String,

        /// Comma-separated tags (e.g. "work, gym")
        #[arg(long, default_value = "")]
        tags: String,

        /// Mood rating from 1 to 10
        #[arg(short, long, default_value = "5", value_parser = mood_value)]
        mood: Mood,
    },

    /// Edit an existing entry; omitted fields keep their current value
    Edit {
        /// Id of the entry to edit
        id: u64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Comma-separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,

        #[arg(short, long, value_parser = mood_value)]
        mood: Option<Mood>,
    },

    /// Delete an entry
    Delete {
        /// Id of the entry to delete
        id: u64,
    },

    /// List entries, optionally filtered
    List {
        /// Case-insensitive search over title, content and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only entries carrying exactly this tag
        #[arg(short, long, default_value = "")]
        tag: String,
    },

    /// List all tags in use
    Tags,

    /// Show the mood series, one point per entry
    Mood,

    /// Show entries-per-day counts
    Frequency,

    /// Show entries as all-day calendar events
    Calendar,

    /// Show or set the color theme
    Theme {
        /// "dark" or "light"; omit to show the current theme
        value: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_value_accepts_range() {
        assert_eq!(mood_value("1").unwrap().value(), 1);
        assert_eq!(mood_value("10").unwrap().value(), 10);
    }

    #[test]
    fn test_mood_value_rejects_out_of_range() {
        assert!(mood_value("0").unwrap_err().contains("between 1 and 10"));
        assert!(mood_value("11").unwrap_err().contains("between 1 and 10"));
    }

    #[test]
    fn test_mood_value_rejects_non_numbers() {
        assert!(mood_value("high").unwrap_err().contains("not a number"));
        assert!(mood_value("").is_err());
    }
}
