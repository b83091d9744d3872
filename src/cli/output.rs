//! Output formatting utilities

use crate::application::{CalendarEvent, FrequencyPoint, MoodPoint};
use crate::domain::JournalEntry;

/// Format a list of entries for display
pub fn format_entry_list(entries: &[&JournalEntry], date_format: &str) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "[{}] {}  {}  mood {}\n",
            entry.id,
            entry.day_string(date_format),
            entry.title,
            entry.mood
        ));
        if !entry.tags.is_empty() {
            output.push_str(&format!("    tags: {}\n", entry.tags.join(", ")));
        }
        output.push_str(&format!("    {}\n", entry.content));
    }
    output
}

/// Format a list of tags for display
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}

/// Format the mood series as a day/value table with a bar per point
pub fn format_mood_series(points: &[MoodPoint]) -> String {
    if points.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{}  {:>2}  {}\n",
            point.day,
            point.mood,
            "#".repeat(point.mood as usize)
        ));
    }
    output
}

/// Format per-day entry counts with a bar per day
pub fn format_frequency_series(points: &[FrequencyPoint]) -> String {
    if points.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{}  {:>2}  {}\n",
            point.day,
            point.count,
            "#".repeat(point.count)
        ));
    }
    output
}

/// Format all-day calendar events for display
pub fn format_calendar(events: &[CalendarEvent], date_format: &str) -> String {
    if events.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for event in events {
        output.push_str(&format!(
            "{}  {}  (entry {})\n",
            event.day.format(date_format),
            event.title,
            event.entry_id
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(id: u64, title: &str, tags: &[&str], mood: u8) -> JournalEntry {
        JournalEntry {
            id,
            date: Utc.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap(),
            title: title.to_string(),
            content: "some text".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            mood: Mood::new(mood).unwrap(),
        }
    }

    #[test]
    fn test_format_empty_entry_list() {
        let output = format_entry_list(&[], "%d-%m-%Y");
        assert_eq!(output, "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let a = entry(1, "First", &["work"], 7);
        let b = entry(2, "Second", &[], 4);

        let output = format_entry_list(&[&a, &b], "%d-%m-%Y");
        assert!(output.contains("[1]"));
        assert!(output.contains("First"));
        assert!(output.contains("mood 7"));
        assert!(output.contains("tags: work"));
        assert!(output.contains("[2]"));
        assert!(output.contains("some text"));
    }

    #[test]
    fn test_format_entry_list_omits_empty_tags_line() {
        let a = entry(1, "First", &[], 7);
        let output = format_entry_list(&[&a], "%d-%m-%Y");
        assert!(!output.contains("tags:"));
    }

    #[test]
    fn test_format_empty_tag_list() {
        let tags = vec![];
        let output = format_tag_list(&tags);
        assert_eq!(output, "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["personal".to_string(), "work".to_string()];
        let output = format_tag_list(&tags);
        assert_eq!(output, "#personal\n#work\n");
    }

    #[test]
    fn test_format_mood_series() {
        let points = vec![
            MoodPoint { day: "17-01-2025".to_string(), mood: 3 },
            MoodPoint { day: "18-01-2025".to_string(), mood: 10 },
        ];

        let output = format_mood_series(&points);
        assert!(output.contains("17-01-2025   3  ###\n"));
        assert!(output.contains("18-01-2025  10  ##########\n"));
    }

    #[test]
    fn test_format_frequency_series() {
        let points = vec![FrequencyPoint { day: "17-01-2025".to_string(), count: 2 }];

        let output = format_frequency_series(&points);
        assert_eq!(output, "17-01-2025   2  ##\n");
    }

    #[test]
    fn test_format_calendar() {
        let events = vec![CalendarEvent {
            entry_id: 9,
            day: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            title: "A day".to_string(),
        }];

        let output = format_calendar(&events, "%d-%m-%Y");
        assert_eq!(output, "17-01-2025  A day  (entry 9)\n");
    }

    #[test]
    fn test_empty_series_and_calendar() {
        assert_eq!(format_mood_series(&[]), "No entries found");
        assert_eq!(format_frequency_series(&[]), "No entries found");
        assert_eq!(format_calendar(&[], "%d-%m-%Y"), "No entries found");
    }
}
