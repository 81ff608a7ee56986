//! Keyword search over the borrow/return history.

use crate::models::LogEntry;

/// Filters the log by person name and/or note.
///
/// Each keyword is a case-insensitive literal substring. A missing, empty or
/// whitespace-only keyword does not filter, unlike a plain truthiness check
/// which would treat `" "` as a keyword and hide every entry without a
/// space. When both are given an entry must match both. Load order is
/// preserved.
pub fn search(
    entries: &[LogEntry],
    name_keyword: Option<&str>,
    note_keyword: Option<&str>,
) -> Vec<LogEntry> {
    let name = normalize_keyword(name_keyword);
    let note = normalize_keyword(note_keyword);

    entries
        .iter()
        .filter(|entry| matches(&entry.person_name, name.as_deref()))
        .filter(|entry| matches(&entry.note, note.as_deref()))
        .cloned()
        .collect()
}

fn normalize_keyword(keyword: Option<&str>) -> Option<String> {
    keyword
        .filter(|k| !k.trim().is_empty())
        .map(str::to_lowercase)
}

fn matches(field: &str, keyword: Option<&str>) -> bool {
    match keyword {
        Some(keyword) => field.to_lowercase().contains(keyword),
        None => true,
    }
}
