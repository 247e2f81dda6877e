//! Read-only queries over a mapping, as used by the activity tracker.
//!
//! All comparisons are case-insensitive.

use crate::models::{GameMapping, GameRecord};

/// First executable (in mapping order) whose record contains `name`.
///
/// Any element matches: the game name, a keyword or the executable echo.
pub fn find_process<'a>(mapping: &'a GameMapping, name: &str) -> Option<&'a str> {
    mapping
        .iter()
        .find(|(_, record)| record.contains_ignore_case(name))
        .map(|(key, _)| key)
}

/// Entries whose executable or game name contains `term`, sorted by
/// executable. An empty term matches every entry.
pub fn search<'a>(mapping: &'a GameMapping, term: &str) -> Vec<(&'a str, &'a GameRecord)> {
    let term = term.to_lowercase();

    let mut hits: Vec<_> = mapping
        .iter()
        .filter(|(key, record)| {
            term.is_empty()
                || key.to_lowercase().contains(&term)
                || record
                    .game_name()
                    .is_some_and(|name| name.to_lowercase().contains(&term))
        })
        .collect();

    hits.sort_by(|a, b| a.0.cmp(b.0));
    hits
}

/// Capitalize each whitespace-separated word: `"counter  strike"` →
/// `"Counter Strike"`.
pub fn display_name(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
