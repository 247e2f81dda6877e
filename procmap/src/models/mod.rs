//! Domain models for the process mapping.
//!
//! - [`GameMapping`] - executable identifier → record, in file order
//! - [`GameRecord`] - `[gameName, keyword..., executableEcho]`
//! - [`Diagnostic`] - one detected echo mismatch
//! - [`ValidationReport`] - everything a validation pass found

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Game Record
// =============================================================================

/// Ordered strings describing one executable.
///
/// Layout is `[gameName, keyword_1, ..., keyword_n, executableEcho]`, where
/// the last element repeats the key the record is stored under so that
/// consumers iterating only over values still see the executable name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GameRecord(Vec<String>);

impl GameRecord {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// First element.
    pub fn game_name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Everything strictly between the game name and the echo.
    pub fn keywords(&self) -> &[String] {
        match self.0.len() {
            0..=2 => &[],
            n => &self.0[1..n - 1],
        }
    }

    /// Last element, expected to equal the record's key.
    pub fn echo(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Overwrite the last element. Returns the previous value, or `None`
    /// (and leaves the record untouched) when the record is empty.
    pub fn replace_echo(&mut self, key: &str) -> Option<String> {
        self.0
            .last_mut()
            .map(|last| std::mem::replace(last, key.to_string()))
    }

    /// Case-insensitive membership test over every element.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.0.iter().any(|v| v.to_lowercase() == needle)
    }
}

impl From<Vec<String>> for GameRecord {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

// =============================================================================
// Game Mapping
// =============================================================================

/// Executable identifier → [`GameRecord`].
///
/// Iteration follows insertion order, which for a loaded mapping is the key
/// order of the source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GameMapping(IndexMap<String, GameRecord>);

impl GameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&GameRecord> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut GameRecord> {
        self.0.get_mut(key)
    }

    /// Insert or replace a record. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, record: GameRecord) -> Option<GameRecord> {
        self.0.insert(key.into(), record)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameRecord)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy of the mapping with keys in ascending order.
    pub fn sorted(&self) -> GameMapping {
        let mut inner = self.0.clone();
        inner.sort_keys();
        GameMapping(inner)
    }
}

impl<K: Into<String>> FromIterator<(K, GameRecord)> for GameMapping {
    fn from_iter<T: IntoIterator<Item = (K, GameRecord)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// A record whose last element did not match its key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    /// Key the record is stored under.
    pub key: String,
    /// Last element as found before repair.
    pub found: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not the last element in the array (found '{}')",
            self.key, self.found
        )
    }
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of records inspected.
    pub checked: usize,
    /// Violations in detection order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
