//! Loading and saving process mapping files.
//!
//! Loading is a whole-file read followed by three steps:
//!
//! 1. parse JSON (malformed input is surfaced verbatim)
//! 2. check the shape against the embedded schema
//! 3. decode into a [`GameMapping`], keeping the file's key order
//!
//! Saving writes pretty-printed JSON with a 2-space indent.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{LoadError, LoadResult, WriteError, WriteResult};
use crate::models::GameMapping;
use crate::validation::validate_process_mapping;

/// Load a mapping file from disk.
///
/// # Example
/// ```ignore
/// let mapping = procmap::load_mapping("games/process_mapping.json")?;
/// println!("{} executables", mapping.len());
/// ```
pub fn load_mapping<P: AsRef<Path>>(path: P) -> LoadResult<GameMapping> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading mapping");

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_mapping(&content)
}

/// Parse a mapping from an in-memory JSON document.
pub fn parse_mapping(content: &str) -> LoadResult<GameMapping> {
    let value: Value = serde_json::from_str(content)?;

    validate_process_mapping(&value).map_err(|errors| LoadError::Schema { errors })?;

    let mapping: GameMapping = serde_json::from_value(value)?;
    tracing::debug!(entries = mapping.len(), "mapping decoded");
    Ok(mapping)
}

/// Render a mapping as pretty JSON (2-space indent, trailing newline).
pub fn to_pretty_json(mapping: &GameMapping) -> WriteResult<String> {
    let mut json = serde_json::to_string_pretty(mapping)?;
    json.push('\n');
    Ok(json)
}

/// Write a mapping to disk, keys in their current order.
pub fn save_mapping<P: AsRef<Path>>(path: P, mapping: &GameMapping) -> WriteResult<()> {
    let path = path.as_ref();
    let json = to_pretty_json(mapping)?;

    fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), entries = mapping.len(), "mapping written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameRecord;
    use tempfile::tempdir;

    #[test]
    fn test_parse_keeps_order() {
        let mapping = parse_mapping(r#"{"b.exe": ["B", "b.exe"], "a.exe": ["A", "a.exe"]}"#).unwrap();
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["b.exe", "a.exe"]);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_mapping(r#"{"a.exe": ["A", "a.exe"]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_wrong_shape() {
        let err = parse_mapping(r#"{"a.exe": "A"}"#).unwrap_err();
        match err {
            LoadError::Schema { errors } => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_record_loads() {
        let mapping = parse_mapping(r#"{"a.exe": []}"#).unwrap();
        assert!(mapping.get("a.exe").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_mapping(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");

        let mut mapping = GameMapping::new();
        mapping.insert("z.exe", GameRecord::new(["Z", "z.exe"]));
        mapping.insert("a.exe", GameRecord::new(["A", "shooter", "a.exe"]));

        save_mapping(&path, &mapping).unwrap();
        assert_eq!(load_mapping(&path).unwrap(), mapping);
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let mut mapping = GameMapping::new();
        mapping.insert("a.exe", GameRecord::new(["A", "a.exe"]));

        let json = to_pretty_json(&mapping).unwrap();
        assert_eq!(json, "{\n  \"a.exe\": [\n    \"A\",\n    \"a.exe\"\n  ]\n}\n");
    }
}
