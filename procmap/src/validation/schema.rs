//! Structural check of a raw mapping document against JSON Schema Draft 7.
//!
//! Runs before the typed decode so that every shape problem in a hand-edited
//! file is listed at once instead of stopping at the first one.
//!
//! The schema is embedded at compile time from
//! `schemas/process-mapping.json` and compiled once.

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

static PROCESS_MAPPING_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    let schema: Value = serde_json::from_str(include_str!("../../schemas/process-mapping.json"))
        .expect("Invalid embedded schema");
    jsonschema::draft7::new(&schema).expect("Invalid embedded schema")
});

/// Validate a raw document against the process mapping schema.
///
/// # Returns
/// * `Ok(())` when the document is an object of string arrays
/// * `Err(Vec<String>)` with one message per violation
///
/// # Example
/// ```ignore
/// use serde_json::json;
/// use procmap::validate_process_mapping;
///
/// assert!(validate_process_mapping(&json!({ "a.exe": ["A", "a.exe"] })).is_ok());
/// assert!(validate_process_mapping(&json!({ "a.exe": "A" })).is_err());
/// ```
pub fn validate_process_mapping(data: &Value) -> Result<(), Vec<String>> {
    let errors: Vec<String> = PROCESS_MAPPING_VALIDATOR
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
