//! Echo validation and repair for process mappings.
//!
//! Every record must end with the key it is stored under. A mismatch is
//! recoverable: the last element is overwritten with the key and a
//! [`Diagnostic`] records what was there before. An empty record has no last
//! element at all and aborts the pass.
//!
//! # Example
//!
//! ```rust,ignore
//! use procmap::{parse_mapping, validate_and_repair};
//!
//! let mut mapping = parse_mapping(r#"{"game.exe": ["Game Title", "action", "wrong_key"]}"#)?;
//! let diagnostics = validate_and_repair(&mut mapping)?;
//!
//! assert_eq!(diagnostics[0].found, "wrong_key");
//! assert_eq!(mapping.get("game.exe").unwrap().echo(), Some("game.exe"));
//! ```

pub mod schema;

use crate::error::{ValidationError, ValidationResult};
use crate::models::{Diagnostic, GameMapping, ValidationReport};

pub use schema::validate_process_mapping;

/// Report every record whose last element differs from its key, without
/// touching the mapping.
///
/// Fails on the first empty record (in key order).
pub fn find_violations(mapping: &GameMapping) -> ValidationResult<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    for (key, record) in mapping.iter() {
        let last = record.echo().ok_or_else(|| ValidationError::MalformedRecord {
            key: key.to_string(),
        })?;

        if last != key {
            diagnostics.push(Diagnostic {
                key: key.to_string(),
                found: last.to_string(),
            });
        }
    }

    Ok(diagnostics)
}

/// Repair every echo mismatch in place and return the diagnostics in
/// detection order.
///
/// The whole mapping is checked before anything is written, so on
/// [`ValidationError::MalformedRecord`] the mapping is left unchanged.
pub fn validate_and_repair(mapping: &mut GameMapping) -> ValidationResult<Vec<Diagnostic>> {
    let diagnostics = find_violations(mapping)?;

    for diag in &diagnostics {
        if let Some(record) = mapping.get_mut(&diag.key) {
            record.replace_echo(&diag.key);
            tracing::debug!(key = %diag.key, found = %diag.found, "repaired record echo");
        }
    }

    Ok(diagnostics)
}

/// [`validate_and_repair`] wrapped into a [`ValidationReport`].
pub fn repair_with_report(mapping: &mut GameMapping) -> ValidationResult<ValidationReport> {
    let diagnostics = validate_and_repair(mapping)?;
    Ok(ValidationReport {
        checked: mapping.len(),
        diagnostics,
    })
}
