//! Load → validate → write, as one call.
//!
//! # Example
//!
//! ```rust,ignore
//! use procmap::pipeline::{validate_file, ValidateOptions};
//!
//! let outcome = validate_file(
//!     "games/process_mapping.json",
//!     ValidateOptions { write_back: true, ..Default::default() },
//! )?;
//! println!("{} records repaired", outcome.report.diagnostics.len());
//! ```

use std::path::Path;

use crate::error::ProcmapResult;
use crate::loader::{load_mapping, save_mapping};
use crate::models::{GameMapping, ValidationReport};
use crate::validation::{find_violations, repair_with_report};

/// Options for [`validate_file`]
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Only report; never repair or write
    pub check_only: bool,

    /// Rewrite the source file when something was repaired
    pub write_back: bool,
}

/// Result of [`validate_file`]
#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    /// The mapping after the pass (unchanged in check-only mode)
    pub mapping: GameMapping,

    /// What the pass found
    pub report: ValidationReport,

    /// Whether the source file was rewritten
    pub written: bool,
}

/// Validate the mapping stored at `path`.
///
/// In check-only mode the mapping is returned as loaded. Otherwise
/// mismatches are repaired, and with `write_back` the file is rewritten if
/// (and only if) at least one record changed.
pub fn validate_file<P: AsRef<Path>>(path: P, options: ValidateOptions) -> ProcmapResult<ValidateOutcome> {
    let path = path.as_ref();
    let mut mapping = load_mapping(path)?;

    let report = if options.check_only {
        ValidationReport {
            checked: mapping.len(),
            diagnostics: find_violations(&mapping)?,
        }
    } else {
        repair_with_report(&mut mapping)?
    };

    let written = options.write_back && !options.check_only && !report.is_clean();
    if written {
        save_mapping(path, &mapping)?;
    }

    Ok(ValidateOutcome {
        mapping,
        report,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProcmapError, ValidationError};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_back_only_when_repaired() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        let clean = r#"{"a.exe": ["A", "a.exe"]}"#;
        fs::write(&path, clean).unwrap();

        let outcome = validate_file(&path, ValidateOptions { write_back: true, ..Default::default() }).unwrap();
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), clean);
    }

    #[test]
    fn test_write_back_repairs_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        fs::write(&path, r#"{"a.exe": ["A", "x"]}"#).unwrap();

        let outcome = validate_file(&path, ValidateOptions { write_back: true, ..Default::default() }).unwrap();
        assert!(outcome.written);
        assert_eq!(outcome.report.diagnostics.len(), 1);

        let again = validate_file(&path, ValidateOptions::default()).unwrap();
        assert!(again.report.is_clean());
    }

    #[test]
    fn test_check_only_never_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        let broken = r#"{"a.exe": ["A", "x"]}"#;
        fs::write(&path, broken).unwrap();

        let options = ValidateOptions { check_only: true, write_back: true };
        let outcome = validate_file(&path, options).unwrap();
        assert!(!outcome.written);
        assert_eq!(outcome.mapping.get("a.exe").unwrap().echo(), Some("x"));
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_errors_surface_as_top_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        fs::write(&path, r#"{"a.exe": []}"#).unwrap();

        let err = validate_file(&path, ValidateOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcmapError::Validation(ValidationError::MalformedRecord { ref key }) if key == "a.exe"
        ));

        let err = validate_file(dir.path().join("nope.json"), ValidateOptions::default()).unwrap_err();
        assert!(matches!(err, ProcmapError::Load(_)));
    }
}
