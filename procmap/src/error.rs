//! Error types for the process mapping tooling.
//!
//! - [`LoadError`] - reading and decoding the mapping file
//! - [`ValidationError`] - fatal problems found by the repair pass
//! - [`ExportError`] - CSV export failures
//! - [`WriteError`] - persisting a mapping back to disk
//! - [`ProcmapError`] - top-level error wrapping all of the above
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading a mapping file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not an object of string arrays.
    #[error("Mapping does not match the expected shape: {}", errors.join("; "))]
    Schema { errors: Vec<String> },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Fatal errors raised by the validation pass.
///
/// Invariant violations are not errors: they are repaired and reported as
/// [`crate::models::Diagnostic`] values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A record has no elements, so there is no last element to check.
    #[error("Malformed record for '{key}': record has no elements")]
    MalformedRecord { key: String },
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors during CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record has no game name to export.
    #[error("Malformed record for '{key}': record has no elements")]
    MalformedRecord { key: String },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the output failed.
    #[error("Failed to write CSV: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while persisting a mapping.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Serialization failed.
    #[error("Failed to serialize mapping: {0}")]
    Json(#[from] serde_json::Error),

    /// The destination could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Top-level Errors
// =============================================================================

/// Top-level error for a full load → validate → write run.
#[derive(Debug, Error)]
pub enum ProcmapError {
    /// Load error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Export error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Write error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for the validation pass.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for CSV export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for whole runs.
pub type ProcmapResult<T> = Result<T, ProcmapError>;
