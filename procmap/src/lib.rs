//! # procmap - process mapping maintenance
//!
//! The activity tracker identifies running games through a JSON mapping of
//! executable names to `[gameName, keyword..., executableName]` records.
//! procmap loads that file, repairs records whose last element drifted away
//! from their key, and produces the sorted and CSV views of it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ mapping.json │────▶│   Loader    │────▶│  Validation  │────▶│   Writer    │
//! │              │     │  (schema)   │     │   (repair)   │     │   (JSON)    │
//! └──────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!                                  ┌──────────────┼──────────────┐
//!                                  ▼              ▼              ▼
//!                              sorted JSON       CSV          lookup
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use procmap::{load_mapping, save_mapping, validate_and_repair};
//!
//! let mut mapping = load_mapping("games/process_mapping.json")?;
//! for diag in validate_and_repair(&mut mapping)? {
//!     eprintln!("{diag}");
//! }
//! save_mapping("games/process_mapping.json", &mapping)?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Mapping, record and diagnostic types
//! - [`loader`] - Load and save mapping files
//! - [`validation`] - Schema check and echo repair
//! - [`export`] - CSV export and sorted rewrite
//! - [`lookup`] - Process lookup and search
//! - [`pipeline`] - Load, validate and write in one call
//! - [`config`] - Path resolution
//! - [`logs`] - Operator log lines

// Core modules
pub mod error;
pub mod models;

// Configuration and logging
pub mod config;
pub mod logs;

// Loading
pub mod loader;

// Validation
pub mod validation;

// Consumers
pub mod export;
pub mod lookup;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ExportError,
    LoadError,
    ProcmapError,
    ProcmapResult,
    ValidationError,
    WriteError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Diagnostic,
    GameMapping,
    GameRecord,
    ValidationReport,
};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use loader::{load_mapping, parse_mapping, save_mapping, to_pretty_json};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    find_violations,
    repair_with_report,
    validate_and_repair,
    validate_process_mapping,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{
    export_csv,
    sorted_json,
    to_csv_string,
    write_csv,
    write_sorted,
    CsvLayout,
};

// =============================================================================
// Re-exports - Lookup
// =============================================================================

pub use lookup::{display_name, find_process, search};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{validate_file, ValidateOptions, ValidateOutcome};

pub use config::Config;
