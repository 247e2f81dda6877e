//! Runtime configuration.
//!
//! Resolution order for the mapping path: explicit value (CLI flag), then the
//! `GAME_DATA_JSON` environment variable (a `.env` file is loaded first by the
//! binary), then [`DEFAULT_MAPPING_PATH`].

use std::path::PathBuf;

/// Mapping location used when nothing else is configured.
pub const DEFAULT_MAPPING_PATH: &str = "games/process_mapping.json";

/// Environment variable holding the mapping path.
pub const MAPPING_PATH_ENV: &str = "GAME_DATA_JSON";

/// Environment variable holding the `tracing` filter.
pub const LOG_FILTER_ENV: &str = "PROCMAP_LOG";

/// Default sort-and-rewrite destination.
pub const DEFAULT_SORTED_OUTPUT: &str = "process_mapping_sort.json";

/// Default CSV destination.
pub const DEFAULT_CSV_OUTPUT: &str = "games.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mapping file to operate on
    pub mapping_path: PathBuf,
    /// Suppress info/success log lines
    pub quiet: bool,
}

impl Config {
    /// Build from an optional CLI override and the process environment.
    pub fn resolve(mapping_override: Option<PathBuf>, quiet: bool) -> Self {
        Self::resolve_with(mapping_override, std::env::var(MAPPING_PATH_ENV).ok(), quiet)
    }

    /// Same as [`Config::resolve`], with the env value passed in.
    pub fn resolve_with(mapping_override: Option<PathBuf>, env_value: Option<String>, quiet: bool) -> Self {
        let mapping_path = mapping_override
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_PATH));

        Self { mapping_path, quiet }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
            quiet: false,
        }
    }
}
