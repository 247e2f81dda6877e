//! Consumers of a validated mapping: CSV export and sort-and-rewrite.
//!
//! Both operate on a key-sorted view of the mapping and never modify it.

use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, ExportResult, WriteResult};
use crate::loader::{save_mapping, to_pretty_json};
use crate::logs::log_warning;
use crate::models::GameMapping;

/// Number of keyword columns in the fixed layout.
pub const FIXED_KEYWORD_COLUMNS: usize = 4;

/// Filler for empty fixed-layout keyword columns.
pub const KEYWORD_PLACEHOLDER: &str = "-";

/// CSV column layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CsvLayout {
    /// `Executable Names,Game Name,Keywords` with keywords joined by ", ".
    #[default]
    Joined,
    /// Four keyword columns, padded with `-`.
    Fixed,
}

impl CsvLayout {
    pub fn headers(&self) -> Vec<&'static str> {
        match self {
            CsvLayout::Joined => vec!["Executable Names", "Game Name", "Keywords"],
            CsvLayout::Fixed => vec![
                "Executable Names",
                "Game Name",
                "Keyword 1",
                "Keyword 2",
                "Keyword 3",
                "Keyword 4",
            ],
        }
    }
}

/// Write the mapping as CSV, one row per executable, sorted by executable.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(mapping: &GameMapping, layout: CsvLayout, out: W) -> ExportResult<usize> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(layout.headers())?;

    let sorted = mapping.sorted();
    let mut rows = 0;

    for (exe, record) in sorted.iter() {
        let game_name = record.game_name().ok_or_else(|| ExportError::MalformedRecord {
            key: exe.to_string(),
        })?;
        let keywords = record.keywords();

        let mut row = vec![exe.to_string(), game_name.to_string()];
        match layout {
            CsvLayout::Joined => row.push(keywords.join(", ")),
            CsvLayout::Fixed => {
                if keywords.len() > FIXED_KEYWORD_COLUMNS {
                    log_warning(format!(
                        "{} has {} keywords, only the first {} are exported",
                        exe,
                        keywords.len(),
                        FIXED_KEYWORD_COLUMNS
                    ));
                }
                row.extend(
                    keywords
                        .iter()
                        .map(String::as_str)
                        .chain(std::iter::repeat(KEYWORD_PLACEHOLDER))
                        .take(FIXED_KEYWORD_COLUMNS)
                        .map(String::from),
                );
            }
        }

        writer.write_record(&row)?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// CSV export into a `String`.
pub fn to_csv_string(mapping: &GameMapping, layout: CsvLayout) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_csv(mapping, layout, &mut buf)?;
    String::from_utf8(buf).map_err(|e| {
        ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// CSV export to a file.
pub fn export_csv<P: AsRef<Path>>(mapping: &GameMapping, layout: CsvLayout, path: P) -> ExportResult<usize> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(mapping, layout, file)
}

/// Key-sorted pretty JSON copy of the mapping.
pub fn sorted_json(mapping: &GameMapping) -> WriteResult<String> {
    to_pretty_json(&mapping.sorted())
}

/// Write a key-sorted copy of the mapping to `path`.
pub fn write_sorted<P: AsRef<Path>>(mapping: &GameMapping, path: P) -> WriteResult<()> {
    save_mapping(path, &mapping.sorted())
}
