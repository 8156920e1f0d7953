// Loading of the path and scope lists

use crate::error::{CoreError, Result};
use csv::{ReaderBuilder, Trim};
use std::path::Path;
use tracing::debug;

/// Load a header-less, one-entry-per-line list.
///
/// Only the first column of each record is used. Blank lines and lines
/// starting with `#` are skipped.
pub fn load_list(path: &Path) -> Result<Vec<String>> {
    let input_error = |source: csv::Error| CoreError::Input {
        path: path.display().to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(input_error)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(input_error)?;
        let Some(first) = record.get(0) else {
            continue;
        };

        let entry = first.trim_start_matches('\u{feff}').trim();
        // Indented comments get past the reader's column-0 comment check
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        entries.push(entry.to_string());
    }

    if entries.is_empty() {
        return Err(CoreError::EmptyInput(path.display().to_string()));
    }

    debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
