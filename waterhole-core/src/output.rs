// CSV output for the two result tables

use crate::error::{CoreError, Result};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::info;
use waterhole_scanner::{ErrorRow, ProbeReport, ResultRow};

pub const RESULT_HEADERS: [&str; 2] = ["http_response", "website"];
pub const ERROR_HEADERS: [&str; 2] = ["error_type", "website"];

/// Write responses as `http_response,website`
pub fn write_results(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let writer = open_table(path)?;
    fill_table(writer, path, &RESULT_HEADERS, rows)
}

/// Write failures as `error_type,website`
pub fn write_errors(path: &Path, rows: &[ErrorRow]) -> Result<()> {
    let writer = open_table(path)?;
    fill_table(writer, path, &ERROR_HEADERS, rows)
}

/// Write both tables of a finished run.
///
/// Both files are opened before any row is written, so an unwritable error
/// file never leaves a fresh result file behind.
pub fn write_report(report: &ProbeReport, results_path: &Path, errors_path: &Path) -> Result<()> {
    let results_writer = open_table(results_path)?;
    let errors_writer = open_table(errors_path)?;

    fill_table(results_writer, results_path, &RESULT_HEADERS, &report.results)?;
    fill_table(errors_writer, errors_path, &ERROR_HEADERS, &report.errors)?;

    info!(
        "Wrote {} rows to {} and {} rows to {}",
        report.results.len(),
        results_path.display(),
        report.errors.len(),
        errors_path.display()
    );
    Ok(())
}

fn output_error(path: &Path, source: csv::Error) -> CoreError {
    CoreError::Output {
        path: path.display().to_string(),
        source,
    }
}

fn open_table(path: &Path) -> Result<Writer<File>> {
    WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| output_error(path, e))
}

// The header is written by hand so an empty table still gets one.
fn fill_table<T: Serialize>(
    mut writer: Writer<File>,
    path: &Path,
    headers: &[&str],
    rows: &[T],
) -> Result<()> {
    writer
        .write_record(headers)
        .map_err(|e| output_error(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| output_error(path, e))?;
    }
    writer.flush()?;

    Ok(())
}
