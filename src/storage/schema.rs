//! Table schemas and header validation.
//!
//! The CSV tables are header-validated, not schema-migrated: every required
//! column must be present in the header row, extra columns are ignored, and
//! the data itself is validated only on deserialization.

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::storage::file::atomic_write;

/// Table name used in schema error messages for the clause span table.
pub const RANGE_TABLE: &str = "clause";
/// Required columns of the clause span table.
pub const RANGE_COLUMNS: [&str; 3] = ["range_id", "start", "end"];

/// Table name used in schema error messages for the sequence table.
pub const SEQUENCE_TABLE: &str = "sequence";
/// Required columns of the sequence table.
pub const SEQUENCE_COLUMNS: [&str; 7] = [
    "sequence_id",
    "c1_id",
    "c2_id",
    "linkage_words",
    "predicted_classes",
    "corrected_classes",
    "reasoning",
];

/// Check that the file's header row contains every required column.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] for the first absent column, or an I/O
/// or CSV error if the header cannot be read.
pub fn validate_header(
    path: &Path,
    table: &'static str,
    required: &[&'static str],
) -> Result<()> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    for column in required {
        if !headers.iter().any(|h| h.trim() == *column) {
            return Err(Error::MissingColumn { column, table });
        }
    }

    Ok(())
}

/// Serialize rows into CSV bytes with a fixed column order.
///
/// The header is written explicitly from `columns` so that an empty table
/// still round-trips as a header-only file.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn table_to_bytes<S: Serialize>(columns: &[&str], rows: &[S]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))
}

/// Write a header-only table file atomically.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_empty_table(path: &Path, columns: &[&str]) -> Result<()> {
    let bytes = table_to_bytes::<()>(columns, &[])?;
    atomic_write(path, &bytes)
}

/// Create the table file with a header row if it does not exist yet.
///
/// An existing file is left untouched; its header is checked on first load.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn ensure_table_file(path: &Path, columns: &[&str]) -> Result<()> {
    if !path.exists() {
        write_empty_table(path, columns)?;
    }
    crate::storage::file::ensure_file(path)
}
