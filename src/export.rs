//! Flattened export projection.
//!
//! The export is a read-only join of all three tables, one row per
//! sequence, written as CSV. Conversion to xlsx/ods and report generation
//! happen outside this crate.

use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::storage::file::atomic_write;

/// Export column order, kept stable for downstream spreadsheets.
pub const EXPORT_COLUMNS: [&str; 15] = [
    "sequence_id",
    "c1",
    "c1_start",
    "c1_end",
    "c2",
    "c2_start",
    "c2_end",
    "linkage_words",
    "predicted_classes",
    "predicted_classes_name",
    "corrected_classes",
    "corrected_classes_name",
    "window_start",
    "window_end",
    "reasoning",
];

/// One flattened export row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub sequence_id: u32,
    pub c1: String,
    pub c1_start: usize,
    pub c1_end: usize,
    pub c2: String,
    pub c2_start: usize,
    pub c2_end: usize,
    pub linkage_words: String,
    pub predicted_classes: String,
    pub predicted_classes_name: String,
    pub corrected_classes: String,
    pub corrected_classes_name: String,
    pub window_start: usize,
    pub window_end: usize,
    pub reasoning: String,
}

/// Serialize export rows to CSV bytes with the fixed column order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_csv_bytes(rows: &[ExportRow]) -> Result<Vec<u8>> {
    crate::storage::schema::table_to_bytes(&EXPORT_COLUMNS, rows)
}

/// Write export rows to a CSV file atomically.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_csv(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let bytes = to_csv_bytes(rows)?;
    atomic_write(path, &bytes)
}
