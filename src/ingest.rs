//! Row formats consumed from external tools.
//!
//! The document clauser and the classification engine are external
//! collaborators; this module defines the tabular interfaces the facade
//! accepts from them and the CSV readers for their output files.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// One pre-classified clause pair produced by the document clauser.
///
/// Spans are byte offsets into the ingested text. `predicted_classes` uses
/// the delimited integer encoding; legacy NA sentinels are dropped on
/// ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRow {
    pub c1_start: usize,
    pub c1_end: usize,
    pub c2_start: usize,
    pub c2_end: usize,
    #[serde(default)]
    pub linkage_words: String,
    #[serde(default)]
    pub predicted_classes: String,
}

/// One classification-engine result row, applied as a partial update to an
/// existing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionRow {
    pub sequence_id: u32,
    #[serde(default)]
    pub linkage_words: String,
    #[serde(default)]
    pub predicted_classes: String,
    #[serde(default)]
    pub reasoning: String,
}

/// Read clauser output rows from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a row fails to parse.
pub fn read_seed_rows(path: &Path) -> Result<Vec<SeedRow>> {
    read_rows(path)
}

/// Read classification-engine output rows from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a row fails to parse.
pub fn read_prediction_rows(path: &Path) -> Result<Vec<PredictionRow>> {
    read_rows(path)
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
