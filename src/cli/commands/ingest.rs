//! Ingest a reference text and clauser / engine output.

use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ingest::{read_prediction_rows, read_seed_rows};
use crate::storage::MAX_TEXT_SIZE_BYTES;

#[derive(Serialize)]
struct IngestOutput {
    text_bytes: usize,
    sequences_created: usize,
}

/// Execute the ingest command: replace the reference text and, when clauser
/// output is given, build the clause and sequence tables from it.
///
/// # Errors
///
/// Returns [`Error::TextTooLarge`] for an oversized text file, or any
/// store/parse failure.
pub fn execute(
    text_path: &Path,
    sequences_path: Option<&Path>,
    data_dir: &Path,
    json: bool,
) -> Result<()> {
    let size = fs::metadata(text_path)?.len();
    if size > MAX_TEXT_SIZE_BYTES {
        return Err(Error::TextTooLarge {
            path: text_path.to_path_buf(),
            size,
            max: MAX_TEXT_SIZE_BYTES,
        });
    }
    let text = fs::read_to_string(text_path)?;

    let mut dao = super::open_dao(data_dir)?;
    dao.build_text_datastore(&text)?;

    let mut sequences_created = 0;
    if let Some(path) = sequences_path {
        let rows = read_seed_rows(path)?;
        sequences_created = dao.build_clause_datastores(&rows)?;
    }

    if json {
        super::print_json(&IngestOutput {
            text_bytes: text.len(),
            sequences_created,
        })?;
    } else {
        println!(
            "{} {} bytes of text, {} sequences",
            "Ingested".green().bold(),
            text.len(),
            sequences_created
        );
    }

    Ok(())
}

#[derive(Serialize)]
struct PredictionsOutput {
    rows: usize,
    applied: usize,
}

/// Execute the predictions command: apply engine output rows as partial
/// updates to existing sequences.
///
/// # Errors
///
/// Returns any store or parse failure.
pub fn execute_predictions(file: &Path, data_dir: &Path, json: bool) -> Result<()> {
    let rows = read_prediction_rows(file)?;

    let mut dao = super::open_dao(data_dir)?;
    let applied = dao.update_sequence_datastores(&rows)?;

    if json {
        super::print_json(&PredictionsOutput {
            rows: rows.len(),
            applied,
        })?;
    } else {
        println!(
            "{} {} of {} prediction rows",
            "Applied".green().bold(),
            applied,
            rows.len()
        );
    }

    Ok(())
}
