//! Initialize an empty annotation datastore.

use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::file::atomic_write;
use crate::storage::schema::{write_empty_table, RANGE_COLUMNS, SEQUENCE_COLUMNS};
use crate::storage::DatastorePaths;

#[derive(Serialize)]
struct InitOutput {
    data_dir: PathBuf,
    text: PathBuf,
    ranges: PathBuf,
    sequences: PathBuf,
}

/// Execute the init command.
///
/// Creates the data directory with an empty text file and header-only CSV
/// tables. With `--force`, existing files are reset to empty.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] when any backing file exists and
/// `--force` was not given.
pub fn execute(data_dir: &Path, force: bool, json: bool) -> Result<()> {
    let paths = DatastorePaths::in_dir(data_dir);

    if paths.any_exists() && !force {
        return Err(Error::AlreadyInitialized {
            path: data_dir.to_path_buf(),
        });
    }

    fs::create_dir_all(data_dir)?;
    atomic_write(&paths.text, b"")?;
    write_empty_table(&paths.ranges, &RANGE_COLUMNS)?;
    write_empty_table(&paths.sequences, &SEQUENCE_COLUMNS)?;

    // A reinitialized store restarts id allocation
    let counter = crate::storage::sequence::counter_path_for(&paths.sequences);
    if counter.exists() {
        fs::remove_file(&counter)?;
    }

    if json {
        super::print_json(&InitOutput {
            data_dir: data_dir.to_path_buf(),
            text: paths.text,
            ranges: paths.ranges,
            sequences: paths.sequences,
        })?;
    } else {
        println!(
            "{} annotation datastore at {}",
            "Initialized".green().bold(),
            data_dir.display()
        );
    }

    Ok(())
}
