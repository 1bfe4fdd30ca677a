//! Command handlers.
//!
//! This is the catch-all controller boundary: handlers are thin glue over
//! [`AnnotationDao`], and every error propagates to `main` which logs it
//! and exits with the category code. Nothing here retries or rolls back.

pub mod clause;
pub mod clear;
pub mod export;
pub mod ingest;
pub mod init;
pub mod sequence;
pub mod text;

use std::path::Path;

use crate::dao::AnnotationDao;
use crate::error::{Error, Result};
use crate::storage::{DatastorePaths, RangeCsvStore, SequenceCsvStore, TxtTextStore};

/// The concrete facade the CLI operates on.
pub(crate) type Dao = AnnotationDao<TxtTextStore, RangeCsvStore, SequenceCsvStore>;

/// Open the datastore in a directory, failing when it was never initialized.
pub(crate) fn open_dao(data_dir: &Path) -> Result<Dao> {
    let paths = DatastorePaths::in_dir(data_dir);
    if !paths.all_exist() {
        return Err(Error::NotInitialized);
    }
    AnnotationDao::open(&paths)
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
