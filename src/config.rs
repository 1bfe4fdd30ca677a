//! Data-directory resolution.
//!
//! The datastore lives in a single directory holding the three backing
//! files. Precedence: the `--data-dir` flag (or `RHETOR_DATA`, wired
//! through clap's env support) first, then the platform data directory.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Platform default data directory (e.g. `~/.local/share/rhetor`).
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "rhetor", "rhetor").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Resolve the effective data directory from an optional override.
///
/// # Errors
///
/// Returns [`Error::Config`] when no override is given and the platform
/// data directory cannot be determined.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_data_dir()
            .ok_or_else(|| Error::Config("could not determine a data directory".to_string())),
    }
}
