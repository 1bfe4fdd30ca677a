//! Atomic file operations for the backing stores.
//!
//! Every mutation rewrites its whole table, so a plain in-place overwrite
//! would leave a truncated file behind a mid-write crash. Writes go to a
//! temp file, fsync, then rename over the target.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Write content to a file atomically.
///
/// Writes to a sibling `.tmp` file, syncs it to disk, then renames it over
/// the target path. If any step fails, the original file (if any) remains
/// untouched.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    {
        let file = File::create(&temp_path).map_err(|e| map_permission(e, path))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content)?;
        writer.flush()?;
        // Sync to disk before rename
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Create the file (and parent directories) if it does not exist, and verify
/// it is readable and writable.
///
/// # Errors
///
/// Returns [`Error::Permission`] when the file cannot be opened read-write.
pub fn ensure_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| map_permission(e, path))?;

    Ok(())
}

/// Read a whole file into a string, mapping permission failures.
///
/// # Errors
///
/// Returns [`Error::Permission`] when the file is not readable.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| map_permission(e, path))
}

/// Size of a file in bytes; 0 when it does not exist.
#[must_use]
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn map_permission(err: std::io::Error, path: &Path) -> Error {
    if err.kind() == ErrorKind::PermissionDenied {
        Error::Permission {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io(err)
    }
}
