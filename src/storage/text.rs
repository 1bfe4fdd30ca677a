//! Reference text store backed by a raw UTF-8 file.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::file;
use crate::storage::{Cache, TextRepository};

/// Upper bound on the text file size, so a stray file cannot pull an
/// unbounded blob into memory.
pub const MAX_TEXT_SIZE_BYTES: u64 = 2_000_000;

/// Text store over a single `.txt` file.
///
/// The blob is immutable until replaced: [`TextRepository::write_file`]
/// overwrites the whole file, there are no partial edits.
#[derive(Debug)]
pub struct TxtTextStore {
    path: PathBuf,
    cache: Cache<String>,
}

impl TxtTextStore {
    /// Open the store, creating the backing file (and parents) when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Permission`] when the file is not readable and
    /// writable, or [`Error::TextTooLarge`] when it exceeds
    /// [`MAX_TEXT_SIZE_BYTES`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        file::ensure_file(&path)?;
        check_size(&path)?;

        Ok(Self {
            path,
            cache: Cache::Unloaded,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn check_size(path: &Path) -> Result<()> {
    let size = file::file_size(path);
    if size > MAX_TEXT_SIZE_BYTES {
        return Err(Error::TextTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_TEXT_SIZE_BYTES,
        });
    }
    Ok(())
}

fn load(path: &Path) -> Result<String> {
    check_size(path)?;
    let text = file::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded text blob");
    Ok(text)
}

impl TextRepository for TxtTextStore {
    fn read_all(&mut self) -> Result<&str> {
        let path = &self.path;
        Ok(self.cache.load_with(|| load(path))?.as_str())
    }

    fn read_by_range(&mut self, start: usize, end: usize) -> Result<String> {
        if end < start {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: "end must not be lower than start".to_string(),
            });
        }

        let text = self.read_all()?;
        let length = text.len();
        if end > length {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: format!("end exceeds text length {length}"),
            });
        }

        text.get(start..end)
            .map(ToString::to_string)
            .ok_or_else(|| Error::InvalidRange {
                start,
                end,
                reason: "bounds split a UTF-8 code point".to_string(),
            })
    }

    fn end_index(&mut self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    fn write_file(&mut self, text: &str) -> Result<()> {
        file::atomic_write(&self.path, text.as_bytes())?;
        self.cache.set(text.to_string());
        debug!(path = %self.path.display(), bytes = text.len(), "replaced text blob");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.write_file("")
    }
}
