//! Flat-file repository layer.
//!
//! Each store owns one backing file and an in-memory cache of its full
//! contents. Loads are lazy (first access) and every mutation rewrites the
//! whole file through an atomic temp-file-then-rename. There is no locking:
//! the model assumes a single in-process writer, and no two facades should
//! point at the same files concurrently.

pub mod file;
pub mod range;
pub mod schema;
pub mod sequence;
pub mod text;

pub use range::{RangeCsvStore, RangeRow};
pub use sequence::{SequenceCsvStore, SequenceFields, SequencePatch, SequenceRow};
pub use text::{TxtTextStore, MAX_TEXT_SIZE_BYTES};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Backing-file locations for one annotation datastore.
#[derive(Debug, Clone)]
pub struct DatastorePaths {
    pub text: PathBuf,
    pub ranges: PathBuf,
    pub sequences: PathBuf,
}

impl DatastorePaths {
    /// Standard file layout inside a data directory.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            text: dir.join("text.txt"),
            ranges: dir.join("clauses.csv"),
            sequences: dir.join("sequences.csv"),
        }
    }

    /// True when every backing file exists.
    #[must_use]
    pub fn all_exist(&self) -> bool {
        self.text.exists() && self.ranges.exists() && self.sequences.exists()
    }

    /// True when any backing file exists.
    #[must_use]
    pub fn any_exists(&self) -> bool {
        self.text.exists() || self.ranges.exists() || self.sequences.exists()
    }
}

/// Cache state for a lazily loaded table.
///
/// A tagged state instead of a "populated" flag beside possibly stale data,
/// so a half-initialized cache is unrepresentable.
#[derive(Debug, Default)]
pub(crate) enum Cache<T> {
    #[default]
    Unloaded,
    Loaded(T),
}

impl<T> Cache<T> {
    /// Get the cached value, loading it first if this is the initial access.
    pub(crate) fn load_with(
        &mut self,
        load: impl FnOnce() -> Result<T>,
    ) -> Result<&mut T> {
        if let Self::Unloaded = self {
            *self = Self::Loaded(load()?);
        }
        match self {
            Self::Loaded(value) => Ok(value),
            Self::Unloaded => unreachable!("loaded above"),
        }
    }

    /// Replace the cached value after a successful write-through.
    pub(crate) fn set(&mut self, value: T) {
        *self = Self::Loaded(value);
    }
}

/// Read access to the reference text blob.
pub trait TextRepository {
    /// Full text, loaded from the backing file on first call.
    fn read_all(&mut self) -> Result<&str>;

    /// Substring for the half-open byte range `[start, end)`.
    fn read_by_range(&mut self, start: usize, end: usize) -> Result<String>;

    /// One past the last valid index; 0 for an empty text.
    fn end_index(&mut self) -> Result<usize>;

    /// Replace cache and backing file wholesale.
    fn write_file(&mut self, text: &str) -> Result<()>;

    /// Truncate the text to empty.
    fn clear(&mut self) -> Result<()>;
}

/// Access to the clause span table.
pub trait RangeRepository {
    /// Idempotently create a span; an existing `(start, end)` row returns
    /// its id unchanged.
    fn create(&mut self, start: usize, end: usize) -> Result<u32>;

    fn read_by_id(&mut self, id: u32) -> Result<Option<RangeRow>>;

    fn read_all(&mut self) -> Result<Vec<RangeRow>>;

    /// Overwrite a span; false when the id is absent.
    fn update(&mut self, id: u32, start: usize, end: usize) -> Result<bool>;

    /// Re-check the backing file header against the required columns.
    fn validate(&self) -> Result<()>;

    /// Drop every row, leaving a header-only file.
    fn clear(&mut self) -> Result<()>;
}

/// Access to the clause-pair sequence table.
pub trait SequenceRepository {
    /// Create a sequence; `None` when the unordered clause pair already
    /// exists as a row.
    fn create(
        &mut self,
        clause_a_id: u32,
        clause_b_id: u32,
        fields: SequenceFields,
    ) -> Result<Option<u32>>;

    fn read_by_id(&mut self, id: u32) -> Result<Option<SequenceRow>>;

    fn read_all(&mut self) -> Result<Vec<SequenceRow>>;

    /// Rows where either endpoint matches the clause id.
    fn read_by_clause_id(&mut self, clause_id: u32) -> Result<Vec<SequenceRow>>;

    /// Partial update; only fields present in the patch are overwritten.
    /// False when the id is absent.
    fn update(&mut self, id: u32, patch: SequencePatch) -> Result<bool>;

    /// Remove a row; false when the id is absent. Surviving ids keep their
    /// values and deleted ids are never reused.
    fn delete(&mut self, id: u32) -> Result<bool>;

    /// Re-check the backing file header against the required columns.
    fn validate(&self) -> Result<()>;

    /// Drop every row, leaving a header-only file.
    fn clear(&mut self) -> Result<()>;
}
