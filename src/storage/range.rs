//! Clause span table backed by a CSV file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::file::atomic_write;
use crate::storage::schema::{self, RANGE_COLUMNS, RANGE_TABLE};
use crate::storage::{Cache, RangeRepository};

/// One row of the clause span table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRow {
    pub range_id: u32,
    pub start: usize,
    pub end: usize,
}

/// Clause span store over a `clauses.csv` file.
///
/// Creation is idempotent on `(start, end)` and rows are never deleted;
/// the table only ever grows or gets updated in place.
#[derive(Debug)]
pub struct RangeCsvStore {
    path: PathBuf,
    cache: Cache<Vec<RangeRow>>,
}

impl RangeCsvStore {
    /// Open the store, creating a header-only backing file when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Permission`] when the file is not readable and
    /// writable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        schema::ensure_table_file(&path, &RANGE_COLUMNS)?;

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

    fn rows(&mut self) -> Result<&mut Vec<RangeRow>> {
        let path = &self.path;
        self.cache.load_with(|| load_rows(path))
    }

    fn persist(&mut self) -> Result<()> {
        let rows = self.rows()?;
        let bytes = schema::table_to_bytes(&RANGE_COLUMNS, rows.as_slice())?;
        atomic_write(&self.path, &bytes)
    }
}

fn load_rows(path: &Path) -> Result<Vec<RangeRow>> {
    schema::validate_header(path, RANGE_TABLE, &RANGE_COLUMNS)?;

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded clause table");
    Ok(rows)
}

impl RangeRepository for RangeCsvStore {
    fn create(&mut self, start: usize, end: usize) -> Result<u32> {
        if end < start {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: "end must not be lower than start".to_string(),
            });
        }

        let rows = self.rows()?;
        if let Some(existing) = rows.iter().find(|r| r.start == start && r.end == end) {
            return Ok(existing.range_id);
        }

        let new_id = rows.iter().map(|r| r.range_id).max().unwrap_or(0) + 1;
        rows.push(RangeRow {
            range_id: new_id,
            start,
            end,
        });
        self.persist()?;

        Ok(new_id)
    }

    fn read_by_id(&mut self, id: u32) -> Result<Option<RangeRow>> {
        let matches: Vec<RangeRow> = self
            .rows()?
            .iter()
            .filter(|r| r.range_id == id)
            .copied()
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(*row)),
            _ => Err(Error::DuplicateEntry {
                table: RANGE_TABLE,
                id,
            }),
        }
    }

    fn read_all(&mut self) -> Result<Vec<RangeRow>> {
        Ok(self.rows()?.clone())
    }

    fn update(&mut self, id: u32, start: usize, end: usize) -> Result<bool> {
        if end < start {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: "end must not be lower than start".to_string(),
            });
        }

        let rows = self.rows()?;
        let matches: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.range_id == id)
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Ok(false),
            [index] => {
                rows[*index].start = start;
                rows[*index].end = end;
                self.persist()?;
                Ok(true)
            }
            _ => Err(Error::DuplicateEntry {
                table: RANGE_TABLE,
                id,
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        schema::validate_header(&self.path, RANGE_TABLE, &RANGE_COLUMNS)
    }

    fn clear(&mut self) -> Result<()> {
        self.rows()?.clear();
        self.persist()
    }
}
