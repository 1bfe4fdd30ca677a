//! Clause-pair sequence table backed by a CSV file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::storage::file::atomic_write;
use crate::storage::schema::{self, SEQUENCE_COLUMNS, SEQUENCE_TABLE};
use crate::storage::{Cache, SequenceRepository};

/// One row of the sequence table.
///
/// The classification fields hold the on-disk encoding: comma-joined
/// integer codes, empty when unset. Decoding lives in
/// [`crate::model::ClassSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRow {
    pub sequence_id: u32,
    pub c1_id: u32,
    pub c2_id: u32,
    pub linkage_words: String,
    pub predicted_classes: String,
    pub corrected_classes: String,
    pub reasoning: String,
}

impl SequenceRow {
    /// True when either endpoint references the clause id.
    #[must_use]
    pub fn references(&self, clause_id: u32) -> bool {
        self.c1_id == clause_id || self.c2_id == clause_id
    }

    /// True when this row links the same unordered clause pair.
    #[must_use]
    pub fn same_pair(&self, a: u32, b: u32) -> bool {
        (self.c1_id == a && self.c2_id == b) || (self.c1_id == b && self.c2_id == a)
    }
}

/// Initial field values for a new sequence row.
///
/// Defaults are all empty: no linkage words, unset classifications, no
/// reasoning.
#[derive(Debug, Clone, Default)]
pub struct SequenceFields {
    pub linkage_words: String,
    pub predicted_classes: String,
    pub corrected_classes: String,
    pub reasoning: String,
}

impl SequenceFields {
    /// Set the linkage words encoding.
    #[must_use]
    pub fn with_linkage_words(mut self, linkage_words: &str) -> Self {
        self.linkage_words = linkage_words.to_string();
        self
    }

    /// Set the predicted classes encoding.
    #[must_use]
    pub fn with_predicted_classes(mut self, predicted_classes: &str) -> Self {
        self.predicted_classes = predicted_classes.to_string();
        self
    }

    /// Set the reasoning text.
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: &str) -> Self {
        self.reasoning = reasoning.to_string();
        self
    }
}

/// A partial update: only fields that are `Some` are overwritten.
#[derive(Debug, Clone, Default)]
pub struct SequencePatch {
    pub linkage_words: Option<String>,
    pub predicted_classes: Option<String>,
    pub corrected_classes: Option<String>,
    pub reasoning: Option<String>,
}

impl SequencePatch {
    /// Patch the linkage words.
    #[must_use]
    pub fn with_linkage_words(mut self, linkage_words: &str) -> Self {
        self.linkage_words = Some(linkage_words.to_string());
        self
    }

    /// Patch the predicted classes encoding.
    #[must_use]
    pub fn with_predicted_classes(mut self, predicted_classes: &str) -> Self {
        self.predicted_classes = Some(predicted_classes.to_string());
        self
    }

    /// Patch the corrected classes encoding.
    #[must_use]
    pub fn with_corrected_classes(mut self, corrected_classes: &str) -> Self {
        self.corrected_classes = Some(corrected_classes.to_string());
        self
    }

    /// Patch the reasoning text.
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: &str) -> Self {
        self.reasoning = Some(reasoning.to_string());
        self
    }

    fn apply(self, row: &mut SequenceRow) {
        if let Some(linkage_words) = self.linkage_words {
            row.linkage_words = linkage_words;
        }
        if let Some(predicted) = self.predicted_classes {
            row.predicted_classes = predicted;
        }
        if let Some(corrected) = self.corrected_classes {
            row.corrected_classes = corrected;
        }
        if let Some(reasoning) = self.reasoning {
            row.reasoning = reasoning;
        }
    }
}

/// In-memory table state: the rows plus the id high-water mark.
#[derive(Debug)]
struct SequenceTable {
    rows: Vec<SequenceRow>,
    next_id: u32,
}

/// Sequence store over a `sequences.csv` file.
///
/// A given unordered clause pair appears at most once. The next id to hand
/// out is a high-water mark kept in a sibling `.next` file, so allocation
/// never dips below a previously issued id: a deleted id is never handed
/// out again, even after deleting the highest row or reopening the store,
/// and surviving ids keep their values.
#[derive(Debug)]
pub struct SequenceCsvStore {
    path: PathBuf,
    counter_path: PathBuf,
    cache: Cache<SequenceTable>,
}

impl SequenceCsvStore {
    /// Open the store, creating a header-only backing file when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Permission`] when the file is not readable and
    /// writable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        schema::ensure_table_file(&path, &SEQUENCE_COLUMNS)?;
        let counter_path = counter_path_for(&path);

        Ok(Self {
            path,
            counter_path,
            cache: Cache::Unloaded,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn table(&mut self) -> Result<&mut SequenceTable> {
        let path = &self.path;
        let counter_path = &self.counter_path;
        self.cache.load_with(|| load_table(path, counter_path))
    }

    fn rows(&mut self) -> Result<&mut Vec<SequenceRow>> {
        Ok(&mut self.table()?.rows)
    }

    fn persist(&mut self) -> Result<()> {
        let table = self.table()?;
        let bytes = schema::table_to_bytes(&SEQUENCE_COLUMNS, table.rows.as_slice())?;
        let counter = table.next_id.to_string();
        atomic_write(&self.path, &bytes)?;
        atomic_write(&self.counter_path, counter.as_bytes())
    }

    fn matching_index(&mut self, id: u32) -> Result<Option<usize>> {
        let matches: Vec<usize> = self
            .rows()?
            .iter()
            .enumerate()
            .filter(|(_, r)| r.sequence_id == id)
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [index] => Ok(Some(*index)),
            _ => Err(Error::DuplicateEntry {
                table: SEQUENCE_TABLE,
                id,
            }),
        }
    }
}

pub(crate) fn counter_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".next");
    PathBuf::from(name)
}

fn load_table(path: &Path, counter_path: &Path) -> Result<SequenceTable> {
    schema::validate_header(path, SEQUENCE_TABLE, &SEQUENCE_COLUMNS)?;

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows: Vec<SequenceRow> = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }

    let max_id = rows.iter().map(|r| r.sequence_id).max().unwrap_or(0);
    let next_id = read_counter(counter_path).max(max_id + 1);
    debug!(path = %path.display(), rows = rows.len(), next_id, "loaded sequence table");

    Ok(SequenceTable { rows, next_id })
}

fn read_counter(path: &Path) -> u32 {
    let Ok(content) = std::fs::read_to_string(path) else {
        return 0;
    };
    match content.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(path = %path.display(), "unreadable id counter, falling back to the table maximum");
            0
        }
    }
}

impl SequenceRepository for SequenceCsvStore {
    fn create(
        &mut self,
        clause_a_id: u32,
        clause_b_id: u32,
        fields: SequenceFields,
    ) -> Result<Option<u32>> {
        let table = self.table()?;
        if table
            .rows
            .iter()
            .any(|r| r.same_pair(clause_a_id, clause_b_id))
        {
            return Ok(None);
        }

        let new_id = table.next_id;
        table.next_id += 1;
        table.rows.push(SequenceRow {
            sequence_id: new_id,
            c1_id: clause_a_id,
            c2_id: clause_b_id,
            linkage_words: fields.linkage_words,
            predicted_classes: fields.predicted_classes,
            corrected_classes: fields.corrected_classes,
            reasoning: fields.reasoning,
        });
        self.persist()?;

        Ok(Some(new_id))
    }

    fn read_by_id(&mut self, id: u32) -> Result<Option<SequenceRow>> {
        let index = self.matching_index(id)?;
        Ok(index.map(|i| self.rows().map(|rows| rows[i].clone())).transpose()?)
    }

    fn read_all(&mut self) -> Result<Vec<SequenceRow>> {
        Ok(self.rows()?.clone())
    }

    fn read_by_clause_id(&mut self, clause_id: u32) -> Result<Vec<SequenceRow>> {
        Ok(self
            .rows()?
            .iter()
            .filter(|r| r.references(clause_id))
            .cloned()
            .collect())
    }

    fn update(&mut self, id: u32, patch: SequencePatch) -> Result<bool> {
        let Some(index) = self.matching_index(id)? else {
            return Ok(false);
        };

        patch.apply(&mut self.rows()?[index]);
        self.persist()?;
        Ok(true)
    }

    fn delete(&mut self, id: u32) -> Result<bool> {
        let Some(index) = self.matching_index(id)? else {
            return Ok(false);
        };

        // No renumbering, and the high-water mark stays put
        self.rows()?.remove(index);
        self.persist()?;
        Ok(true)
    }

    fn validate(&self) -> Result<()> {
        schema::validate_header(&self.path, SEQUENCE_TABLE, &SEQUENCE_COLUMNS)
    }

    fn clear(&mut self) -> Result<()> {
        let table = self.table()?;
        table.rows.clear();
        table.next_id = 1;
        self.persist()
    }
}
