//! Facade joining the three stores into domain objects.
//!
//! The DAO is the only component that sees more than one table at a time:
//! it resolves sequence rows against the clause table, slices clause text
//! out of the blob, and enforces referential integrity. Single-table
//! operations delegate to the matching repository.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::export::ExportRow;
use crate::ingest::{PredictionRow, SeedRow};
use crate::model::{ClassSet, Clause, Sequence};
use crate::storage::{
    DatastorePaths, RangeCsvStore, RangeRepository, RangeRow, SequenceCsvStore, SequenceFields,
    SequencePatch, SequenceRepository, SequenceRow, TextRepository, TxtTextStore,
};

/// Delimiter joining linkage words inside a single table field.
const LINKAGE_DELIMITER: char = ',';

/// Data-access facade over one annotation datastore.
///
/// Owns all three stores for the lifetime of a session; no other writer may
/// touch the backing files while it is alive. Generic over the repository
/// traits so alternative backends (or test doubles) can be slotted in.
#[derive(Debug)]
pub struct AnnotationDao<T, R, S> {
    text: T,
    ranges: R,
    sequences: S,
}

impl AnnotationDao<TxtTextStore, RangeCsvStore, SequenceCsvStore> {
    /// Open the standard TXT + CSV backed datastore, creating any missing
    /// backing files.
    ///
    /// # Errors
    ///
    /// Returns an error when a backing file is not readable/writable or the
    /// text file exceeds the size cap.
    pub fn open(paths: &DatastorePaths) -> Result<Self> {
        Ok(Self::new(
            TxtTextStore::open(&paths.text)?,
            RangeCsvStore::open(&paths.ranges)?,
            SequenceCsvStore::open(&paths.sequences)?,
        ))
    }
}

impl<T, R, S> AnnotationDao<T, R, S>
where
    T: TextRepository,
    R: RangeRepository,
    S: SequenceRepository,
{
    /// Compose a facade from already-open repositories.
    pub fn new(text: T, ranges: R, sequences: S) -> Self {
        Self {
            text,
            ranges,
            sequences,
        }
    }

    // ── Text ──────────────────────────────────────────────────

    /// Full reference text.
    ///
    /// # Errors
    ///
    /// Propagates text store failures.
    pub fn get_text(&mut self) -> Result<String> {
        Ok(self.text.read_all()?.to_string())
    }

    /// Substring of the reference text for `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for out-of-bounds or inverted bounds.
    pub fn get_text_range(&mut self, start: usize, end: usize) -> Result<String> {
        self.text.read_by_range(start, end)
    }

    /// One past the last valid text index.
    ///
    /// # Errors
    ///
    /// Propagates text store failures.
    pub fn text_end_index(&mut self) -> Result<usize> {
        self.text.end_index()
    }

    /// Replace the reference text wholesale (ingestion entry point).
    ///
    /// # Errors
    ///
    /// Propagates text store failures.
    pub fn build_text_datastore(&mut self, text: &str) -> Result<()> {
        self.text.write_file(text)
    }

    // ── Clauses ───────────────────────────────────────────────

    /// Idempotently create a clause span, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `end < start`.
    pub fn create_clause(&mut self, start: usize, end: usize) -> Result<u32> {
        self.ranges.create(start, end)
    }

    /// All clause spans.
    ///
    /// # Errors
    ///
    /// Propagates range store failures.
    pub fn get_all_clauses(&mut self) -> Result<Vec<Clause>> {
        Ok(self
            .ranges
            .read_all()?
            .iter()
            .map(clause_from_row)
            .collect())
    }

    /// Clause id to text substring, sliced from the reference text.
    ///
    /// A clause whose span does not slice cleanly (stale offsets after a
    /// text replacement) maps to an empty string and logs a warning rather
    /// than failing the whole projection.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn get_all_clause_text(&mut self) -> Result<BTreeMap<u32, String>> {
        let text = self.get_text()?;
        let clauses = self.get_all_clauses()?;

        let mut clause_text = BTreeMap::new();
        for clause in clauses {
            let slice = match text.get(clause.start..clause.end) {
                Some(slice) => slice.to_string(),
                None => {
                    warn!(
                        clause_id = clause.id,
                        start = clause.start,
                        end = clause.end,
                        "clause span does not slice the current text"
                    );
                    String::new()
                }
            };
            clause_text.insert(clause.id, slice);
        }

        Ok(clause_text)
    }

    // ── Sequences ─────────────────────────────────────────────

    /// Number of sequence rows.
    ///
    /// # Errors
    ///
    /// Propagates sequence store failures.
    pub fn sequence_count(&mut self) -> Result<usize> {
        Ok(self.sequences.read_all()?.len())
    }

    /// A single sequence with both clause endpoints resolved.
    ///
    /// Absence of the sequence id is an expected outcome and returns
    /// `Ok(None)`. A clause id that fails to resolve is a consistency
    /// violation and returns [`Error::ReferentialIntegrity`].
    ///
    /// # Errors
    ///
    /// Propagates store failures and integrity violations.
    pub fn get_sequence_by_id(&mut self, id: u32) -> Result<Option<Sequence>> {
        let Some(row) = self.sequences.read_by_id(id)? else {
            return Ok(None);
        };

        let first_clause = self.resolve_clause(row.sequence_id, row.c1_id)?;
        let second_clause = self.resolve_clause(row.sequence_id, row.c2_id)?;
        Ok(Some(sequence_from_row(&row, first_clause, second_clause)))
    }

    /// All sequences, joined against a clause map built once per call.
    ///
    /// # Errors
    ///
    /// Propagates store failures; a dangling clause reference is a
    /// [`Error::ReferentialIntegrity`].
    pub fn get_all_sequences(&mut self) -> Result<Vec<Sequence>> {
        let rows = self.sequences.read_all()?;
        self.join_rows(&rows)
    }

    /// Sequences touching a clause, either endpoint, with both endpoints
    /// resolved.
    ///
    /// # Errors
    ///
    /// Propagates store failures; a dangling clause reference is a
    /// [`Error::ReferentialIntegrity`].
    pub fn get_sequences_by_clause_id(&mut self, clause_id: u32) -> Result<Vec<Sequence>> {
        let rows = self.sequences.read_by_clause_id(clause_id)?;
        self.join_rows(&rows)
    }

    fn join_rows(&mut self, rows: &[SequenceRow]) -> Result<Vec<Sequence>> {
        let clause_map: HashMap<u32, Clause> = self
            .ranges
            .read_all()?
            .iter()
            .map(|row| (row.range_id, clause_from_row(row)))
            .collect();

        let mut sequences = Vec::with_capacity(rows.len());
        for row in rows {
            let lookup = |clause_id: u32| {
                clause_map.get(&clause_id).copied().ok_or({
                    Error::ReferentialIntegrity {
                        sequence_id: row.sequence_id,
                        clause_id,
                    }
                })
            };
            sequences.push(sequence_from_row(row, lookup(row.c1_id)?, lookup(row.c2_id)?));
        }

        Ok(sequences)
    }

    /// Create a sequence linking two existing clauses. Returns `None` when
    /// the unordered pair already exists.
    ///
    /// Both clause ids are checked against the clause table first, so a
    /// sequence row can never be written with a dangling reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when either clause id does not
    /// exist; propagates sequence store failures.
    pub fn create_sequence(&mut self, clause_a_id: u32, clause_b_id: u32) -> Result<Option<u32>> {
        self.require_clause(clause_a_id)?;
        self.require_clause(clause_b_id)?;
        self.sequences
            .create(clause_a_id, clause_b_id, SequenceFields::default())
    }

    fn require_clause(&mut self, clause_id: u32) -> Result<()> {
        if self.ranges.read_by_id(clause_id)?.is_none() {
            return Err(Error::InvalidArgument(format!(
                "clause {clause_id} does not exist"
            )));
        }
        Ok(())
    }

    /// Delete a sequence. Never touches the clause table: deleting a
    /// sequence never deletes its clauses.
    ///
    /// # Errors
    ///
    /// Propagates sequence store failures.
    pub fn delete_sequence(&mut self, id: u32) -> Result<bool> {
        self.sequences.delete(id)
    }

    /// Partially update a sequence row.
    ///
    /// # Errors
    ///
    /// Propagates sequence store failures.
    pub fn update_sequence(&mut self, id: u32, patch: SequencePatch) -> Result<bool> {
        self.sequences.update(id, patch)
    }

    /// Record the annotator's corrected classification from label names.
    ///
    /// Unrecognized labels (including "NA") are ignored; correcting to only
    /// unrecognized labels stores an unset classification. Only the
    /// corrected field is touched.
    ///
    /// # Errors
    ///
    /// Propagates sequence store failures.
    pub fn set_sequence_correct_classes(&mut self, id: u32, labels: &[String]) -> Result<bool> {
        let corrected = ClassSet::new(
            labels
                .iter()
                .filter_map(|label| crate::model::Classification::from_name(label)),
        );
        self.sequences.update(
            id,
            SequencePatch::default().with_corrected_classes(&corrected.encode()),
        )
    }

    // ── Bulk interfaces (ingestion / classification engine) ───

    /// Build the clause and sequence tables from clauser output rows.
    ///
    /// Clause creation is idempotent, so re-ingesting overlapping spans
    /// never duplicates rows; a seed row whose clause pair already has a
    /// sequence is skipped. Returns the number of sequences created.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn build_clause_datastores(&mut self, rows: &[SeedRow]) -> Result<usize> {
        let mut created = 0;
        for row in rows {
            let c1_id = self.ranges.create(row.c1_start, row.c1_end)?;
            let c2_id = self.ranges.create(row.c2_start, row.c2_end)?;

            let fields = SequenceFields::default()
                .with_linkage_words(&row.linkage_words)
                .with_predicted_classes(&ClassSet::decode(&row.predicted_classes).encode());
            match self.sequences.create(c1_id, c2_id, fields)? {
                Some(_) => created += 1,
                None => {
                    debug!(c1_id, c2_id, "seed row skipped: pair already sequenced");
                }
            }
        }
        Ok(created)
    }

    /// Apply classification-engine output as per-row partial updates.
    ///
    /// Only linkage words, predicted classes, and reasoning are touched;
    /// corrections stay untouched. Rows naming an unknown sequence id are
    /// skipped with a warning. Returns the number of rows applied.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn update_sequence_datastores(&mut self, rows: &[PredictionRow]) -> Result<usize> {
        let mut applied = 0;
        for row in rows {
            let patch = SequencePatch::default()
                .with_linkage_words(&row.linkage_words)
                .with_predicted_classes(&ClassSet::decode(&row.predicted_classes).encode())
                .with_reasoning(&row.reasoning);
            if self.sequences.update(row.sequence_id, patch)? {
                applied += 1;
            } else {
                warn!(
                    sequence_id = row.sequence_id,
                    "prediction row skipped: no such sequence"
                );
            }
        }
        Ok(applied)
    }

    // ── Export ────────────────────────────────────────────────

    /// Flattened tabular projection of the whole datastore: one row per
    /// sequence with clause texts, ranges, linkage words, and both
    /// classification sets as values and names. Read-only.
    ///
    /// # Errors
    ///
    /// Propagates store failures and integrity violations.
    pub fn build_export_dataframe(&mut self) -> Result<Vec<ExportRow>> {
        let clause_texts = self.get_all_clause_text()?;
        let sequences = self.get_all_sequences()?;

        let mut rows = Vec::with_capacity(sequences.len());
        for sequence in &sequences {
            let clause_text = |id: u32| clause_texts.get(&id).cloned().unwrap_or_default();
            let (window_start, window_end) = sequence.window();

            rows.push(ExportRow {
                sequence_id: sequence.id,
                c1: clause_text(sequence.first_clause.id),
                c1_start: sequence.first_clause.start,
                c1_end: sequence.first_clause.end,
                c2: clause_text(sequence.second_clause.id),
                c2_start: sequence.second_clause.start,
                c2_end: sequence.second_clause.end,
                linkage_words: sequence.linkage_words.join(","),
                predicted_classes: sequence.predicted_classes.encode(),
                predicted_classes_name: sequence.predicted_classes.names(),
                corrected_classes: sequence.corrected_classes.encode(),
                corrected_classes_name: sequence.corrected_classes.names(),
                window_start,
                window_end,
                reasoning: sequence.reasoning.clone(),
            });
        }

        Ok(rows)
    }

    // ── Maintenance ───────────────────────────────────────────

    /// Empty all three stores.
    ///
    /// This is the only multi-table mutation and it is not atomic across
    /// stores: a crash between the per-store clears can leave one table
    /// emptied and another intact.
    ///
    /// # Errors
    ///
    /// Propagates the first store failure; later stores are then not
    /// cleared.
    pub fn clear_all_data_stores(&mut self) -> Result<()> {
        self.text.clear()?;
        self.sequences.clear()?;
        self.ranges.clear()
    }

    fn resolve_clause(&mut self, sequence_id: u32, clause_id: u32) -> Result<Clause> {
        match self.ranges.read_by_id(clause_id)? {
            Some(row) => Ok(clause_from_row(&row)),
            None => Err(Error::ReferentialIntegrity {
                sequence_id,
                clause_id,
            }),
        }
    }
}

fn clause_from_row(row: &RangeRow) -> Clause {
    Clause {
        id: row.range_id,
        start: row.start,
        end: row.end,
    }
}

fn sequence_from_row(row: &SequenceRow, first_clause: Clause, second_clause: Clause) -> Sequence {
    let linkage_words = if row.linkage_words.is_empty() {
        Vec::new()
    } else {
        row.linkage_words
            .split(LINKAGE_DELIMITER)
            .map(str::to_string)
            .collect()
    };

    Sequence {
        id: row.sequence_id,
        first_clause,
        second_clause,
        linkage_words,
        predicted_classes: ClassSet::decode(&row.predicted_classes),
        corrected_classes: ClassSet::decode(&row.corrected_classes),
        reasoning: row.reasoning.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Classification;
    use std::fs;
    use tempfile::TempDir;

    fn open_dao(
        dir: &TempDir,
    ) -> AnnotationDao<TxtTextStore, RangeCsvStore, SequenceCsvStore> {
        AnnotationDao::open(&DatastorePaths::in_dir(dir.path())).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        dao.build_text_datastore("The rain stopped. The match resumed soon after.")
            .unwrap();

        let c1 = dao.create_clause(0, 10).unwrap();
        let c2 = dao.create_clause(11, 20).unwrap();
        assert_eq!((c1, c2), (1, 2));

        let seq_id = dao.create_sequence(c1, c2).unwrap().unwrap();
        assert_eq!(seq_id, 1);

        let sequence = dao.get_sequence_by_id(seq_id).unwrap().unwrap();
        assert_eq!(sequence.clause_ranges(), ((0, 10), (11, 20)));

        assert!(dao.delete_sequence(seq_id).unwrap());
        assert_eq!(dao.get_sequence_by_id(seq_id).unwrap(), None);

        // Deleting the sequence never deletes its clauses
        let clauses = dao.get_all_clauses().unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].id, 1);
        assert_eq!(clauses[1].id, 2);
    }

    #[test]
    fn test_get_sequence_by_id_not_found_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);

        assert_eq!(dao.get_sequence_by_id(999).unwrap(), None);
    }

    #[test]
    fn test_dangling_clause_is_integrity_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DatastorePaths::in_dir(temp_dir.path());

        // A sequence referencing clause 7 with an empty clause table
        fs::create_dir_all(temp_dir.path()).unwrap();
        fs::write(&paths.ranges, "range_id,start,end\n").unwrap();
        fs::write(
            &paths.sequences,
            "sequence_id,c1_id,c2_id,linkage_words,predicted_classes,corrected_classes,reasoning\n\
             1,7,8,,,,\n",
        )
        .unwrap();

        let mut dao = AnnotationDao::open(&paths).unwrap();
        assert!(matches!(
            dao.get_sequence_by_id(1),
            Err(Error::ReferentialIntegrity {
                sequence_id: 1,
                clause_id: 7,
            })
        ));
        assert!(matches!(
            dao.get_all_sequences(),
            Err(Error::ReferentialIntegrity { .. })
        ));
    }

    #[test]
    fn test_create_sequence_rejects_unknown_clauses() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);

        assert!(matches!(
            dao.create_sequence(10, 11),
            Err(Error::InvalidArgument(_))
        ));

        // The rejected create must not leave a dangling row behind
        assert!(dao.get_all_sequences().unwrap().is_empty());
        assert!(dao.build_export_dataframe().unwrap().is_empty());

        let existing = dao.create_clause(0, 5).unwrap();
        assert!(matches!(
            dao.create_sequence(existing, 99),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_get_sequences_by_clause_id_resolves_endpoints() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        let c1 = dao.create_clause(0, 4).unwrap();
        let c2 = dao.create_clause(5, 9).unwrap();
        let c3 = dao.create_clause(10, 14).unwrap();
        dao.create_sequence(c1, c2).unwrap();
        dao.create_sequence(c2, c3).unwrap();

        let touching = dao.get_sequences_by_clause_id(c2).unwrap();
        assert_eq!(touching.len(), 2);

        let only_first = dao.get_sequences_by_clause_id(c1).unwrap();
        assert_eq!(only_first.len(), 1);
        assert_eq!(only_first[0].first_clause.range(), (0, 4));

        assert!(dao.get_sequences_by_clause_id(99).unwrap().is_empty());
    }

    #[test]
    fn test_get_all_sequences_resolves_endpoints() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        let c1 = dao.create_clause(0, 4).unwrap();
        let c2 = dao.create_clause(5, 9).unwrap();
        let c3 = dao.create_clause(10, 14).unwrap();
        dao.create_sequence(c1, c2).unwrap();
        dao.create_sequence(c2, c3).unwrap();

        let sequences = dao.get_all_sequences().unwrap();
        assert_eq!(sequences.len(), 2);
        for sequence in &sequences {
            assert!(sequence.first_clause.id >= 1);
            assert!(sequence.second_clause.id <= 3);
        }
    }

    #[test]
    fn test_get_all_clause_text() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        dao.build_text_datastore("The rain stopped.").unwrap();
        let c1 = dao.create_clause(0, 8).unwrap();
        let c2 = dao.create_clause(9, 17).unwrap();

        let texts = dao.get_all_clause_text().unwrap();
        assert_eq!(texts.get(&c1).map(String::as_str), Some("The rain"));
        assert_eq!(texts.get(&c2).map(String::as_str), Some("stopped."));
    }

    #[test]
    fn test_stale_clause_span_maps_to_empty_text() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        dao.build_text_datastore("long enough text for the span").unwrap();
        let id = dao.create_clause(0, 29).unwrap();

        dao.build_text_datastore("short").unwrap();

        let texts = dao.get_all_clause_text().unwrap();
        assert_eq!(texts.get(&id).map(String::as_str), Some(""));
    }

    #[test]
    fn test_set_sequence_correct_classes_ignores_unknown_labels() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        let c1 = dao.create_clause(0, 5).unwrap();
        let c2 = dao.create_clause(6, 10).unwrap();
        let id = dao.create_sequence(c1, c2).unwrap().unwrap();

        assert!(dao
            .set_sequence_correct_classes(
                id,
                &["SEQ".to_string(), "bogus".to_string(), "NA".to_string()],
            )
            .unwrap());

        let sequence = dao.get_sequence_by_id(id).unwrap().unwrap();
        assert_eq!(
            sequence.corrected_classes,
            ClassSet::new([Classification::Seq])
        );
        // Prediction stays untouched by a correction
        assert!(sequence.predicted_classes.is_unset());
    }

    #[test]
    fn test_build_clause_datastores_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        let rows = vec![
            SeedRow {
                c1_start: 0,
                c1_end: 10,
                c2_start: 11,
                c2_end: 20,
                linkage_words: "then".to_string(),
                predicted_classes: "5".to_string(),
            },
            SeedRow {
                c1_start: 11,
                c1_end: 20,
                c2_start: 21,
                c2_end: 30,
                linkage_words: String::new(),
                predicted_classes: "0".to_string(),
            },
        ];

        assert_eq!(dao.build_clause_datastores(&rows).unwrap(), 2);
        // Shared clause (11, 20) is created once
        assert_eq!(dao.get_all_clauses().unwrap().len(), 3);

        // Re-ingesting the same rows creates nothing new
        assert_eq!(dao.build_clause_datastores(&rows).unwrap(), 0);
        assert_eq!(dao.sequence_count().unwrap(), 2);

        // The legacy "0" sentinel reads back as unset
        let sequences = dao.get_all_sequences().unwrap();
        assert!(sequences[1].predicted_classes.is_unset());
        assert_eq!(
            sequences[0].predicted_classes,
            ClassSet::new([Classification::Seq])
        );
    }

    #[test]
    fn test_update_sequence_datastores_partial_and_skips_unknown() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        let c1 = dao.create_clause(0, 5).unwrap();
        let c2 = dao.create_clause(6, 10).unwrap();
        let id = dao.create_sequence(c1, c2).unwrap().unwrap();
        dao.set_sequence_correct_classes(id, &["CON".to_string()])
            .unwrap();

        let applied = dao
            .update_sequence_datastores(&[
                PredictionRow {
                    sequence_id: id,
                    linkage_words: "therefore".to_string(),
                    predicted_classes: "6".to_string(),
                    reasoning: "causal connective".to_string(),
                },
                PredictionRow {
                    sequence_id: 999,
                    linkage_words: String::new(),
                    predicted_classes: "1".to_string(),
                    reasoning: String::new(),
                },
            ])
            .unwrap();
        assert_eq!(applied, 1);

        let sequence = dao.get_sequence_by_id(id).unwrap().unwrap();
        assert_eq!(sequence.linkage_words, vec!["therefore".to_string()]);
        assert_eq!(
            sequence.predicted_classes,
            ClassSet::new([Classification::Con])
        );
        assert_eq!(sequence.reasoning, "causal connective");
        // Corrections survive an engine update
        assert_eq!(
            sequence.corrected_classes,
            ClassSet::new([Classification::Con])
        );
    }

    #[test]
    fn test_build_export_dataframe() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        dao.build_text_datastore("The rain stopped. The match resumed.")
            .unwrap();
        let c1 = dao.create_clause(0, 17).unwrap();
        let c2 = dao.create_clause(18, 36).unwrap();
        let id = dao.create_sequence(c1, c2).unwrap().unwrap();
        dao.update_sequence(
            id,
            SequencePatch::default()
                .with_predicted_classes("5,6")
                .with_linkage_words("then"),
        )
        .unwrap();
        dao.set_sequence_correct_classes(id, &["SEQ".to_string()])
            .unwrap();

        let rows = dao.build_export_dataframe().unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.c1, "The rain stopped.");
        assert_eq!(row.c2, "The match resumed.");
        assert_eq!(row.predicted_classes, "5,6");
        assert_eq!(row.predicted_classes_name, "SEQ,CON");
        assert_eq!(row.corrected_classes, "5");
        assert_eq!(row.corrected_classes_name, "SEQ");
        assert_eq!((row.window_start, row.window_end), (0, 36));
    }

    #[test]
    fn test_clear_all_data_stores() {
        let temp_dir = TempDir::new().unwrap();
        let mut dao = open_dao(&temp_dir);
        dao.build_text_datastore("some text").unwrap();
        let c1 = dao.create_clause(0, 4).unwrap();
        let c2 = dao.create_clause(5, 9).unwrap();
        dao.create_sequence(c1, c2).unwrap();

        dao.clear_all_data_stores().unwrap();

        assert_eq!(dao.get_text().unwrap(), "");
        assert!(dao.get_all_clauses().unwrap().is_empty());
        assert_eq!(dao.sequence_count().unwrap(), 0);
    }
}
