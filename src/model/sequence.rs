//! Clause-pair sequences.

use crate::model::{ClassSet, Clause};

/// An identified, ordered pair of clauses carrying a predicted and a
/// user-corrected sequencing classification.
///
/// This is the joined domain object the facade hands to callers: both clause
/// endpoints are resolved against the range store, never bare ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: u32,
    pub first_clause: Clause,
    pub second_clause: Clause,
    /// Lexical items cited as evidence for the classification.
    pub linkage_words: Vec<String>,
    pub predicted_classes: ClassSet,
    pub corrected_classes: ClassSet,
    /// Free-text justification produced by the classification engine.
    pub reasoning: String,
}

impl Sequence {
    /// The `(start, end)` spans of both clauses, first then second.
    #[must_use]
    pub const fn clause_ranges(&self) -> ((usize, usize), (usize, usize)) {
        (self.first_clause.range(), self.second_clause.range())
    }

    /// The span from the start of the first clause to the end of the second,
    /// used as the context window in exports.
    #[must_use]
    pub const fn window(&self) -> (usize, usize) {
        (self.first_clause.start, self.second_clause.end)
    }
}
