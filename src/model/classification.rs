//! Rhetorical-sequencing classification categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rhetorical-sequencing category for a clause pair.
///
/// The integer codes are the on-disk encoding and are shared with the
/// classification engine's output format, so they must not be renumbered.
/// "Unset" is not a variant: an empty [`ClassSet`] means no classification
/// has been assigned, replacing the legacy NA/0/-1 sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Incoherent
    Inc,
    /// Cohesive
    Coh,
    /// Repetition
    Rep,
    /// Reiteration
    Rei,
    /// Sequential
    Seq,
    /// Consequential
    Con,
    /// Subordinate
    Sub,
    /// Interrupted
    Int,
}

impl Classification {
    /// All categories in code order.
    pub const ALL: [Self; 8] = [
        Self::Inc,
        Self::Coh,
        Self::Rep,
        Self::Rei,
        Self::Seq,
        Self::Con,
        Self::Sub,
        Self::Int,
    ];

    /// Integer code used in the sequence table and export files.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Inc => 1,
            Self::Coh => 2,
            Self::Rep => 3,
            Self::Rei => 4,
            Self::Seq => 5,
            Self::Con => 6,
            Self::Sub => 7,
            Self::Int => 8,
        }
    }

    /// Short category name as used in labels and export columns.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Inc => "INC",
            Self::Coh => "COH",
            Self::Rep => "REP",
            Self::Rei => "REI",
            Self::Seq => "SEQ",
            Self::Con => "CON",
            Self::Sub => "SUB",
            Self::Int => "INT",
        }
    }

    /// Parse an integer code. Unknown codes (including the legacy NA
    /// sentinels -1 and 0) return `None`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Parse a category name, case-insensitively. Unknown names (including
    /// "NA", which denotes the absence of a classification) return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_uppercase();
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Delimiter joining classification codes inside a single table field.
pub const CLASS_DELIMITER: char = ',';

/// An ordered, duplicate-free set of classifications.
///
/// Sequences support multi-label classification, so both the predicted and
/// the corrected assignment are sets. An empty set means "unset": no
/// prediction made yet, or no correction recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(Vec<Classification>);

impl ClassSet {
    /// Empty (unset) classification.
    #[must_use]
    pub const fn unset() -> Self {
        Self(Vec::new())
    }

    /// Build from classifications, dropping duplicates and keeping first
    /// occurrence order.
    #[must_use]
    pub fn new(classes: impl IntoIterator<Item = Classification>) -> Self {
        let mut inner: Vec<Classification> = Vec::new();
        for class in classes {
            if !inner.contains(&class) {
                inner.push(class);
            }
        }
        Self(inner)
    }

    /// Decode a delimiter-joined integer list as stored in the sequence
    /// table. Empty fields and unrecognized codes decode to nothing, so the
    /// legacy "0" and "-1" sentinels read back as unset.
    #[must_use]
    pub fn decode(encoded: &str) -> Self {
        Self::new(
            encoded
                .split(CLASS_DELIMITER)
                .filter_map(|part| part.trim().parse::<i64>().ok())
                .filter_map(Classification::from_code),
        )
    }

    /// Encode as a delimiter-joined integer list; empty string when unset.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|c| c.code().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Delimiter-joined category names; empty string when unset.
    #[must_use]
    pub fn names(&self) -> String {
        self.0
            .iter()
            .map(|c| c.name().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// True when no classification has been assigned.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the classifications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            f.write_str("unset")
        } else {
            f.write_str(&self.names())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_name_round_trip() {
        for class in Classification::ALL {
            assert_eq!(Classification::from_code(class.code()), Some(class));
            assert_eq!(Classification::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn test_legacy_sentinels_are_not_classes() {
        assert_eq!(Classification::from_code(0), None);
        assert_eq!(Classification::from_code(-1), None);
        assert_eq!(Classification::from_name("NA"), None);
    }

    #[test]
    fn test_name_parsing_is_case_insensitive() {
        assert_eq!(Classification::from_name("seq"), Some(Classification::Seq));
        assert_eq!(Classification::from_name(" Con "), Some(Classification::Con));
    }

    #[test]
    fn test_decode_ignores_unknown_codes() {
        let set = ClassSet::decode("0,5,99,6");
        assert_eq!(
            set,
            ClassSet::new([Classification::Seq, Classification::Con])
        );
    }

    #[test]
    fn test_empty_and_sentinel_decode_to_unset() {
        assert!(ClassSet::decode("").is_unset());
        assert!(ClassSet::decode("-1").is_unset());
        assert!(ClassSet::decode("0").is_unset());
    }

    #[test]
    fn test_encode_unset_is_empty() {
        assert_eq!(ClassSet::unset().encode(), "");
    }

    #[test]
    fn test_new_deduplicates() {
        let set = ClassSet::new([
            Classification::Int,
            Classification::Sub,
            Classification::Int,
        ]);
        assert_eq!(set.encode(), "8,7");
    }
}
