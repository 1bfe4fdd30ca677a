//! Clause spans into the reference text.

use serde::{Deserialize, Serialize};

/// A clause: a half-open byte-offset span `[start, end)` into the reference
/// text, identified by an integer id.
///
/// Two clauses with identical `(start, end)` are the same clause; the range
/// store enforces this by creating idempotently. Clauses are never deleted
/// once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    pub id: u32,
    pub start: usize,
    pub end: usize,
}

impl Clause {
    /// The `(start, end)` span.
    #[must_use]
    pub const fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
