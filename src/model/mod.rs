//! Domain types for rhetor.
//!
//! The annotated dataset is three linked tables: a reference text, clause
//! spans into it, and clause-pair sequences carrying a predicted and a
//! user-corrected rhetorical-sequencing classification.

mod classification;
mod clause;
mod sequence;

pub use classification::{ClassSet, Classification};
pub use clause::Clause;
pub use sequence::Sequence;
