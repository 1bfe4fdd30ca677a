//! Rhetor - flat-file datastore for clause-sequencing annotation
//!
//! This crate stores the three linked tables behind a rhetorical-sequencing
//! annotation session: the reference text, the clause spans into it, and the
//! clause-pair sequences carrying predicted and corrected classifications.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Domain types (Classification, Clause, Sequence)
//! - [`storage`] - Flat-file repository layer (TXT blob + CSV tables)
//! - [`dao`] - Facade joining the three stores into domain objects
//! - [`ingest`] - Seed and prediction row formats consumed from external tools
//! - [`export`] - Flattened tabular projection for human-readable export
//! - [`config`] - Data-directory resolution
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod dao;
pub mod error;
pub mod export;
pub mod ingest;
pub mod model;
pub mod storage;

pub use error::{Error, Result};
