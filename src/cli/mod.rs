//! CLI definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Rhetor - clause-sequencing annotation datastore
#[derive(Parser, Debug)]
#[command(name = "rhetor", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the three backing files
    #[arg(long, global = true, env = "RHETOR_DATA")]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an empty annotation datastore
    Init {
        /// Overwrite existing datastore files
        #[arg(long)]
        force: bool,
    },

    /// Ingest a reference text and, optionally, clauser output
    Ingest {
        /// Reference text file (UTF-8)
        text: PathBuf,

        /// Clauser output CSV with pre-classified clause pairs
        #[arg(long)]
        sequences: Option<PathBuf>,
    },

    /// Apply classification-engine output to existing sequences
    Predictions {
        /// Engine output CSV
        file: PathBuf,
    },

    /// Clause span management
    Clause {
        #[command(subcommand)]
        command: ClauseCommands,
    },

    /// Sequence management
    Sequence {
        #[command(subcommand)]
        command: SequenceCommands,
    },

    /// Print the reference text, or a byte range of it
    Text {
        /// Range start (byte offset)
        #[arg(long, requires = "end")]
        start: Option<usize>,

        /// Range end (byte offset, exclusive)
        #[arg(long, requires = "start")]
        end: Option<usize>,
    },

    /// Write the flattened annotation table as CSV
    Export {
        /// Output file path
        out: PathBuf,
    },

    /// Empty all three data stores
    Clear {
        /// Required: clearing is destructive
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClauseCommands {
    /// Create a clause span (idempotent on identical spans)
    Add {
        /// Span start (byte offset)
        start: usize,
        /// Span end (byte offset, exclusive)
        end: usize,
    },

    /// List all clause spans with their text
    List,
}

#[derive(Subcommand, Debug)]
pub enum SequenceCommands {
    /// Link two existing clauses as a new sequence
    Add {
        /// First clause id
        first: u32,
        /// Second clause id
        second: u32,
    },

    /// Show one sequence with resolved clauses
    Show {
        /// Sequence id
        id: u32,
    },

    /// List all sequences
    List {
        /// Only sequences touching this clause id (either endpoint)
        #[arg(long)]
        clause: Option<u32>,
    },

    /// Delete a sequence (its clauses are kept)
    Delete {
        /// Sequence id
        id: u32,
    },

    /// Record corrected classification labels (e.g. SEQ CON)
    Correct {
        /// Sequence id
        id: u32,
        /// Classification labels; unrecognized labels are ignored
        #[arg(required = true)]
        labels: Vec<String>,
    },
}
