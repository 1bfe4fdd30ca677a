//! Error types for the rhetor datastore and CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=data, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rhetor operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string; shells on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Datastore consistency (exit 2)
    SchemaError,
    DuplicateEntry,
    ReferentialIntegrity,

    // Workspace lifecycle (exit 3)
    NotInitialized,
    AlreadyInitialized,

    // Validation (exit 4)
    InvalidRange,
    InvalidArgument,
    TextTooLarge,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    PermissionError,
    IoError,
    CsvError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::SchemaError => "SCHEMA_ERROR",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::ReferentialIntegrity => "REFERENTIAL_INTEGRITY",
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::InvalidRange => "INVALID_RANGE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::TextTooLarge => "TEXT_TOO_LARGE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::PermissionError => "PERMISSION_ERROR",
            Self::IoError => "IO_ERROR",
            Self::CsvError => "CSV_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code (1-8).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::SchemaError | Self::DuplicateEntry | Self::ReferentialIntegrity => 2,
            Self::NotInitialized | Self::AlreadyInitialized => 3,
            Self::InvalidRange | Self::InvalidArgument | Self::TextTooLarge => 4,
            Self::ConfigError => 7,
            Self::PermissionError | Self::IoError | Self::CsvError | Self::JsonError => 8,
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in rhetor operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not initialized: run `rhetor init` first")]
    NotInitialized,

    #[error("Already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("No permission to read or write {path}")]
    Permission { path: PathBuf },

    #[error("Missing required column '{column}' in {table} table")]
    MissingColumn {
        column: &'static str,
        table: &'static str,
    },

    #[error("More than one {table} entry found for id {id}")]
    DuplicateEntry { table: &'static str, id: u32 },

    #[error("Sequence {sequence_id} references clause {clause_id} which does not exist")]
    ReferentialIntegrity { sequence_id: u32, clause_id: u32 },

    #[error("Text file too large: {path} is {size} bytes (max {max})")]
    TextTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid text range [{start}, {end}): {reason}")]
    InvalidRange {
        start: usize,
        end: usize,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::AlreadyInitialized { .. } => ErrorCode::AlreadyInitialized,
            Self::Permission { .. } => ErrorCode::PermissionError,
            Self::MissingColumn { .. } => ErrorCode::SchemaError,
            Self::DuplicateEntry { .. } => ErrorCode::DuplicateEntry,
            Self::ReferentialIntegrity { .. } => ErrorCode::ReferentialIntegrity,
            Self::TextTooLarge { .. } => ErrorCode::TextTooLarge,
            Self::InvalidRange { .. } => ErrorCode::InvalidRange,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Csv(_) => ErrorCode::CsvError,
            Self::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint for humans and scripts.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => {
                Some("Run `rhetor init` to create the datastore files".to_string())
            }
            Self::AlreadyInitialized { path } => Some(format!(
                "Datastore already exists at {}. Use `--force` to reinitialize.",
                path.display()
            )),
            Self::MissingColumn { table, .. } => Some(format!(
                "The {table} file was created or edited outside rhetor. \
                 Restore the header row or reinitialize with `rhetor init --force`."
            )),
            Self::TextTooLarge { max, .. } => Some(format!(
                "Reference texts are capped at {max} bytes. Split the document before ingesting."
            )),
            Self::Permission { path } => Some(format!(
                "Check file permissions on {}",
                path.display()
            )),
            _ => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, exit code, and optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
