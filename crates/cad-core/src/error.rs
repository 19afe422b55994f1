//! Error types for cad-core

use crate::field::CanonicalField;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cad-core
///
/// Column matching itself never fails; these cover loading headers and
/// alias-table configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist
    #[error("file not found: '{0}'")]
    FileNotFound(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook error from calamine
    #[error("failed to read workbook '{path}': {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// File extension is not a supported spreadsheet format
    #[error("unsupported spreadsheet format: '{0}' (expected .csv, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat(PathBuf),

    /// Spreadsheet has no header row
    #[error("no header row found in '{0}'")]
    NoHeader(PathBuf),

    /// Identifier does not name a canonical field
    #[error("unknown canonical field: {0}")]
    UnknownField(String),

    /// Alias table lists a field more than once
    #[error("alias table lists field '{0}' more than once")]
    DuplicateField(CanonicalField),

    /// Alias table omits a field
    #[error("alias table has no entry for field '{0}'")]
    MissingField(CanonicalField),

    /// Alias table entry has no aliases
    #[error("alias table entry for field '{0}' has no aliases")]
    EmptyAliases(CanonicalField),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
