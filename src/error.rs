//! Error types for loading and analysing inflammation data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or reducing inflammation tables.
#[derive(Debug, Error)]
pub enum InflammationError {
    /// Failed to read a data file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a data directory.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed numeric or JSON content.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A JSON patient record without the required field.
    #[error("record {record} in {path} has no '{field}' field")]
    MissingField {
        path: PathBuf,
        record: usize,
        field: &'static str,
    },

    /// No file in the directory matched the data source pattern.
    #[error("no inflammation data files matching '{pattern}' found in {dir}")]
    NoDataFound { dir: PathBuf, pattern: String },

    /// Rows, or per-table series, of inconsistent length.
    #[error("{what} {index} has {found} values, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Reduction over zero rows.
    #[error("cannot compute {statistic} of an empty table")]
    EmptyTable { statistic: &'static str },

    /// A table cell that is not a number.
    #[error("non-numeric value '{value}' at row {row}, column {column}")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },

    /// File extension not handled by any data source.
    #[error("unsupported data file format: '{extension}'")]
    UnsupportedFormat { extension: String },
}

/// Result type for inflammation operations.
pub type Result<T> = std::result::Result<T, InflammationError>;
