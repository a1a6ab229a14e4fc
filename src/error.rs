//! Error taxonomy for loading and validating a roster of marks.

use thiserror::Error;

/// Every way the load → validate pipeline can refuse its input.
///
/// Row and subject positions in messages are 1-based and count data rows
/// only (header rows are not included).
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file is empty.")]
    EmptyInput,

    #[error("Row {row}: identifier '{value}' is not an integer")]
    InvalidIdentifier { row: usize, value: String },

    #[error("Row {row}: expected {expected} cells but found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Marks data is empty.")]
    EmptyMarks,

    #[error("Mismatch between roll numbers ({identifiers}) and marks rows ({rows}).")]
    ShapeMismatch { identifiers: usize, rows: usize },

    #[error("Duplicate roll numbers detected: {0}")]
    DuplicateIdentifier(i64),

    #[error("Missing values detected in marks (row {row}, subject {subject}).")]
    MissingValue { row: usize, subject: usize },

    #[error("Marks must be between {min} and {max} (row {row}, subject {subject} has {value}).")]
    OutOfRange {
        row: usize,
        subject: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid mark bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Invalid pass mark: {0} is not a finite number")]
    InvalidPassMark(f64),
}

pub type RosterResult<T> = Result<T, RosterError>;
