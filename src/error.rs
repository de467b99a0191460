use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while loading a numeric table or computing on a matrix.
///
/// Every failure aborts the operation that raised it; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot open '{}': {source}", .path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },

    /// A blank line inside the data region. `row` is the 1-based data row.
    #[error("Data row {row} is empty; remove the empty line and try again")]
    EmptyLine { row: usize },

    #[error("Encountered an error reading '{}': {source}", .path.display())]
    InputFailure { path: PathBuf, source: io::Error },

    #[error("Data row {row} has more than the {expected} columns declared by the header")]
    TooManyColumns { row: usize, expected: usize },

    #[error("Data row {row} has {found} columns, header declares {expected}")]
    TooFewColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number '{value}' at data row {row}, column {col}")]
    NumberInvalid {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("Matrix cannot have zero rows or columns (got {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Expected {} elements for a {rows}x{cols} matrix, got {len}", usize::saturating_mul(*.rows, *.cols))]
    SizeMismatch { rows: usize, cols: usize, len: usize },

    #[error("Cannot {op} a {left:?} matrix and a {right:?} matrix")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid reader configuration {origin}: {message}")]
    Config { origin: String, message: String },
}

/// Fieldless view of [`Error`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceNotFound,
    EmptyLine,
    InputFailure,
    TooManyColumns,
    TooFewColumns,
    NumberInvalid,
    InvalidDimension,
    SizeMismatch,
    DimensionMismatch,
    IndexOutOfRange,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            Error::EmptyLine { .. } => ErrorKind::EmptyLine,
            Error::InputFailure { .. } => ErrorKind::InputFailure,
            Error::TooManyColumns { .. } => ErrorKind::TooManyColumns,
            Error::TooFewColumns { .. } => ErrorKind::TooFewColumns,
            Error::NumberInvalid { .. } => ErrorKind::NumberInvalid,
            Error::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            Error::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Error::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::Config { .. } => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_location() {
        let err = Error::NumberInvalid {
            row: 4,
            col: 2,
            value: "12.3.4".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("12.3.4"));
        assert!(msg.contains("row 4"));
        assert!(msg.contains("column 2"));
        assert_eq!(err.kind(), ErrorKind::NumberInvalid);
    }

    #[test]
    fn size_mismatch_reports_expected_count() {
        let err = Error::SizeMismatch {
            rows: 2,
            cols: 3,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Expected 6 elements for a 2x3 matrix, got 5"
        );
    }

    #[test]
    fn size_mismatch_message_saturates_huge_shapes() {
        let err = Error::SizeMismatch {
            rows: usize::MAX,
            cols: 2,
            len: 1,
        };
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }
}
