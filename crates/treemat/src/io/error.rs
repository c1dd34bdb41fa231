//! Error types for readers and writers.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

/// Errors that can occur when reading a libsvm or delimited file.
///
/// Row numbers are 0-based line indices. Ingestion stops at the first blank
/// line, so row and line index always coincide.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error reading {} at row {row}: {source}", describe(.path.as_deref()))]
    Io {
        path: Option<PathBuf>,
        row: usize,
        #[source]
        source: io::Error,
    },

    #[error("row {row}: expected a label and at least one index:value pair")]
    TooFewColumns { row: usize },

    #[error("row {row}: empty token, check the line for repeated spaces")]
    EmptyToken { row: usize },

    #[error("row {row}: expected `index:value`, got {token:?}")]
    MalformedPair { row: usize, token: String },

    #[error("row {row}: cannot parse index {text:?} in {token:?}: {source}")]
    InvalidIndex {
        row: usize,
        text: String,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("row {row}: cannot parse value {text:?} in {token:?}: {source}")]
    InvalidValue {
        row: usize,
        text: String,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("row {row}, column {column}: cannot convert {text:?} to float: {source}")]
    InvalidField {
        row: usize,
        column: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

impl ReadError {
    /// Row the error occurred at, if it is tied to one.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Open { .. } | Self::EmptyDelimiter => None,
            Self::Io { row, .. }
            | Self::TooFewColumns { row }
            | Self::EmptyToken { row }
            | Self::MalformedPair { row, .. }
            | Self::InvalidIndex { row, .. }
            | Self::InvalidValue { row, .. }
            | Self::InvalidField { row, .. }
            | Self::RowWidth { row, .. } => Some(*row),
        }
    }

    /// Attach the file path to I/O failures raised by a stream reader.
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Io {
                path: None,
                row,
                source,
            } => Self::Io {
                path: Some(file.to_path_buf()),
                row,
                source,
            },
            other => other,
        }
    }
}

/// Errors that can occur when writing a matrix.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("unable to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing {}: {source}", describe(.path.as_deref()))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// Attach the file path to I/O failures raised by a stream writer.
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(file.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stream>".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_io_error_gains_path() {
        let err = ReadError::Io {
            path: None,
            row: 3,
            source: io::Error::other("device gone"),
        };
        assert_eq!(
            err.to_string(),
            "I/O error reading <stream> at row 3: device gone"
        );

        let err = err.with_path(Path::new("data/train.libsvm"));
        assert!(matches!(err, ReadError::Io { path: Some(_), row: 3, .. }));
        assert_eq!(
            err.to_string(),
            "I/O error reading data/train.libsvm at row 3: device gone"
        );
    }

    #[test]
    fn with_path_leaves_format_errors_alone() {
        let err = ReadError::TooFewColumns { row: 1 }.with_path(Path::new("x.libsvm"));
        assert!(matches!(err, ReadError::TooFewColumns { row: 1 }));
    }

    #[test]
    fn write_io_error_gains_path() {
        let err = WriteError::Io {
            path: None,
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "failed writing <stream>: disk full");

        let err = err.with_path(Path::new("out/preds.txt"));
        assert_eq!(err.to_string(), "failed writing out/preds.txt: disk full");
    }
}
