//! Sparse labeled (libsvm) reader.
//!
//! # Format
//!
//! ```text
//! <label> <index>:<value> <index>:<value> ...
//! ```
//!
//! - Tokens are separated by single spaces.
//! - The label is discarded.
//! - Reading stops at end of input or at the first blank line.
//!
//! # Index base
//!
//! Indices are stored exactly as written. libsvm files produced by most tools
//! are 1-based, while feature indices in a tree ensemble are usually 0-based;
//! this reader does not shift them. Callers that need an offset must apply it
//! themselves.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::ReadError;
use super::for_each_line;
use crate::data::{SparseMatrix, SparseVector};

/// Read a libsvm file into a [`SparseMatrix`].
///
/// The whole read fails on the first malformed row; no partial matrix is
/// returned.
pub fn read_libsvm(path: impl AsRef<Path>) -> Result<SparseMatrix, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = read_libsvm_from(BufReader::new(file)).map_err(|e| e.with_path(path))?;
    tracing::debug!(
        path = %path.display(),
        rows = matrix.n_rows(),
        nnz = matrix.nnz(),
        "read libsvm file"
    );
    Ok(matrix)
}

/// Read libsvm rows from any buffered reader.
pub fn read_libsvm_from<R: BufRead>(reader: R) -> Result<SparseMatrix, ReadError> {
    let mut rows = Vec::new();
    for_each_line(reader, |row, line| {
        rows.push(parse_row(line, row)?);
        Ok(())
    })?;
    Ok(SparseMatrix::from_rows(rows))
}

fn parse_row(line: &str, row: usize) -> Result<SparseVector, ReadError> {
    let mut tokens = line.split(' ');
    // Label
    tokens.next();

    let mut entries = Vec::new();
    for token in tokens {
        entries.push(parse_pair(token, row)?);
    }
    if entries.is_empty() {
        return Err(ReadError::TooFewColumns { row });
    }
    Ok(entries.into_iter().collect())
}

fn parse_pair(token: &str, row: usize) -> Result<(usize, f64), ReadError> {
    if token.is_empty() {
        return Err(ReadError::EmptyToken { row });
    }
    let mut parts = token.split(':');
    let (Some(index), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ReadError::MalformedPair {
            row,
            token: token.to_string(),
        });
    };

    let index = index
        .parse::<u32>()
        .map_err(|source| ReadError::InvalidIndex {
            row,
            text: index.to_string(),
            token: token.to_string(),
            source,
        })?;
    let value = value
        .parse::<f64>()
        .map_err(|source| ReadError::InvalidValue {
            row,
            text: value.to_string(),
            token: token.to_string(),
            source,
        })?;
    Ok((index as usize, value))
}
