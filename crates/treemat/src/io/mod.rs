//! Readers and writers for on-disk matrices.
//!
//! - [`read_libsvm`]: sparse `label index:value ...` rows into a [`SparseMatrix`]
//! - [`read_csv`]: delimited dense rows into a [`Matrix`]
//! - [`write_matrix`]: a [`Matrix`] as one value per line
//!
//! Every reader has a `*_from` twin taking any [`BufRead`](std::io::BufRead),
//! so tests and in-memory data do not need a file. Files are read line by
//! line through a `BufReader` and never loaded whole. Handles are closed on
//! every exit path.
//!
//! [`SparseMatrix`]: crate::data::SparseMatrix
//! [`Matrix`]: crate::data::Matrix

use std::io::BufRead;

mod csv;
mod error;
mod libsvm;
mod write;

pub use csv::{CsvOptions, read_csv, read_csv_from};
pub use error::{ReadError, WriteError};
pub use libsvm::{read_libsvm, read_libsvm_from};
pub use write::{write_matrix, write_matrix_to};

/// Feed each trimmed line to `parse_line` until end of input or the first
/// blank line.
///
/// Lines are decoded lossily: bytes that are not UTF-8 become U+FFFD and
/// surface as a parse error on the field that holds them, never as an I/O
/// error.
pub(crate) fn for_each_line<R, F>(mut reader: R, mut parse_line: F) -> Result<(), ReadError>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<(), ReadError>,
{
    let mut buf = Vec::new();
    for row in 0.. {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ReadError::Io {
                path: None,
                row,
                source,
            })?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        parse_line(row, line)?;
    }
    Ok(())
}
