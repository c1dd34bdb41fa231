//! Flat text persistence.
//!
//! A matrix is written as one value per line in row-major order, with no
//! header. Values use the shortest representation that parses back to the
//! same `f64`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::WriteError;
use crate::data::Matrix;

/// Write `matrix` to `path`, truncating any existing content.
///
/// The first failed write aborts; a partially written file is left as is.
pub fn write_matrix(matrix: &Matrix, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_matrix_to(matrix, BufWriter::new(file)).map_err(|e| e.with_path(path))?;
    tracing::trace!(path = %path.display(), values = matrix.n_rows() * matrix.n_cols(), "wrote matrix");
    Ok(())
}

/// Write `matrix` to any writer and flush it.
pub fn write_matrix_to<W: Write>(matrix: &Matrix, mut writer: W) -> Result<(), WriteError> {
    let io_err = |source| WriteError::Io { path: None, source };
    for row in matrix.rows() {
        for value in row {
            writeln!(writer, "{value}").map_err(io_err)?;
        }
    }
    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn one_value_per_line_row_major() {
        let m = Matrix::from_nested(vec![vec![1.0, 2.5], vec![-3.0, 0.125]]).unwrap();
        let mut out = Vec::new();
        write_matrix_to(&m, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2.5\n-3\n0.125\n");
    }

    #[test]
    fn empty_matrix_writes_nothing() {
        let mut out = Vec::new();
        write_matrix_to(&Matrix::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_surfaced() {
        let m = Matrix::from_nested(vec![vec![1.0]]).unwrap();
        let err = write_matrix_to(&m, FailingWriter).unwrap_err();
        assert!(matches!(err, WriteError::Io { path: None, .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("preds.txt");
        let err = write_matrix(&Matrix::default(), &path).unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
        assert!(err.to_string().contains("preds.txt"), "{err}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_reports_path() {
        let m = Matrix::from_nested(vec![vec![1.0, 2.0]]).unwrap();
        let err = write_matrix(&m, "/dev/full").unwrap_err();
        assert!(matches!(err, WriteError::Io { path: Some(_), .. }));
        assert!(err.to_string().contains("/dev/full"), "{err}");
    }
}
