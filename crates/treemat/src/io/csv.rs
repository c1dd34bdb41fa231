//! Delimited dense reader.
//!
//! Each non-blank line is one row; fields are split on a caller-chosen
//! delimiter with no quoting or escaping. Empty fields take
//! [`CsvOptions::default_value`]. The first row fixes the matrix width.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::error::ReadError;
use super::for_each_line;
use crate::data::{Matrix, Vector};

/// Options for [`read_csv`].
///
/// ```
/// use treemat::io::CsvOptions;
///
/// let options = CsvOptions::builder().delimiter("\t").default_value(f64::NAN).build();
/// assert_eq!(options.delimiter, "\t");
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator (default: `","`).
    #[builder(into, default = String::from(","))]
    pub delimiter: String,
    /// Value substituted for empty fields (default: `0.0`).
    #[builder(default = 0.0)]
    pub default_value: f64,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Read a delimited file into a [`Matrix`].
///
/// The whole read fails on the first bad field or mismatched row width.
pub fn read_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Matrix, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = read_csv_from(BufReader::new(file), options).map_err(|e| e.with_path(path))?;
    tracing::debug!(
        path = %path.display(),
        rows = matrix.n_rows(),
        cols = matrix.n_cols(),
        "read delimited file"
    );
    Ok(matrix)
}

/// Read delimited rows from any buffered reader.
pub fn read_csv_from<R: BufRead>(reader: R, options: &CsvOptions) -> Result<Matrix, ReadError> {
    if options.delimiter.is_empty() {
        return Err(ReadError::EmptyDelimiter);
    }

    let mut rows: Vec<Vector> = Vec::new();
    let mut n_cols = None;
    for_each_line(reader, |row, line| {
        let values = parse_row(line, row, options)?;
        match n_cols {
            None => n_cols = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(ReadError::RowWidth {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(values);
        Ok(())
    })?;

    Ok(Matrix::from_rows_unchecked(rows))
}

fn parse_row(line: &str, row: usize, options: &CsvOptions) -> Result<Vector, ReadError> {
    line.split(options.delimiter.as_str())
        .enumerate()
        .map(|(column, field)| {
            if field.is_empty() {
                return Ok(options.default_value);
            }
            field
                .parse::<f64>()
                .map_err(|source| ReadError::InvalidField {
                    row,
                    column,
                    text: field.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str, options: &CsvOptions) -> Result<Matrix, ReadError> {
        read_csv_from(Cursor::new(input), options)
    }

    #[test]
    fn default_options() {
        let options = CsvOptions::default();
        assert_eq!(options.delimiter, ",");
        assert_eq!(options.default_value, 0.0);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: CsvOptions = serde_json::from_str(r#"{"delimiter": ";"}"#).unwrap();
        assert_eq!(options.delimiter, ";");
        assert_eq!(options.default_value, 0.0);
    }

    #[test]
    fn empty_field_takes_default() {
        let m = read("1,2,3\n4,,6\n", &CsvOptions::default()).unwrap();
        assert_eq!(m.to_nested(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 6.0]]);

        let options = CsvOptions::builder().default_value(-1.0).build();
        let m = read(",5\n", &options).unwrap();
        assert_eq!(m.to_nested(), vec![vec![-1.0, 5.0]]);
    }

    #[test]
    fn nan_default() {
        let options = CsvOptions::builder().default_value(f64::NAN).build();
        let m = read("1,\n", &options).unwrap();
        assert!(m.row(0).unwrap()[1].is_nan());
    }

    #[test]
    fn multi_char_delimiter() {
        let options = CsvOptions::builder().delimiter("::").build();
        let m = read("1::2\n3::4\n", &options).unwrap();
        assert_eq!(m.flatten(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn width_mismatch_names_row() {
        let err = read("1,2,3\n4,5\n", &CsvOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::RowWidth {
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn bad_field_names_text() {
        let err = read("1,2\n3,x4\n", &CsvOptions::default()).unwrap_err();
        match &err {
            ReadError::InvalidField {
                row, column, text, ..
            } => {
                assert_eq!((*row, *column), (1, 1));
                assert_eq!(text, "x4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_utf8_field_is_a_parse_error() {
        let err = read_csv_from(&b"1,2\n3,\xff\n"[..], &CsvOptions::default()).unwrap_err();
        match &err {
            ReadError::InvalidField {
                row, column, text, ..
            } => {
                assert_eq!((*row, *column), (1, 1));
                assert_eq!(text, "\u{fffd}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_stops_ingestion() {
        let m = read("1,2\n  \n3\n", &CsvOptions::default()).unwrap();
        assert_eq!(m.shape(), (1, 2));
    }

    #[test]
    fn empty_delimiter_is_rejected() {
        let options = CsvOptions::builder().delimiter("").build();
        assert!(matches!(
            read("1,2\n", &options),
            Err(ReadError::EmptyDelimiter)
        ));
    }
}
