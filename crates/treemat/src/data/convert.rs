//! Conversions between containers, nested `Vec`s and ndarray.
//!
//! # Sparse to "dense"
//!
//! [`SparseMatrix::to_nested`] and [`SparseMatrix::flatten`] emit only the
//! values a row actually stores. Absent indices are not materialized as
//! zero, so the nested rows are generally ragged and shorter than the
//! largest index. Downstream code relies on sparsity surviving these
//! conversions. Use [`SparseVector::to_dense`] when a zero-filled row of a
//! known width is really wanted.

use ndarray::{Array2, ArrayView2};

use super::{Matrix, ShapeError, SparseMatrix, SparseVector, Vector};

impl Matrix {
    /// Build a matrix from nested rows, checking that all rows share a width.
    pub fn from_nested(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        Self::from_rows(rows.into_iter().map(Vector::new).collect())
    }

    /// Copy into nested rows. Shape is preserved exactly.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Row-major concatenation of all rows.
    ///
    /// The result has `n_rows * n_cols` elements.
    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.n_rows() * self.n_cols());
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }

    /// Copy into a `[n_rows, n_cols]` array.
    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(r, c)| self.as_rows()[r][c])
    }

    /// Build a matrix from a 2D array view, one row per array row.
    ///
    /// An array with zero rows becomes an empty matrix (width 0).
    pub fn from_array2(array: ArrayView2<'_, f64>) -> Self {
        let rows = array
            .rows()
            .into_iter()
            .map(|r| r.iter().copied().collect())
            .collect();
        Self::from_rows_unchecked(rows)
    }
}

impl SparseMatrix {
    /// Build one sparse row per dense row, keeping only non-zero values.
    ///
    /// The filter is an exact `!= 0.0` comparison: `-0.0` is dropped, while
    /// subnormals and NaN are stored.
    pub fn from_dense_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &value)| value != 0.0)
                    .map(|(i, &value)| (i, value))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Stored values per row, in index order. Absent entries are skipped,
    /// never zero-filled.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.values().collect()).collect()
    }

    /// Concatenation of every row's stored values.
    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nnz());
        for row in self.rows() {
            out.extend(row.values());
        }
        out
    }
}

impl SparseVector {
    /// Materialize a zero-filled dense row of the given width.
    ///
    /// # Errors
    ///
    /// [`ShapeError::IndexOutOfBounds`] if a stored index is `>= width`.
    pub fn to_dense(&self, width: usize) -> Result<Vector, ShapeError> {
        if let Some(index) = self.max_index().filter(|&i| i >= width) {
            return Err(ShapeError::IndexOutOfBounds { index, width });
        }
        let mut dense = vec![0.0; width];
        for (i, value) in self.iter() {
            dense[i] = value;
        }
        Ok(Vector::new(dense))
    }
}
