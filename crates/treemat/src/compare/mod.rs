//! Tolerance equality, arg-max and RMSE for validating predictions.
//!
//! Every check fails fast: the first mismatch is returned, and failures
//! inside a matrix row are wrapped in [`CompareError::AtRow`].
//!
//! # Tolerance
//!
//! Two values are equal when `|a - b| <= tolerance`. A NaN difference never
//! exceeds the tolerance, so NaN positions compare as equal.

mod error;
mod rmse;

pub use error::CompareError;
pub use rmse::{matrix_rmse, vector_rmse};

use crate::data::{Matrix, SparseMatrix, SparseVector};

// =============================================================================
// Threshold equality
// =============================================================================

/// Check that two vectors have the same length and agree within `tolerance`.
pub fn is_equal_vectors(left: &[f64], right: &[f64], tolerance: f64) -> Result<(), CompareError> {
    if left.len() != right.len() {
        return Err(CompareError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    match left
        .iter()
        .zip(right)
        .position(|(a, b)| (a - b).abs() > tolerance)
    {
        Some(index) => Err(CompareError::ElementMismatch {
            index,
            left: left[index],
            right: right[index],
        }),
        None => Ok(()),
    }
}

/// Check two matrices row by row with [`is_equal_vectors`].
pub fn is_equal_matrices(left: &Matrix, right: &Matrix, tolerance: f64) -> Result<(), CompareError> {
    check_row_counts(left.n_rows(), right.n_rows())?;
    for (row, (a, b)) in left.rows().zip(right.rows()).enumerate() {
        is_equal_vectors(a, b, tolerance).map_err(|e| CompareError::at_row(row, e))?;
    }
    Ok(())
}

/// Check that two sparse rows store the same index set and agree within
/// `tolerance`. An explicitly stored zero does not match an absent index.
pub fn is_equal_sparse_vectors(
    left: &SparseVector,
    right: &SparseVector,
    tolerance: f64,
) -> Result<(), CompareError> {
    let mut a = left.iter().peekable();
    let mut b = right.iter().peekable();
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ok(()),
            (Some((i, x)), Some((j, y))) if i == j => {
                if (x - y).abs() > tolerance {
                    return Err(CompareError::ElementMismatch {
                        index: i,
                        left: x,
                        right: y,
                    });
                }
                a.next();
                b.next();
            }
            (Some((i, _)), Some((j, _))) => {
                return Err(CompareError::IndexSetMismatch { index: i.min(j) });
            }
            (Some((index, _)), None) | (None, Some((index, _))) => {
                return Err(CompareError::IndexSetMismatch { index });
            }
        }
    }
}

/// Check two sparse matrices row by row with [`is_equal_sparse_vectors`].
pub fn is_equal_sparse_matrices(
    left: &SparseMatrix,
    right: &SparseMatrix,
    tolerance: f64,
) -> Result<(), CompareError> {
    check_row_counts(left.n_rows(), right.n_rows())?;
    for (row, (a, b)) in left.rows().zip(right.rows()).enumerate() {
        is_equal_sparse_vectors(a, b, tolerance).map_err(|e| CompareError::at_row(row, e))?;
    }
    Ok(())
}

pub(crate) fn check_row_counts(left: usize, right: usize) -> Result<(), CompareError> {
    if left != right {
        return Err(CompareError::RowCountMismatch { left, right });
    }
    Ok(())
}

// =============================================================================
// Arg-max
// =============================================================================

/// Index of the largest element.
///
/// Ties resolve to the first occurrence. NaN never wins a comparison, so an
/// all-NaN vector yields index 0.
///
/// # Errors
///
/// [`CompareError::EmptyVector`] if `values` is empty.
pub fn argmax(values: &[f64]) -> Result<usize, CompareError> {
    if values.is_empty() {
        return Err(CompareError::EmptyVector);
    }
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best_value = v;
            best = i;
        }
    }
    Ok(best)
}

// =============================================================================
// Tests
// =============================================================================
