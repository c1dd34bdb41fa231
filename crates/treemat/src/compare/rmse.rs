//! Root mean squared error between predictions.

use super::{CompareError, check_row_counts};
use crate::data::Matrix;

/// Root Mean Squared Error: sqrt(mean((left - right)²))
///
/// Two empty vectors give NaN (0 / 0); the caller decides whether that counts
/// as a match.
pub fn vector_rmse(left: &[f64], right: &[f64]) -> Result<f64, CompareError> {
    if left.len() != right.len() {
        return Err(CompareError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    let sum_sq: f64 = left
        .iter()
        .zip(right)
        .map(|(a, b)| (a - b).powi(2))
        .sum();
    Ok((sum_sq / left.len() as f64).sqrt())
}

/// Mean of the per-row [`vector_rmse`] values.
///
/// This is not the RMSE of the flattened matrices: every row weighs the same
/// regardless of the others. Two matrices without rows give NaN.
pub fn matrix_rmse(left: &Matrix, right: &Matrix) -> Result<f64, CompareError> {
    check_row_counts(left.n_rows(), right.n_rows())?;
    let mut sum_rmse = 0.0;
    for (row, (a, b)) in left.rows().zip(right.rows()).enumerate() {
        sum_rmse += vector_rmse(a, b).map_err(|e| CompareError::at_row(row, e))?;
    }
    Ok(sum_rmse / left.n_rows() as f64)
}
