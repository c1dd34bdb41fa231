//! Testing utilities for prediction validation.
//!
//! Assertion helpers built on [`crate::compare`], usable from unit and
//! integration tests:
//!
//! ```
//! use treemat::data::Matrix;
//! use treemat::testing::{assert_matrix_approx_eq, DEFAULT_TOLERANCE};
//!
//! let expected = Matrix::from_nested(vec![vec![0.25, 0.75]]).unwrap();
//! let actual = Matrix::from_nested(vec![vec![0.250001, 0.75]]).unwrap();
//! assert_matrix_approx_eq(&actual, &expected, DEFAULT_TOLERANCE, "iris proba");
//! ```

use crate::compare::{is_equal_matrices, is_equal_vectors};
use crate::data::Matrix;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for comparing predictions of magnitude O(1).
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

// =============================================================================
// Assertions
// =============================================================================

/// Assert that two slices agree element-wise within `tolerance`.
///
/// # Panics
///
/// Panics with the first mismatch, prefixed by `context`.
pub fn assert_slice_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    if let Err(e) = is_equal_vectors(actual, expected, tolerance) {
        panic!("{context}: {e} (tolerance={tolerance})");
    }
}

/// Assert that two matrices agree row by row within `tolerance`.
///
/// # Panics
///
/// Panics with the failing row and element, prefixed by `context`.
pub fn assert_matrix_approx_eq(actual: &Matrix, expected: &Matrix, tolerance: f64, context: &str) {
    if let Err(e) = is_equal_matrices(actual, expected, tolerance) {
        panic!("{context}: {e} (tolerance={tolerance})");
    }
}
