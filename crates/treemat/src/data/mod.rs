//! Numeric containers.
//!
//! All readers and metrics in this crate operate on four value types:
//!
//! - [`Vector`]: fixed-length row of `f64` values
//! - [`SparseVector`]: index-to-value map, absent indices are implicitly zero
//! - [`Matrix`]: rows of equal width
//! - [`SparseMatrix`]: sparse rows with independent index sets
//!
//! Containers are built whole, by a reader or by one of the `from_*`
//! constructors, and expose read-only access afterwards. Code that needs a
//! transformed copy builds a new container.
//!
//! # Sparse index order
//!
//! [`SparseVector`] is backed by a `BTreeMap`, so iterating a row (and every
//! conversion built on top of iteration) visits stored entries in ascending
//! index order.

mod convert;
mod error;

use std::collections::BTreeMap;
use std::ops::Deref;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

pub use error::ShapeError;

// =============================================================================
// Vector
// =============================================================================

/// A dense row of `f64` values.
///
/// Derefs to `[f64]` for read access. There is no mutable access: a vector
/// handed out by a reader stays as it was parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Wrap owned values as a vector.
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Borrow the values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Unwrap into the owned values.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Vector {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Vector {
    #[inline]
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Vectors of different lengths are never equal.
impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

// =============================================================================
// SparseVector
// =============================================================================

/// A sparse row: column index to value.
///
/// The index domain is unbounded; a sparse vector has no declared width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector(BTreeMap<usize, f64>);

impl SparseVector {
    /// Create an empty sparse vector.
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value stored at `index`, or `None` if the index is absent.
    ///
    /// Absent indices are implicitly zero; this accessor keeps the
    /// distinction visible.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(&index).copied()
    }

    /// Whether `index` has a stored value.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().map(|(&i, &v)| (i, v))
    }

    /// Stored indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    /// Stored values, ordered by index.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    /// Largest stored index, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }
}

/// Later pairs overwrite earlier pairs with the same index.
impl FromIterator<(usize, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<usize, f64>> for SparseVector {
    #[inline]
    fn from(entries: BTreeMap<usize, f64>) -> Self {
        Self(entries)
    }
}

/// Equal when both rows store the same index set and every value is within
/// `epsilon`. An explicitly stored zero is not the same as an absent index.
impl AbsDiffEq for SparseVector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.nnz() == other.nnz()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ia, a), (ib, b))| ia == ib && a.abs_diff_eq(&b, epsilon))
    }
}

// =============================================================================
// Matrix
// =============================================================================

/// Dense rows of identical width.
///
/// The first row fixes the width; constructors reject any later row with a
/// different length. A matrix without rows has width 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vector>", into = "Vec<Vector>")]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Build a matrix from owned rows.
    ///
    /// # Errors
    ///
    /// [`ShapeError::RowWidth`] for the first row whose length differs from
    /// row 0.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self, ShapeError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, actual)) = rows
                .iter()
                .map(|r| r.len())
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(ShapeError::RowWidth {
                    row,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Build a matrix from rows whose widths the caller already checked.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vector>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width shared by every row (0 for an empty matrix).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// `(n_rows, n_cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row `i`, or `None` if out of range.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&Vector> {
        self.rows.get(i)
    }

    /// Iterate rows in order.
    #[inline]
    pub fn rows(&self) -> std::slice::Iter<'_, Vector> {
        self.rows.iter()
    }

    /// Borrow all rows.
    #[inline]
    pub fn as_rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Unwrap into the owned rows.
    #[inline]
    pub fn into_rows(self) -> Vec<Vector> {
        self.rows
    }
}

impl TryFrom<Vec<Vector>> for Matrix {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vector>) -> Result<Self, ShapeError> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vector> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

// =============================================================================
// SparseMatrix
// =============================================================================

/// Sparse rows; each row has its own independent index set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseMatrix {
    rows: Vec<SparseVector>,
}

impl SparseMatrix {
    /// Build a sparse matrix from owned rows. No cross-row checks apply.
    #[inline]
    pub fn from_rows(rows: Vec<SparseVector>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of stored entries across all rows.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseVector::nnz).sum()
    }

    /// Row `i`, or `None` if out of range.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&SparseVector> {
        self.rows.get(i)
    }

    #[inline]
    pub fn rows(&self) -> std::slice::Iter<'_, SparseVector> {
        self.rows.iter()
    }

    #[inline]
    pub fn as_rows(&self) -> &[SparseVector] {
        &self.rows
    }

    #[inline]
    pub fn into_rows(self) -> Vec<SparseVector> {
        self.rows
    }
}

impl From<Vec<SparseVector>> for SparseMatrix {
    fn from(rows: Vec<SparseVector>) -> Self {
        Self::from_rows(rows)
    }
}

// =============================================================================
// Tests
// =============================================================================
