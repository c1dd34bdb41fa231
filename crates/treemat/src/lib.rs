//! treemat: numeric containers and file readers for gradient boosted tree inference.
//!
//! This crate is the input/output layer around a tree ensemble: it reads
//! feature rows from disk, hands them out as plain value types, compares
//! prediction matrices, and defines the contract for turning raw ensemble
//! output into predictions.
//!
//! # Key Types
//!
//! - [`Vector`] / [`SparseVector`] - dense and sparse rows of `f64`
//! - [`Matrix`] / [`SparseMatrix`] - row collections; dense rows share one width
//! - [`Activation`] / [`ActivationKind`] - output transform contract and its identifier
//!
//! # Reading Data
//!
//! - [`io::read_libsvm`]: `label index:value ...` rows into a [`SparseMatrix`]
//! - [`io::read_csv`]: delimited rows into a [`Matrix`], see [`io::CsvOptions`]
//!
//! # Validating Predictions
//!
//! [`compare`] provides tolerance equality, arg-max and RMSE; failures inside
//! a matrix carry the row they happened at.
//!
//! # Logging
//!
//! Readers and the activation registry emit `tracing` events. The crate never
//! installs a subscriber.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod activation;
pub mod compare;
pub mod data;
pub mod io;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use activation::{Activation, ActivationError, ActivationKind, ActivationRegistry};
pub use compare::CompareError;
pub use data::{Matrix, ShapeError, SparseMatrix, SparseVector, Vector};
pub use io::{ReadError, WriteError};

/// Any error raised by this crate.
///
/// Each module has its own error type; this enum lets callers mix them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Activation(#[from] ActivationError),
}

/// Result alias using the crate-wide [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
