//! Activation contract for raw ensemble output.
//!
//! A tree ensemble produces raw scores (margins). An [`Activation`] maps one
//! raw-score [`Vector`] into the model's prediction space, e.g. margins to
//! probabilities. The evaluator holds its activation as `Box<dyn Activation>`
//! and never needs to know the concrete type.
//!
//! Every implementation reports an [`ActivationKind`], the stable identifier
//! stored alongside a model. [`ActivationRegistry`] maps kinds to factories so
//! an evaluator can be assembled from serialized metadata alone.
//!
//! This crate ships no concrete activations; implementors live next to the
//! evaluator that uses them.

mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::Vector;

pub use registry::{ActivationFactory, ActivationRegistry};

// =============================================================================
// Activation Trait
// =============================================================================

/// Converts raw scores into final predictions.
pub trait Activation: Send + Sync {
    /// Map a raw-score vector into prediction space.
    ///
    /// Must not mutate `raw`; the result is a new vector. Returns an error if
    /// `raw` is malformed for this transform (wrong arity, empty input).
    fn transform(&self, raw: &Vector) -> Result<Vector, ActivationError>;

    /// Stable identifier matched against a loaded model's declared activation.
    fn kind(&self) -> ActivationKind;

    /// Human-readable label for diagnostics.
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

// =============================================================================
// ActivationKind
// =============================================================================

/// Serializable identifier of an activation.
///
/// The serialized names are part of the model format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    /// Raw margins are the predictions.
    Raw,
    /// Per-score logistic sigmoid.
    Logistic,
    /// Softmax over the class scores of one row.
    Softmax,
    /// Index of the highest class score.
    MultiClassMax,
}

impl ActivationKind {
    /// All kinds, in declaration order.
    pub const ALL: [ActivationKind; 4] = [
        ActivationKind::Raw,
        ActivationKind::Logistic,
        ActivationKind::Softmax,
        ActivationKind::MultiClassMax,
    ];

    /// The serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Logistic => "logistic",
            Self::Softmax => "softmax",
            Self::MultiClassMax => "multi_class_max",
        }
    }

    /// Activation implied by an XGBoost objective name.
    ///
    /// Returns `None` for objectives whose output transform is not one of the
    /// known kinds (e.g. `reg:gamma`, `rank:pairwise`).
    pub fn from_objective(objective: &str) -> Option<Self> {
        match objective {
            "reg:squarederror" | "reg:linear" | "reg:absoluteerror" | "reg:pseudohubererror"
            | "reg:quantileerror" | "binary:logitraw" | "binary:hinge" => Some(Self::Raw),
            "binary:logistic" | "reg:logistic" => Some(Self::Logistic),
            "multi:softprob" => Some(Self::Softmax),
            "multi:softmax" => Some(Self::MultiClassMax),
            _ => None,
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivationKind {
    type Err = ActivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ActivationError::UnknownKind(s.to_string()))
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised by activations and the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    /// The raw-score vector has the wrong number of elements.
    #[error("{kind} expects {expected} raw scores, got {actual}")]
    Arity {
        kind: ActivationKind,
        expected: usize,
        actual: usize,
    },

    #[error("{0} cannot transform an empty score vector")]
    EmptyInput(ActivationKind),

    #[error("no activation registered for {0}")]
    NotRegistered(ActivationKind),

    /// A factory was registered under a kind its product does not report.
    #[error("factory registered as {expected} produces {actual}")]
    KindMismatch {
        expected: ActivationKind,
        actual: ActivationKind,
    },

    #[error("unknown activation kind {0:?}")]
    UnknownKind(String),

    #[error("objective {0:?} has no known activation")]
    UnknownObjective(String),
}
