//! Shape errors raised while building containers.

/// A container could not be built because its rows disagree on shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A dense row does not have the width fixed by the first row.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A sparse index does not fit into the requested dense width.
    #[error("sparse index {index} does not fit into a dense row of width {width}")]
    IndexOutOfBounds { index: usize, width: usize },
}
