/// Reasons two containers failed to compare, or a metric could not be computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    #[error("different vector length: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("element {index} mismatch: left[{index}]={left}, right[{index}]={right}")]
    ElementMismatch { index: usize, left: f64, right: f64 },

    #[error("index {index} is stored in only one of the sparse vectors")]
    IndexSetMismatch { index: usize },

    #[error("row count mismatch: left has {left} rows, right has {right} rows")]
    RowCountMismatch { left: usize, right: usize },

    /// A row-level failure, wrapped with the row it happened at.
    #[error("matrix comparison at row {row}: {source}")]
    AtRow {
        row: usize,
        #[source]
        source: Box<CompareError>,
    },

    /// The operation is undefined on an empty vector.
    #[error("empty vector")]
    EmptyVector,
}

impl CompareError {
    pub(crate) fn at_row(row: usize, source: CompareError) -> Self {
        Self::AtRow {
            row,
            source: Box::new(source),
        }
    }

    /// Row index, if this error was raised while walking matrix rows.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::AtRow { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// The innermost error, with any row context peeled off.
    pub fn root_cause(&self) -> &CompareError {
        match self {
            Self::AtRow { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
