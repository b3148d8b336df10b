//! Errors raised while building a dancing links grid.

/// Reasons an input matrix cannot be turned into a grid.
///
/// Searching never fails: a problem without an exact cover is reported as
/// `false` or `None`, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The dense matrix has no rows, so its column count is unknown.
    #[error("matrix has no rows")]
    NoRows,

    /// The problem has no constraint columns.
    #[error("matrix has no columns")]
    NoColumns,

    /// The grid would need more nodes than can be addressed.
    #[error("{num_columns} columns do not fit in a grid")]
    TooManyColumns {
        /// Number of columns requested.
        num_columns: usize,
    },

    /// A dense matrix row does not have the same length as the first row.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// The 1-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A coordinate used a 0 row or column, but coordinates are 1-based.
    #[error("coordinate ({row}, {column}) is not 1-based")]
    ZeroIndex {
        /// Row of the coordinate.
        row: usize,
        /// Column of the coordinate.
        column: usize,
    },

    /// A coordinate referenced a column past the end of the grid.
    #[error("coordinate ({row}, {column}) is outside of {num_columns} columns")]
    ColumnOutOfRange {
        /// Row of the coordinate.
        row: usize,
        /// Column of the coordinate.
        column: usize,
        /// Number of columns in the grid.
        num_columns: usize,
    },
}
