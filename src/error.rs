use thiserror::Error;

/// Errors returned while building point sets and distance matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A row does not have the same number of coordinates as the first row.
    #[error("dimension mismatch at row {row}: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        /// Index of the offending row.
        row: usize,
        /// Dimensionality of the first row.
        expected: usize,
        /// Dimensionality of the offending row.
        found: usize,
    },

    /// A non-empty point set has points with no coordinates.
    #[error("points must have at least one coordinate")]
    ZeroDimension,

    /// A flat buffer does not hold the number of values its shape implies.
    #[error("buffer length mismatch: expected {expected} values, found {found}")]
    BufferLength {
        /// Length implied by the requested shape.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// A coordinate is NaN or infinite and strict validation was requested.
    #[error("non-finite coordinate at row {row}, column {column}")]
    NonFiniteInput {
        /// Row of the offending coordinate.
        row: usize,
        /// Column of the offending coordinate.
        column: usize,
    },

    /// A buffer breaks the distance matrix invariants at the given cell: non-zero
    /// diagonal, negative entry or `(row, column) != (column, row)`.
    #[error("not a distance matrix: invalid entry at row {row}, column {column}")]
    NotADistanceMatrix {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
    },

    /// The N×N result could not be allocated.
    #[error("cannot allocate a {n_elements}x{n_elements} distance matrix")]
    AllocationFailure {
        /// Number of points requested.
        n_elements: usize,
    },
}

impl Error {
    /// Whether the error describes a malformed (non-rectangular or mis-shaped) input.
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            Error::DimensionMismatch { .. } | Error::ZeroDimension | Error::BufferLength { .. }
        )
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
