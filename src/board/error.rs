//! Board failure kinds.
//!
//! All failures are caller errors: a search algorithm asked for something
//! the board cannot do. Nothing is clamped or truncated silently.

use super::types::Direction;

/// Why a placement was rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The board must have at least one column.
    #[error("board size must be positive")]
    EmptyBoard,

    /// The placement does not give exactly one row per column.
    #[error("expected {expected} queens, given {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A row index falls outside `[0, size)`.
    #[error("queen in column {col} has invalid row {row} (size {size})")]
    RowOutOfRange { col: usize, row: usize, size: usize },
}

/// Errors raised by [`Board`](super::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The supplied placement is not valid for the requested size.
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] PlacementError),

    /// A column argument is outside `[0, size)`.
    #[error("column index out of range: {col} (size {size})")]
    ColumnOutOfRange { col: usize, size: usize },

    /// The queen is already on the boundary row in the requested direction.
    #[error("can't move queen {direction} from row {row} in column {col}")]
    BoundaryViolation {
        col: usize,
        row: usize,
        direction: Direction,
    },

    /// Crossover between boards of different sizes.
    #[error("board sizes differ: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A crossover split point beyond the last column boundary.
    #[error("crossover point {point} out of range [0, {size}]")]
    CrossoverPointOutOfRange { point: usize, size: usize },
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
