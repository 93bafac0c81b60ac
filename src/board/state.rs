//! The [`Board`] value type: construction, accessors and single-step moves.

use super::error::{BoardError, BoardResult, PlacementError};
use super::heuristic::{attacking_pairs, max_value};
use super::types::{Direction, DisplayMode, LegalMoves};
use rand::Rng;
use std::hash::{Hash, Hasher};

/// One placement of `N` queens, exactly one per column.
///
/// `rows[col]` is the row of the queen in column `col`; the vector length is
/// the board size, so "one queen per column" holds by construction. The
/// heuristic value is computed whenever the placement changes and cached.
///
/// Boards are values: every move or crossover returns a new board and
/// leaves the receiver untouched. Cloning is the state copy.
///
/// # Equality
///
/// Two boards are equal iff they have the same size and the same row in
/// every column. The cached value and display mode are ignored.
///
/// # Examples
///
/// ```
/// use nqueens_state::Board;
///
/// let board = Board::from_placement(4, vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(board.value(), board.max_value());
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardRepr", into = "BoardRepr")
)]
pub struct Board {
    rows: Vec<usize>,
    value: usize,
    display: DisplayMode,
}

impl Board {
    /// Creates a board of `size` columns.
    ///
    /// With `Some(placement)`, the placement is validated and used as-is.
    /// With `None`, each column gets an independent uniformly random row;
    /// rows may repeat across columns.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPlacement`] when `size` is 0, the placement
    /// length differs from `size`, or a row is outside `[0, size)`.
    pub fn create<R: Rng>(
        size: usize,
        placement: Option<Vec<usize>>,
        rng: &mut R,
    ) -> BoardResult<Self> {
        match placement {
            Some(rows) => Self::from_placement(size, rows),
            None => Self::random(size, rng),
        }
    }

    /// Creates a board from an explicit placement.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn from_placement(size: usize, rows: Vec<usize>) -> BoardResult<Self> {
        validate_placement(size, &rows).inspect_err(|err| {
            log::debug!("rejected placement for size {size}: {err}");
        })?;
        Ok(Self::from_rows_unchecked(rows, DisplayMode::default()))
    }

    /// Creates a board with one uniformly random row per column.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPlacement`] when `size` is 0.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> BoardResult<Self> {
        if size == 0 {
            return Err(PlacementError::EmptyBoard.into());
        }
        let rows = (0..size).map(|_| rng.random_range(0..size)).collect();
        Ok(Self::from_rows_unchecked(rows, DisplayMode::default()))
    }

    /// Builds a board from rows already known to be valid.
    pub(crate) fn from_rows_unchecked(rows: Vec<usize>, display: DisplayMode) -> Self {
        debug_assert!(validate_placement(rows.len(), &rows).is_ok());
        let value = max_value(rows.len()) - attacking_pairs(&rows);
        Self {
            rows,
            value,
            display,
        }
    }

    /// Board size `N` (number of columns and rows).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row of each queen, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Row of the queen in `col`.
    ///
    /// # Errors
    ///
    /// [`BoardError::ColumnOutOfRange`] if `col >= size`.
    pub fn row_of(&self, col: usize) -> BoardResult<usize> {
        self.rows
            .get(col)
            .copied()
            .ok_or(BoardError::ColumnOutOfRange {
                col,
                size: self.size(),
            })
    }

    /// Whether the queen in `col` sits on `row`.
    ///
    /// # Errors
    ///
    /// [`BoardError::ColumnOutOfRange`] if `col >= size`.
    pub fn has_queen_at(&self, col: usize, row: usize) -> BoardResult<bool> {
        Ok(self.row_of(col)? == row)
    }

    /// Cached heuristic value. Higher is better.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Best possible value for this size: the number of queen pairs.
    pub fn max_value(&self) -> usize {
        max_value(self.size())
    }

    /// Number of queen pairs attacking each other.
    pub fn attacking_pairs(&self) -> usize {
        self.max_value() - self.value
    }

    /// Whether no two queens attack each other.
    pub fn is_solved(&self) -> bool {
        self.value == self.max_value()
    }

    /// Current rendering mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    /// Switches between full-grid and compact rendering.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display = mode;
    }

    /// Returns the board with its rendering mode set to `mode`.
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display = mode;
        self
    }

    /// Directions the queen in `col` can move without leaving the board.
    ///
    /// On a size-1 board the single row is both boundaries and the set is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`BoardError::ColumnOutOfRange`] if `col >= size`.
    pub fn legal_moves(&self, col: usize) -> BoardResult<LegalMoves> {
        let row = self.row_of(col)?;
        Ok(LegalMoves::for_row(row, self.size()))
    }

    /// New board with the queen in `col` moved one row toward row 0.
    ///
    /// # Errors
    ///
    /// [`BoardError::ColumnOutOfRange`] for an invalid column,
    /// [`BoardError::BoundaryViolation`] if the queen is on row 0.
    pub fn move_up(&self, col: usize) -> BoardResult<Self> {
        self.apply_move(col, Direction::Up)
    }

    /// New board with the queen in `col` moved one row toward the last row.
    ///
    /// # Errors
    ///
    /// [`BoardError::ColumnOutOfRange`] for an invalid column,
    /// [`BoardError::BoundaryViolation`] if the queen is on the last row.
    pub fn move_down(&self, col: usize) -> BoardResult<Self> {
        self.apply_move(col, Direction::Down)
    }

    /// New board with the queen in `col` moved one row in `direction`.
    ///
    /// # Errors
    ///
    /// As for [`move_up`](Self::move_up) and [`move_down`](Self::move_down).
    pub fn apply_move(&self, col: usize, direction: Direction) -> BoardResult<Self> {
        let mut next = self.clone();
        next.shift_queen(col, direction)?;
        Ok(next)
    }

    /// Moves one queen in place and refreshes the cached value.
    ///
    /// Only ever called on a fresh clone; the receiver is unchanged on error.
    fn shift_queen(&mut self, col: usize, direction: Direction) -> BoardResult<()> {
        let size = self.size();
        let row = self.row_of(col)?;
        let target = match direction {
            Direction::Up => row.checked_sub(1),
            Direction::Down => Some(row + 1).filter(|&r| r < size),
        };
        let Some(target) = target else {
            return Err(BoardError::BoundaryViolation {
                col,
                row,
                direction,
            });
        };
        self.rows[col] = target;
        self.value = max_value(size) - attacking_pairs(&self.rows);
        Ok(())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
    }
}

/// Checks length and row range of a placement.
pub(crate) fn validate_placement(size: usize, rows: &[usize]) -> Result<(), PlacementError> {
    if size == 0 {
        return Err(PlacementError::EmptyBoard);
    }
    if rows.len() != size {
        return Err(PlacementError::WrongLength {
            expected: size,
            actual: rows.len(),
        });
    }
    match rows.iter().position(|&row| row >= size) {
        Some(col) => Err(PlacementError::RowOutOfRange {
            col,
            row: rows[col],
            size,
        }),
        None => Ok(()),
    }
}

/// Wire form of a board. Deserialization re-validates and recomputes the value.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardRepr {
    size: usize,
    rows: Vec<usize>,
    #[serde(default)]
    display: DisplayMode,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Ok(Board::from_placement(repr.size, repr.rows)?.with_display_mode(repr.display))
    }
}

#[cfg(feature = "serde")]
impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            size: board.size(),
            display: board.display,
            rows: board.rows,
        }
    }
}
