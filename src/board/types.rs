//! Move directions, legal-move sets and display modes.

use std::fmt;

/// Direction a queen moves within its column.
///
/// Row 0 is the top of the board, so `Up` decrements the row and `Down`
/// increments it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row `size - 1`.
    Down,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// The set of directions a queen may legally move.
///
/// Iteration always yields `Up` before `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalMoves {
    up: bool,
    down: bool,
}

impl LegalMoves {
    /// Legal moves for a queen on `row` of a board with `size` rows.
    pub(crate) fn for_row(row: usize, size: usize) -> Self {
        Self {
            up: row > 0,
            down: row + 1 < size,
        }
    }

    /// Whether `direction` is legal.
    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Number of legal directions (0, 1 or 2).
    pub fn len(&self) -> usize {
        usize::from(self.up) + usize::from(self.down)
    }

    /// Whether the queen cannot move at all.
    pub fn is_empty(&self) -> bool {
        !self.up && !self.down
    }

    /// Returns the `index`-th legal direction in iteration order.
    pub(crate) fn nth(&self, index: usize) -> Option<Direction> {
        self.iter().nth(index)
    }

    /// Iterates the legal directions, `Up` first.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let up = self.up.then_some(Direction::Up);
        let down = self.down.then_some(Direction::Down);
        up.into_iter().chain(down)
    }
}

/// How a board renders through [`Display`](std::fmt::Display).
///
/// Presentation only: never part of equality, hashing or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayMode {
    /// Bordered `N x N` grid.
    #[default]
    Full,
    /// Row of each queen on one line.
    Compact,
}
