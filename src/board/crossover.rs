//! Single-point crossover.
//!
//! The split point is drawn from `[0, size]` inclusive. The two end points
//! are degenerate: no recombination happens and the children are copies of
//! the parents.

use super::error::{BoardError, BoardResult};
use super::state::Board;
use rand::Rng;

impl Board {
    /// Recombines `self` and `other` at a uniformly random split point.
    ///
    /// Returns `(child1, child2)`; see [`crossover_at`](Board::crossover_at).
    ///
    /// # Errors
    ///
    /// [`BoardError::SizeMismatch`] if the boards differ in size.
    pub fn crossover<R: Rng>(&self, other: &Board, rng: &mut R) -> BoardResult<(Board, Board)> {
        self.check_same_size(other)?;
        let point = rng.random_range(0..=self.size());
        self.crossover_at(other, point)
    }

    /// Recombines `self` and `other` at column `point`.
    ///
    /// For `0 < point < size`, child 1 takes columns `[0, point)` from
    /// `self` and `[point, size)` from `other`; child 2 is the complement.
    /// For `point == 0` or `point == size` the children are copies of
    /// `self` and `other`. Children keep `self`'s display mode in the
    /// recombining case.
    ///
    /// # Errors
    ///
    /// [`BoardError::SizeMismatch`] if the boards differ in size,
    /// [`BoardError::CrossoverPointOutOfRange`] if `point > size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_state::Board;
    ///
    /// let a = Board::from_placement(4, vec![0, 0, 0, 0]).unwrap();
    /// let b = Board::from_placement(4, vec![3, 3, 3, 3]).unwrap();
    /// let (c1, c2) = a.crossover_at(&b, 1).unwrap();
    /// assert_eq!(c1.rows(), &[0, 3, 3, 3]);
    /// assert_eq!(c2.rows(), &[3, 0, 0, 0]);
    /// ```
    pub fn crossover_at(&self, other: &Board, point: usize) -> BoardResult<(Board, Board)> {
        self.check_same_size(other)?;
        let size = self.size();
        if point > size {
            return Err(BoardError::CrossoverPointOutOfRange { point, size });
        }

        if point == 0 || point == size {
            log::trace!("degenerate crossover at point {point} (size {size})");
            return Ok((self.clone(), other.clone()));
        }

        let (head1, tail1) = self.rows().split_at(point);
        let (head2, tail2) = other.rows().split_at(point);
        let child1 = [head1, tail2].concat();
        let child2 = [head2, tail1].concat();

        let display = self.display_mode();
        Ok((
            Board::from_rows_unchecked(child1, display),
            Board::from_rows_unchecked(child2, display),
        ))
    }

    fn check_same_size(&self, other: &Board) -> BoardResult<()> {
        if self.size() != other.size() {
            return Err(BoardError::SizeMismatch {
                expected: self.size(),
                actual: other.size(),
            });
        }
        Ok(())
    }
}
