//! Single-move neighborhoods.
//!
//! A neighbor differs from its source in exactly one column, by exactly one
//! row. Exhaustive hill climbing enumerates [`Board::all_neighbors`];
//! stochastic variants sample with [`Board::random_neighbor`].

use super::state::Board;
use super::types::{Direction, LegalMoves};
use rand::Rng;

impl Board {
    /// Every board reachable by one legal move.
    ///
    /// Ordered by column ascending, and within a column `Up` before `Down`.
    /// The length is the sum of [`legal_moves`](Board::legal_moves) sizes
    /// over all columns; a size-1 board has no neighbors.
    pub fn all_neighbors(&self) -> Vec<Board> {
        self.moves().map(|(col, dir)| self.neighbor(col, dir)).collect()
    }

    /// Same sequence as [`all_neighbors`](Board::all_neighbors), built in
    /// parallel with rayon.
    #[cfg(feature = "parallel")]
    pub fn par_all_neighbors(&self) -> Vec<Board> {
        use rayon::prelude::*;

        let moves: Vec<(usize, Direction)> = self.moves().collect();
        moves
            .into_par_iter()
            .map(|(col, dir)| self.neighbor(col, dir))
            .collect()
    }

    /// One neighbor chosen by a uniformly random column, then a uniformly
    /// random legal direction for that column.
    ///
    /// Returns `None` only when no column has a legal move (size 1).
    pub fn random_neighbor<R: Rng>(&self, rng: &mut R) -> Option<Board> {
        let size = self.size();
        if size < 2 {
            return None;
        }
        // Every column has at least one legal move once size >= 2.
        let col = rng.random_range(0..size);
        let options = self.column_moves(col);
        let dir = options.nth(rng.random_range(0..options.len()))?;
        Some(self.neighbor(col, dir))
    }

    /// `count` independent samples of [`random_neighbor`](Board::random_neighbor).
    ///
    /// Duplicates are expected. Empty when the board has no neighbors.
    pub fn random_neighbors<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Board> {
        (0..count)
            .map_while(|_| self.random_neighbor(rng))
            .collect()
    }

    /// All legal `(column, direction)` pairs in neighborhood order.
    fn moves(&self) -> impl Iterator<Item = (usize, Direction)> + '_ {
        (0..self.size()).flat_map(move |col| {
            self.column_moves(col)
                .iter()
                .map(move |dir| (col, dir))
        })
    }

    fn column_moves(&self, col: usize) -> LegalMoves {
        LegalMoves::for_row(self.rows()[col], self.size())
    }

    /// Applies a move already known to be legal.
    fn neighbor(&self, col: usize, dir: Direction) -> Board {
        let mut rows = self.rows().to_vec();
        rows[col] = match dir {
            Direction::Up => rows[col] - 1,
            Direction::Down => rows[col] + 1,
        };
        Board::from_rows_unchecked(rows, self.display_mode())
    }
}
