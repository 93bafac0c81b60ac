//! N-Queens board state.
//!
//! A [`Board`] places exactly one queen in each of its `N` columns. Rows may
//! repeat across columns, so a board is any point of the `N^N` search space,
//! not only permutations.
//!
//! # Heuristic
//!
//! The value of a board is `max_value - attacking_pairs`, where
//! `max_value = N(N-1)/2` is the number of queen pairs. Higher is better; a
//! board whose value equals its maximum is a solution. Search algorithms
//! built on this type **maximize**.
//!
//! # Key Types
//!
//! - [`Board`]: the state value, with moves, neighborhoods and crossover
//! - [`Direction`] / [`LegalMoves`]: single-step queen moves
//! - [`DisplayMode`]: full grid or compact one-line rendering
//! - [`BoardConfig`]: builder for boards with a size, seed and display mode
//! - [`BoardError`]: the failure kinds callers branch on
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 4
//!   (8-queens as a local search benchmark)

mod config;
mod crossover;
mod error;
mod heuristic;
mod neighborhood;
mod render;
mod state;
mod types;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult, PlacementError};
pub use heuristic::{attacking_pairs, max_value};
pub use state::Board;
pub use types::{Direction, DisplayMode, LegalMoves};
