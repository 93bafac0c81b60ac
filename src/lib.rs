//! N-Queens board state for search experiments.
//!
//! Provides the state representation that local-search and evolutionary
//! algorithms manipulate when attacking the N-Queens problem:
//!
//! - **Board**: one queen per column, with a memoized heuristic value
//!   where higher is better and the maximum means no attacking pairs.
//! - **Moves**: shift one queen one row up or down, always producing a new
//!   board.
//! - **Neighborhoods**: the full single-move neighborhood for exhaustive
//!   hill climbing, or random samples for stochastic variants.
//! - **Crossover**: single-point recombination of two boards for genetic
//!   algorithms.
//!
//! # Architecture
//!
//! The crate contains no search control logic. Hill climbing, simulated
//! annealing, beam search and GA loops are written by consumers on top of
//! [`Board`]. All randomness is injected through `rand::Rng` handles; see
//! [`random::create_rng`] for seeded generators.

pub mod board;
pub mod random;

pub use board::{
    Board, BoardConfig, BoardError, BoardResult, Direction, DisplayMode, LegalMoves,
    PlacementError,
};
