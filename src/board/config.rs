//! Board construction configuration.
//!
//! [`BoardConfig`] gathers the parameters an experiment driver varies when
//! building starting states: size, an optional fixed placement, the display
//! mode and a seed.

use super::error::{BoardResult, PlacementError};
use super::state::{validate_placement, Board};
use super::types::DisplayMode;
use crate::random::create_rng;
use rand::Rng;

/// Configuration for building a [`Board`].
///
/// # Defaults
///
/// ```
/// use nqueens_state::{BoardConfig, DisplayMode};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.size, 8);
/// assert_eq!(config.display, DisplayMode::Full);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_state::{BoardConfig, DisplayMode};
///
/// let board = BoardConfig::default()
///     .with_size(12)
///     .with_display(DisplayMode::Compact)
///     .with_seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(board.size(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Number of columns (and rows). Must be positive.
    pub size: usize,

    /// Fixed queen rows by column. `None` places queens randomly.
    pub placement: Option<Vec<usize>>,

    /// Rendering mode of the built board.
    pub display: DisplayMode,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            placement: None,
            display: DisplayMode::Full,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Sets the board size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Fixes the queen rows instead of placing them randomly.
    pub fn with_placement(mut self, placement: Vec<usize>) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Sets the rendering mode of the built board.
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Applies the same placement checks as [`Board::from_placement`].
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPlacement`](super::BoardError::InvalidPlacement)
    /// when `size` is 0 or the fixed placement does not fit `size`.
    pub fn validate(&self) -> BoardResult<()> {
        if self.size == 0 {
            return Err(PlacementError::EmptyBoard.into());
        }
        if let Some(placement) = &self.placement {
            validate_placement(self.size, placement)?;
        }
        Ok(())
    }

    /// Builds a board, seeding a generator from [`seed`](Self::seed).
    ///
    /// # Errors
    ///
    /// Whatever [`validate`](Self::validate) reports.
    pub fn build(&self) -> BoardResult<Board> {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("building {}-queens board (seed {seed})", self.size);
        self.build_with_rng(&mut create_rng(seed))
    }

    /// Builds a board drawing randomness from `rng`.
    ///
    /// The seed field is ignored.
    ///
    /// # Errors
    ///
    /// Whatever [`validate`](Self::validate) reports.
    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> BoardResult<Board> {
        self.validate()?;
        let board = Board::create(self.size, self.placement.clone(), rng)?;
        Ok(board.with_display_mode(self.display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardError;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 8);
        assert!(config.placement.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_size() {
        let config = BoardConfig::default().with_size(0);
        let expected = BoardError::InvalidPlacement(PlacementError::EmptyBoard);
        assert_eq!(config.validate(), Err(expected.clone()));
        assert_eq!(config.build().unwrap_err(), expected);
    }

    #[test]
    fn test_validate_bad_placement() {
        let short = BoardConfig::default().with_size(4).with_placement(vec![0, 1]);
        let expected = BoardError::InvalidPlacement(PlacementError::WrongLength {
            expected: 4,
            actual: 2,
        });
        assert_eq!(short.validate(), Err(expected.clone()));
        assert_eq!(short.build().unwrap_err(), expected);

        let out_of_range = BoardConfig::default()
            .with_size(4)
            .with_placement(vec![0, 1, 2, 4]);
        let expected = BoardError::InvalidPlacement(PlacementError::RowOutOfRange {
            col: 3,
            row: 4,
            size: 4,
        });
        assert_eq!(out_of_range.validate(), Err(expected.clone()));
        assert_eq!(out_of_range.build().unwrap_err(), expected);

        // build_with_rng rejects the same configuration before drawing.
        let mut rng = create_rng(42);
        assert_eq!(out_of_range.build_with_rng(&mut rng).unwrap_err(), expected);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = BoardConfig::default().with_size(10).with_seed(42);
        assert_eq!(config.build().unwrap(), config.build().unwrap());
    }

    #[test]
    fn test_build_with_placement_and_display() {
        let board = BoardConfig::default()
            .with_size(4)
            .with_placement(vec![1, 3, 0, 2])
            .with_display(DisplayMode::Compact)
            .build()
            .unwrap();
        assert_eq!(board.rows(), &[1, 3, 0, 2]);
        assert_eq!(board.display_mode(), DisplayMode::Compact);
        assert!(board.is_solved());
    }

    #[test]
    fn test_build_with_rng() {
        let mut rng = create_rng(42);
        let board = BoardConfig::default()
            .with_size(5)
            .build_with_rng(&mut rng)
            .unwrap();
        assert_eq!(board.size(), 5);
    }
}
