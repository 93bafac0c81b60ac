//! Text rendering of boards.

use super::state::Board;
use super::types::DisplayMode;
use std::fmt;

impl fmt::Display for Board {
    /// Renders according to the board's [`DisplayMode`].
    ///
    /// Full mode draws the grid row by row, `Q` marking queens; compact mode
    /// lists each column's row. Both end with `Value = v out of max`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        match self.display_mode() {
            DisplayMode::Full => {
                let border = format!("{}-", "----".repeat(size));
                for row in 0..size {
                    writeln!(f, "{border}")?;
                    for &queen in self.rows() {
                        f.write_str(if queen == row { "| Q " } else { "|   " })?;
                    }
                    writeln!(f, "|")?;
                }
                writeln!(f, "{border}")?;
            }
            DisplayMode::Compact => {
                for row in self.rows() {
                    write!(f, "{row} ")?;
                }
                f.write_str("    ")?;
            }
        }
        write!(f, "Value = {} out of {}", self.value(), self.max_value())
    }
}
