//! Game configuration supplied by the harness

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::error::SwarmError;

/// The height of the standard game board in tiles
pub const DEFAULT_ROWS: usize = 6;

/// The width of the standard game board in tiles
pub const DEFAULT_COLUMNS: usize = 7;

/// The number of aligned tiles needed to win the standard game
pub const DEFAULT_INAROW: usize = 4;

// the standard game must be winnable in every direction
const_assert!(DEFAULT_INAROW <= DEFAULT_ROWS && DEFAULT_INAROW <= DEFAULT_COLUMNS);

/// Grid dimensions and win length, fixed for the duration of a game
///
/// Deserialises from the harness's configuration object; keys other than
/// `rows`, `columns` and `inarow` (timeouts, episode steps...) are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub rows: usize,
    pub columns: usize,
    pub inarow: usize,
}

impl Configuration {
    /// Creates and validates a configuration
    pub fn new(rows: usize, columns: usize, inarow: usize) -> Result<Self, SwarmError> {
        let config = Self {
            rows,
            columns,
            inarow,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects grids without cells and win lengths that fit in no direction
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(SwarmError::InvalidConfiguration(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.rows.checked_mul(self.columns).is_none() {
            return Err(SwarmError::InvalidConfiguration(format!(
                "a {}x{} grid has too many cells",
                self.rows, self.columns
            )));
        }
        if self.inarow == 0 {
            return Err(SwarmError::InvalidConfiguration(
                "inarow must be at least 1".to_string(),
            ));
        }
        if self.inarow > self.rows.max(self.columns) {
            return Err(SwarmError::InvalidConfiguration(format!(
                "inarow {} does not fit a {}x{} grid",
                self.inarow, self.rows, self.columns
            )));
        }
        Ok(())
    }

    /// The number of cells on the board
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// The column the candidate search starts from
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    /// The row used as the vertical reference for center distances
    pub fn center_row(&self) -> usize {
        self.rows / 2
    }

    /// Returns the columns ordered from the middle outwards: center,
    /// center + 1, center - 1, center + 2...
    ///
    /// Every column appears exactly once, also on even widths where one
    /// side runs out before the other.
    pub fn move_order(&self) -> Vec<usize> {
        let center = self.center_column();
        let mut order = Vec::with_capacity(self.columns);
        order.push(center);
        for shift in 1..=center.max(self.columns - center) {
            if center + shift < self.columns {
                order.push(center + shift);
            }
            if shift <= center {
                order.push(center - shift);
            }
        }
        order
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            inarow: DEFAULT_INAROW,
        }
    }
}
