//! Board dimensions

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Governing dimensions of the hexagonal board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Length of the centre column
    pub rows: usize,
    /// Number of columns (odd)
    pub columns: usize,
}

impl BoardConfig {
    pub const STANDARD_ROWS: usize = 9;
    pub const STANDARD_COLUMNS: usize = 9;

    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let config = Self { rows, columns };
        config.validate()?;
        Ok(config)
    }

    /// Check that the dimensions describe a hexagon of hexagons with room
    /// for the six starting pieces
    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns == 0 || self.columns % 2 == 0 {
            return Err(GridError::EvenColumns(self.columns));
        }
        // Outer columns and the centre column must be distinct
        if self.columns < 3 {
            return Err(GridError::TooFewColumns(self.columns));
        }
        // Outer columns need separate top and bottom cells
        if self.rows < self.columns / 2 + 2 {
            return Err(GridError::TooFewRows {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: Self::STANDARD_ROWS,
            columns: Self::STANDARD_COLUMNS,
        }
    }
}
