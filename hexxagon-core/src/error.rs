//! Error types for board construction and save data

/// Board dimensions that cannot form a hexagon of hexagons
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("column count must be odd and non-zero, got {0}")]
    EvenColumns(usize),

    #[error("at least 3 columns are needed, got {0}")]
    TooFewColumns(usize),

    #[error("{rows} rows is too few for {columns} columns; outer columns need two cells")]
    TooFewRows { rows: usize, columns: usize },
}

/// Malformed or unreadable save data
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("save data is empty")]
    Empty,

    #[error("save line has {found} characters, expected {expected}")]
    Length { expected: usize, found: usize },

    #[error("invalid owner digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    #[error("invalid current player {0:?}")]
    InvalidPlayer(char),

    #[error("invalid board dimensions: {0}")]
    Dimensions(#[from] GridError),

    #[error("failed to read save data: {0}")]
    Io(#[from] std::io::Error),
}
