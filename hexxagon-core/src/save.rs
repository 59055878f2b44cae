//! Save format: one line of ASCII digits
//!
//! Character 0 is the player to move (`1` = A, `2` = B). Every following
//! character is one cell owner (`0` = empty, `1` = A, `2` = B) in
//! column-major order. The standard board is 1 + 61 = 62 characters.

use std::io::{BufRead, Write};

use crate::board::HexGrid;
use crate::config::BoardConfig;
use crate::error::FormatError;
use crate::game::{Board, Player};

/// Expected line length for a grid
pub fn line_len(grid: &HexGrid) -> usize {
    grid.cell_count() + 1
}

/// Encode owners and the player to move
pub fn encode(board: &Board) -> String {
    let mut line = String::with_capacity(line_len(board.grid()));
    line.push(digit(board.current_player().ordinal()));
    for (_, cell) in board.cells() {
        line.push(digit(cell.owner.map_or(0, Player::ordinal)));
    }
    line
}

/// Decode a save line into a fresh board of the given dimensions
pub fn decode(line: &str, config: BoardConfig) -> Result<Board, FormatError> {
    if line.is_empty() {
        return Err(FormatError::Empty);
    }

    let grid = HexGrid::new(config)?;
    let expected = line_len(&grid);
    let found = line.chars().count();
    if found != expected {
        return Err(FormatError::Length { expected, found });
    }

    let mut chars = line.chars();
    let first = chars.next().ok_or(FormatError::Empty)?;
    let current_player = first
        .to_digit(10)
        .and_then(|d| Player::from_ordinal(d as u8))
        .ok_or(FormatError::InvalidPlayer(first))?;

    let owners = chars
        .enumerate()
        .map(|(i, ch)| match ch {
            '0' => Ok(None),
            '1' => Ok(Some(Player::A)),
            '2' => Ok(Some(Player::B)),
            _ => Err(FormatError::InvalidDigit {
                position: i + 1,
                found: ch,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Board::from_owners(grid, current_player, owners))
}

/// Write the save line to a stream
pub fn write_board<W: Write>(board: &Board, mut writer: W) -> std::io::Result<()> {
    writer.write_all(encode(board).as_bytes())?;
    writer.flush()
}

/// Read the first line of a stream as a save
pub fn read_board<R: BufRead>(mut reader: R, config: BoardConfig) -> Result<Board, FormatError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    decode(line.trim_end_matches(&['\n', '\r'][..]), config)
}

fn digit(ordinal: u8) -> char {
    char::from(b'0' + ordinal)
}

impl Board {
    /// Save line for this board
    pub fn serialize(&self) -> String {
        encode(self)
    }

    /// Read a standard-size board from a stream
    pub fn deserialize<R: BufRead>(reader: R) -> Result<Self, FormatError> {
        read_board(reader, BoardConfig::default())
    }

    /// Replace this board with one read from a stream, keeping the current
    /// dimensions. On error the board is left untouched.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<(), FormatError> {
        let loaded = read_board(reader, self.grid().config())?;
        *self = loaded;
        tracing::info!(
            "Loaded board: {} to move (A={}, B={})",
            self.current_player(),
            self.score().player_a,
            self.score().player_b
        );
        Ok(())
    }
}
