//! Read-only view of a board for display layers

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::config::BoardConfig;
use crate::game::{Board, Cell, GameResult, Player, Score};

/// Everything a renderer needs, detached from the live board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    pub current_player: Player,
    pub score: Score,
    pub result: GameResult,
    pub selected: Option<Coord>,
    /// One entry per column, top to bottom
    pub columns: Vec<Vec<Cell>>,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        let grid = self.grid();
        let columns = (0..grid.columns())
            .map(|col| {
                (0..grid.column_len(col))
                    .filter_map(|idx| self.cell(Coord::new(col, idx)))
                    .collect()
            })
            .collect();

        BoardSnapshot {
            config: grid.config(),
            current_player: self.current_player(),
            score: self.score(),
            result: self.result(),
            selected: self.selected(),
            columns,
        }
    }
}
