//! Plain-text board rendering
//!
//! Columns are laid out left to right, four characters apart. Each cell is
//! drawn as a glyph followed by its index within the column, offset half a
//! line per step away from the centre column so neighbours touch.

use hexxagon_core::{Board, CellState, GameResult, Player, Score};

const COLUMN_WIDTH: usize = 4;

fn glyph(owner: Option<Player>, state: CellState) -> char {
    match (state, owner) {
        (CellState::Selected, _) => '@',
        (CellState::CloneOption, _) => '+',
        (CellState::JumpOption, _) => '*',
        (CellState::Default, Some(Player::A)) => 'A',
        (CellState::Default, Some(Player::B)) => 'B',
        (CellState::Default, None) => '.',
    }
}

/// Draw the board with a column header
pub fn render_board(board: &Board) -> String {
    let grid = board.grid();
    let center = grid.center_column();

    let mut out = String::new();
    for col in 0..grid.columns() {
        out.push_str(&format!("{:<width$}", col, width = COLUMN_WIDTH));
    }
    out.push('\n');

    // Lines are in half-cell steps; the centre column spans all of them
    let height = 2 * grid.rows().saturating_sub(1);

    for line in 0..=height {
        let mut text = String::new();
        for col in 0..grid.columns() {
            let shift = col.abs_diff(center);
            let cell = (line >= shift && (line - shift) % 2 == 0)
                .then(|| hexxagon_core::Coord::new(col, (line - shift) / 2))
                .and_then(|coord| board.cell(coord).map(|cell| (coord, cell)));

            match cell {
                Some((coord, cell)) => {
                    let label = format!("{}{}", glyph(cell.owner, cell.state), coord.idx);
                    text.push_str(&format!("{:<width$}", label, width = COLUMN_WIDTH));
                }
                None => text.push_str(&" ".repeat(COLUMN_WIDTH)),
            }
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }

    out
}

pub fn render_score(score: &Score) -> String {
    format!(
        "{}: {}  {}: {}  Empty: {}",
        Player::A,
        score.of(Player::A),
        Player::B,
        score.of(Player::B),
        score.empty
    )
}

pub fn render_result(result: GameResult) -> Option<String> {
    if !result.is_over() {
        return None;
    }
    match result.winner() {
        Some(player) => Some(format!("{} WINS!", player.to_string().to_uppercase())),
        None => Some("DRAW!".to_string()),
    }
}

/// Board, score line and whose turn it is
pub fn render_status(board: &Board) -> String {
    let mut out = render_board(board);
    out.push_str(&render_score(&board.score()));
    out.push('\n');
    match render_result(board.result()) {
        Some(text) => out.push_str(&text),
        None => out.push_str(&format!("{} to move", board.current_player())),
    }
    out.push('\n');
    out
}
