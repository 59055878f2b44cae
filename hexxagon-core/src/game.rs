//! Board state and the select -> clone/jump -> capture move protocol

use serde::{Deserialize, Serialize};

use crate::board::{Coord, HexGrid};
use crate::config::BoardConfig;
use crate::error::GridError;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player. Discriminants are the save-file ordinals (0 is an empty cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A = 1,
    B = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Player::A),
            2 => Some(Player::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Display/interaction marker on a cell. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Default,
    CloneOption,
    JumpOption,
    Selected,
}

/// A single board cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub owner: Option<Player>,
    pub state: CellState,
}

/// Cell counts, recomputed after every move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_a: usize,
    pub player_b: usize,
    pub empty: usize,
}

impl Score {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    pub fn total(&self) -> usize {
        self.player_a + self.player_b + self.empty
    }

    /// Full board decides by majority; a wiped-out player loses regardless
    fn result(&self) -> GameResult {
        let mut result = GameResult::Ongoing;

        if self.empty == 0 {
            result = match self.player_a.cmp(&self.player_b) {
                std::cmp::Ordering::Greater => GameResult::PlayerAWins,
                std::cmp::Ordering::Less => GameResult::PlayerBWins,
                std::cmp::Ordering::Equal => GameResult::Draw,
            };
        }
        if self.player_b == 0 {
            result = GameResult::PlayerAWins;
        }
        if self.player_a == 0 {
            result = GameResult::PlayerBWins;
        }

        result
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    PlayerAWins,
    PlayerBWins,
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerAWins => Some(Player::A),
            GameResult::PlayerBWins => Some(Player::B),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

/// A complete move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Copy onto an adjacent empty cell; origin keeps its piece
    Clone { from: Coord, to: Coord },
    /// Move onto an empty cell two steps away; origin is vacated
    Jump { from: Coord, to: Coord },
}

impl Move {
    pub fn from(&self) -> Coord {
        match *self {
            Move::Clone { from, .. } | Move::Jump { from, .. } => from,
        }
    }

    pub fn to(&self) -> Coord {
        match *self {
            Move::Clone { to, .. } | Move::Jump { to, .. } => to,
        }
    }
}

/// What a single click did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Nothing changed (off-board, game over, or an inert cell)
    Ignored,
    /// Existing markers were cleared
    Cleared,
    /// An own piece was selected and its options marked
    Selected,
    Clone,
    Jump,
}

/// Result of `Board::select_cell`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    /// Cells whose owner or state differs from before the call
    pub changed: Vec<Coord>,
    /// Enemy cells converted by the move
    pub captured: Vec<Coord>,
    pub score: Score,
    pub result: GameResult,
}

impl MoveOutcome {
    /// Whether this click finished a move (and switched turns)
    pub fn completed_move(&self) -> bool {
        matches!(self.kind, MoveKind::Clone | MoveKind::Jump)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Full game state. Owned by the caller, mutated one click at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: HexGrid,

    /// Ragged storage: one Vec per column. `state` is never `Selected` here.
    cells: Vec<Vec<Cell>>,

    /// The single selected cell, if any
    selected: Option<Coord>,

    current_player: Player,

    /// Cached counts, derived from `cells`
    score: Score,

    result: GameResult,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a board in the starting position
    pub fn new(config: BoardConfig) -> Result<Self, GridError> {
        Ok(Self::with_grid(HexGrid::new(config)?))
    }

    /// Standard 9x9 board in the starting position
    pub fn standard() -> Self {
        Self::with_grid(HexGrid::standard())
    }

    pub fn with_grid(grid: HexGrid) -> Self {
        let mut board = Self {
            cells: Vec::new(),
            grid,
            selected: None,
            current_player: Player::A,
            score: Score::default(),
            result: GameResult::Ongoing,
        };
        board.start();
        board
    }

    /// Reset to the starting layout with Player A to move.
    ///
    /// Player A holds the tops of the two outer columns and the bottom of the
    /// centre column; Player B holds the opposite ends.
    pub fn start(&mut self) {
        let last = self.grid.columns() - 1;
        let center = self.grid.center_column();

        self.cells = (0..self.grid.columns())
            .map(|col| {
                let len = self.grid.column_len(col);
                (0..len)
                    .map(|idx| {
                        let outer = col == 0 || col == last;
                        let mut owner = None;
                        if (outer && idx == 0) || (col == center && idx == len - 1) {
                            owner = Some(Player::A);
                        }
                        if (outer && idx == len - 1) || (col == center && idx == 0) {
                            owner = Some(Player::B);
                        }
                        Cell {
                            owner,
                            state: CellState::Default,
                        }
                    })
                    .collect()
            })
            .collect();

        self.selected = None;
        self.current_player = Player::A;
        self.recount();
        self.result = self.score.result();
    }

    /// Board with the given owners (column-major) and player to move.
    /// Markers start cleared; score and result are derived.
    pub(crate) fn from_owners(
        grid: HexGrid,
        current_player: Player,
        owners: impl IntoIterator<Item = Option<Player>>,
    ) -> Self {
        let mut board = Self::with_grid(grid);
        let coords: Vec<Coord> = board.grid.coords().collect();

        for (coord, owner) in coords.into_iter().zip(owners) {
            board.cells[coord.col][coord.idx].owner = owner;
        }

        board.current_player = current_player;
        board.recount();
        board.result = board.score.result();
        board
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Cell at a coordinate with its display state resolved
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let mut cell = *self.cells.get(coord.col)?.get(coord.idx)?;
        if self.selected == Some(coord) {
            cell.state = CellState::Selected;
        }
        Some(cell)
    }

    pub fn owner(&self, coord: Coord) -> Option<Player> {
        self.cell(coord).and_then(|c| c.owner)
    }

    pub fn state(&self, coord: Coord) -> Option<CellState> {
        self.cell(coord).map(|c| c.state)
    }

    /// All cells in column-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.grid
            .coords()
            .filter_map(move |coord| self.cell(coord).map(|cell| (coord, cell)))
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Every clone and jump open to the current player
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.result.is_over() {
            return vec![];
        }
        self.moves_for(self.current_player)
    }

    /// Whether a player has any clone or jump available
    pub fn has_legal_move(&self, player: Player) -> bool {
        !self.moves_for(player).is_empty()
    }

    fn moves_for(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for from in self.grid.coords() {
            if self.owner(from) != Some(player) {
                continue;
            }
            for to in self.grid.neighbors_of(from) {
                if self.is_empty(to) {
                    moves.push(Move::Clone { from, to });
                }
            }
            for to in self.grid.jump_targets_of(from) {
                if self.is_empty(to) {
                    moves.push(Move::Jump { from, to });
                }
            }
        }

        moves
    }

    fn is_empty(&self, coord: Coord) -> bool {
        self.grid.contains(coord) && self.cells[coord.col][coord.idx].owner.is_none()
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Handle one click on a grid coordinate.
    ///
    /// Clicking an own piece selects it and marks its clone/jump options.
    /// Clicking a marked option completes the move. Anything else clears
    /// the markers. Off-board clicks and clicks after the game ended are
    /// ignored.
    pub fn select_cell(&mut self, coord: Coord) -> MoveOutcome {
        if self.result.is_over() || !self.grid.contains(coord) {
            return self.outcome(MoveKind::Ignored, Vec::new(), Vec::new());
        }

        let before = self.view();
        let state = self.state(coord).unwrap_or_default();

        if matches!(state, CellState::Default | CellState::Selected) {
            self.clear_marks();
        }

        let (kind, captured) = if self.owner(coord) == Some(self.current_player) {
            self.mark_options(coord);
            (MoveKind::Selected, Vec::new())
        } else {
            match (state, self.selected) {
                (CellState::CloneOption, Some(origin)) => {
                    (MoveKind::Clone, self.apply_clone(origin, coord))
                }
                (CellState::JumpOption, Some(origin)) => {
                    (MoveKind::Jump, self.apply_jump(origin, coord))
                }
                _ => (MoveKind::Cleared, Vec::new()),
            }
        };

        let changed = self.changed_since(&before);
        let kind = if kind == MoveKind::Cleared && changed.is_empty() {
            MoveKind::Ignored
        } else {
            kind
        };

        self.outcome(kind, changed, captured)
    }

    /// Play a whole move as two clicks. Illegal moves are ignored.
    pub fn play(&mut self, mv: Move) -> MoveOutcome {
        if !self.legal_moves().contains(&mv) {
            return self.outcome(MoveKind::Ignored, Vec::new(), Vec::new());
        }

        let before = self.view();
        self.select_cell(mv.from());
        let mut outcome = self.select_cell(mv.to());
        outcome.changed = self.changed_since(&before);
        outcome
    }

    fn mark_options(&mut self, origin: Coord) {
        self.selected = Some(origin);

        for coord in self.grid.neighbors_of(origin) {
            if self.is_empty(coord) {
                self.cells[coord.col][coord.idx].state = CellState::CloneOption;
            }
        }
        for coord in self.grid.jump_targets_of(origin) {
            if self.is_empty(coord) {
                self.cells[coord.col][coord.idx].state = CellState::JumpOption;
            }
        }
    }

    fn clear_marks(&mut self) {
        self.selected = None;
        for cell in self.cells.iter_mut().flatten() {
            cell.state = CellState::Default;
        }
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    fn apply_clone(&mut self, origin: Coord, dest: Coord) -> Vec<Coord> {
        let owner = self.cells[origin.col][origin.idx].owner;
        self.cells[dest.col][dest.idx].owner = owner;

        let captured = self.take_over(dest);
        tracing::debug!(
            "{} clones {} -> {}, captures {}",
            self.current_player,
            origin,
            dest,
            captured.len()
        );

        self.finish_move();
        captured
    }

    fn apply_jump(&mut self, origin: Coord, dest: Coord) -> Vec<Coord> {
        let owner = self.cells[origin.col][origin.idx].owner;
        self.cells[dest.col][dest.idx].owner = owner;
        self.cells[origin.col][origin.idx].owner = None;

        let captured = self.take_over(dest);
        tracing::debug!(
            "{} jumps {} -> {}, captures {}",
            self.current_player,
            origin,
            dest,
            captured.len()
        );

        self.finish_move();
        captured
    }

    /// Flip every enemy neighbour of `dest` to the current player
    fn take_over(&mut self, dest: Coord) -> Vec<Coord> {
        let enemy = self.current_player.opponent();
        let mut captured = Vec::new();

        for coord in self.grid.neighbors_of(dest) {
            let cell = &mut self.cells[coord.col][coord.idx];
            if cell.owner == Some(enemy) {
                cell.owner = Some(self.current_player);
                captured.push(coord);
            }
        }

        captured
    }

    /// Score, win check, clear markers, switch turns
    fn finish_move(&mut self) {
        self.recount();
        self.result = self.score.result();
        self.clear_marks();
        self.current_player = self.current_player.opponent();

        if self.result.is_over() {
            tracing::info!(
                "Game over: {:?} (A={}, B={})",
                self.result,
                self.score.player_a,
                self.score.player_b
            );
        }
    }

    fn recount(&mut self) {
        let mut score = Score::default();
        for cell in self.cells.iter().flatten() {
            match cell.owner {
                Some(Player::A) => score.player_a += 1,
                Some(Player::B) => score.player_b += 1,
                None => score.empty += 1,
            }
        }
        self.score = score;
    }

    // ========================================================================
    // CHANGE TRACKING
    // ========================================================================

    fn view(&self) -> Vec<Cell> {
        self.cells().map(|(_, cell)| cell).collect()
    }

    fn changed_since(&self, before: &[Cell]) -> Vec<Coord> {
        self.cells()
            .zip(before)
            .filter(|((_, now), then)| now != *then)
            .map(|((coord, _), _)| coord)
            .collect()
    }

    fn outcome(&self, kind: MoveKind, changed: Vec<Coord>, captured: Vec<Coord>) -> MoveOutcome {
        MoveOutcome {
            kind,
            changed,
            captured,
            score: self.score,
            result: self.result,
        }
    }

    /// Force an owner onto a cell; the score is recomputed but no win check runs
    #[cfg(test)]
    pub(crate) fn set_owner(&mut self, coord: Coord, owner: Option<Player>) {
        self.cells[coord.col][coord.idx].owner = owner;
        self.recount();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================
