//! Hex board geometry over a ragged column layout
//!
//! The board is a hexagon of hexagons stored column by column. The centre
//! column is the longest; every step away from it drops one cell. Cells are
//! addressed by `(col, idx)` where `idx` counts down from the top of the
//! column.
//!
//! Adjacency is computed by lifting a cell into doubled-height coordinates
//! (`x = col`, `y = |col - centre| + 2 * idx`), where every hex direction is
//! a fixed offset regardless of which half of the board the cell sits in.

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::error::GridError;

/// Grid coordinate: column and index within that column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub col: usize,
    pub idx: usize,
}

impl Coord {
    pub const fn new(col: usize, idx: usize) -> Self {
        Self { col, idx }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.idx)
    }
}

/// Ring-1 offsets in doubled-height space (dx, dy)
/// Order: up, upper-right, lower-right, down, lower-left, upper-left
pub const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [
    (0, -2),
    (1, -1),
    (1, 1),
    (0, 2),
    (-1, 1),
    (-1, -1),
];

/// Ring-2 offsets in doubled-height space (dx, dy), clockwise from straight up
pub const JUMP_OFFSETS: [(isize, isize); 12] = [
    (0, -4),
    (1, -3),
    (2, -2),
    (2, 0),
    (2, 2),
    (1, 3),
    (0, 4),
    (-1, 3),
    (-2, 2),
    (-2, 0),
    (-2, -2),
    (-1, -3),
];

/// Ragged hexagonal grid. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexGrid {
    rows: usize,
    center: usize,
    lengths: Vec<usize>,
}

impl HexGrid {
    /// Build the grid for the given configuration
    pub fn new(config: BoardConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// The canonical 9x9 board (61 cells)
    pub fn standard() -> Self {
        Self::build(BoardConfig::default())
    }

    fn build(config: BoardConfig) -> Self {
        let center = config.columns / 2;
        let lengths = (0..config.columns)
            .map(|col| config.rows - col.abs_diff(center))
            .collect();

        Self {
            rows: config.rows,
            center,
            lengths,
        }
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            rows: self.rows,
            columns: self.lengths.len(),
        }
    }

    pub fn columns(&self) -> usize {
        self.lengths.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn center_column(&self) -> usize {
        self.center
    }

    /// Number of cells in a column, 0 for a column off the board
    pub fn column_len(&self, col: usize) -> usize {
        self.lengths.get(col).copied().unwrap_or(0)
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.lengths.iter().sum()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.idx < self.column_len(coord.col)
    }

    /// All coordinates in column-major order (column 0 top to bottom, then column 1, ...)
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.lengths
            .iter()
            .enumerate()
            .flat_map(|(col, &len)| (0..len).map(move |idx| Coord::new(col, idx)))
    }

    /// Ring-1: up to 6 directly adjacent cells
    pub fn neighbors_of(&self, coord: Coord) -> Vec<Coord> {
        self.ring(coord, &NEIGHBOR_OFFSETS)
    }

    /// Ring-2: up to 12 cells at hex distance exactly 2
    pub fn jump_targets_of(&self, coord: Coord) -> Vec<Coord> {
        self.ring(coord, &JUMP_OFFSETS)
    }

    /// Hex distance between two cells on the board
    pub fn distance(&self, a: Coord, b: Coord) -> usize {
        let (ax, ay) = self.lift(a);
        let (bx, by) = self.lift(b);
        let dx = ax.abs_diff(bx);
        let dy = ay.abs_diff(by);
        dx + dy.saturating_sub(dx) / 2
    }

    fn ring(&self, coord: Coord, offsets: &[(isize, isize)]) -> Vec<Coord> {
        if !self.contains(coord) {
            return Vec::new();
        }

        let (x, y) = self.lift(coord);
        offsets
            .iter()
            .filter_map(|&(dx, dy)| self.lower(x + dx, y + dy))
            .collect()
    }

    /// Column/index -> doubled-height (x, y)
    fn lift(&self, coord: Coord) -> (isize, isize) {
        let shift = coord.col.abs_diff(self.center);
        (coord.col as isize, (shift + 2 * coord.idx) as isize)
    }

    /// Doubled-height (x, y) -> column/index, if on the board
    fn lower(&self, x: isize, y: isize) -> Option<Coord> {
        if x < 0 || y < 0 {
            return None;
        }

        let col = x as usize;
        if col >= self.columns() {
            return None;
        }

        let shift = col.abs_diff(self.center);
        let y = y as usize;
        if y < shift || (y - shift) % 2 != 0 {
            return None;
        }

        let coord = Coord::new(col, (y - shift) / 2);
        self.contains(coord).then_some(coord)
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Column-by-column neighbour rule with explicit left/right branches
    fn branchy_neighbors(grid: &HexGrid, c: Coord) -> Vec<Coord> {
        let center = grid.center_column();
        let len = |col: usize| grid.column_len(col);
        let (col, idx) = (c.col as isize, c.idx as isize);
        let mut out = Vec::new();
        let mut push = |col: isize, idx: isize| {
            if col >= 0 && idx >= 0 && (idx as usize) < len(col as usize) {
                out.push(Coord::new(col as usize, idx as usize));
            }
        };

        push(col, idx - 1);
        push(col, idx + 1);
        if c.col < center {
            push(col + 1, idx);
            push(col + 1, idx + 1);
        } else {
            push(col + 1, idx - 1);
            push(col + 1, idx);
        }
        if c.col > center {
            push(col - 1, idx);
            push(col - 1, idx + 1);
        } else {
            push(col - 1, idx - 1);
            push(col - 1, idx);
        }

        out.sort();
        out
    }

    fn sorted(mut v: Vec<Coord>) -> Vec<Coord> {
        v.sort();
        v
    }

    #[test]
    fn test_standard_cell_count() {
        let grid = HexGrid::standard();
        assert_eq!(grid.cell_count(), 61);
        assert_eq!(grid.coords().count(), 61);
        assert_eq!(grid.center_column(), 4);
        assert_eq!(grid.column_len(0), 5);
        assert_eq!(grid.column_len(4), 9);
        assert_eq!(grid.column_len(8), 5);
        assert_eq!(grid.column_len(9), 0);
    }

    #[test]
    fn test_cell_count_matches_column_lengths() {
        for (rows, columns) in [(5, 5), (7, 7), (9, 9), (11, 9), (6, 3), (3, 3)] {
            let grid = HexGrid::new(BoardConfig { rows, columns }).unwrap();
            let center = columns / 2;
            let expected = rows * columns - center * (center + 1);
            assert_eq!(grid.cell_count(), expected);
            assert_eq!(grid.coords().count(), expected);
        }
    }

    #[test]
    fn test_neighbors_match_branch_rule() {
        let grid = HexGrid::standard();
        for coord in grid.coords() {
            assert_eq!(
                sorted(grid.neighbors_of(coord)),
                branchy_neighbors(&grid, coord),
                "neighbours of {}",
                coord
            );
        }
    }

    /// Standard board plus irregular and smaller sizes
    fn sample_grids() -> Vec<HexGrid> {
        [(9, 9), (11, 9), (7, 5), (3, 3)]
            .into_iter()
            .map(|(rows, columns)| HexGrid::new(BoardConfig { rows, columns }).unwrap())
            .collect()
    }

    #[test]
    fn test_neighbor_symmetry() {
        for grid in sample_grids() {
            for a in grid.coords() {
                for b in grid.neighbors_of(a) {
                    assert!(
                        grid.neighbors_of(b).contains(&a),
                        "{} -> {} not symmetric on {:?}",
                        a,
                        b,
                        grid.config()
                    );
                }
            }
        }
    }

    #[test]
    fn test_interior_ring_sizes() {
        let grid = HexGrid::standard();
        let centre = Coord::new(4, 4);
        assert_eq!(grid.neighbors_of(centre).len(), 6);
        assert_eq!(grid.jump_targets_of(centre).len(), 12);
    }

    #[test]
    fn test_corner_neighbors() {
        let grid = HexGrid::standard();
        assert_eq!(
            sorted(grid.neighbors_of(Coord::new(0, 0))),
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_eq!(
            sorted(grid.neighbors_of(Coord::new(8, 4))),
            vec![Coord::new(7, 4), Coord::new(7, 5), Coord::new(8, 3)]
        );
        // Top of the centre column
        assert_eq!(
            sorted(grid.neighbors_of(Coord::new(4, 0))),
            vec![Coord::new(3, 0), Coord::new(4, 1), Coord::new(5, 0)]
        );
    }

    #[test]
    fn test_right_half_neighbors() {
        let grid = HexGrid::standard();
        assert_eq!(
            sorted(grid.neighbors_of(Coord::new(6, 3))),
            vec![
                Coord::new(5, 3),
                Coord::new(5, 4),
                Coord::new(6, 2),
                Coord::new(6, 4),
                Coord::new(7, 2),
                Coord::new(7, 3),
            ]
        );
    }

    #[test]
    fn test_jump_targets_across_centre() {
        let grid = HexGrid::standard();
        // Column 3 jumping two columns right lands in column 5 (right half)
        let targets = grid.jump_targets_of(Coord::new(3, 2));
        assert!(targets.contains(&Coord::new(5, 1)));
        assert!(targets.contains(&Coord::new(5, 2)));
        assert!(targets.contains(&Coord::new(5, 3)));
        assert!(targets.contains(&Coord::new(3, 0)));
        assert!(targets.contains(&Coord::new(3, 4)));
        assert_eq!(targets.len(), 12);
    }

    #[test]
    fn test_jump_targets_are_second_ring() {
        for grid in sample_grids() {
            for a in grid.coords() {
                let ring1 = grid.neighbors_of(a);
                let mut expected: Vec<Coord> = ring1
                    .iter()
                    .flat_map(|&n| grid.neighbors_of(n))
                    .filter(|c| *c != a && !ring1.contains(c))
                    .collect();
                expected.sort();
                expected.dedup();

                assert_eq!(sorted(grid.jump_targets_of(a)), expected, "ring-2 of {}", a);
            }
        }
    }

    #[test]
    fn test_jump_symmetry_and_distance() {
        for grid in sample_grids() {
            for a in grid.coords() {
                for b in grid.jump_targets_of(a) {
                    assert!(grid.jump_targets_of(b).contains(&a));
                    assert_eq!(grid.distance(a, b), 2);
                }
                for b in grid.neighbors_of(a) {
                    assert_eq!(grid.distance(a, b), 1);
                }
            }
        }
    }

    #[test]
    fn test_rows_is_centre_column_length() {
        let grid = HexGrid::new(BoardConfig::new(11, 9).unwrap()).unwrap();
        assert_eq!(grid.rows(), 11);
        assert_eq!(grid.column_len(grid.center_column()), grid.rows());
        assert_eq!(grid.column_len(0), 7);
    }

    #[test]
    fn test_out_of_bounds_has_no_rings() {
        let grid = HexGrid::standard();
        assert!(grid.neighbors_of(Coord::new(0, 5)).is_empty());
        assert!(grid.jump_targets_of(Coord::new(9, 0)).is_empty());
        assert!(!grid.contains(Coord::new(8, 5)));
    }

    #[test]
    fn test_invalid_dimensions() {
        for (rows, columns) in [(9, 8), (4, 9), (9, 0), (5, 9), (3, 1)] {
            assert!(HexGrid::new(BoardConfig { rows, columns }).is_err());
        }
    }

    #[test]
    fn test_standard_equals_default_config() {
        assert_eq!(HexGrid::new(BoardConfig::default()).unwrap(), HexGrid::standard());
    }
}
