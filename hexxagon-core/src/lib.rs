//! Hexxagon Core - Board rules engine
//!
//! This crate provides the headless game logic for Hexxagon:
//! - Board geometry (hexagon of hexagons stored as ragged columns)
//! - Ring-1 adjacency and ring-2 jump targets
//! - The select -> clone/jump -> capture -> score -> win-check move cycle
//! - The single-line digit save format

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod save;
pub mod snapshot;

// Re-exports for convenient access
pub use board::{Coord, HexGrid};
pub use config::BoardConfig;
pub use error::{FormatError, GridError};
pub use game::{Board, Cell, CellState, GameResult, Move, MoveKind, MoveOutcome, Player, Score};
pub use snapshot::BoardSnapshot;
