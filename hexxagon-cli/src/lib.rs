//! Hexxagon CLI - text front-end for the board rules engine
//!
//! - Session configuration
//! - Saved-games directory (naming, listing, loading)
//! - Menu flow: main menu, game, pause menu, saved games
//! - Plain-text board rendering

pub mod config;
pub mod render;
pub mod save_store;
pub mod session;

pub use config::{SessionConfig, DEFAULT_SAVES_DIR};
pub use save_store::{SaveEntry, SaveStore, DEFAULT_LIST_LIMIT};
pub use session::{Command, Reply, Screen, Session};
