//! Front-end configuration

use std::path::PathBuf;

use hexxagon_core::BoardConfig;

use crate::save_store::DEFAULT_LIST_LIMIT;

/// Default directory for saved games
pub const DEFAULT_SAVES_DIR: &str = "saved";

/// Settings for an interactive session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory holding saved games
    pub saves_dir: PathBuf,
    /// Board dimensions for new games and loaded saves
    pub board: BoardConfig,
    /// How many saves the load menu offers
    pub list_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            saves_dir: PathBuf::from(DEFAULT_SAVES_DIR),
            board: BoardConfig::default(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
