//! Saves and show commands - inspect saved games without playing

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexxagon_cli::render::render_status;
use hexxagon_cli::{SaveStore, DEFAULT_LIST_LIMIT, DEFAULT_SAVES_DIR};
use hexxagon_core::{save, BoardConfig};

#[derive(Args)]
pub struct SavesArgs {
    /// Directory holding saved games
    #[arg(long, default_value = DEFAULT_SAVES_DIR)]
    pub saves_dir: PathBuf,

    /// Maximum number of saves to list
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Save file to print
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Length of the centre column the save was written for
    #[arg(long, default_value = "9")]
    pub rows: usize,

    /// Number of columns the save was written for
    #[arg(long, default_value = "9")]
    pub columns: usize,

    /// Output the board snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// List saves, newest first
pub fn run_saves(args: SavesArgs) -> Result<()> {
    let store = SaveStore::new(&args.saves_dir, BoardConfig::default());
    let entries = store.list(args.limit)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No saved games in {}", store.dir().display());
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{:>2}. {}", i + 1, entry.name);
    }
    Ok(())
}

/// Print one saved board
pub fn run_show(args: ShowArgs) -> Result<()> {
    let config = BoardConfig::new(args.rows, args.columns).with_context(|| {
        format!("Invalid board size: {} rows, {} columns", args.rows, args.columns)
    })?;
    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open save file: {}", args.file.display()))?;
    let board = save::read_board(BufReader::new(file), config)
        .with_context(|| format!("Failed to load save file: {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    } else {
        print!("{}", render_status(&board));
    }
    Ok(())
}
