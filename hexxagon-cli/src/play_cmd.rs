//! Play command - interactive session on stdin/stdout
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: open_session(), run_loop()

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexxagon_cli::{Command, Session, SessionConfig, DEFAULT_LIST_LIMIT, DEFAULT_SAVES_DIR};
use hexxagon_core::BoardConfig;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Directory holding saved games
    #[arg(long, default_value = DEFAULT_SAVES_DIR)]
    pub saves_dir: PathBuf,

    /// Open this save instead of the main menu
    #[arg(long, value_name = "NAME")]
    pub load: Option<String>,

    /// Length of the centre column
    #[arg(long, default_value = "9")]
    pub rows: usize,

    /// Number of columns (odd)
    #[arg(long, default_value = "9")]
    pub columns: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let mut session = open_session(&args)?;

    tracing::info!(
        "Starting session ({}x{}, saves in {})",
        args.rows,
        args.columns,
        args.saves_dir.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn open_session(args: &PlayArgs) -> Result<Session> {
    let config = BoardConfig::new(args.rows, args.columns).with_context(|| {
        format!("Invalid board size: {} rows, {} columns", args.rows, args.columns)
    })?;
    let mut session = Session::new(SessionConfig {
        saves_dir: args.saves_dir.clone(),
        board: config,
        list_limit: DEFAULT_LIST_LIMIT,
    })?;

    if let Some(name) = &args.load {
        session
            .open(name)
            .with_context(|| format!("Failed to open save: {}", name))?;
    }

    Ok(session)
}

/// Feed input lines to the session until it quits or input ends
fn run_loop<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    writeln!(output, "{}", session.prompt())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            writeln!(output, "Unrecognised input: {} (try `help`)", line.trim())?;
            continue;
        };

        let reply = session.handle(command);
        for text in &reply.lines {
            writeln!(output, "{}", text)?;
        }
        if reply.quit {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
