//! Hexxagon CLI
//!
//! Commands:
//! - play: Interactive game with menus and saves
//! - saves: List saved games
//! - show: Print a saved board

mod play_cmd;
mod saves_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexxagon")]
#[command(about = "Hexxagon board game in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play(play_cmd::PlayArgs),
    /// List saved games
    Saves(saves_cmd::SavesArgs),
    /// Print a saved board
    Show(saves_cmd::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the board
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Saves(args) => saves_cmd::run_saves(args),
        Commands::Show(args) => saves_cmd::run_show(args),
    }
}
