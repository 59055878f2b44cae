//! Menu flow around a single board
//!
//! Screens: main menu, game, pause menu and the saved-games list. Input is
//! one text command per step; the session answers with lines to print.

use hexxagon_core::{Board, Coord};

use crate::render::{render_result, render_status};
use crate::config::SessionConfig;
use crate::save_store::SaveStore;

/// Which screen is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Game,
    Paused,
    SavedGames,
}

/// A parsed line of input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    LoadMenu,
    Exit,
    Click(Coord),
    Pause,
    Resume,
    SaveAndExit,
    Pick(usize),
    Back,
    Help,
}

impl Command {
    /// Parse `col idx`, a list number, or a keyword
    pub fn parse(line: &str) -> Option<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [col, idx] => {
                let col = col.parse().ok()?;
                let idx = idx.parse().ok()?;
                Some(Command::Click(Coord::new(col, idx)))
            }
            [word] => {
                if let Ok(n) = word.parse() {
                    return Some(Command::Pick(n));
                }
                match word.to_ascii_lowercase().as_str() {
                    "new" => Some(Command::NewGame),
                    "load" => Some(Command::LoadMenu),
                    "exit" | "quit" | "q" => Some(Command::Exit),
                    "pause" | "esc" => Some(Command::Pause),
                    "resume" => Some(Command::Resume),
                    "save" => Some(Command::SaveAndExit),
                    "back" | "menu" => Some(Command::Back),
                    "help" | "?" => Some(Command::Help),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// What one step produced
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn say(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// Interactive session state
pub struct Session {
    screen: Screen,
    board: Board,
    store: SaveStore,
    list_limit: usize,
    listed: Vec<String>,
}

impl Session {
    pub fn new(config: SessionConfig) -> anyhow::Result<Self> {
        let board = Board::new(config.board)?;
        Ok(Self {
            screen: Screen::MainMenu,
            board,
            store: SaveStore::new(config.saves_dir, config.board),
            list_limit: config.list_limit,
            listed: Vec::new(),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Open a named save straight into the game screen
    pub fn open(&mut self, name: &str) -> anyhow::Result<()> {
        self.board = self.store.load(name)?;
        self.screen = Screen::Game;
        Ok(())
    }

    /// Text shown when entering the current screen
    pub fn prompt(&self) -> String {
        match self.screen {
            Screen::MainMenu => "[new] New game  [load] Load game  [exit] Exit".to_string(),
            Screen::Game => format!(
                "{}Enter `col idx` to click a cell, `pause` for the menu",
                render_status(&self.board)
            ),
            Screen::Paused => {
                "[resume] Back to game  [save] Save and exit  [menu] Exit".to_string()
            }
            Screen::SavedGames => {
                if self.listed.is_empty() {
                    return "No saved games. [back] Main menu".to_string();
                }
                let mut text = String::from("Saved games:\n");
                for (i, name) in self.listed.iter().enumerate() {
                    text.push_str(&format!("  {}. {}\n", i + 1, name));
                }
                text.push_str("Pick a number, or [back] Main menu");
                text
            }
        }
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Reply {
        let reply = Reply::default();

        if command == Command::Help {
            return reply.say(self.prompt());
        }

        match (self.screen, command) {
            (Screen::MainMenu, Command::NewGame) => {
                self.board.start();
                self.enter(Screen::Game, reply)
            }
            (Screen::MainMenu, Command::LoadMenu) => self.open_saved_games(reply),
            (Screen::MainMenu, Command::Exit) => Reply { quit: true, ..reply },

            (Screen::SavedGames, Command::Pick(n)) => self.pick_save(n, reply),
            (Screen::SavedGames, Command::Back) => self.enter(Screen::MainMenu, reply),

            (Screen::Game, Command::Click(coord)) => self.click(coord, reply),
            (Screen::Game, Command::Pause) => self.enter(Screen::Paused, reply),

            (Screen::Paused, Command::Resume | Command::Pause) => self.enter(Screen::Game, reply),
            (Screen::Paused, Command::SaveAndExit) => match self.store.save(&self.board) {
                Ok(path) => {
                    let reply = reply.say(format!("Saved to {}", path.display()));
                    self.enter(Screen::MainMenu, reply)
                }
                Err(e) => {
                    tracing::warn!("Save failed: {:#}", e);
                    reply.say(format!("Save failed: {:#}", e))
                }
            },
            (Screen::Paused, Command::Back | Command::Exit) => self.enter(Screen::MainMenu, reply),

            (_, command) => reply.say(format!("{:?} is not available here", command)),
        }
    }

    fn enter(&mut self, screen: Screen, reply: Reply) -> Reply {
        self.screen = screen;
        reply.say(self.prompt())
    }

    fn open_saved_games(&mut self, reply: Reply) -> Reply {
        match self.store.list(self.list_limit) {
            Ok(entries) => {
                self.listed = entries.into_iter().map(|e| e.name).collect();
                self.enter(Screen::SavedGames, reply)
            }
            Err(e) => {
                tracing::warn!("Could not list saves: {:#}", e);
                reply.say(format!("Could not list saves: {:#}", e))
            }
        }
    }

    fn pick_save(&mut self, n: usize, reply: Reply) -> Reply {
        let Some(name) = n.checked_sub(1).and_then(|i| self.listed.get(i)).cloned() else {
            return reply.say(format!("No save numbered {}", n));
        };

        match self.open(&name) {
            Ok(()) => self.enter(Screen::Game, reply),
            Err(e) => reply.say(format!("{:#}", e)),
        }
    }

    fn click(&mut self, coord: Coord, reply: Reply) -> Reply {
        let outcome = self.board.select_cell(coord);
        if outcome.changed.is_empty() {
            return reply.say(format!("Nothing to do at {}", coord));
        }

        if let Some(text) = render_result(outcome.result) {
            let reply = reply.say(render_status(&self.board)).say(text);
            return self.enter(Screen::MainMenu, reply);
        }

        let mut reply = reply.say(self.prompt());
        if outcome.completed_move() && !self.board.has_legal_move(self.board.current_player()) {
            reply = reply.say(format!("{} has no legal moves", self.board.current_player()));
        }
        reply
    }
}
