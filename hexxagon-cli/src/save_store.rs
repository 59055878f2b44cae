//! Saved games directory
//!
//! One file per save, named from the local time it was written. The core
//! only sees a reader or writer; naming, listing and directory creation
//! live here.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use hexxagon_core::{save, Board, BoardConfig};

/// File name prefix for every save
pub const SAVE_PREFIX: &str = "Hexxagon_";

/// Timestamp layout after the prefix (day-month-year_hour-minute-second)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H-%M-%S";

/// How many saves the load menu offers
pub const DEFAULT_LIST_LIMIT: usize = 8;

/// A save file found on disk
#[derive(Clone, Debug, Serialize)]
pub struct SaveEntry {
    pub name: String,
    #[serde(skip)]
    pub modified: SystemTime,
}

/// Directory of saved games for one board size
#[derive(Clone, Debug)]
pub struct SaveStore {
    dir: PathBuf,
    config: BoardConfig,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>, config: BoardConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// File name for a save written at `time`
    pub fn file_name_for<Tz: TimeZone>(time: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}{}", SAVE_PREFIX, time.format(TIMESTAMP_FORMAT))
    }

    /// Write the board under a fresh timestamped name
    pub fn save(&self, board: &Board) -> Result<PathBuf> {
        self.ensure_dir()?;

        let (path, file) = self.create_unused(&Self::file_name_for(&Local::now()))?;
        save::write_board(board, file)
            .with_context(|| format!("Failed to write save file: {}", path.display()))?;

        tracing::info!("Saved game to {}", path.display());
        Ok(path)
    }

    /// Newest saves first, at most `limit`
    pub fn list(&self, limit: usize) -> Result<Vec<SaveEntry>> {
        self.ensure_dir()?;

        let read_dir = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read saves directory: {}", self.dir.display()))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry?;
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            entries.push(SaveEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            });
        }

        entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| b.name.cmp(&a.name)));
        entries.truncate(limit);
        Ok(entries)
    }

    /// Load a save by file name
    pub fn load(&self, name: &str) -> Result<Board> {
        if name.contains(&['/', '\\'][..]) {
            anyhow::bail!("Save name must not contain a path: {}", name);
        }

        let path = self.dir.join(name);
        let file = File::open(&path)
            .with_context(|| format!("Failed to open save file: {}", path.display()))?;
        let board = save::read_board(BufReader::new(file), self.config)
            .with_context(|| format!("Failed to load save file: {}", path.display()))?;

        tracing::info!("Loaded game from {}", path.display());
        Ok(board)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create saves directory: {}", self.dir.display())
            })?;
        }
        Ok(())
    }

    /// Claim a new file; saves written in the same second get a `_N` suffix.
    /// `create_new` makes the claim atomic, so an existing save is never truncated.
    fn create_unused(&self, name: &str) -> Result<(PathBuf, File)> {
        let mut path = self.dir.join(name);
        let mut n = 2;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    path = self.dir.join(format!("{}_{}", name, n));
                    n += 1;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to create save file: {}", path.display())
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> SaveStore {
        let dir = std::env::temp_dir()
            .join(format!("hexxagon-store-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        SaveStore::new(dir, BoardConfig::default())
    }

    #[test]
    fn test_file_name_format() {
        let time = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(SaveStore::file_name_for(&time), "Hexxagon_07-03-2024_09-05-02");
    }

    #[test]
    fn test_save_creates_directory_and_round_trips() {
        let store = temp_store("roundtrip");
        assert!(!store.dir().exists());

        let mut board = Board::standard();
        board.play(hexxagon_core::Move::Clone {
            from: hexxagon_core::Coord::new(0, 0),
            to: hexxagon_core::Coord::new(1, 0),
        });

        let path = store.save(&board).unwrap();
        assert!(path.starts_with(store.dir()));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(SAVE_PREFIX));

        let loaded = store.load(&name).unwrap();
        assert_eq!(loaded.serialize(), board.serialize());

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_same_second_saves_do_not_collide() {
        let store = temp_store("collide");
        let a = store.save(&Board::standard()).unwrap();
        let b = store.save(&Board::standard()).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.list(DEFAULT_LIST_LIMIT).unwrap().len(), 2);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_existing_file_is_never_overwritten() {
        let store = temp_store("claim");
        store.ensure_dir().unwrap();
        let taken = store.dir().join("Hexxagon_taken");
        fs::write(&taken, "keep").unwrap();

        let (path, _file) = store.create_unused("Hexxagon_taken").unwrap();
        assert_eq!(path, store.dir().join("Hexxagon_taken_2"));
        assert_eq!(fs::read_to_string(&taken).unwrap(), "keep");

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_concurrent_saves_get_distinct_files() {
        let store = temp_store("race");
        let board = Board::standard();

        let mut paths: Vec<PathBuf> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..6)
                .map(|_| scope.spawn(|| store.save(&board).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 6);

        for path in &paths {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            assert_eq!(store.load(&name).unwrap().serialize(), board.serialize());
        }

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_list_is_limited() {
        let store = temp_store("limit");
        for _ in 0..10 {
            store.save(&Board::standard()).unwrap();
        }
        assert_eq!(store.list(DEFAULT_LIST_LIMIT).unwrap().len(), 8);
        assert_eq!(store.list(3).unwrap().len(), 3);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_load_rejects_bad_content_and_paths() {
        let store = temp_store("bad");
        store.ensure_dir().unwrap();
        fs::write(store.dir().join("short"), "1".repeat(61)).unwrap();
        fs::write(store.dir().join("empty"), "").unwrap();

        assert!(store.load("short").is_err());
        assert!(store.load("empty").is_err());
        assert!(store.load("missing").is_err());
        assert!(store.load("../short").is_err());

        fs::remove_dir_all(store.dir()).unwrap();
    }
}
