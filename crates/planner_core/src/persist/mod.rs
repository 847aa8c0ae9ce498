//! Persistence adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the key-value blob interface the store persists through.
//! - Isolate storage backends from collection/business logic.
//!
//! # Invariants
//! - The whole collection is written as one blob under one key; there are
//!   no partial updates.
//! - A failed write must leave any previously stored blob untouched where
//!   the backend allows it, and never corrupts in-memory state.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Fixed key the activity collection is stored under.
pub const STORAGE_KEY: &str = "campus_planner_activities";

pub type PersistResult<T> = Result<T, PersistError>;

/// Adapter-level error for blob reads and writes.
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Backend(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "persistence backend error: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Key-value blob store used for durability across sessions.
pub trait PersistenceAdapter {
    /// Reads the blob stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> PersistResult<Option<String>>;

    /// Writes `blob` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, blob: &str) -> PersistResult<()>;
}

/// Volatile in-memory adapter for tests and smoke runs.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    slots: HashMap<String, String>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a slot, e.g. to simulate a previous session.
    pub fn with_slot(key: &str, blob: &str) -> Self {
        let mut adapter = Self::new();
        adapter.slots.insert(key.to_string(), blob.to_string());
        adapter
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> PersistResult<()> {
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// File-backed adapter: one `<key>.json` file per key under a directory.
///
/// Writes go through a temp file + rename so an interrupted write cannot
/// leave a truncated blob behind.
#[derive(Debug)]
pub struct FileAdapter {
    dir: PathBuf,
}

impl FileAdapter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceAdapter for FileAdapter {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, blob: &str) -> PersistResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        write_all(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn write_all(path: &Path, blob: &str) -> PersistResult<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(blob.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MemoryAdapter, PersistenceAdapter, STORAGE_KEY};

    #[test]
    fn memory_adapter_roundtrips_a_slot() {
        let mut adapter = MemoryAdapter::new();
        assert!(adapter.get(STORAGE_KEY).unwrap().is_none());

        adapter.set(STORAGE_KEY, "[]").unwrap();
        assert_eq!(adapter.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));

        adapter.set(STORAGE_KEY, "[1]").unwrap();
        assert_eq!(adapter.get(STORAGE_KEY).unwrap().as_deref(), Some("[1]"));
    }
}
