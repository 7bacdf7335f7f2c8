//! Key-value persistence
//!
//! A small string store holding the values that outlive a session:
//! the user name, the theme and the completion counter.
//! Default location: ~/.local/share/focustick/storage.json
//!
//! Persistence is best-effort. A failed read behaves like a missing key
//! and a failed write is logged and dropped.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;

pub const KEY_USERNAME: &str = "username";
pub const KEY_THEME: &str = "theme";
pub const KEY_COMPLETIONS: &str = "completions";

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store handle shared by the timer and the theme context
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wrap a store so it can be handed to several owners
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}

/// Read a key, treating any failure as an absent key
pub fn read(store: &SharedStore, key: &str) -> Option<String> {
    match store.borrow().get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %format!("{:#}", e), "Failed to read stored value");
            None
        }
    }
}

/// Write a key, logging and dropping any failure
pub fn write(store: &SharedStore, key: &str, value: &str) {
    if let Err(e) = store.borrow_mut().set(key, value) {
        warn!(key, error = %format!("{:#}", e), "Failed to persist value");
    }
}

/// Parse a stored counter. Missing or malformed values count as zero;
/// values past `u64::MAX` saturate.
pub fn parse_count(raw: Option<&str>) -> u64 {
    match raw.map(|s| s.trim().parse::<u64>()) {
        Some(Ok(count)) => count,
        Some(Err(e)) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        _ => 0,
    }
}

/// JSON-file backed store
///
/// The file is read once when opened; every `set` rewrites it in full.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Get the default storage file path
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("focustick");
        Ok(data_dir.join("storage.json"))
    }

    /// Open the store at `path`. An unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Starting with empty storage");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read storage from {:?}", path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage from {:?}", path))
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create storage directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize storage")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage to {:?}", self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    broken: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            broken: false,
        }
    }

    /// A store whose every read and write fails
    pub fn broken() -> Self {
        Self {
            entries: BTreeMap::new(),
            broken: true,
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.broken {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.broken {
            anyhow::bail!("storage unavailable");
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("7")), 7);
        assert_eq!(parse_count(Some(" 12 ")), 12);
        assert_eq!(parse_count(Some("abc")), 0);
        assert_eq!(parse_count(Some("-3")), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("4294967296")), 4_294_967_296);
        assert_eq!(parse_count(Some("18446744073709551615")), u64::MAX);
        assert_eq!(parse_count(Some("99999999999999999999999")), u64::MAX);
        assert_eq!(parse_count(Some("-99999999999999999999999")), 0);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get(KEY_USERNAME).unwrap(), None);
        store.set(KEY_USERNAME, "Dana").unwrap();
        store.set(KEY_COMPLETIONS, "3").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(KEY_USERNAME).unwrap().as_deref(), Some("Dana"));
        assert_eq!(reopened.get(KEY_COMPLETIONS).unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get(KEY_THEME).unwrap(), None);

        // Writing replaces the corrupt file
        store.set(KEY_THEME, "dark").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(KEY_THEME).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_failures_are_best_effort() {
        let store = shared(MemoryStore::broken());
        assert_eq!(read(&store, KEY_USERNAME), None);
        // Must not panic or propagate
        write(&store, KEY_USERNAME, "Dana");
    }

    #[test]
    fn test_write_failure_on_unwritable_path() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes every write fail
        let path = dir.path().join("storage.json");
        fs::create_dir_all(&path).unwrap();

        let store = shared(FileStore::open(&path));
        write(&store, KEY_THEME, "dark");
        assert_eq!(read(&store, KEY_THEME).as_deref(), Some("dark"));
    }
}
