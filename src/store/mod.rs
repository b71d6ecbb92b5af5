// Key-value persistence
//
// A deliberately small capability - `get`, `set` (with optional TTL) and
// `remove` - injected into the components that persist state, so tests run
// against an in-memory fake and the on-disk format can change without
// touching callers.
//
// FileStore keeps everything in one JSON file in the data directory. Every
// operation is an independent read-modify-write of that file; concurrent
// processes race and the last write wins, which is acceptable for the
// low-stakes state kept here. Entries may carry an expiry timestamp and an
// expired or unreadable entry reads as absent, never as an error.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Persistence capability for small string values
pub trait KeyValueStore {
    /// Read a value; absent, expired and unreadable all return None
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, optionally expiring after `ttl`
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>);

    /// Delete a value
    fn remove(&self, key: &str);
}

/// One stored entry with its optional expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

/// JSON-file-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `<dir>/store.json`; the directory is created lazily
    pub fn new(dir: PathBuf) -> Self {
        Self {
            path: dir.join("store.json"),
        }
    }

    /// Load the entry map; a missing or malformed file reads as empty
    fn load(&self) -> HashMap<String, Entry> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                tracing::warn!("could not read store file {:?}: {}", self.path, e);
                return HashMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("malformed store file {:?}: {}", self.path, e);
                HashMap::new()
            }
        }
    }

    /// Write the entry map back, dropping anything already expired
    fn save(&self, mut entries: HashMap<String, Entry>) {
        let now = Utc::now();
        entries.retain(|_, entry| !entry.is_expired(now));

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("could not create store directory {:?}: {}", parent, e);
                return;
            }
        }

        match serde_json::to_string_pretty(&entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!("could not write store file {:?}: {}", self.path, e);
                }
            }
            Err(e) => tracing::warn!("could not serialize store: {}", e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.load();
        let entry = entries.get(key)?;
        if entry.is_expired(Utc::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        let mut entries = self.load();
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| Utc::now() + ttl),
            },
        );
        self.save(entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(entries);
        }
    }
}

/// In-memory store, used as the test double
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        if entry.is_expired(Utc::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| Utc::now() + ttl),
            },
        );
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        assert_eq!(store.get("greeting"), None);
        store.set("greeting", "hello", None);
        assert_eq!(store.get("greeting").as_deref(), Some("hello"));

        store.remove("greeting");
        assert_eq!(store.get("greeting"), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::new(dir.path().to_path_buf());
            store.set("key", "value", None);
        }
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn malformed_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("store.json"), "{not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("anything"), None);

        // And writes still work afterwards
        store.set("key", "value", None);
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn expired_entry_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("ephemeral", "x", Some(Duration::seconds(-1)));
        assert_eq!(store.get("ephemeral"), None);

        store.set("durable", "y", Some(Duration::days(30)));
        assert_eq!(store.get("durable").as_deref(), Some("y"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.set("key", "first", None);
        store.set("key", "second", None);
        assert_eq!(store.get("key").as_deref(), Some("second"));
    }
}
