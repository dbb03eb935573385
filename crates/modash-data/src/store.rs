//! File-backed key-value store for session state.

use std::path::PathBuf;

use ahash::AHashMap;
use tracing::warn;

use modash_core::StateStore;

/// Write-through JSON file store.
///
/// The whole map is rewritten on every `set`. Persistence is best effort:
/// an unreadable or unwritable file degrades to in-memory state with a
/// warning rather than failing the session.
pub struct JsonFileStore {
    path: PathBuf,
    entries: AHashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty when the file is missing
    /// or does not hold a JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "state file is corrupt, starting empty");
                    AHashMap::new()
                }
            },
            Err(_) => AHashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize state file");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(err) = std::fs::write(&self.path, json) {
            warn!(path = %self.path.display(), %err, "failed to write state file");
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }
}
