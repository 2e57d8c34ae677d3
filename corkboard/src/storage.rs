//! Session storage backends.
//!
//! The store persists its state through a [`SessionStorage`] collaborator so
//! the engine itself never touches the filesystem directly. Saves are
//! best-effort: a failed write is logged and the session carries on with its
//! in-memory state.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Storage key for the persisted board snapshot
pub const BOARD_KEY: &str = "board";

/// Storage key for the persisted theme preference
pub const THEME_KEY: &str = "theme";

/// A key-value session store for JSON-serializable state.
///
/// `save` must not fail the caller: implementations log and continue when a
/// write goes wrong. `load` returns the fallback when the key is absent or
/// the stored payload does not parse.
pub trait SessionStorage {
    /// Persist a value under a key, best-effort
    fn save<T: Serialize>(&mut self, key: &str, value: &T);

    /// Load a value by key, or the fallback when absent or unreadable
    fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T;
}

/// In-memory storage. State lives for the lifetime of the value; used in
/// tests and for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, serde_json::Value>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(key.to_string(), value);
            }
            Err(e) => {
                tracing::warn!("Failed to serialize '{}' for session storage: {}", key, e);
            }
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.entries
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or(fallback)
    }
}

/// File-backed storage writing one pretty-printed JSON file per key under a
/// root directory.
#[derive(Debug)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Create storage rooted at the given directory. The directory is
    /// created on first save.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(self.key_path(key), json)?;
        Ok(())
    }
}

impl SessionStorage for JsonFileStorage {
    fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            tracing::warn!("Failed to persist '{}' to session storage: {}", key, e);
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        std::fs::read_to_string(self.key_path(key))
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(fallback)
    }
}
