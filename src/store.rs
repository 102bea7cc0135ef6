// src/store.rs
//! Persistent local key-value store — where the session token lives
//!
//! `JsonFileStore` is a flat string map on disk. Reads go back to the file
//! every time: it is owned by the login flow and can change between calls.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::CoreError;

/// Read-only view consumed by the header builder
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Flat JSON file of string pairs
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform default: `<data dir>/credential-armor/store.json`
    pub fn default_location() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("credential-armor").join("store.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Missing or unreadable file behaves as an empty store
    fn read_map(&self) -> HashMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|err| {
            debug!("store file {} is not valid JSON: {err}", self.path.display());
            HashMap::new()
        })
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    /// Writer side, used by whatever owns the session (login flow, tests)
    pub fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    pub fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut map = self.read_map();
        map.remove(key);
        self.write_map(&map)
    }
}

impl TokenStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }
}

/// In-process store for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) {
        self.map.lock().unwrap().remove(key);
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().unwrap().get(key).cloned()
    }
}
