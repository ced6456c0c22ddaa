//! Preference store backends

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use super::PreferenceError;

/// String key/value preference storage
pub trait PreferenceStore {
    /// Raw value for `key`, `None` if never saved
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Load and decode a JSON value
pub fn load_json<T: DeserializeOwned>(store: &impl PreferenceStore, key: &str) -> Result<Option<T>, PreferenceError> {
    match store.load(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode a value as JSON and save it
pub fn save_json<T: Serialize>(store: &mut impl PreferenceStore, key: &str, value: &T) -> Result<(), PreferenceError> {
    let raw = serde_json::to_string(value)?;
    store.save(key, &raw)
}

/// Volatile store, used in tests and when no storage is available
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is re-read on every access so several stores may share it.
/// A missing file reads as empty. Loading from a corrupt file is an error,
/// but saving replaces it.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceError::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "discarding corrupt preferences file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}
