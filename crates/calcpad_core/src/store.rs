//! Durable key/value persistence for session state.
//!
//! Values are stored as JSON text under a logical key. Reads fall back to a
//! caller-supplied default and writes never fail loudly: persistence problems
//! are logged and the in-memory session keeps going.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Raw storage backend holding JSON text per key.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` when nothing is stored for the key.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn read_raw(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write.
    fn write_raw(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Typed facade over a [`KeyValueStore`] that never surfaces errors.
pub struct DurableStore {
    backend: Box<dyn KeyValueStore>,
}

impl DurableStore {
    /// Wrap a storage backend.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Load the value stored under `key`, or `default`.
    ///
    /// Absent keys, JSON `null`, unparseable JSON, values of the wrong shape,
    /// and backend read failures all yield `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                debug!("store value for '{}' unavailable: {}", key, err);
                default
            }
        }
    }

    /// Persist `value` under `key`.
    ///
    /// Failures are logged and swallowed.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            warn!("failed to persist '{}': {}", key, err);
        }
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let Some(raw) = self.backend.read_raw(key)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str::<Option<T>>(&raw)?)
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let encoded = serde_json::to_string(value)?;
        self.backend.write_raw(key, &encoded)
    }
}

/// File-backed store keeping one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-process store; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place raw text under `key`, bypassing serialization.
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    /// Raw text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Make every read and write fail, as an unavailable storage layer would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StorageMessage(
                "storage is unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check_available()?;
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::StorageMessage("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.check_available()?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::StorageMessage("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
