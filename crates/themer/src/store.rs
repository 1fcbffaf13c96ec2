//! Settings persistence
//!
//! The engine persists a single integer, the theme mode ordinal. Stores only
//! need to keep small integers under string keys.

use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;

/// Small key/value settings store
pub trait SettingsStore: Send + Sync {
    /// The value stored under `key`; `None` when missing or unreadable
    fn get_int(&self, key: &str) -> Option<i64>;

    fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }

    fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).set_int(key, value)
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<FxHashMap<String, i64>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_int` calls
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsStore for MemoryStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

/// Store backed by a flat TOML file of `key = integer` pairs.
///
/// Reads go to disk every time, so a value written by another store on the
/// same file is visible immediately. Writes replace the file atomically.
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles from this process
    lock: Mutex<()>,
}

impl TomlFileStore {
    /// A store for `path`; the file is created on the first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole file; a missing file is an empty table
    pub fn load(&self) -> Result<toml::Table, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        content.parse::<toml::Table>().map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_atomic(&self, table: &toml::Table) -> Result<(), StoreError> {
        let encoded = toml::to_string(table)?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, encoded).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl SettingsStore for TomlFileStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match self.load() {
            Ok(table) => table.get(key).and_then(toml::Value::as_integer),
            Err(e) => {
                tracing::warn!("TomlFileStore::get_int - {}", e);
                None
            }
        }
    }

    fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut table = match self.load() {
            Ok(table) => table,
            Err(StoreError::Parse { path, source }) => {
                tracing::warn!(
                    "TomlFileStore::set_int - discarding unreadable {}: {}",
                    path.display(),
                    source
                );
                toml::Table::new()
            }
            Err(e) => return Err(e),
        };
        table.insert(key.to_string(), toml::Value::Integer(value));
        self.write_atomic(&table)?;
        tracing::trace!("TomlFileStore::set_int - {} = {}", key, value);
        Ok(())
    }
}
