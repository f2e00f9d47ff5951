//! Key-value storage backends
//!
//! The store persists through this seam rather than touching the
//! filesystem directly, so tests run against an in-memory fake.

use crate::domain::capacity::stored_value_cost;
use crate::error::{Result, VentError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Abstract key-value partition holding string values.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// All keys currently present in the partition, sorted.
    fn keys(&self) -> Result<Vec<String>>;

    /// Estimate bytes used across the whole partition, every key included.
    ///
    /// Backends with a real quota API can override this; the default sums
    /// the two-bytes-per-character cost of every stored value.
    fn estimate_usage(&self) -> Result<u64> {
        let mut used = 0;
        for key in self.keys()? {
            if let Some(value) = self.get(&key)? {
                used += stored_value_cost(&value);
            }
        }
        Ok(used)
    }
}

/// Filesystem-backed partition: one flat file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VentError::Io(e)),
        }
    }

    /// Write using a best-effort atomic replace: write to a temp file in
    /// the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we
    /// remove the destination first. Any failure maps to `StorageWrite`.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| VentError::StorageWrite(e.to_string()))?;

        let path = self.dir.join(key);
        let tmp_path = self
            .dir
            .join(format!(".{}.vent-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value).map_err(|e| VentError::StorageWrite(e.to_string()))?;

        if path.exists() {
            fs::remove_file(&path).map_err(|e| VentError::StorageWrite(e.to_string()))?;
        }

        fs::rename(&tmp_path, &path).map_err(|e| VentError::StorageWrite(e.to_string()))?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            // Dot-files are internal (in-flight temp writes), not keys.
            if name.starts_with('.') {
                continue;
            }
            keys.push(name.to_string());
        }

        keys.sort();
        Ok(keys)
    }
}

/// In-memory partition used as a test fake.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.borrow().keys().cloned().collect())
    }
}
