// src/infrastructure/key_value.rs
use crate::domain::DomainError;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// String-valued key-value storage, read and written one whole value at a time.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[instrument(level = "trace", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| DomainError::Storage(format!("Failed to read {}: {e}", path.display())))
    }

    /// Writes to a temp file in the same directory and renames it into place,
    /// so a failed write leaves the previous value intact.
    #[instrument(level = "trace", skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            DomainError::Storage(format!("Failed to create {}: {e}", self.dir.display()))
        })?;

        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| DomainError::Storage(format!("Failed to create temp file: {e}")))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| DomainError::Storage(format!("Failed to write temp file: {e}")))?;
        tmp.persist(&path)
            .map_err(|e| DomainError::Storage(format!("Failed to write {}: {e}", path.display())))?;

        debug!(?path, "Stored value");
        Ok(())
    }
}

/// In-process store with an optional size quota, for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
    quota_bytes: Option<usize>,
    fail_reads: bool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value exceeds `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// Make every read fail.
    pub fn with_read_failure(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Seed a raw value, bypassing the quota.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::Storage(format!("Failed to read {key}")));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(DomainError::Storage(format!(
                    "Quota exceeded: {} > {quota} bytes",
                    value.len()
                )));
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
