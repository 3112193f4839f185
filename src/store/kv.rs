//! Key-value storage substrate with atomic file-backed persistence.

use std::collections::HashMap;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during key-value storage operations.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Capability interface over a string key-value slot.
///
/// The note collection lives under a single namespaced key; the store is
/// injected so the persistence substrate can be swapped (file-backed in
/// production, in-memory for tests).
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Writes `value` under `key`, overwriting any prior content.
    ///
    /// Writes are atomic at the granularity the backend offers.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// In-memory key-value store backed by a HashMap.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed key-value store: one file per key under a root directory.
///
/// Keys are sanitized into filenames; values are written through a
/// temporary file and an atomic rename to prevent partial writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`.
    ///
    /// The directory is created lazily on the first write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }
}

/// Maps a slot key to a safe filename.
///
/// Alphanumerics, dots, hyphens, and underscores pass through; anything
/// else (path separators included) becomes a hyphen.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Io { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.slot_path(key);

        std::fs::create_dir_all(&self.root).map_err(|e| KvError::Io {
            path: self.root.clone(),
            source: e,
        })?;

        let mut temp = NamedTempFile::new_in(&self.root).map_err(|e| KvError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.write_all(value.as_bytes()).map_err(|e| KvError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.persist(&path).map_err(|e| KvError::AtomicWrite {
            path,
            source: e.error,
        })?;

        Ok(())
    }
}
