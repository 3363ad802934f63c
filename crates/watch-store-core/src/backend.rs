use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {used} bytes used, {incoming} incoming, quota {quota}")]
    QuotaExceeded {
        used: usize,
        incoming: usize,
        quota: usize,
    },
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
}

/// Durable, synchronous, string-keyed storage. The stores take this as an
/// explicit dependency instead of reaching for a process-wide singleton,
/// so tests can swap in [`MemoryBackend`].
pub trait StorageBackend {
    /// Returns the stored value, or `None` when the key is absent or the
    /// value cannot be read back.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str);
}

/// In-memory backend. With a byte quota set it also models the browser
/// storage-full failure mode, which the store tests rely on.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            // Overwrites only count the new value against the quota
            let used = self.used_bytes_excluding(key);
            let incoming = key.len() + value.len();
            if used + incoming > quota {
                return Err(StorageError::QuotaExceeded {
                    used,
                    incoming,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-per-key backend: each key is stored as `<key>.json` under the
/// data directory. Unreadable files are treated as misses, never errors.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);

        if !path.exists() {
            debug!("Store miss: {} (file does not exist)", key);
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Store hit: {} ({} bytes)", key, content.len());
                Some(content)
            }
            Err(e) => {
                warn!("Failed to read store file for {}: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.key_path(key), value)?;
        debug!("Store saved: {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = std::fs::remove_file(self.key_path(key)) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Failed to remove store file for {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_set_get_remove() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("k"), None);

        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").as_deref(), Some("v"));

        backend.remove("k");
        assert_eq!(backend.get("k"), None);
        // Removing an absent key is fine
        backend.remove("k");
    }

    #[test]
    fn test_memory_backend_quota_rejects_oversized_write() {
        let mut backend = MemoryBackend::with_quota(8);
        let err = backend.set("key", "a value too large").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(backend.get("key"), None);
    }

    #[test]
    fn test_memory_backend_quota_allows_overwrite_in_place() {
        let mut backend = MemoryBackend::with_quota(8);
        backend.set("k", "aaaa").unwrap();
        // Replacing the same key does not double-count the old value
        backend.set("k", "bbbb").unwrap();
        assert_eq!(backend.get("k").as_deref(), Some("bbbb"));
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("store")).unwrap();

        assert_eq!(backend.get("recentlyViewed"), None);
        backend.set("recentlyViewed", "[]").unwrap();
        assert_eq!(backend.get("recentlyViewed").as_deref(), Some("[]"));

        backend.remove("recentlyViewed");
        assert_eq!(backend.get("recentlyViewed"), None);
        backend.remove("recentlyViewed");
    }
}
