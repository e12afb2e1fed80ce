//! Slot-based persistence abstraction
//!
//! The store persists the whole collection as one value under a string key.
//! Providers only need three operations; a missing slot is the normal
//! first-run case, so `load` reports it as `None` rather than an error.

use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract persistence provider for string-keyed slots
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the slot, or `None` when nothing has been saved yet
    async fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the slot with the given bytes
    async fn save(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Remove the slot; removing an absent slot is not an error
    async fn clear(&self, key: &str) -> StorageResult<()>;
}

/// Local filesystem provider: one file per slot under a root directory
pub struct LocalStorage {
    root: std::path::PathBuf,
}

impl LocalStorage {
    /// Create a provider rooted at the given directory
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a slot key to a file path, rejecting keys that would escape
    /// the root directory
    fn slot_path(&self, key: &str) -> StorageResult<std::path::PathBuf> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key == "."
            || key == ".."
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match tokio::fs::read(path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    async fn save(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::BackendError(e.to_string()))?;
        }
        tokio::fs::write(path, data)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))
    }

    async fn clear(&self, key: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }
}

/// In-memory provider (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    slots: std::sync::RwLock<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slots.read().unwrap().get(key).cloned())
    }

    async fn save(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        self.slots.write().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    async fn clear(&self, key: &str) -> StorageResult<()> {
        self.slots.write().unwrap().remove(key);
        Ok(())
    }
}
