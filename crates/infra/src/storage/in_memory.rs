use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use std::sync::RwLock;

use electrovault_inventory::Inventory;

use super::{decode, LoadOutcome, RecordStore, StorageError};

const LOCATION: &str = "memory";

/// In-memory record store for tests/dev.
///
/// Holds the serialized snapshot exactly as [`super::JsonFileStore`] would
/// write it, so load-time decoding behaves the same. `None` plays the role of
/// a missing file.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    contents: RwLock<Option<Vec<u8>>>,
    read_only: RwLock<bool>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored bytes (which need not be valid JSON).
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RwLock::new(Some(bytes.into())),
            read_only: RwLock::new(false),
        }
    }

    /// Current stored bytes, if anything has been stored.
    pub fn contents(&self) -> Result<Option<Vec<u8>>, StorageError> {
        let contents = self.contents.read().map_err(|_| Self::lock_error())?;
        Ok(contents.clone())
    }

    /// Make subsequent saves fail with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) -> Result<(), StorageError> {
        let mut flag = self.read_only.write().map_err(|_| Self::lock_error())?;
        *flag = read_only;
        Ok(())
    }

    fn lock_error() -> StorageError {
        StorageError::Io {
            path: PathBuf::from(LOCATION),
            source: IoError::other("lock poisoned"),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self) -> Result<LoadOutcome, StorageError> {
        let contents = self.contents.read().map_err(|_| Self::lock_error())?;
        Ok(match contents.as_deref() {
            None => LoadOutcome::seeded(),
            Some(bytes) => decode(PathBuf::from(LOCATION), bytes),
        })
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let read_only = *self.read_only.read().map_err(|_| Self::lock_error())?;
        if read_only {
            return Err(StorageError::Io {
                path: PathBuf::from(LOCATION),
                source: IoError::new(ErrorKind::PermissionDenied, "store is read-only"),
            });
        }

        let bytes = serde_json::to_vec(inventory)?;
        let mut contents = self.contents.write().map_err(|_| Self::lock_error())?;
        *contents = Some(bytes);
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
