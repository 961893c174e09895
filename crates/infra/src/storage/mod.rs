//! Durable storage for the inventory.
//!
//! The whole inventory is the unit of persistence: every save overwrites the
//! previous copy, every load reads it back in full.

pub mod in_memory;
pub mod json_file;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use electrovault_inventory::Inventory;

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileStore;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing data exists but cannot be read or is not a JSON array of
    /// records.
    ///
    /// Recoverable on load: the caller gets an empty inventory plus this error
    /// as a warning.
    #[error("stored inventory at {path} is unreadable: {reason}")]
    Read { path: PathBuf, reason: String },

    /// Writing to the backing medium failed (permission denied, disk full, ...).
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of [`RecordStore::load`].
#[derive(Debug)]
pub struct LoadOutcome {
    pub inventory: Inventory,
    /// No stored copy existed; `inventory` holds the default seed.
    pub seeded: bool,
    /// The stored copy was unreadable; `inventory` is empty.
    pub warning: Option<StorageError>,
}

impl LoadOutcome {
    pub fn stored(inventory: Inventory) -> Self {
        Self {
            inventory,
            seeded: false,
            warning: None,
        }
    }

    pub fn seeded() -> Self {
        Self {
            inventory: electrovault_inventory::default_inventory(),
            seeded: true,
            warning: None,
        }
    }

    pub fn recovered(warning: StorageError) -> Self {
        Self {
            inventory: Inventory::empty(),
            seeded: false,
            warning: Some(warning),
        }
    }
}

/// Full-snapshot storage for an [`Inventory`].
pub trait RecordStore: Send + Sync {
    /// Read the stored inventory.
    ///
    /// A stored copy that cannot be read or decoded is reported through
    /// [`LoadOutcome::warning`]. `Err` is reserved for a store that cannot be
    /// consulted at all.
    fn load(&self) -> Result<LoadOutcome, StorageError>;

    /// Overwrite the stored inventory.
    fn save(&self, inventory: &Inventory) -> Result<(), StorageError>;

    /// Human-readable location (file path, `memory`, ...).
    fn location(&self) -> String;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn load(&self) -> Result<LoadOutcome, StorageError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        (**self).save(inventory)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Decode a stored snapshot, mapping malformed content to [`StorageError::Read`].
pub(crate) fn decode(path: PathBuf, bytes: &[u8]) -> LoadOutcome {
    match serde_json::from_slice::<Inventory>(bytes) {
        Ok(inventory) => LoadOutcome::stored(inventory),
        Err(e) => LoadOutcome::recovered(StorageError::Read {
            path,
            reason: e.to_string(),
        }),
    }
}
