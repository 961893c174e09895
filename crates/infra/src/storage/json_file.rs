use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use electrovault_inventory::Inventory;

use super::{decode, LoadOutcome, RecordStore, StorageError};

/// Inventory persisted as a single JSON array file.
///
/// Saves rewrite the file in place (no temp file, no backup). A crash
/// mid-write can leave a truncated file, which later loads as unreadable.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<LoadOutcome, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no inventory file; using default seed");
                return Ok(LoadOutcome::seeded());
            }
            Err(e) => {
                let warning = StorageError::Read {
                    path: self.path.clone(),
                    reason: e.to_string(),
                };
                tracing::warn!(path = %self.path.display(), kind = ?e.kind(), "{warning}; starting with an empty inventory");
                return Ok(LoadOutcome::recovered(warning));
            }
        };

        let outcome = decode(self.path.clone(), &bytes);
        match &outcome.warning {
            Some(warning) => {
                tracing::warn!(path = %self.path.display(), "{warning}; starting with an empty inventory");
            }
            None => {
                tracing::info!(
                    path = %self.path.display(),
                    records = outcome.inventory.len(),
                    "inventory loaded"
                );
            }
        }
        Ok(outcome)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(inventory)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), records = inventory.len(), "inventory saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
