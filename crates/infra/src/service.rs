//! Inventory service: the single owner of the live inventory.
//!
//! Every mutation runs the same pipeline under one lock:
//!
//! ```text
//! lock
//!   ↓
//! 1. Clone the current inventory
//!   ↓
//! 2. Apply the domain operation to the copy (may fail validation)
//!   ↓
//! 3. Save the copy through the RecordStore (may fail with I/O)
//!   ↓
//! 4. Swap the copy in as the live inventory
//! ```
//!
//! A failure at step 2 or 3 leaves both the live inventory and the stored
//! copy as they were. The lock also serializes load/save within the process;
//! nothing guards against a second process writing the same file.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use electrovault_core::{DomainError, DomainResult, RecordId};
use electrovault_inventory::{AddRecord, CategoryTotals, Inventory, InventoryRecord, InventoryStats};

use crate::storage::{RecordStore, StorageError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected by the domain (e.g. empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Persisting failed; the operation was aborted.
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("inventory lock poisoned")]
    LockPoisoned,
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            DomainError::InvariantViolation(msg) => ServiceError::InvariantViolation(msg),
            DomainError::InvalidId(msg) => ServiceError::InvalidId(msg),
        }
    }
}

/// Live inventory plus the store it is mirrored to.
#[derive(Debug)]
pub struct InventoryService<S>
where
    S: RecordStore,
{
    store: S,
    inventory: Mutex<Inventory>,
    load_warning: Option<String>,
}

impl<S> InventoryService<S>
where
    S: RecordStore,
{
    /// Load the inventory from `store`.
    ///
    /// Unreadable stored data is not an error here: the service starts empty
    /// and keeps the reason in [`InventoryService::load_warning`]. Only a
    /// store that cannot be consulted at all (poisoned lock) fails.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let outcome = store.load()?;
        let load_warning = outcome.warning.map(|w| w.to_string());
        Ok(Self {
            store,
            inventory: Mutex::new(outcome.inventory),
            load_warning,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inventory>, ServiceError> {
        self.inventory.lock().map_err(|_| ServiceError::LockPoisoned)
    }

    fn mutate<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Inventory) -> DomainResult<T>,
    ) -> Result<T, ServiceError> {
        let mut live = self.lock()?;
        let mut next = live.clone();
        let out = f(&mut next)?;

        if let Err(e) = self.store.save(&next) {
            tracing::error!(operation, location = %self.store.location(), "save failed: {e}");
            return Err(e.into());
        }

        *live = next;
        Ok(out)
    }

    /// Copy of the live inventory.
    pub fn snapshot(&self) -> Result<Inventory, ServiceError> {
        Ok(self.lock()?.clone())
    }

    /// Records matching `query` (all records for an empty query).
    pub fn search(&self, query: &str) -> Result<Vec<InventoryRecord>, ServiceError> {
        let inventory = self.lock()?;
        Ok(inventory.filter(query).into_iter().cloned().collect())
    }

    pub fn add(&self, cmd: AddRecord) -> Result<InventoryRecord, ServiceError> {
        let record = self.mutate("add", |inv| inv.add(cmd))?;
        tracing::info!(id = %record.id, name = %record.name, category = %record.category, "record added");
        Ok(record)
    }

    /// Remove the record with `id`; absent ids are not an error.
    ///
    /// Returns how many records were removed.
    pub fn delete(&self, id: RecordId) -> Result<usize, ServiceError> {
        let removed = self.mutate("delete", |inv| Ok(inv.delete(id)))?;
        tracing::info!(%id, removed, "record deleted");
        Ok(removed)
    }

    /// Remove every record. Returns how many were removed.
    pub fn purge(&self) -> Result<usize, ServiceError> {
        let removed = self.mutate("purge", |inv| Ok(inv.purge()))?;
        tracing::warn!(removed, "inventory purged");
        Ok(removed)
    }

    pub fn stats(&self) -> Result<InventoryStats, ServiceError> {
        Ok(self.lock()?.stats())
    }

    pub fn by_category(&self) -> Result<CategoryTotals, ServiceError> {
        Ok(self.lock()?.aggregate_by_category())
    }

    pub fn top_by_price(&self, n: usize) -> Result<Vec<InventoryRecord>, ServiceError> {
        let inventory = self.lock()?;
        Ok(inventory.top_by_price(n).into_iter().cloned().collect())
    }

    pub fn export_json(&self) -> Result<String, ServiceError> {
        let inventory = self.lock()?;
        inventory
            .export_json()
            .map_err(|e| ServiceError::Storage(StorageError::Serialize(e)))
    }
}
