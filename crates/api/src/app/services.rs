use std::path::Path;
use std::sync::Arc;

use electrovault_infra::{InventoryService, JsonFileStore, RecordStore, StorageError};

/// Service shared by all handlers. The store is type-erased so tests can
/// swap in an in-memory one.
pub type AppServices = InventoryService<Arc<dyn RecordStore>>;

pub fn open_file_services(path: &Path) -> Result<AppServices, StorageError> {
    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(path));
    open_services(store)
}

pub fn open_services(store: Arc<dyn RecordStore>) -> Result<AppServices, StorageError> {
    let services = InventoryService::open(store)?;
    if let Some(warning) = services.load_warning() {
        tracing::warn!("{warning}");
    }
    Ok(services)
}
