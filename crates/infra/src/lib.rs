//! Infrastructure layer: persistence and the live inventory service.

pub mod service;
pub mod storage;

pub use service::{InventoryService, ServiceError};
pub use storage::{InMemoryRecordStore, JsonFileStore, LoadOutcome, RecordStore, StorageError};
