//! Inventory domain module.
//!
//! This crate contains the record model and every query the dashboard needs,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod analytics;
pub mod export;
pub mod record;
pub mod seed;
pub mod store;

pub use analytics::{CategoryTotals, InventoryStats, LOW_STOCK_THRESHOLD};
pub use export::export_file_name;
pub use record::{AddRecord, Category, InventoryRecord, Price, Quantity};
pub use seed::{default_inventory, default_records};
pub use store::Inventory;
