//! Starter catalogue used when no backing file exists yet.

use electrovault_core::RecordId;

use crate::record::{Category, InventoryRecord, Price, Quantity};
use crate::store::Inventory;

pub fn default_records() -> Vec<InventoryRecord> {
    vec![
        InventoryRecord::new(
            RecordId::new(1),
            "GeForce RTX 4090",
            Category::Gpu,
            Price::new(109990.00),
            Quantity::new(3),
        ),
        InventoryRecord::new(
            RecordId::new(2),
            "MacBook Pro M2",
            Category::Laptop,
            Price::new(84990.00),
            Quantity::new(8),
        ),
        InventoryRecord::new(
            RecordId::new(3),
            "Samsung S24 Ultra",
            Category::Mobile,
            Price::new(75990.00),
            Quantity::new(12),
        ),
        InventoryRecord::new(
            RecordId::new(4),
            "Sony WH-1000XM5",
            Category::Accessory,
            Price::new(18999.00),
            Quantity::new(25),
        ),
    ]
}

pub fn default_inventory() -> Inventory {
    Inventory::new(default_records())
}
