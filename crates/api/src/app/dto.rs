use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use electrovault_inventory::{Category, InventoryRecord, InventoryStats, LOW_STOCK_THRESHOLD};

// -------------------------
// Request DTOs
// -------------------------

/// Add-item form. Numeric fields are loose: anything unparsable becomes 0.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub price: JsonValue,
    #[serde(default)]
    pub qty: JsonValue,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopParams {
    pub n: Option<usize>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemList {
    pub count: usize,
    pub items: Vec<InventoryRecord>,
}

impl From<Vec<InventoryRecord>> for ItemList {
    fn from(items: Vec<InventoryRecord>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: InventoryStats,
    pub low_stock_threshold: u64,
}

impl From<InventoryStats> for StatsResponse {
    fn from(stats: InventoryStats) -> Self {
        Self {
            stats,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryValue {
    pub category: Category,
    pub total_value: f64,
}

#[derive(Debug, Serialize)]
pub struct TopAsset {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<InventoryRecord> for TopAsset {
    fn from(r: InventoryRecord) -> Self {
        Self {
            id: r.id.get(),
            name: r.name,
            price: r.price.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub location: String,
    pub records: usize,
    pub load_warning: Option<String>,
}
