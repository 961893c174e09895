//! Aggregate views over an inventory (dashboard stats, category distribution).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{Category, InventoryRecord};

/// Records with fewer units than this count as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 5;

/// Total stock value per category. Only categories that occur are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<Category, f64>);

impl CategoryTotals {
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        let mut totals = BTreeMap::new();
        for r in records {
            *totals.entry(r.category).or_insert(0.0) += r.total_value();
        }
        Self(totals)
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.0.get(&category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    /// Totals ordered by value, highest first (chart order).
    pub fn sorted_desc(&self) -> Vec<(Category, f64)> {
        let mut out: Vec<(Category, f64)> = self.iter().collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }
}

/// Headline numbers for the inventory view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InventoryStats {
    /// Σ qty.
    pub total_items: u64,
    /// Σ price × qty.
    pub total_value: f64,
    /// Records with qty below [`LOW_STOCK_THRESHOLD`].
    pub low_stock: usize,
}

impl InventoryStats {
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.total_items = acc.total_items.saturating_add(r.qty.units());
            acc.total_value += r.total_value();
            if r.qty.units() < LOW_STOCK_THRESHOLD {
                acc.low_stock += 1;
            }
            acc
        })
    }
}
