use serde::{Deserialize, Serialize};

use electrovault_core::{DomainResult, Entity, RecordId};

use crate::analytics::{CategoryTotals, InventoryStats};
use crate::record::{AddRecord, InventoryRecord};

/// The ordered record collection (most recently added first).
///
/// Ids are unique within an inventory: [`Inventory::add`] is the only way to
/// mint a record and it always picks an unused id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    records: Vec<InventoryRecord>,
}

impl Inventory {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&InventoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Validate and prepend a new record. Returns the stored record.
    pub fn add(&mut self, cmd: AddRecord) -> DomainResult<InventoryRecord> {
        cmd.validate()?;

        let id = RecordId::generate_at(
            cmd.occurred_at.timestamp_millis(),
            self.records.iter().map(Entity::id),
        )?;
        let record = InventoryRecord::new(id, cmd.name, cmd.category, cmd.price, cmd.qty);
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// Remove every record with `id`. Returns how many were removed (0 or 1).
    pub fn delete(&mut self, id: RecordId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        before - self.records.len()
    }

    /// Drop all records. Returns how many were removed.
    pub fn purge(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    /// Records whose name or category contains `query`, ignoring case.
    ///
    /// An empty query matches everything. Store order is preserved.
    pub fn filter(&self, query: &str) -> Vec<&InventoryRecord> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.category.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Σ `price × qty` per category.
    pub fn aggregate_by_category(&self) -> CategoryTotals {
        CategoryTotals::from_records(&self.records)
    }

    /// The `n` highest-priced records; ties keep store order.
    pub fn top_by_price(&self, n: usize) -> Vec<&InventoryRecord> {
        let mut sorted: Vec<&InventoryRecord> = self.records.iter().collect();
        // `sort_by` is stable.
        sorted.sort_by(|a, b| b.price.amount().total_cmp(&a.price.amount()));
        sorted.truncate(n);
        sorted
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_records(&self.records)
    }

    /// JSON array of all records, for download.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}

impl From<Vec<InventoryRecord>> for Inventory {
    fn from(records: Vec<InventoryRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Category, Price, Quantity};
    use chrono::{TimeZone, Utc};
    use electrovault_core::DomainError;

    fn record(id: i64, name: &str, category: Category, price: f64, qty: u64) -> InventoryRecord {
        InventoryRecord::new(
            RecordId::new(id),
            name,
            category,
            Price::new(price),
            Quantity::new(qty),
        )
    }

    fn add_cmd(name: &str) -> AddRecord {
        AddRecord {
            name: name.to_string(),
            category: Category::Cpu,
            price: Price::new(15999.0),
            qty: Quantity::new(6),
            occurred_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    fn sample() -> Inventory {
        Inventory::new(vec![
            record(1, "GeForce RTX 4090", Category::Gpu, 109990.0, 3),
            record(2, "MacBook Pro M2", Category::Laptop, 84990.0, 8),
            record(3, "Samsung S24 Ultra", Category::Mobile, 75990.0, 12),
            record(4, "Sony WH-1000XM5", Category::Accessory, 18999.0, 25),
        ])
    }

    #[test]
    fn add_prepends_record_with_clock_id() {
        let mut inv = sample();
        let added = inv.add(add_cmd("Ryzen 7 7800X3D")).unwrap();

        assert_eq!(added.id, RecordId::new(1_700_000_000_000));
        assert_eq!(inv.len(), 5);
        assert_eq!(inv.records()[0], added);
        assert_eq!(inv.records()[0].name, "Ryzen 7 7800X3D");
    }

    #[test]
    fn add_twice_in_same_millisecond_yields_distinct_ids() {
        let mut inv = Inventory::empty();
        let a = inv.add(add_cmd("a")).unwrap();
        let b = inv.add(add_cmd("b")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn add_rejects_empty_name_and_leaves_store_unchanged() {
        let mut inv = sample();
        let before = inv.clone();

        for name in ["", "   "] {
            let err = inv.add(add_cmd(name)).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for empty name"),
            }
        }
        assert_eq!(inv, before);
    }

    #[test]
    fn add_fails_when_largest_id_is_taken() {
        let mut inv = Inventory::new(vec![record(i64::MAX, "Edge", Category::Other, 1.0, 1)]);
        let before = inv.clone();

        match inv.add(add_cmd("Next")).unwrap_err() {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation when no id is left"),
        }
        assert_eq!(inv, before);
    }

    #[test]
    fn delete_removes_matching_record() {
        let mut inv = sample();
        assert_eq!(inv.delete(RecordId::new(2)), 1);
        assert_eq!(inv.len(), 3);
        assert!(inv.get(RecordId::new(2)).is_none());
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let mut inv = sample();
        assert_eq!(inv.delete(RecordId::new(999)), 0);
        assert_eq!(inv, sample());
    }

    #[test]
    fn add_then_delete_restores_store() {
        let mut inv = sample();
        let added = inv.add(add_cmd("temp")).unwrap();
        inv.delete(added.id);
        assert_eq!(inv, sample());
    }

    #[test]
    fn purge_empties_store() {
        let mut inv = sample();
        assert_eq!(inv.purge(), 4);
        assert!(inv.is_empty());
    }

    #[test]
    fn filter_empty_query_returns_everything() {
        let inv = sample();
        let all: Vec<&InventoryRecord> = inv.records().iter().collect();
        assert_eq!(inv.filter(""), all);
    }

    #[test]
    fn filter_matches_name_or_category_case_insensitively() {
        let inv = sample();

        let by_name: Vec<i64> = inv.filter("macbook").iter().map(|r| r.id.get()).collect();
        assert_eq!(by_name, vec![2]);

        let by_category: Vec<i64> = inv.filter("gpu").iter().map(|r| r.id.get()).collect();
        assert_eq!(by_category, vec![1]);

        // "o" hits names (Pro, Sony, ...) and categories (Mobile, Laptop, Accessory).
        let many: Vec<i64> = inv.filter("O").iter().map(|r| r.id.get()).collect();
        assert_eq!(many, vec![1, 2, 3, 4]);

        assert!(inv.filter("threadripper").is_empty());
    }

    #[test]
    fn filter_treats_query_as_plain_text() {
        let inv = Inventory::new(vec![
            record(1, "USB-C (65W)", Category::Accessory, 10.0, 1),
            record(2, "USB-A", Category::Accessory, 5.0, 1),
        ]);
        let hits: Vec<i64> = inv.filter("(65w)").iter().map(|r| r.id.get()).collect();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn aggregate_sums_value_per_category() {
        let inv = Inventory::new(vec![
            record(1, "a", Category::Gpu, 100.0, 2),
            record(2, "b", Category::Gpu, 50.0, 1),
            record(3, "c", Category::Cpu, 200.0, 1),
        ]);
        let totals = inv.aggregate_by_category();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get(Category::Gpu), Some(250.0));
        assert_eq!(totals.get(Category::Cpu), Some(200.0));
        assert_eq!(totals.get(Category::Mobile), None);
    }

    #[test]
    fn top_by_price_orders_by_unit_price() {
        let inv = Inventory::new(vec![
            record(1, "ten", Category::Other, 10.0, 100),
            record(2, "thirty", Category::Other, 30.0, 1),
            record(3, "twenty", Category::Other, 20.0, 1),
        ]);
        let top: Vec<i64> = inv.top_by_price(2).iter().map(|r| r.id.get()).collect();
        assert_eq!(top, vec![2, 3]);
    }

    #[test]
    fn top_by_price_breaks_ties_by_store_order() {
        let inv = Inventory::new(vec![
            record(7, "first", Category::Other, 20.0, 1),
            record(3, "second", Category::Other, 20.0, 1),
            record(5, "third", Category::Other, 20.0, 1),
        ]);
        let top: Vec<i64> = inv.top_by_price(5).iter().map(|r| r.id.get()).collect();
        assert_eq!(top, vec![7, 3, 5]);
    }

    #[test]
    fn export_json_is_a_plain_array() {
        let inv = Inventory::new(vec![record(1, "a", Category::Gpu, 1.5, 2)]);
        assert_eq!(
            inv.export_json().unwrap(),
            r#"[{"id":1,"name":"a","category":"GPU","price":1.5,"qty":2}]"#
        );
        assert_eq!(Inventory::empty().export_json().unwrap(), "[]");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        fn arb_inventory() -> impl Strategy<Value = Inventory> {
            prop::collection::vec(
                ("[A-Za-z0-9 ]{0,16}", arb_category(), 0u32..100_000, 0u64..50),
                0..24,
            )
            .prop_map(|rows| {
                Inventory::new(
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, (name, category, price, qty))| {
                            record(i as i64, &name, category, price as f64, qty)
                        })
                        .collect(),
                )
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: filter returns exactly the matching records, in store order.
            #[test]
            fn filter_is_an_ordered_exact_subsequence(
                inv in arb_inventory(),
                query in "[A-Za-z]{0,3}",
            ) {
                let hits = inv.filter(&query);
                let needle = query.to_lowercase();

                let expected: Vec<&InventoryRecord> = inv
                    .records()
                    .iter()
                    .filter(|r| {
                        query.is_empty()
                            || r.name.to_lowercase().contains(&needle)
                            || r.category.as_str().to_lowercase().contains(&needle)
                    })
                    .collect();

                prop_assert_eq!(hits, expected);
            }

            /// Property: category totals add up to the overall inventory value.
            #[test]
            fn category_totals_sum_to_stats_value(inv in arb_inventory()) {
                let from_categories: f64 = inv.aggregate_by_category().iter().map(|(_, v)| v).sum();
                let overall = inv.stats().total_value;
                prop_assert!((from_categories - overall).abs() <= 1e-6 * overall.max(1.0));
            }
        }
    }
}
