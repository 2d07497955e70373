//! # Sales Journal
//!
//! Daily sale records, reconciled against the inventory ledger.
//!
//! ## Recording Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               record(date, product, quantity, total)                    │
//! │                                                                         │
//! │  1. Tentatively append the record to the date's sequence                │
//! │     (creating the sequence if absent)                                   │
//! │  2. Ask the ledger for adjust(product, -quantity)                       │
//! │  3. Rejected? Undo the append, persist the (unchanged) sales state,     │
//! │     propagate the rejection                                             │
//! │  4. Accepted? Persist the sales mapping and report success              │
//! │                                                                         │
//! │  The ledger owns the stock-sufficiency decision; this is the one        │
//! │  compensating-action pattern in the system.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, error, warn};

use yardtrack_core::error::{CoreResult, ValidationError};
use yardtrack_core::{Catalog, Money, ProductSales, SaleRecord};

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::ledger::InventoryLedger;
use crate::SALES_KEY;

/// The sales journal: insertion-ordered records per calendar date.
pub struct SalesJournal {
    by_date: BTreeMap<NaiveDate, Vec<SaleRecord>>,
    store: Arc<dyn KvStore>,
}

impl SalesJournal {
    /// Loads the persisted mapping, falling back to empty.
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let by_date = match store.get(SALES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(by_date) => by_date,
                Err(err) => {
                    let err = StoreError::corrupt(SALES_KEY, err.to_string());
                    warn!(error = %err, "starting with an empty sales journal");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                warn!(error = %err, "failed to load sales; starting empty");
                BTreeMap::new()
            }
        };

        SalesJournal { by_date, store }
    }

    /// Records one sale against the ledger.
    ///
    /// Appends tentatively, then lets the ledger decide; a rejected
    /// adjustment rolls the append back so the record and the stock
    /// change land together or not at all.
    pub fn record(
        &mut self,
        ledger: &mut InventoryLedger,
        date: NaiveDate,
        product_id: &str,
        quantity: i64,
        total: Money,
    ) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }
        if !total.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "total".to_string(),
            }
            .into());
        }

        self.by_date.entry(date).or_default().push(SaleRecord {
            product: product_id.to_string(),
            quantity,
            total,
            recorded_at: Utc::now(),
        });

        if let Err(err) = ledger.adjust(product_id, -quantity) {
            if let Some(records) = self.by_date.get_mut(&date) {
                records.pop();
            }
            self.persist();
            return Err(err);
        }

        debug!(%date, product_id, quantity, total = %total, "sale recorded");
        self.persist();
        Ok(())
    }

    /// The insertion-ordered records for a date (oldest first).
    pub fn sales_for(&self, date: NaiveDate) -> &[SaleRecord] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Today's records, keyed by the system UTC date.
    pub fn todays_sales(&self) -> &[SaleRecord] {
        self.sales_for(Utc::now().date_naive())
    }

    /// Per-product aggregation of one date's sales, in catalog order.
    /// Products without sales that day are omitted. Derived on demand,
    /// never persisted.
    pub fn summary(&self, date: NaiveDate, catalog: &Catalog) -> Vec<ProductSales> {
        let records = self.sales_for(date);

        catalog
            .products()
            .iter()
            .filter_map(|product| {
                let (quantity, total) = records
                    .iter()
                    .filter(|record| record.product == product.id)
                    .fold((0i64, Money::zero()), |(quantity, total), record| {
                        (quantity + record.quantity, total + record.total)
                    });

                if quantity == 0 {
                    return None;
                }

                Some(ProductSales {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    unit: product.unit.clone(),
                    quantity,
                    total,
                })
            })
            .collect()
    }

    /// Writes the whole mapping through the gateway. Failures are
    /// logged and swallowed.
    fn persist(&self) {
        let document = match serde_json::to_string(&self.by_date) {
            Ok(document) => document,
            Err(err) => {
                error!(error = %err, "failed to serialize sales");
                return;
            }
        };

        if let Err(err) = self.store.set(SALES_KEY, &document) {
            error!(error = %err, "failed to persist sales; keeping in-memory state");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::INVENTORY_KEY;
    use yardtrack_core::error::CoreError;

    fn setup() -> (SalesJournal, InventoryLedger, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let ledger = InventoryLedger::load(&Catalog::standard(), store.clone());
        let journal = SalesJournal::load(store.clone());
        (journal, ledger, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_sale_appends_and_decrements_together() {
        let (mut journal, mut ledger, _) = setup();
        ledger.adjust("cement", 100).unwrap();

        journal
            .record(
                &mut ledger,
                date(2024, 1, 1),
                "cement",
                20,
                Money::from_rupees(9000),
            )
            .unwrap();

        let records = journal.sales_for(date(2024, 1, 1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product, "cement");
        assert_eq!(records[0].quantity, 20);
        assert_eq!(records[0].total, Money::from_rupees(9000));
        assert_eq!(ledger.stock("cement"), Some(80));
    }

    #[test]
    fn test_insufficient_stock_leaves_no_orphan_record() {
        let (mut journal, mut ledger, store) = setup();
        ledger.adjust("bricks", 10).unwrap();
        let inventory_before = store.get(INVENTORY_KEY).unwrap();

        let err = journal
            .record(
                &mut ledger,
                date(2024, 1, 1),
                "bricks",
                50,
                Money::from_rupees(300),
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));

        // No orphan record, stock untouched, inventory not rewritten
        assert!(journal.sales_for(date(2024, 1, 1)).is_empty());
        assert_eq!(ledger.stock("bricks"), Some(10));
        assert_eq!(store.get(INVENTORY_KEY).unwrap(), inventory_before);
    }

    #[test]
    fn test_rolled_back_sale_still_rewrites_sales_document() {
        let (mut journal, mut ledger, store) = setup();

        let _ = journal.record(
            &mut ledger,
            date(2024, 1, 1),
            "bricks",
            50,
            Money::from_rupees(300),
        );

        // The unchanged (empty-bucket) state was written through
        let raw = store.get(SALES_KEY).unwrap().unwrap();
        let stored: BTreeMap<NaiveDate, Vec<SaleRecord>> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored[&date(2024, 1, 1)], Vec::<SaleRecord>::new());
    }

    #[test]
    fn test_unknown_product_sale_is_rejected() {
        let (mut journal, mut ledger, _) = setup();

        let err = journal
            .record(
                &mut ledger,
                date(2024, 1, 1),
                "sand",
                1,
                Money::from_rupees(100),
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert!(journal.sales_for(date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_nonpositive_inputs_are_rejected_before_any_append() {
        let (mut journal, mut ledger, store) = setup();
        ledger.adjust("cement", 100).unwrap();

        assert!(journal
            .record(&mut ledger, date(2024, 1, 1), "cement", 0, Money::from_rupees(1))
            .is_err());
        assert!(journal
            .record(&mut ledger, date(2024, 1, 1), "cement", 5, Money::zero())
            .is_err());

        assert!(journal.sales_for(date(2024, 1, 1)).is_empty());
        assert_eq!(ledger.stock("cement"), Some(100));
        assert_eq!(store.get(SALES_KEY).unwrap(), None);
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let (mut journal, mut ledger, _) = setup();
        ledger.adjust("cement", 100).unwrap();
        ledger.adjust("bricks", 100).unwrap();

        for (product, qty) in [("cement", 5), ("bricks", 20), ("cement", 1)] {
            journal
                .record(
                    &mut ledger,
                    date(2024, 1, 1),
                    product,
                    qty,
                    Money::from_rupees(qty * 10),
                )
                .unwrap();
        }

        let products: Vec<&str> = journal
            .sales_for(date(2024, 1, 1))
            .iter()
            .map(|record| record.product.as_str())
            .collect();
        assert_eq!(products, ["cement", "bricks", "cement"]);
    }

    #[test]
    fn test_summary_groups_by_product_in_catalog_order() {
        let (mut journal, mut ledger, _) = setup();
        ledger.adjust("cement", 100).unwrap();
        ledger.adjust("bricks", 500).unwrap();

        // Bricks sold first; the summary still lists cement first
        journal
            .record(&mut ledger, date(2024, 1, 1), "bricks", 200, Money::from_rupees(1200))
            .unwrap();
        journal
            .record(&mut ledger, date(2024, 1, 1), "cement", 10, Money::from_rupees(4500))
            .unwrap();
        journal
            .record(&mut ledger, date(2024, 1, 1), "cement", 5, Money::from_rupees(2200))
            .unwrap();

        let summary = journal.summary(date(2024, 1, 1), &Catalog::standard());
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].product_id, "cement");
        assert_eq!(summary[0].quantity, 15);
        assert_eq!(summary[0].total, Money::from_rupees(6700));

        assert_eq!(summary[1].product_id, "bricks");
        assert_eq!(summary[1].quantity, 200);
        assert_eq!(summary[1].total, Money::from_rupees(1200));
    }

    #[test]
    fn test_summary_is_scoped_to_the_requested_date() {
        let (mut journal, mut ledger, _) = setup();
        ledger.adjust("cement", 100).unwrap();

        journal
            .record(&mut ledger, date(2024, 1, 1), "cement", 10, Money::from_rupees(4500))
            .unwrap();

        assert!(journal.summary(date(2024, 1, 2), &Catalog::standard()).is_empty());
        assert!(journal.sales_for(date(2024, 1, 2)).is_empty());
    }

    #[test]
    fn test_load_reads_persisted_sales() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut ledger = InventoryLedger::load(&Catalog::standard(), store.clone());
            ledger.adjust("cement", 100).unwrap();
            let mut journal = SalesJournal::load(store.clone());
            journal
                .record(&mut ledger, date(2024, 1, 1), "cement", 20, Money::from_rupees(9000))
                .unwrap();
        }

        let journal = SalesJournal::load(store);
        let records = journal.sales_for(date(2024, 1, 1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total, Money::from_rupees(9000));
    }
}
