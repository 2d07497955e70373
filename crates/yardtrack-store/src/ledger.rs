//! # Inventory Ledger
//!
//! Current stock per catalog product, with bounded adjustment.
//!
//! ## Adjustment Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    adjust(product_id, delta)                            │
//! │                                                                         │
//! │  delta == 0          ──► rejected (nothing to do is a form mistake)     │
//! │  unknown product     ──► rejected (ProductNotFound)                     │
//! │  stock + delta < 0   ──► rejected (InsufficientStock), stock unchanged  │
//! │  otherwise           ──► stock = max(stock + delta, 0), write through   │
//! │                                                                         │
//! │  The ledger is the single authority on stock sufficiency. The sales    │
//! │  journal calls in here and never duplicates the check.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, warn};

use yardtrack_core::error::{CoreError, CoreResult, ValidationError};
use yardtrack_core::{Catalog, InventoryEntry};

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::INVENTORY_KEY;

/// The inventory ledger: one entry per catalog product.
///
/// Owns the mapping, loaded once at startup; every successful adjustment
/// writes the whole mapping through the gateway.
pub struct InventoryLedger {
    entries: BTreeMap<String, InventoryEntry>,
    store: Arc<dyn KvStore>,
}

impl InventoryLedger {
    /// Loads the persisted mapping, falling back to zero stock.
    ///
    /// Catalog products absent from the stored mapping are seeded at
    /// zero, so a catalog addition never yields a phantom product.
    pub fn load(catalog: &Catalog, store: Arc<dyn KvStore>) -> Self {
        let mut entries = match store.get(INVENTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<BTreeMap<String, InventoryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    let err = StoreError::corrupt(INVENTORY_KEY, err.to_string());
                    warn!(error = %err, "starting with an empty inventory");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                warn!(error = %err, "failed to load inventory; starting empty");
                BTreeMap::new()
            }
        };

        for product in catalog.products() {
            entries
                .entry(product.id.clone())
                .or_insert_with(|| InventoryEntry::empty(&product.name, &product.unit));
        }

        InventoryLedger { entries, store }
    }

    /// Applies a signed stock adjustment to one product.
    ///
    /// Returns the new stock level. A negative delta that would drive
    /// stock below zero rejects the whole operation and leaves the entry
    /// untouched. The surviving `max(.., 0)` clamp only guards the exact
    /// zero boundary.
    pub fn adjust(&mut self, product_id: &str, delta: i64) -> CoreResult<i64> {
        if delta == 0 {
            return Err(ValidationError::MustNotBeZero {
                field: "delta".to_string(),
            }
            .into());
        }

        let entry = self
            .entries
            .get_mut(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        if delta < 0 && entry.stock + delta < 0 {
            return Err(CoreError::InsufficientStock {
                name: entry.name.clone(),
                available: entry.stock,
                requested: -delta,
            });
        }

        let new_stock = (entry.stock + delta).max(0);
        entry.stock = new_stock;
        debug!(product_id, delta, new_stock, "stock adjusted");

        self.persist();
        Ok(new_stock)
    }

    /// Current stock for a product, if it exists.
    pub fn stock(&self, product_id: &str) -> Option<i64> {
        self.entries.get(product_id).map(|entry| entry.stock)
    }

    /// All entries, keyed by product id, for the presentation layer.
    pub fn entries(&self) -> &BTreeMap<String, InventoryEntry> {
        &self.entries
    }

    /// Writes the current mapping through the gateway without an
    /// adjustment. Used by seeding to materialize a fresh directory.
    pub fn save(&self) {
        self.persist();
    }

    /// Writes the whole mapping through the gateway.
    ///
    /// Failures are logged and swallowed: the in-memory mapping remains
    /// the source of truth for the rest of the session.
    fn persist(&self) {
        let document = match serde_json::to_string(&self.entries) {
            Ok(document) => document,
            Err(err) => {
                error!(error = %err, "failed to serialize inventory");
                return;
            }
        };

        if let Err(err) = self.store.set(INVENTORY_KEY, &document) {
            error!(error = %err, "failed to persist inventory; keeping in-memory state");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
