//! # Domain Types
//!
//! Inventory and sales types shared across the workspace.
//!
//! Serialized field names stay camelCase because the persisted
//! collections are read back by the JS-style presentation shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Inventory
// =============================================================================

/// One inventory ledger entry, keyed by product id in the stored mapping.
///
/// Name and unit are denormalized into the entry so the stored mapping
/// renders without a catalog lookup.
///
/// ## Invariant
/// `stock` is never negative. Adjustments that would drive it below zero
/// are rejected whole; nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub name: String,
    pub unit: String,
    pub stock: i64,
}

impl InventoryEntry {
    pub fn empty(name: impl Into<String>, unit: impl Into<String>) -> Self {
        InventoryEntry {
            name: name.into(),
            unit: unit.into(),
            stock: 0,
        }
    }
}

// =============================================================================
// Sales
// =============================================================================

/// One recorded sale. Immutable once created, append-only per date.
///
/// The total is caller-supplied, not recomputed from the unit price;
/// the yard negotiates per-sale prices at the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Product id reference into the catalog.
    pub product: String,

    /// Quantity sold, always positive.
    pub quantity: i64,

    /// Sale total, always positive.
    pub total: Money,

    /// Creation timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Per-product aggregation of one date's sales.
///
/// Derived for reporting, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_record_serializes_camel_case() {
        let record = SaleRecord {
            product: "cement".to_string(),
            quantity: 20,
            total: Money::from_rupees(9000),
            recorded_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"recordedAt\""));
        assert!(json.contains("\"product\":\"cement\""));
    }

    #[test]
    fn test_empty_inventory_entry() {
        let entry = InventoryEntry::empty("Cement", "bags");
        assert_eq!(entry.stock, 0);
        assert_eq!(entry.unit, "bags");
    }
}
