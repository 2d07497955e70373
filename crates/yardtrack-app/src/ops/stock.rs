//! # Stock Operations

use serde::{Deserialize, Serialize};
use tracing::info;

use yardtrack_core::validation::parse_quantity;

use crate::error::OpError;
use crate::state::{Books, BooksState};

/// Raw stock form submission: a product and a positive quantity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustmentRequest {
    pub product: String,
    pub quantity: f64,
}

/// One product's stock line for the inventory pane.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub product: String,
    pub name: String,
    pub unit: String,
    pub stock: i64,
}

fn level_for(books: &Books, product_id: &str) -> Result<StockLevel, OpError> {
    let entry = books
        .ledger
        .entries()
        .get(product_id)
        .ok_or_else(|| OpError::not_found("Product", product_id))?;

    Ok(StockLevel {
        product: product_id.to_string(),
        name: entry.name.clone(),
        unit: entry.unit.clone(),
        stock: entry.stock,
    })
}

/// Adds stock for a product.
pub fn stock_in(books: &BooksState, request: StockAdjustmentRequest) -> Result<StockLevel, OpError> {
    let quantity = parse_quantity("quantity", request.quantity)?;

    books.with_books_mut(|books| {
        let new_stock = books.ledger.adjust(&request.product, quantity)?;
        info!(product = %request.product, quantity, new_stock, "stock added");
        level_for(books, &request.product)
    })
}

/// Removes stock for a product (manual correction, not a sale).
pub fn stock_out(books: &BooksState, request: StockAdjustmentRequest) -> Result<StockLevel, OpError> {
    let quantity = parse_quantity("quantity", request.quantity)?;

    books.with_books_mut(|books| {
        let new_stock = books.ledger.adjust(&request.product, -quantity)?;
        info!(product = %request.product, quantity, new_stock, "stock removed");
        level_for(books, &request.product)
    })
}

/// Current stock for every catalog product, in catalog order.
pub fn stock_levels(books: &BooksState) -> Vec<StockLevel> {
    books.with_books(|books| {
        books
            .catalog
            .products()
            .iter()
            .filter_map(|product| level_for(books, &product.id).ok())
            .collect()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Arc;
    use yardtrack_core::Catalog;
    use yardtrack_store::{KvStore, MemoryStore, INVENTORY_KEY};

    fn state_with_store() -> (BooksState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let books = Books::load(Catalog::standard(), store.clone() as Arc<dyn KvStore>);
        (BooksState::new(books), store)
    }

    fn request(product: &str, quantity: f64) -> StockAdjustmentRequest {
        StockAdjustmentRequest {
            product: product.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_stock_in_from_zero_persists() {
        let (state, store) = state_with_store();

        let level = stock_in(&state, request("cement", 100.0)).unwrap();
        assert_eq!(level.stock, 100);
        assert_eq!(level.name, "Cement");
        assert_eq!(level.unit, "bags");

        // Write-through happened
        assert!(store
            .get(INVENTORY_KEY)
            .unwrap()
            .unwrap()
            .contains("\"stock\":100"));
    }

    #[test]
    fn test_stock_out_respects_available_stock() {
        let (state, _) = state_with_store();
        stock_in(&state, request("bricks", 10.0)).unwrap();

        let err = stock_out(&state, request("bricks", 50.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let level = stock_out(&state, request("bricks", 10.0)).unwrap();
        assert_eq!(level.stock, 0);
    }

    #[test]
    fn test_invalid_quantities_are_rejected_at_the_boundary() {
        let (state, _) = state_with_store();

        for bad in [0.0, -5.0, f64::NAN, 2.5] {
            let err = stock_in(&state, request("cement", bad)).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
        assert_eq!(
            state.with_books(|books| books.ledger.stock("cement")),
            Some(0)
        );
    }

    #[test]
    fn test_unknown_product_is_not_found() {
        let (state, _) = state_with_store();
        let err = stock_in(&state, request("sand", 5.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_stock_levels_in_catalog_order() {
        let (state, _) = state_with_store();
        stock_in(&state, request("bricks", 500.0)).unwrap();

        let levels = stock_levels(&state);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].product, "cement");
        assert_eq!(levels[0].stock, 0);
        assert_eq!(levels[1].product, "bricks");
        assert_eq!(levels[1].stock, 500);
    }
}
