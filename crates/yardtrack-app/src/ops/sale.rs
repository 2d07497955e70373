//! # Sale Operations

use serde::{Deserialize, Serialize};
use tracing::info;

use yardtrack_core::validation::{
    parse_date_key, parse_quantity, parse_sale_total, parse_unit_price,
};
use yardtrack_core::{Money, ProductSales, SaleRecord};

use crate::error::OpError;
use crate::state::BooksState;

/// Raw sale form submission.
///
/// The unit price is a form aid for deriving the total; it is validated
/// but not persisted. The total itself is caller-supplied, not
/// recomputed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    pub sale_date: String,
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// Confirmation of a recorded sale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecorded {
    pub product: String,
    pub quantity: i64,
    pub total: Money,
    pub stock: i64,
}

/// Records one sale, reconciling it against the inventory ledger.
pub fn record_sale(books: &BooksState, request: RecordSaleRequest) -> Result<SaleRecorded, OpError> {
    let date = parse_date_key("saleDate", &request.sale_date)?;
    if request.product.trim().is_empty() {
        return Err(OpError::invalid_input("Select a product"));
    }
    let quantity = parse_quantity("quantity", request.quantity)?;
    parse_unit_price("unitPrice", request.unit_price)?;
    let total = parse_sale_total("total", request.total)?;

    books.with_books_mut(|books| {
        books
            .journal
            .record(&mut books.ledger, date, &request.product, quantity, total)?;

        let stock = books.ledger.stock(&request.product).unwrap_or(0);
        info!(%date, product = %request.product, quantity, total = %total, stock, "sale recorded");

        Ok(SaleRecorded {
            product: request.product.clone(),
            quantity,
            total,
            stock,
        })
    })
}

/// The form's derived total: quantity × unit price, or nothing while
/// either field is not yet usable.
pub fn sale_total_preview(quantity: f64, unit_price: f64) -> Option<Money> {
    let quantity = parse_quantity("quantity", quantity).ok()?;
    let unit_price = parse_unit_price("unitPrice", unit_price).ok()?;
    Some(unit_price.multiply_quantity(quantity))
}

/// Today's records (system date), oldest first.
pub fn todays_sales(books: &BooksState) -> Vec<SaleRecord> {
    books.with_books(|books| books.journal.todays_sales().to_vec())
}

/// Today's per-product aggregation, in catalog order.
pub fn todays_summary(books: &BooksState) -> Vec<ProductSales> {
    books.with_books(|books| {
        books
            .journal
            .summary(chrono::Utc::now().date_naive(), &books.catalog)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
