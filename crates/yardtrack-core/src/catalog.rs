//! # Catalog Module
//!
//! The static, read-only list of sellable products.
//!
//! The catalog is defined once at process start and never mutated or
//! persisted. Every other component resolves product ids through it.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A sellable product.
///
/// Immutable catalog data. Stock levels live in the inventory ledger,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, referenced by sales and invoices.
    pub id: String,

    /// Display name shown in documents and summaries.
    pub name: String,

    /// Unit-of-measure label (e.g., "bags", "units").
    pub unit: String,

    /// Default unit price.
    pub price: Money,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        price: Money,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            price,
        }
    }
}

/// The fixed product list, built at startup.
///
/// ## Why a type and not a constant?
/// Lookup by id is needed all over the domain, and tests exercise the
/// components with their own short lists. The standard deployment list
/// comes from [`Catalog::standard`].
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The standard two-product yard: cement and bricks.
    pub fn standard() -> Self {
        Catalog::new(vec![
            Product::new("cement", "Cement", "bags", Money::from_rupees(450)),
            Product::new("bricks", "Bricks", "units", Money::from_rupees(6)),
        ])
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// True if the id names a catalog product.
    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// All products, in catalog order. Summaries and invoice forms
    /// iterate in this order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
