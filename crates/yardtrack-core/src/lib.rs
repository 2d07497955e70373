//! # yardtrack-core: Pure Business Logic for YardTrack
//!
//! This crate is the **heart** of YardTrack. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       YardTrack Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Shell (external)                  │   │
//! │  │    Stock Forms ──► Sale Form ──► Invoice Form ──► PDF Button   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    yardtrack-app Operations                     │   │
//! │  │    stock_in, record_sale, create_invoice, export_invoice       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ yardtrack-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │  invoice  │  │ validation│  │   │
//! │  │   │   Money   │  │  Product  │  │  compose  │  │   parse   │  │   │
//! │  │   │   paise   │  │  lookup   │  │  totals   │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 yardtrack-store (Persistence Layer)             │   │
//! │  │           Key-value gateway, ledger, journal, history           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product list and lookup
//! - [`types`] - Inventory entries, sale records, daily summaries
//! - [`invoice`] - Invoice types and pure invoice composition
//! - [`error`] - Domain error types
//! - [`validation`] - Parse-and-validate boundary for raw form input
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use yardtrack_core::Money` instead of
// `use yardtrack_core::money::Money`

pub use catalog::{Catalog, Product};
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{
    ChargeDraft, CustomerDetails, Invoice, InvoiceCharges, InvoiceItem, ItemDraft, LabourCharge,
};
pub use money::Money;
pub use types::{InventoryEntry, ProductSales, SaleRecord};
