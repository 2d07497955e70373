//! # yardtrack-store: Persistence Layer for YardTrack
//!
//! This crate provides durable state for the YardTrack system. Collections
//! are stored as JSON documents in an opaque string-keyed store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       YardTrack Data Flow                               │
//! │                                                                         │
//! │  Operation (record_sale)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  yardtrack-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   KvStore     │    │  Collections  │    │  Fixed Keys  │  │   │
//! │  │   │   (kv.rs)     │    │ (ledger.rs,   │    │              │  │   │
//! │  │   │               │    │  journal.rs,  │    │ yardtrack_*  │  │   │
//! │  │   │ FileStore     │◄───│  invoices.rs) │    │              │  │   │
//! │  │   │ MemoryStore   │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Data directory (one JSON file per key)             │   │
//! │  │   yardtrack_inventory.json / yardtrack_sales.json / ...         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! Each collection loads once at startup and writes through on every
//! mutation, whole-document, no batching. A failed write is logged and
//! swallowed: the in-memory collection stays authoritative for the rest
//! of the session and the user's action still succeeds. Inventory and
//! sales are two independent writes even inside one sale recording, so
//! a crash between them is a known, accepted inconsistency window.
//!
//! ## Module Organization
//!
//! - [`kv`] - The opaque key-value gateway and its implementations
//! - [`ledger`] - Inventory ledger (stock per product)
//! - [`journal`] - Sales journal (records per date)
//! - [`invoices`] - Invoice history (most-recent-first)
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoices;
pub mod journal;
pub mod kv;
pub mod ledger;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use invoices::{generate_invoice_id, InvoiceHistory};
pub use journal::SalesJournal;
pub use kv::{FileStore, KvStore, MemoryStore};
pub use ledger::InventoryLedger;

// =============================================================================
// Fixed Storage Keys
// =============================================================================

/// Key for the inventory mapping (product id → entry).
pub const INVENTORY_KEY: &str = "yardtrack_inventory";

/// Key for the sales mapping (date → records).
pub const SALES_KEY: &str = "yardtrack_sales";

/// Key for the invoice list (most-recent-first).
pub const INVOICES_KEY: &str = "yardtrack_invoices";
