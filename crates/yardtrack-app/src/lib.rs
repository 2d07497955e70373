//! # YardTrack Application Library
//!
//! The operation boundary a presentation shell embeds. This crate loads
//! the books, exposes the user-action operations, and owns the one
//! asynchronous edge of the system: document export.
//!
//! ## Module Organization
//! ```text
//! yardtrack_app/
//! ├── lib.rs          ◄─── You are here (wiring & bootstrap)
//! ├── state.rs        ◄─── Books + shared state handle
//! ├── ops/
//! │   ├── mod.rs      ◄─── Operation exports
//! │   ├── stock.rs    ◄─── Stock in/out, stock levels
//! │   ├── sale.rs     ◄─── Record sale, today's views
//! │   └── invoice.rs  ◄─── Create invoice, history, export
//! ├── company.rs      ◄─── Company profile for documents
//! ├── render.rs       ◄─── Printable invoice document
//! ├── export.rs       ◄─── PDF engine boundary (async, load-once)
//! └── error.rs        ◄─── OpError for the shell
//! ```
//!
//! ## State Management
//! Instead of a single application struct, embedders hold three focused
//! values and hand them to the operations that need them:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Embedder-Held State                                 │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   BooksState     │ │  CompanyProfile  │ │   Exporter           │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Catalog       │ │  • Name, address │ │  • Engine loader     │   │
//! │  │  • Ledger        │ │  • Contact lines │ │  • Load-once cache   │   │
//! │  │  • Journal       │ │  (read-only)     │ │  (async boundary)    │   │
//! │  │  • Invoices      │ │                  │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each operation only takes the state it needs, and the export    │
//! │       path never touches the books lock.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod company;
pub mod error;
pub mod export;
pub mod ops;
pub mod render;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use yardtrack_core::Catalog;
use yardtrack_store::FileStore;

pub use company::CompanyProfile;
pub use error::{ErrorCode, OpError};
pub use export::{ExportError, Exporter, PdfEngine};
pub use render::render_invoice;
pub use state::{Books, BooksState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=yardtrack=trace` - Show trace for yardtrack crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,yardtrack=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads the books from a data directory.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Open the data directory ──────────────────────────────────────────► │
/// │     • FileStore, one JSON document per fixed key                        │
/// │     • Created if absent                                                 │
/// │                                                                         │
/// │  2. Load the collections ─────────────────────────────────────────────► │
/// │     • Inventory ledger (catalog seeded at zero where missing)           │
/// │     • Sales journal                                                     │
/// │     • Invoice history                                                   │
/// │                                                                         │
/// │  3. Wrap in BooksState ───────────────────────────────────────────────► │
/// │     • One lock; one user action at a time                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Load failures inside a collection fall back to defaults with a
/// warning; only an unusable data directory is an error.
pub fn bootstrap(data_dir: impl Into<PathBuf>) -> Result<BooksState, OpError> {
    let store = FileStore::open(data_dir)?;
    info!(dir = %store.dir().display(), "data directory ready");

    let books = Books::load(Catalog::standard(), Arc::new(store));
    Ok(BooksState::new(books))
}
