//! # Invoice History
//!
//! The append-only, most-recent-first invoice list.
//!
//! Invoices are immutable once added and never deleted by the system.
//! The "latest" marker is a session convenience for the preview pane and
//! deliberately not persisted; it resets on restart.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use tracing::{debug, error, warn};

use yardtrack_core::Invoice;

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::INVOICES_KEY;

/// The invoice history, newest first.
pub struct InvoiceHistory {
    invoices: Vec<Invoice>,
    latest_id: Option<String>,
    store: Arc<dyn KvStore>,
}

impl InvoiceHistory {
    /// Loads the persisted list, falling back to empty.
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let invoices = match store.get(INVOICES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(invoices) => invoices,
                Err(err) => {
                    let err = StoreError::corrupt(INVOICES_KEY, err.to_string());
                    warn!(error = %err, "starting with an empty invoice history");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to load invoices; starting empty");
                Vec::new()
            }
        };

        InvoiceHistory {
            invoices,
            latest_id: None,
            store,
        }
    }

    /// Prepends a composed invoice, marks it latest, writes through.
    pub fn add(&mut self, invoice: Invoice) -> &Invoice {
        debug!(id = %invoice.id, total = %invoice.total, "invoice added to history");
        self.latest_id = Some(invoice.id.clone());
        self.invoices.insert(0, invoice);
        self.persist();
        &self.invoices[0]
    }

    /// The most recently added invoice, if any.
    pub fn latest(&self) -> Option<&Invoice> {
        self.invoices.first()
    }

    /// Id of the invoice generated this session, if any. Gates print
    /// and download actions.
    pub fn latest_id(&self) -> Option<&str> {
        self.latest_id.as_deref()
    }

    /// Finds an invoice by id.
    pub fn find(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    /// The `n` most recent invoices (the list pane shows ten).
    pub fn recent(&self, n: usize) -> &[Invoice] {
        &self.invoices[..self.invoices.len().min(n)]
    }

    /// Every stored invoice, newest first.
    pub fn all(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Writes the whole list through the gateway. Failures are logged
    /// and swallowed.
    fn persist(&self) {
        let document = match serde_json::to_string(&self.invoices) {
            Ok(document) => document,
            Err(err) => {
                error!(error = %err, "failed to serialize invoices");
                return;
            }
        };

        if let Err(err) = self.store.set(INVOICES_KEY, &document) {
            error!(error = %err, "failed to persist invoices; keeping in-memory state");
        }
    }
}

/// Generates an invoice id: `INV` + `YYYYMMDD` + `-` + a 4-digit
/// disambiguator in [1000, 9999].
///
/// The disambiguator comes from the subsecond clock. Collisions are
/// possible and not detected; the volume here is a handful of invoices
/// a day.
pub fn generate_invoice_id() -> String {
    let now = Utc::now();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    let disambiguator = 1000 + (nanos % 9000);
    format!("INV{}-{:04}", now.format("%Y%m%d"), disambiguator)
}

// =============================================================================
// Unit Tests
// =============================================================================
