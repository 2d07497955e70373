//! # Invoice Operations

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::info;

use yardtrack_core::error::{CoreError, ValidationError};
use yardtrack_core::validation::{parse_charge, parse_person_count, parse_unit_price};
use yardtrack_core::{ChargeDraft, CustomerDetails, Invoice, ItemDraft, Money};
use yardtrack_store::generate_invoice_id;

use crate::company::CompanyProfile;
use crate::error::{ErrorCode, OpError};
use crate::export::{export_target, run_export, Exporter};
use crate::render::render_invoice;
use crate::state::BooksState;

/// The invoice list pane shows this many entries.
const RECENT_INVOICES: usize = 10;

/// Raw invoice form submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_email: String,
    pub billing_address: String,
    pub notes: String,
    pub items: Vec<InvoiceItemRequest>,
    pub transport_cost: f64,
    pub labour_persons: f64,
    pub labour_cost_per_person: f64,
}

/// One per-product quantity/price pair from the invoice form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemRequest {
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// Item quantity from the form: empty or junk fields mean "no line",
/// a fraction is a mistake worth surfacing.
fn item_quantity(value: f64) -> Result<i64, OpError> {
    if !value.is_finite() || value <= 0.0 {
        return Ok(0);
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::MustBeWholeNumber {
            field: "quantity".to_string(),
        }
        .into());
    }
    Ok(value as i64)
}

/// Composes an invoice from the form, prepends it to the history, and
/// returns it.
///
/// Validation order: customer name first, then items. An invalid item
/// line never surfaces ahead of a missing customer.
pub fn create_invoice(books: &BooksState, request: CreateInvoiceRequest) -> Result<Invoice, OpError> {
    if request.customer_name.trim().is_empty() {
        return Err(CoreError::MissingCustomer.into());
    }

    let charges = ChargeDraft {
        transport_cost: parse_charge(request.transport_cost),
        labour_persons: parse_person_count(request.labour_persons),
        labour_cost_per_person: parse_charge(request.labour_cost_per_person),
    };

    books.with_books_mut(|books| {
        let mut drafts = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let product = books
                .catalog
                .get(&item.product)
                .ok_or_else(|| OpError::not_found("Product", &item.product))?;

            let quantity = item_quantity(item.quantity)?;
            let unit_price = if quantity > 0 {
                parse_unit_price("unitPrice", item.unit_price)?
            } else {
                Money::zero()
            };

            drafts.push(ItemDraft {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit: product.unit.clone(),
                quantity,
                unit_price,
            });
        }

        let invoice = Invoice::compose(
            generate_invoice_id(),
            Utc::now(),
            CustomerDetails {
                name: request.customer_name.clone(),
                contact: request.customer_contact.clone(),
                email: request.customer_email.clone(),
                address: request.billing_address.clone(),
            },
            &request.notes,
            drafts,
            charges,
        )?;

        let invoice = books.invoices.add(invoice).clone();
        info!(id = %invoice.id, total = %invoice.total, items = invoice.items.len(), "invoice created");
        Ok(invoice)
    })
}

/// The most recently stored invoice, for the preview pane.
pub fn latest_invoice(books: &BooksState) -> Option<Invoice> {
    books.with_books(|books| books.invoices.latest().cloned())
}

/// The ten most recent invoices, newest first.
pub fn recent_invoices(books: &BooksState) -> Vec<Invoice> {
    books.with_books(|books| books.invoices.recent(RECENT_INVOICES).to_vec())
}

/// Exports the invoice generated this session as `{invoiceId}.pdf`.
///
/// Fire-and-forget: the returned handle resolves to the export outcome
/// and may be awaited for a toast or dropped entirely. Domain state is
/// already persisted either way.
pub fn export_latest_invoice(
    books: &BooksState,
    company: &CompanyProfile,
    exporter: &Arc<Exporter>,
    download_dir: &Path,
) -> Result<JoinHandle<Result<(), OpError>>, OpError> {
    let (document, target) = books.with_books(|books| {
        let id = books
            .invoices
            .latest_id()
            .ok_or_else(|| OpError::new(ErrorCode::NotFound, "Generate an invoice first"))?;
        let invoice = books
            .invoices
            .find(id)
            .ok_or_else(|| OpError::not_found("Invoice", id))?;

        Ok::<_, OpError>((
            render_invoice(invoice, company),
            export_target(download_dir, &invoice.id),
        ))
    })?;

    let exporter = exporter.clone();
    Ok(tokio::spawn(async move {
        run_export(exporter, document, target)
            .await
            .map_err(OpError::from)
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportError, PdfEngine};
    use crate::state::Books;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use yardtrack_core::Catalog;
    use yardtrack_store::{KvStore, MemoryStore, INVOICES_KEY};

    fn state_with_store() -> (BooksState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let books = Books::load(Catalog::standard(), store.clone() as Arc<dyn KvStore>);
        (BooksState::new(books), store)
    }

    fn request(customer: &str, cement_qty: f64) -> CreateInvoiceRequest {
        CreateInvoiceRequest {
            customer_name: customer.to_string(),
            customer_contact: String::new(),
            customer_email: String::new(),
            billing_address: String::new(),
            notes: String::new(),
            items: vec![
                InvoiceItemRequest {
                    product: "cement".to_string(),
                    quantity: cement_qty,
                    unit_price: 450.0,
                },
                InvoiceItemRequest {
                    product: "bricks".to_string(),
                    quantity: 0.0,
                    unit_price: 6.0,
                },
            ],
            transport_cost: 0.0,
            labour_persons: 0.0,
            labour_cost_per_person: 0.0,
        }
    }

    #[test]
    fn test_create_invoice_with_charges() {
        let (state, store) = state_with_store();

        let invoice = create_invoice(
            &state,
            CreateInvoiceRequest {
                transport_cost: 500.0,
                labour_persons: 2.0,
                labour_cost_per_person: 300.0,
                ..request("Raj", 10.0)
            },
        )
        .unwrap();

        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items_total(), Money::from_rupees(4500));
        assert_eq!(invoice.charges.labour.total, Money::from_rupees(600));
        assert_eq!(invoice.charges.total, Money::from_rupees(1100));
        assert_eq!(invoice.total, Money::from_rupees(5600));

        assert!(invoice.id.starts_with("INV"));
        assert!(store
            .get(INVOICES_KEY)
            .unwrap()
            .unwrap()
            .contains(&invoice.id));
    }

    #[test]
    fn test_missing_customer_is_rejected() {
        let (state, store) = state_with_store();

        let err = create_invoice(&state, request("", 10.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCustomer);
        assert_eq!(store.get(INVOICES_KEY).unwrap(), None);
    }

    #[test]
    fn test_missing_customer_wins_over_invalid_items() {
        let (state, _) = state_with_store();

        // Fractional quantity alongside an empty name
        let err = create_invoice(&state, request("", 2.5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCustomer);

        // Unknown product alongside a whitespace name
        let mut bad = request("   ", 10.0);
        bad.items[0].product = "sand".to_string();
        let err = create_invoice(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCustomer);
    }

    #[test]
    fn test_no_positive_quantity_is_rejected() {
        let (state, _) = state_with_store();

        let err = create_invoice(&state, request("Anu", 0.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoItems);

        // Junk quantity fields behave like empty ones
        let err = create_invoice(&state, request("Anu", f64::NAN)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoItems);
    }

    #[test]
    fn test_fractional_item_quantity_is_invalid_input() {
        let (state, _) = state_with_store();
        let err = create_invoice(&state, request("Raj", 2.5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_unknown_item_product_is_not_found() {
        let (state, _) = state_with_store();
        let mut bad = request("Raj", 10.0);
        bad.items[0].product = "sand".to_string();

        let err = create_invoice(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_junk_charges_normalize_to_zero() {
        let (state, _) = state_with_store();

        let invoice = create_invoice(
            &state,
            CreateInvoiceRequest {
                transport_cost: f64::NAN,
                labour_persons: -2.0,
                labour_cost_per_person: 300.0,
                ..request("Raj", 10.0)
            },
        )
        .unwrap();

        assert_eq!(invoice.charges.total, Money::zero());
        assert_eq!(invoice.total, Money::from_rupees(4500));
    }

    #[test]
    fn test_history_views() {
        let (state, _) = state_with_store();
        assert!(latest_invoice(&state).is_none());

        create_invoice(&state, request("Raj", 1.0)).unwrap();
        let second = create_invoice(&state, request("Anu", 2.0)).unwrap();

        assert_eq!(latest_invoice(&state).unwrap().id, second.id);
        let recent = recent_invoices(&state);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, second.id);
    }

    /// Engine stub that records the document and target it was given.
    struct RecordingEngine {
        calls: Mutex<Vec<(String, PathBuf)>>,
    }

    impl PdfEngine for RecordingEngine {
        fn render(&self, document: &str, target: &Path) -> Result<(), ExportError> {
            self.calls
                .lock()
                .unwrap()
                .push((document.to_string(), target.to_path_buf()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_export_requires_a_session_invoice() {
        let (state, _) = state_with_store();
        let exporter = Arc::new(Exporter::with_engine(Arc::new(RecordingEngine {
            calls: Mutex::new(Vec::new()),
        })));

        let err = export_latest_invoice(
            &state,
            &CompanyProfile::default(),
            &exporter,
            Path::new("/tmp"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Generate an invoice first");
    }

    #[tokio::test]
    async fn test_export_renders_the_latest_invoice() {
        let (state, _) = state_with_store();
        let invoice = create_invoice(&state, request("Raj", 10.0)).unwrap();

        let engine = Arc::new(RecordingEngine {
            calls: Mutex::new(Vec::new()),
        });
        let exporter = Arc::new(Exporter::with_engine(engine.clone()));

        let handle = export_latest_invoice(
            &state,
            &CompanyProfile::default(),
            &exporter,
            Path::new("/downloads"),
        )
        .unwrap();
        handle.await.unwrap().unwrap();

        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("Billed to: Raj"));
        assert_eq!(calls[0].1, PathBuf::from(format!("/downloads/{}.pdf", invoice.id)));
    }

    #[tokio::test]
    async fn test_failed_export_leaves_the_invoice_intact() {
        let (state, store) = state_with_store();
        create_invoice(&state, request("Raj", 10.0)).unwrap();
        let stored_before = store.get(INVOICES_KEY).unwrap();

        let exporter = Arc::new(Exporter::new(Box::new(|| {
            Box::pin(async { Err(ExportError::EngineUnavailable("offline".to_string())) })
        })));

        let handle = export_latest_invoice(
            &state,
            &CompanyProfile::default(),
            &exporter,
            Path::new("/downloads"),
        )
        .unwrap();

        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportUnavailable);

        // The invoice record was not rolled back
        assert_eq!(store.get(INVOICES_KEY).unwrap(), stored_before);
        assert!(latest_invoice(&state).is_some());
    }
}
