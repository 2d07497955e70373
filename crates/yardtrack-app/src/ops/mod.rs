//! # Operations Module
//!
//! Every user action the presentation shell can invoke.
//!
//! ## Operation Organization
//! ```text
//! ops/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── stock.rs    ◄─── Stock in/out, stock levels
//! ├── sale.rs     ◄─── Record sale, today's sales and summary
//! └── invoice.rs  ◄─── Create invoice, history views, export
//! ```
//!
//! ## How Operations Work
//! Each operation takes the shared state it needs plus a request DTO of
//! raw form values, runs the parse-and-validate step, then calls into
//! the domain under the books lock. Every failure comes back as an
//! [`OpError`](crate::error::OpError) for the shell's notification toast;
//! nothing here panics or retries.

pub mod invoice;
pub mod sale;
pub mod stock;

pub use invoice::{
    create_invoice, export_latest_invoice, latest_invoice, recent_invoices, CreateInvoiceRequest,
    InvoiceItemRequest,
};
pub use sale::{
    record_sale, sale_total_preview, todays_sales, todays_summary, RecordSaleRequest, SaleRecorded,
};
pub use stock::{stock_in, stock_levels, stock_out, StockAdjustmentRequest, StockLevel};
