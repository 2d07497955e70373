//! # Invoice Rendering
//!
//! Produces the printable plain-text invoice document handed to the
//! export engine and the preview pane.
//!
//! Layout mirrors the on-screen invoice: company block, invoice meta,
//! customer block, item table, totals. Optional rows (contact lines,
//! transport, labour, notes) appear only when they carry something.

use std::fmt::Write;

use yardtrack_core::Invoice;

use crate::company::CompanyProfile;

/// Renders an invoice into the printable document.
pub fn render_invoice(invoice: &Invoice, company: &CompanyProfile) -> String {
    let mut doc = String::new();

    // Company block
    let _ = writeln!(doc, "{}", company.name);
    let _ = writeln!(doc, "{}", company.tagline);
    let _ = writeln!(doc, "{}", company.address);
    let _ = writeln!(doc, "Phone: {}", company.contact);
    let _ = writeln!(doc, "Email: {}", company.email);
    doc.push('\n');

    // Invoice meta
    let _ = writeln!(doc, "Invoice #{}", invoice.id);
    let _ = writeln!(doc, "{}", invoice.created_at.format("%Y-%m-%d %H:%M UTC"));
    doc.push('\n');

    // Customer block
    let _ = writeln!(doc, "Billed to: {}", invoice.customer.name);
    if !invoice.customer.contact.is_empty() {
        let _ = writeln!(doc, "Contact: {}", invoice.customer.contact);
    }
    if !invoice.customer.email.is_empty() {
        let _ = writeln!(doc, "Email: {}", invoice.customer.email);
    }
    if !invoice.customer.address.is_empty() {
        let _ = writeln!(doc, "{}", invoice.customer.address);
    }
    doc.push('\n');

    // Item table
    let _ = writeln!(
        doc,
        "{:<12} {:>14} {:>12} {:>12}",
        "Product", "Quantity", "Unit price", "Amount"
    );
    for item in &invoice.items {
        let _ = writeln!(
            doc,
            "{:<12} {:>14} {:>12} {:>12}",
            item.name,
            format!("{} {}", item.quantity, item.unit),
            item.unit_price.to_string(),
            item.line_total.to_string()
        );
    }
    doc.push('\n');

    // Totals: charge rows appear only when charges exist
    let charges = &invoice.charges;
    if charges.total.is_positive() {
        let _ = writeln!(doc, "{:<30} {:>12}", "Items total", invoice.items_total().to_string());
        if charges.transport_cost.is_positive() {
            let _ = writeln!(doc, "{:<30} {:>12}", "Transport", charges.transport_cost.to_string());
        }
        if charges.labour.total.is_positive() {
            let label = format!(
                "Labour ({} x {})",
                charges.labour.persons, charges.labour.cost_per_person
            );
            let _ = writeln!(doc, "{:<30} {:>12}", label, charges.labour.total.to_string());
        }
        let _ = writeln!(doc, "{:<30} {:>12}", "Charges total", charges.total.to_string());
    }
    let _ = writeln!(doc, "{:<30} {:>12}", "Total", invoice.total.to_string());

    // Notes
    if !invoice.notes.is_empty() {
        doc.push('\n');
        let _ = writeln!(doc, "Notes: {}", invoice.notes);
    }

    doc
}

// =============================================================================
// Unit Tests
// =============================================================================
