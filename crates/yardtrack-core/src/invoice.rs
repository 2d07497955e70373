//! # Invoice Module
//!
//! Invoice types and the pure composition function behind the invoice
//! builder.
//!
//! Composition is deterministic: the caller supplies the generated id and
//! timestamp, this module supplies validation and arithmetic. Prepending
//! to the history and persisting are the store layer's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Invoice Types
// =============================================================================

/// Billing customer block. Only the name is required; the rest render
/// when present and stay empty strings otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

/// One invoice line. Name, unit and price are frozen copies of catalog
/// data at composition time, so an invoice renders the same forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Product id reference.
    pub product: String,
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Labour charge: persons × cost per person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourCharge {
    pub persons: i64,
    pub cost_per_person: Money,
    pub total: Money,
}

/// Non-item charges added to the invoice subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCharges {
    pub transport_cost: Money,
    pub labour: LabourCharge,
    pub total: Money,
}

/// A generated billing document. Immutable once composed; the history
/// never mutates or deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer: CustomerDetails,
    pub notes: String,
    pub items: Vec<InvoiceItem>,
    pub charges: InvoiceCharges,
    pub subtotal: Money,
    pub total: Money,
}

impl Invoice {
    /// Sum of item line totals, before charges. Recomputed for document
    /// rendering rather than stored.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(|item| item.line_total).sum()
    }
}

// =============================================================================
// Composition Inputs
// =============================================================================

/// Candidate invoice line before quantity filtering.
///
/// The operation layer resolves these against the catalog; composition
/// keeps the lines whose quantity is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub product_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    pub unit_price: Money,
}

/// Charge inputs, already normalized at the parse boundary: currency
/// amounts are zero-or-positive, the person count is a non-negative
/// whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChargeDraft {
    pub transport_cost: Money,
    pub labour_persons: i64,
    pub labour_cost_per_person: Money,
}

// =============================================================================
// Composition
// =============================================================================

impl Invoice {
    /// Composes an invoice from validated inputs.
    ///
    /// ## Validation Order
    /// 1. Customer name must be non-empty after trimming, else
    ///    [`CoreError::MissingCustomer`].
    /// 2. Drafts are filtered to positive quantities and priced; an empty
    ///    result is [`CoreError::NoItems`].
    ///
    /// ## Charge Rules
    /// Labour total is `persons × cost_per_person` only when both are
    /// positive, otherwise zero. Charges total is transport plus labour.
    /// Subtotal is items plus charges; there is no tax modeling, so the
    /// invoice total equals the subtotal.
    pub fn compose(
        id: String,
        created_at: DateTime<Utc>,
        customer: CustomerDetails,
        notes: &str,
        drafts: Vec<ItemDraft>,
        charges: ChargeDraft,
    ) -> CoreResult<Invoice> {
        let name = customer.name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingCustomer);
        }

        let items: Vec<InvoiceItem> = drafts
            .into_iter()
            .filter(|draft| draft.quantity > 0)
            .map(|draft| InvoiceItem {
                product: draft.product_id,
                name: draft.name,
                unit: draft.unit,
                quantity: draft.quantity,
                unit_price: draft.unit_price,
                line_total: draft.unit_price.multiply_quantity(draft.quantity),
            })
            .collect();

        if items.is_empty() {
            return Err(CoreError::NoItems);
        }

        let labour_total = if charges.labour_persons > 0 && charges.labour_cost_per_person.is_positive()
        {
            charges
                .labour_cost_per_person
                .multiply_quantity(charges.labour_persons)
        } else {
            Money::zero()
        };

        let charges = InvoiceCharges {
            transport_cost: charges.transport_cost,
            labour: LabourCharge {
                persons: charges.labour_persons,
                cost_per_person: charges.labour_cost_per_person,
                total: labour_total,
            },
            total: charges.transport_cost + labour_total,
        };

        let items_total: Money = items.iter().map(|item| item.line_total).sum();
        let subtotal = items_total + charges.total;

        Ok(Invoice {
            id,
            created_at,
            customer: CustomerDetails {
                name: name.to_string(),
                contact: customer.contact.trim().to_string(),
                email: customer.email.trim().to_string(),
                address: customer.address.trim().to_string(),
            },
            notes: notes.trim().to_string(),
            items,
            charges,
            subtotal,
            total: subtotal,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
