//! # Error Types
//!
//! Domain-specific error types for yardtrack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  yardtrack-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Raw form input failures                        │
//! │                                                                         │
//! │  yardtrack-store errors (separate crate)                               │
//! │  └── StoreError       - Key-value store failures                       │
//! │                                                                         │
//! │  yardtrack-app errors                                                  │
//! │  └── OpError          - What the presentation shell sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OpError → Notification            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product, amounts, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing notification

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They are caught at
/// the operation boundary and surfaced as user-facing notifications;
/// none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A stock decrement would drive the entry below zero.
    ///
    /// The inventory ledger is the single authority for this check;
    /// callers (the sales journal included) never duplicate it.
    #[error("Not enough {name} in stock: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Invoice customer name is empty after trimming.
    #[error("Customer name is required")]
    MissingCustomer,

    /// No invoice item had a positive quantity.
    #[error("Add at least one product to the invoice")]
    NoItems,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Raw form input validation errors.
///
/// The presentation shell hands numbers over as loosely-typed floats;
/// these errors come out of the explicit parse-and-validate step that
/// runs before any domain logic.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value must not be zero.
    #[error("{field} must not be zero")]
    MustNotBeZero { field: String },

    /// Quantities are whole bags/bricks; fractions are form mistakes.
    #[error("{field} must be a whole number")]
    MustBeWholeNumber { field: String },

    /// Invalid format (e.g., a date field that is not YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
