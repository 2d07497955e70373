//! # Operation Error Type
//!
//! Unified error type for the operation boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in YardTrack                              │
//! │                                                                         │
//! │  Presentation Shell             Rust Backend                            │
//! │  ──────────────────             ────────────                            │
//! │                                                                         │
//! │  record_sale(form)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Operation Function                                              │  │
//! │  │  Result<T, OpError>                                              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Parse failed? ─── ValidationError ──────────┐                  │  │
//! │  │         │                                    │                  │  │
//! │  │         ▼                                    ▼                  │  │
//! │  │  Rule violated? ── CoreError ───────────── OpError ────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The shell switches on `code` to pick the toast variant and shows      │
//! │  `message` to the user. Nothing here is fatal to the process.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use yardtrack_core::error::{CoreError, ValidationError};
use yardtrack_store::StoreError;

use crate::export::ExportError;

/// Operation error returned across the boundary.
///
/// ## Serialization
/// This is what the shell receives when an operation fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Not enough Bricks in stock: available 10, requested 50"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for the notification toast
    pub message: String,
}

/// Error codes for operation responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product or invoice id
    NotFound,

    /// A form field failed the parse-and-validate step
    InvalidInput,

    /// A sale or stock-out would drive stock below zero
    InsufficientStock,

    /// Invoice customer name empty after trimming
    MissingCustomer,

    /// No invoice item with a positive quantity
    NoItems,

    /// The backing store could not be opened at startup
    StorageError,

    /// The export engine failed to load
    ExportUnavailable,

    /// The export engine loaded but failed to produce the document
    ExportFailed,
}

impl OpError {
    /// Creates a new operation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        OpError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        OpError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        OpError::new(ErrorCode::InvalidInput, message)
    }
}

/// Converts domain errors to operation errors.
impl From<CoreError> for OpError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::ProductNotFound(id) => OpError::not_found("Product", id),
            CoreError::InsufficientStock { .. } => {
                OpError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::MissingCustomer => OpError::new(ErrorCode::MissingCustomer, err.to_string()),
            CoreError::NoItems => OpError::new(ErrorCode::NoItems, err.to_string()),
            CoreError::Validation(e) => OpError::invalid_input(e.to_string()),
        }
    }
}

/// Converts validation errors straight to operation errors.
impl From<ValidationError> for OpError {
    fn from(err: ValidationError) -> Self {
        OpError::invalid_input(err.to_string())
    }
}

/// Converts store errors to operation errors.
///
/// Only startup reaches this conversion; write-through failures are
/// logged and swallowed inside the collections.
impl From<StoreError> for OpError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store failure surfaced at the boundary");
        OpError::new(ErrorCode::StorageError, "Storage is unavailable")
    }
}

/// Converts export errors to operation errors.
impl From<ExportError> for OpError {
    fn from(err: ExportError) -> Self {
        match &err {
            ExportError::EngineUnavailable(_) => {
                OpError::new(ErrorCode::ExportUnavailable, err.to_string())
            }
            ExportError::RenderFailed(_) => OpError::new(ErrorCode::ExportFailed, err.to_string()),
        }
    }
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for OpError {}
