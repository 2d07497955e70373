//! # Store Error Types
//!
//! Error types for the key-value gateway and the collections above it.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O or JSON error                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and operation context         │
//! │       │                                                                 │
//! │       ├── on load: caller logs a warning and falls back to defaults    │
//! │       │                                                                 │
//! │       └── on write-through: caller logs an error and swallows it;      │
//! │           the in-memory collection stays authoritative                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Key-value store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed (I/O level, not absence: a missing key is
    /// `Ok(None)`).
    #[error("Failed to read key '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed (store unavailable, quota exceeded, disk
    /// full).
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// A stored document exists but does not parse as the expected
    /// collection shape.
    #[error("Stored data under '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// The backing location could not be opened or created.
    #[error("Store unavailable at '{path}': {message}")]
    Unavailable { path: String, message: String },
}

impl StoreError {
    /// Creates a ReadFailed error for a given key.
    pub fn read_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::ReadFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a WriteFailed error for a given key.
    pub fn write_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::WriteFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a Corrupt error for a given key.
    pub fn corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates an Unavailable error for a backing location.
    pub fn unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::write_failed("yardtrack_inventory", "disk full");
        assert_eq!(
            err.to_string(),
            "Failed to write key 'yardtrack_inventory': disk full"
        );

        let err = StoreError::corrupt("yardtrack_sales", "expected a map");
        assert_eq!(
            err.to_string(),
            "Stored data under 'yardtrack_sales' is corrupt: expected a map"
        );
    }
}
