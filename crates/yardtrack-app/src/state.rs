//! # Books State
//!
//! The session's domain state behind one lock.
//!
//! ## Why One Lock?
//! The system is a single-user event loop: each user action
//! runs to completion before the next is processed. Wrapping the catalog
//! and the three collections in a single `Arc<Mutex<Books>>` encodes
//! exactly that serialization, and lets the sale operation borrow the
//! ledger and the journal together without lock-ordering concerns.
//!
//! Export tasks never take this lock; they are handed a rendered
//! document by value.

use std::sync::{Arc, Mutex};

use yardtrack_core::Catalog;
use yardtrack_store::{InvoiceHistory, InventoryLedger, KvStore, SalesJournal};

/// The catalog plus the three owned collections.
pub struct Books {
    pub catalog: Catalog,
    pub ledger: InventoryLedger,
    pub journal: SalesJournal,
    pub invoices: InvoiceHistory,
}

impl Books {
    /// Loads every collection from the gateway. Each loads once; all
    /// later writes go through write-through persistence.
    pub fn load(catalog: Catalog, store: Arc<dyn KvStore>) -> Self {
        let ledger = InventoryLedger::load(&catalog, store.clone());
        let journal = SalesJournal::load(store.clone());
        let invoices = InvoiceHistory::load(store);

        Books {
            catalog,
            ledger,
            journal,
            invoices,
        }
    }
}

/// Shared handle to the books.
#[derive(Clone)]
pub struct BooksState {
    books: Arc<Mutex<Books>>,
}

impl BooksState {
    /// Wraps loaded books in a shared handle.
    pub fn new(books: Books) -> Self {
        BooksState {
            books: Arc::new(Mutex::new(books)),
        }
    }

    /// Executes a function with read access to the books.
    pub fn with_books<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Books) -> R,
    {
        let books = self.books.lock().expect("books mutex poisoned");
        f(&books)
    }

    /// Executes a function with write access to the books.
    pub fn with_books_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Books) -> R,
    {
        let mut books = self.books.lock().expect("books mutex poisoned");
        f(&mut books)
    }
}
