//! # Document Export Boundary
//!
//! The one asynchronous edge of the system: handing a rendered invoice
//! to an external PDF engine.
//!
//! ## Load-Once Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Export Flow                                         │
//! │                                                                         │
//! │  export(document, target)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  engine loaded? ── no ──► run the async loader, memoize on success     │
//! │       │ yes                      │                                      │
//! │       │                          ├── load fails ──► ExportUnavailable  │
//! │       ▼                          ▼                                      │
//! │  engine.render(document, target)                                       │
//! │       │                                                                 │
//! │       ├── render fails ──► ExportFailed                                │
//! │       └── ok ──► {invoiceId}.pdf on disk                               │
//! │                                                                         │
//! │  Export never touches the books. A failure is reported to the user    │
//! │  and changes nothing that was persisted. No automatic retries; the    │
//! │  next user-triggered export attempts the load again.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

// =============================================================================
// Errors
// =============================================================================

/// Export boundary errors. Neither variant affects domain state.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The engine could not be loaded (network, missing library).
    #[error("Unable to load the PDF engine: {0}")]
    EngineUnavailable(String),

    /// The engine loaded but failed to produce the document.
    #[error("Failed to generate the PDF: {0}")]
    RenderFailed(String),
}

// =============================================================================
// Engine Trait
// =============================================================================

/// The external rendering collaborator.
///
/// Given a fully-rendered invoice document and a target path, produce a
/// downloadable file. Implementations live outside the domain core.
pub trait PdfEngine: Send + Sync {
    fn render(&self, document: &str, target: &Path) -> Result<(), ExportError>;
}

/// Async factory producing the engine, run at most once per session.
pub type EngineLoader = Box<
    dyn Fn() -> Pin<Box<dyn Future<Output = Result<Arc<dyn PdfEngine>, ExportError>> + Send>>
        + Send
        + Sync,
>;

// =============================================================================
// Exporter
// =============================================================================

/// Owns the engine loader and the memoized engine.
///
/// The loader mirrors fetching a rendering library on first use: it runs
/// only when the first export happens, its success is cached for the
/// session, and a failure leaves the cell empty so a later
/// user-triggered export tries again.
pub struct Exporter {
    engine: OnceCell<Arc<dyn PdfEngine>>,
    loader: EngineLoader,
}

impl Exporter {
    /// Creates an exporter that loads its engine on first use.
    pub fn new(loader: EngineLoader) -> Self {
        Exporter {
            engine: OnceCell::new(),
            loader,
        }
    }

    /// Creates an exporter around an already-available engine.
    pub fn with_engine(engine: Arc<dyn PdfEngine>) -> Self {
        Exporter {
            engine: OnceCell::from(engine),
            loader: Box::new(|| {
                Box::pin(async {
                    Err(ExportError::EngineUnavailable(
                        "no loader configured".to_string(),
                    ))
                })
            }),
        }
    }

    /// Renders `document` into `target` through the (lazily loaded)
    /// engine.
    pub async fn export(&self, document: &str, target: &Path) -> Result<(), ExportError> {
        let engine = self.engine.get_or_try_init(|| (self.loader)()).await?;

        debug!(target = %target.display(), "exporting document");
        engine.render(document, target)
    }
}

/// Builds the target path for an invoice: `{invoiceId}.pdf` inside the
/// download directory.
pub fn export_target(dir: &Path, invoice_id: &str) -> PathBuf {
    dir.join(format!("{invoice_id}.pdf"))
}

/// Runs one export attempt, logging the outcome. Used inside spawned
/// fire-and-forget tasks.
pub(crate) async fn run_export(
    exporter: Arc<Exporter>,
    document: String,
    target: PathBuf,
) -> Result<(), ExportError> {
    match exporter.export(&document, &target).await {
        Ok(()) => {
            debug!(target = %target.display(), "invoice exported");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, target = %target.display(), "invoice export failed");
            Err(err)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
