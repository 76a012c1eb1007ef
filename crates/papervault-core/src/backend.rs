use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text from page {page}: {message}")]
    ExtractionError { page: usize, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    /// Shorthand for a per-page extraction failure.
    pub fn extraction(page: usize, message: impl Into<String>) -> Self {
        Self::ExtractionError {
            page,
            message: message.into(),
        }
    }
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level open-and-extract step; path
/// validation, hashing, cleaning, and Document assembly live in
/// `papervault-ingest`.
pub trait PdfBackend: Send + Sync {
    /// Open a document, returning a handle that yields per-page text.
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, BackendError>;
}

/// An open document handle.
///
/// Pages are addressed by 0-based physical index. Dropping the handle
/// releases the underlying document resources, so whoever owns the box
/// controls the release point.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Raw extracted text of the page at `index` (0-based).
    fn page_text(&mut self, index: usize) -> Result<String, BackendError>;
}

impl std::fmt::Debug for dyn PageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSource")
            .field("page_count", &self.page_count())
            .finish_non_exhaustive()
    }
}
