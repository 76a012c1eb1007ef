use std::path::{Path, PathBuf};

use thiserror::Error;

use papervault_cleaning::TextCleaner;
use papervault_core::{BackendError, PageSource, PdfBackend};

// Re-export domain types for convenience
pub use papervault_core::{Document, DocumentMetadata, hash_file, page_id};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a PDF file: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("failed to open PDF {}: {source}", .path.display())]
    CorruptDocument {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("failed to extract page {page} of {}: {source}", .path.display())]
    PageExtraction {
        path: PathBuf,
        /// 1-based page number, for humans.
        page: usize,
        #[source]
        source: BackendError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns a PDF file into a lazy sequence of [`Document`]s, one per
/// non-empty page.
///
/// The extraction capability and the cleaning pipeline are both
/// injected; [`PdfParser::new`] wires in the MuPDF backend and the
/// default cleaner.
pub struct PdfParser {
    backend: Box<dyn PdfBackend>,
    cleaner: TextCleaner,
}

#[cfg(feature = "pdf")]
impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfParser {
    /// Parser backed by MuPDF with the default cleaning pipeline.
    #[cfg(feature = "pdf")]
    pub fn new() -> Self {
        Self::with_backend(Box::new(papervault_pdf_mupdf::MupdfBackend::new()))
    }

    /// Parser over an arbitrary extraction backend.
    pub fn with_backend(backend: Box<dyn PdfBackend>) -> Self {
        Self {
            backend,
            cleaner: TextCleaner::new(),
        }
    }

    /// Replace the default cleaning pipeline.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Open `path` and return the lazy per-page Document stream.
    ///
    /// Validation order, all before any document handle is opened:
    /// 1. path exists ([`ParseError::NotFound`])
    /// 2. extension is `pdf`, case-insensitively
    ///    ([`ParseError::UnsupportedFormat`])
    /// 3. whole file is hashed for the identity digest
    ///    ([`ParseError::Io`] on read failure)
    ///
    /// Only then is the document opened via the backend
    /// ([`ParseError::CorruptDocument`] on failure).
    pub fn parse(&self, path: &Path) -> Result<DocumentStream<'_>, ParseError> {
        if !path.exists() {
            return Err(ParseError::NotFound(path.to_path_buf()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "pdf" {
            return Err(ParseError::UnsupportedFormat(path.to_path_buf()));
        }

        // Identity comes from content bytes alone, so hash before open.
        let file_hash = hash_file(path)?;
        let abs_path = path.canonicalize()?;
        let filename = abs_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let source = self
            .backend
            .open(path)
            .map_err(|source| ParseError::CorruptDocument {
                path: path.to_path_buf(),
                source,
            })?;
        let page_count = source.page_count();

        tracing::info!(
            file = %abs_path.display(),
            pages = page_count,
            "opened PDF for ingestion"
        );

        Ok(DocumentStream {
            source,
            cleaner: &self.cleaner,
            path: path.to_path_buf(),
            file_path: abs_path.to_string_lossy().into_owned(),
            filename,
            file_hash,
            page_count,
            next_page: 0,
        })
    }
}

/// Lazy, single-pass iterator over one file's non-empty pages.
///
/// Pages are visited strictly in physical order. Pages whose cleaned
/// text is empty are skipped outright — later pages keep their own
/// 1-based numbers, nothing is renumbered.
///
/// A per-page extraction failure is fatal to the whole extraction: the
/// stream yields one `Err` and then fuses. Corruption is not transient,
/// and emitting a silently incomplete document set would poison the
/// downstream index.
///
/// The stream owns the open document handle; it is released when the
/// stream is dropped, whether consumption finished or was abandoned
/// early.
pub struct DocumentStream<'a> {
    source: Box<dyn PageSource>,
    cleaner: &'a TextCleaner,
    path: PathBuf,
    file_path: String,
    filename: String,
    file_hash: String,
    page_count: usize,
    next_page: usize,
}

impl std::fmt::Debug for DocumentStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStream")
            .field("path", &self.path)
            .field("file_path", &self.file_path)
            .field("filename", &self.filename)
            .field("file_hash", &self.file_hash)
            .field("page_count", &self.page_count)
            .field("next_page", &self.next_page)
            .finish_non_exhaustive()
    }
}

impl DocumentStream<'_> {
    /// Total physical pages in the document, including ones that will be
    /// skipped as empty.
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl Iterator for DocumentStream<'_> {
    type Item = Result<Document, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_page < self.page_count {
            let index = self.next_page;
            self.next_page += 1;

            let raw = match self.source.page_text(index) {
                Ok(text) => text,
                Err(source) => {
                    // Fuse: no further pages after a mid-stream failure.
                    self.next_page = self.page_count;
                    return Some(Err(ParseError::PageExtraction {
                        path: self.path.clone(),
                        page: index + 1,
                        source,
                    }));
                }
            };

            let content = self.cleaner.clean(&raw);
            if content.is_empty() {
                tracing::debug!(
                    file = %self.filename,
                    page = index + 1,
                    "skipping page with no content after cleaning"
                );
                continue;
            }

            let metadata = DocumentMetadata {
                id: page_id(&self.file_hash, index),
                filename: self.filename.clone(),
                file_path: self.file_path.clone(),
                page_number: index + 1,
                file_hash: self.file_hash.clone(),
            };

            return Some(Ok(Document { content, metadata }));
        }
        None
    }
}
