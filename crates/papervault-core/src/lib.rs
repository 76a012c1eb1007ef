pub mod backend;
pub mod document;
pub mod hash;
pub mod mock;
pub mod sink;

// Re-export for convenience
pub use backend::{BackendError, PageSource, PdfBackend};
pub use document::{Document, DocumentMetadata};
pub use hash::{hash_file, hash_key, page_id};
pub use sink::{DocumentSink, SinkError};
