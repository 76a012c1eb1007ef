//! The seam between extraction and whatever stores the result.

use thiserror::Error;

use crate::document::Document;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An indexing collaborator that receives finished [`Document`]s.
///
/// Implementors own persistence and any embedding calls; the extraction
/// pipeline only guarantees that `metadata.id` is a stable primary key
/// suitable for upsert-style deduplication.
pub trait DocumentSink {
    fn add_documents(&mut self, docs: &[Document]) -> Result<(), SinkError>;
}
