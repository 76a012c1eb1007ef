use serde::{Deserialize, Serialize};

/// A single processed page, ready for an indexing collaborator.
///
/// Immutable once yielded: the parser hands ownership to the consumer
/// and keeps no reference back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Cleaned page text. Never empty — pages that clean to the empty
    /// string are dropped before a Document is built.
    pub content: String,
    pub metadata: DocumentMetadata,
}

/// Metadata attached to every [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Stable content-addressed identity: digest of
    /// `"{file_hash}_{page_index}"` with the 0-based page index.
    /// Re-extracting an unmodified file yields identical ids, which lets
    /// a downstream store deduplicate on re-ingestion.
    pub id: String,
    /// Base name of the source file.
    pub filename: String,
    /// Absolute path to the source file at extraction time.
    pub file_path: String,
    /// 1-based page ordinal within the source file.
    pub page_number: usize,
    /// Hex digest of the entire file's bytes.
    pub file_hash: String,
}

impl Document {
    /// Base name of the source file this page came from.
    pub fn source_file(&self) -> &str {
        &self.metadata.filename
    }

    /// 1-based page number within the source file.
    pub fn page_number(&self) -> usize {
        self.metadata.page_number
    }
}
