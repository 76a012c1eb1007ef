//! File-backed stand-in for the real vector-store collaborator.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use papervault_core::{Document, DocumentSink, SinkError};

/// Writes one JSON object per Document, append-style within a run.
///
/// A real deployment would upsert into a vector store keyed on
/// `metadata.id`; JSONL keeps the seam observable without dragging an
/// embedding service into the CLI.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl DocumentSink for JsonlSink {
    fn add_documents(&mut self, docs: &[Document]) -> Result<(), SinkError> {
        for doc in docs {
            serde_json::to_writer(&mut self.writer, doc)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papervault_core::DocumentMetadata;

    fn doc(id: &str, page: usize) -> Document {
        Document {
            content: format!("page {page} content"),
            metadata: DocumentMetadata {
                id: id.to_string(),
                filename: "paper.pdf".to_string(),
                file_path: "/data/paper.pdf".to_string(),
                page_number: page,
                file_hash: "abc123".to_string(),
            },
        }
    }

    #[test]
    fn writes_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut sink = JsonlSink::create(&path).unwrap();
        sink.add_documents(&[doc("id-one", 1), doc("id-two", 2)])
            .unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Document = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.metadata.id, "id-one");
        let second: Document = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.metadata.page_number, 2);
    }
}
