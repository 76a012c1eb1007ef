//! Mock extraction backend for testing.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PageSource, PdfBackend};

/// A configurable per-page response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockPage {
    /// Simulate a page that extracts to the given raw text.
    Text(String),
    /// Simulate a per-page extraction failure.
    Error(String),
}

impl MockPage {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Supports:
/// - A fixed page script (one [`MockPage`] per physical page).
/// - Optional open failure, to simulate a corrupt document.
/// - Open-handle counting via [`open_handles()`](MockBackend::open_handles):
///   incremented when a source is opened, decremented when it is dropped.
///   Lets tests assert the release-on-exit contract.
/// - Open-call counting via [`open_calls()`](MockBackend::open_calls):
///   total `open()` attempts, successful or not. Lets tests assert that
///   path validation rejects a file before any open is attempted.
#[derive(Default)]
pub struct MockBackend {
    pages: Vec<MockPage>,
    fail_open: Option<String>,
    open_handles: Arc<AtomicUsize>,
    open_calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Create a mock whose document has exactly `pages`.
    pub fn new(pages: Vec<MockPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Create a mock whose `open()` always fails with `message`.
    pub fn failing_open(message: impl Into<String>) -> Self {
        Self {
            fail_open: Some(message.into()),
            ..Self::default()
        }
    }

    /// How many document handles are currently open.
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }

    /// Shared handle counter, for asserting release after the backend
    /// itself has been moved into a parser.
    pub fn handle_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.open_handles)
    }

    /// How many times `open()` has been called, including failed opens.
    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }

    /// Shared open-call counter, for asserting no open was attempted
    /// after the backend has been moved into a parser.
    pub fn open_call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.open_calls)
    }
}

impl PdfBackend for MockBackend {
    fn open(&self, _path: &Path) -> Result<Box<dyn PageSource>, BackendError> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.fail_open {
            return Err(BackendError::OpenError(msg.clone()));
        }
        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSource {
            pages: self.pages.clone(),
            open_handles: Arc::clone(&self.open_handles),
        }))
    }
}

struct MockSource {
    pages: Vec<MockPage>,
    open_handles: Arc<AtomicUsize>,
}

impl PageSource for MockSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&mut self, index: usize) -> Result<String, BackendError> {
        match self.pages.get(index) {
            Some(MockPage::Text(text)) => Ok(text.clone()),
            Some(MockPage::Error(msg)) => Err(BackendError::extraction(index, msg.clone())),
            None => Err(BackendError::extraction(index, "page index out of range")),
        }
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn open_and_drop_balance_the_handle_count() {
        let backend = MockBackend::new(vec![MockPage::text("hello")]);
        assert_eq!(backend.open_handles(), 0);

        let source = backend.open(&PathBuf::from("whatever.pdf")).unwrap();
        assert_eq!(backend.open_handles(), 1);

        drop(source);
        assert_eq!(backend.open_handles(), 0);
    }

    #[test]
    fn failing_open_leaves_no_handle_but_counts_the_call() {
        let backend = MockBackend::failing_open("not a pdf");
        let err = backend.open(&PathBuf::from("bad.pdf")).unwrap_err();
        assert!(matches!(err, BackendError::OpenError(_)));
        assert_eq!(backend.open_handles(), 0);
        assert_eq!(backend.open_calls(), 1);
    }

    #[test]
    fn scripted_pages_play_back_in_order() {
        let backend = MockBackend::new(vec![
            MockPage::text("one"),
            MockPage::Error("torn page".to_string()),
        ]);
        let mut source = backend.open(&PathBuf::from("doc.pdf")).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.page_text(0).unwrap(), "one");
        assert!(source.page_text(1).is_err());
    }
}
