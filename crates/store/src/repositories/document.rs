//! Document feed: the ingestion edge for transactional document views.
//!
//! Documents are owned by external collaborators; the engine only keeps a
//! read view of each one, replaced wholesale whenever the source changes
//! status or lines.

use thiserror::Error;
use tracing::debug;

use centra_core::document::{DocumentKey, DocumentView};
use centra_shared::EngineError;

use crate::store::Store;

/// Errors raised by document feed operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// No document is stored under the given key.
    #[error("Document not found: {} {}", .0.doc_type, .0.id)]
    NotFound(DocumentKey),
}

impl From<DocumentError> for EngineError {
    fn from(err: DocumentError) -> Self {
        Self::NotFound(err.to_string())
    }
}

/// Repository for document read views, keyed by `(type, id)`.
#[derive(Debug, Clone)]
pub struct DocumentFeed {
    store: Store,
}

impl DocumentFeed {
    /// Creates a feed over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Inserts or replaces a document view.
    pub fn upsert(&self, doc: DocumentView) {
        let key = doc.key();
        debug!(
            doc_type = %key.doc_type,
            document_id = %key.id,
            status = %doc.status,
            lines = doc.lines.len(),
            "document view upserted"
        );
        self.store.write().documents.insert(key, doc);
    }

    /// Removes a document view.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NotFound`.
    pub fn remove(&self, key: DocumentKey) -> Result<(), DocumentError> {
        self.store
            .write()
            .documents
            .remove(&key)
            .map(|_| ())
            .ok_or(DocumentError::NotFound(key))
    }

    /// Fetches a document view.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NotFound`.
    pub fn get(&self, key: DocumentKey) -> Result<DocumentView, DocumentError> {
        self.store
            .read()
            .documents
            .get(&key)
            .cloned()
            .ok_or(DocumentError::NotFound(key))
    }

    /// Lists all document views sorted by date then id.
    #[must_use]
    pub fn list(&self) -> Vec<DocumentView> {
        let data = self.store.read();
        let mut docs: Vec<DocumentView> = data.documents.values().cloned().collect();
        docs.sort_by(|a, b| (a.date, a.id).cmp(&(b.date, b.id)));
        docs
    }
}
