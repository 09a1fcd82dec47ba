//! Read-only projection of transactional documents.
//!
//! Purchase orders, vendor bills, sales orders, and customer invoices are
//! owned by external collaborators. The engine only consumes the uniform
//! read view defined here: a tagged document type plus date, status, and
//! account-tagged line amounts.

pub mod types;

pub use types::{DocumentKey, DocumentStatus, DocumentType, DocumentView, LineView};
