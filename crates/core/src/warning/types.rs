//! Warning evaluation types.

use centra_shared::types::{AccountId, BudgetId, DocumentId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::document::DocumentType;

/// A single line of a document being drafted.
#[derive(Debug, Clone)]
pub struct DraftLine {
    /// Analytical account the line is tagged with, if any. Lines without an
    /// account are ignored by warning evaluation.
    pub account_id: Option<AccountId>,
    /// Line amount.
    pub amount: Decimal,
}

/// A not-yet-confirmed cost-side document about to be saved.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    /// Source document type (purchase order or vendor bill).
    pub source: DocumentType,
    /// Identity of the document when editing an existing one; `None` for a
    /// new document. Used to exclude the document's own stored total from
    /// existing spend.
    pub document_id: Option<DocumentId>,
    /// Document date.
    pub date: NaiveDate,
    /// Draft lines in order; warnings are keyed by index into this vec.
    pub lines: Vec<DraftLine>,
}

/// Warning attached to a draft line whose account would exceed its budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetWarning {
    /// Budget that would be exceeded.
    pub budget_id: BudgetId,
    /// The budget's limit amount.
    pub limit: Decimal,
    /// Existing finalized spend plus this draft's lines for the account.
    pub projected: Decimal,
    /// Human-readable message referencing both amounts.
    pub message: String,
}
