//! Pre-save budget overrun evaluation.
//!
//! Before a cost-side document draft is saved, each affected account's
//! confirmed budget is checked: existing finalized spend plus the draft's
//! own lines must not exceed the limit, or every line of that account gets
//! a warning attached. Evaluation is read-only and must run against live
//! data at save time; results are never cached.

pub mod evaluator;
pub mod types;

pub use evaluator::evaluate;
pub use types::{BudgetWarning, DocumentDraft, DraftLine};
