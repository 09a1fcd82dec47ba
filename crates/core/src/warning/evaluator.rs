//! Projected-overrun evaluation for draft documents.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use centra_shared::types::AccountId;

use super::types::{BudgetWarning, DocumentDraft, DraftLine};
use crate::budget::types::{Budget, BudgetKind, BudgetStatus};
use crate::document::DocumentView;

/// Evaluates a draft document against the confirmed expense budgets.
///
/// Returns a map from line index to warning. For each account appearing on
/// the draft, candidate budgets (Confirmed, Expense kind, matching account,
/// period containing the draft date) are checked in id order; the first
/// budget whose limit the projected spend strictly exceeds warns every line
/// of that account. Projected spend equal to the limit produces no warning.
///
/// Existing spend excludes any stored document with the draft's own
/// `(source, document_id)` identity, so editing a document in place never
/// double-counts its previously saved total.
#[must_use]
pub fn evaluate<'a, B, D>(
    draft: &DocumentDraft,
    budgets: B,
    docs: D,
) -> BTreeMap<usize, BudgetWarning>
where
    B: IntoIterator<Item = &'a Budget>,
    D: IntoIterator<Item = &'a DocumentView> + Copy,
{
    let mut warnings = BTreeMap::new();
    if !draft.source.is_cost_side() {
        return warnings;
    }

    // Draft lines grouped by account; account-less lines are ignored.
    let mut draft_totals: BTreeMap<AccountId, Decimal> = BTreeMap::new();
    for line in &draft.lines {
        if let Some(account_id) = line.account_id {
            *draft_totals.entry(account_id).or_default() += line.amount;
        }
    }
    if draft_totals.is_empty() {
        return warnings;
    }

    let mut candidates: Vec<&Budget> = budgets
        .into_iter()
        .filter(|b| {
            b.kind == BudgetKind::Expense
                && b.status == BudgetStatus::Confirmed
                && b.period.contains(draft.date)
                && draft_totals.contains_key(&b.account_id)
        })
        .collect();
    candidates.sort_by_key(|b| b.id);

    let mut warned: BTreeMap<AccountId, BudgetWarning> = BTreeMap::new();
    for budget in candidates {
        if warned.contains_key(&budget.account_id) {
            continue;
        }
        let existing = existing_spend(budget, draft, docs);
        let projected = existing + draft_totals[&budget.account_id];
        if projected > budget.limit {
            warned.insert(
                budget.account_id,
                BudgetWarning {
                    budget_id: budget.id,
                    limit: budget.limit,
                    projected,
                    message: format!(
                        "Projected spend {projected} exceeds budget '{}' limit {}",
                        budget.name, budget.limit
                    ),
                },
            );
        }
    }

    for (index, line) in draft.lines.iter().enumerate() {
        if let Some(account_id) = line.account_id
            && let Some(warning) = warned.get(&account_id)
        {
            warnings.insert(index, warning.clone());
        }
    }

    warnings
}

/// Existing finalized cost-side spend for the budget's account and period,
/// excluding the document currently being evaluated.
fn existing_spend<'a, D>(budget: &Budget, draft: &DocumentDraft, docs: D) -> Decimal
where
    D: IntoIterator<Item = &'a DocumentView>,
{
    docs.into_iter()
        .filter(|doc| {
            doc.doc_type.is_cost_side()
                && doc.status.is_finalized()
                && budget.period.contains(doc.date)
                && !(doc.doc_type == draft.source && Some(doc.id) == draft.document_id)
        })
        .flat_map(|doc| &doc.lines)
        .filter(|line| line.account_id == Some(budget.account_id))
        .map(|line| line.amount)
        .sum()
}

/// Sums a draft's lines for one account. Exposed for diagnostics.
#[must_use]
pub fn draft_total(lines: &[DraftLine], account_id: AccountId) -> Decimal {
    lines
        .iter()
        .filter(|line| line.account_id == Some(account_id))
        .map(|line| line.amount)
        .sum()
}
