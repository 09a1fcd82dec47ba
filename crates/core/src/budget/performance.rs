//! Achieved/remaining/percent aggregation over document read views.
//!
//! A line contributes to a budget when all of the following hold: the line
//! carries the budget's account, the document date falls within the budget
//! period, the document status is finalized (confirmed or posted), and the
//! document type is on the budget's side. Expense budgets sum purchase-order
//! lines AND vendor-bill lines; when a bill is raised from its originating
//! purchase order with matching amounts, that spend counts twice. This
//! mirrors the behavior of the system being replaced and is kept on purpose;
//! counting bills only would need a PO-to-bill link the read view does not
//! carry.

use rust_decimal::Decimal;

use super::types::{Budget, BudgetKind, BudgetPerformance, ContributingDocument};
use crate::document::DocumentView;

/// Returns true if the document passes the budget's filter predicate
/// (side, finalized status, date in period). Line-level account matching is
/// applied separately.
#[must_use]
pub fn document_matches(budget: &Budget, doc: &DocumentView) -> bool {
    budget.kind.includes(doc.doc_type)
        && doc.status.is_finalized()
        && budget.period.contains(doc.date)
}

/// Sums the amounts a single document contributes to a budget.
fn document_amount(budget: &Budget, doc: &DocumentView) -> Decimal {
    doc.lines
        .iter()
        .filter(|line| line.account_id == Some(budget.account_id))
        .map(|line| line.amount)
        .sum()
}

/// Computes the achieved amount for a budget.
///
/// A budget with no matching lines yields zero; there are no error cases.
#[must_use]
pub fn achieved<'a, I>(budget: &Budget, docs: I) -> Decimal
where
    I: IntoIterator<Item = &'a DocumentView>,
{
    docs.into_iter()
        .filter(|doc| document_matches(budget, doc))
        .map(|doc| document_amount(budget, doc))
        .sum()
}

/// Computes the full performance report for a budget.
#[must_use]
pub fn performance<'a, I>(budget: &Budget, docs: I) -> BudgetPerformance
where
    I: IntoIterator<Item = &'a DocumentView>,
{
    let achieved = achieved(budget, docs);
    let remaining = budget.limit - achieved;
    let percent = if budget.limit.is_zero() {
        Decimal::ZERO
    } else {
        (achieved / budget.limit * Decimal::ONE_HUNDRED).round_dp(2)
    };
    let meets_income_target = budget.kind == BudgetKind::Income && achieved >= budget.limit;

    BudgetPerformance {
        achieved,
        remaining,
        percent,
        meets_income_target,
    }
}

/// Lists the documents contributing to a budget's achieved amount, grouped
/// per document (not per line), sorted by date then id for stable output.
///
/// Only documents with at least one matching line appear.
#[must_use]
pub fn contributing_documents<'a, I>(budget: &Budget, docs: I) -> Vec<ContributingDocument>
where
    I: IntoIterator<Item = &'a DocumentView>,
{
    let mut rows: Vec<ContributingDocument> = docs
        .into_iter()
        .filter(|doc| document_matches(budget, doc))
        .filter_map(|doc| {
            let matching = doc
                .lines
                .iter()
                .filter(|line| line.account_id == Some(budget.account_id))
                .count();
            if matching == 0 {
                return None;
            }
            Some(ContributingDocument {
                document_id: doc.id,
                doc_type: doc.doc_type,
                reference: doc.reference.clone(),
                date: doc.date,
                amount: document_amount(budget, doc),
                counterparty: doc.counterparty.clone(),
            })
        })
        .collect();

    rows.sort_by(|a, b| (a.date, a.document_id).cmp(&(b.date, b.document_id)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::types::BudgetStatus;
    use crate::document::{DocumentStatus, DocumentType, LineView};
    use centra_shared::types::{AccountId, BudgetId, DocumentId, Period};
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense_budget(account_id: AccountId, limit: Decimal) -> Budget {
        Budget {
            id: BudgetId::new(),
            name: "Office supplies".to_string(),
            account_id,
            kind: BudgetKind::Expense,
            period: Period::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap(),
            limit,
            status: BudgetStatus::Confirmed,
            is_read_only: false,
            original_budget_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn doc(
        doc_type: DocumentType,
        status: DocumentStatus,
        day: u32,
        lines: Vec<LineView>,
    ) -> DocumentView {
        DocumentView {
            id: DocumentId::new(),
            doc_type,
            reference: format!("{}-{day:04}", doc_type.as_str().to_uppercase()),
            counterparty: Some("ACME GmbH".to_string()),
            date: date(2026, 1, day),
            status,
            lines,
        }
    }

    fn line(account_id: AccountId, amount: Decimal) -> LineView {
        LineView {
            account_id: Some(account_id),
            amount,
        }
    }

    #[test]
    fn test_spec_scenario_vendor_bill_seventy_percent() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(1000.00));
        let bill = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            15,
            vec![line(account, dec!(700.00))],
        );

        let report = performance(&budget, [&bill]);
        assert_eq!(report.achieved, dec!(700.00));
        assert_eq!(report.remaining, dec!(300.00));
        assert_eq!(report.percent, dec!(70.00));
        assert!(!report.meets_income_target);
    }

    #[test]
    fn test_draft_and_cancelled_documents_do_not_count() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(100));
        let draft = doc(
            DocumentType::VendorBill,
            DocumentStatus::Draft,
            10,
            vec![line(account, dec!(40))],
        );
        let cancelled = doc(
            DocumentType::PurchaseOrder,
            DocumentStatus::Cancelled,
            12,
            vec![line(account, dec!(60))],
        );

        assert_eq!(achieved(&budget, [&draft, &cancelled]), dec!(0));
    }

    #[test]
    fn test_out_of_period_documents_do_not_count() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(100));
        let mut early = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            1,
            vec![line(account, dec!(40))],
        );
        early.date = date(2025, 12, 31);

        assert_eq!(achieved(&budget, [&early]), dec!(0));
    }

    #[test]
    fn test_expense_budget_counts_both_po_and_bill() {
        // Deliberate double count: a bill raised from its own PO sums twice.
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(1000));
        let po = doc(
            DocumentType::PurchaseOrder,
            DocumentStatus::Confirmed,
            10,
            vec![line(account, dec!(300))],
        );
        let bill = doc(
            DocumentType::VendorBill,
            DocumentStatus::Posted,
            20,
            vec![line(account, dec!(300))],
        );

        assert_eq!(achieved(&budget, [&po, &bill]), dec!(600));
    }

    #[test]
    fn test_expense_budget_ignores_revenue_documents() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(100));
        let invoice = doc(
            DocumentType::CustomerInvoice,
            DocumentStatus::Confirmed,
            10,
            vec![line(account, dec!(500))],
        );

        assert_eq!(achieved(&budget, [&invoice]), dec!(0));
    }

    #[test]
    fn test_other_account_lines_are_excluded() {
        let account = AccountId::new();
        let other = AccountId::new();
        let budget = expense_budget(account, dec!(100));
        let bill = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            10,
            vec![
                line(account, dec!(25)),
                line(other, dec!(1000)),
                LineView {
                    account_id: None,
                    amount: dec!(99),
                },
            ],
        );

        assert_eq!(achieved(&budget, [&bill]), dec!(25));
    }

    #[test]
    fn test_income_budget_meets_target() {
        let account = AccountId::new();
        let mut budget = expense_budget(account, dec!(500));
        budget.kind = BudgetKind::Income;

        let invoice = doc(
            DocumentType::CustomerInvoice,
            DocumentStatus::Posted,
            5,
            vec![line(account, dec!(500))],
        );

        let report = performance(&budget, [&invoice]);
        assert_eq!(report.achieved, dec!(500));
        assert_eq!(report.remaining, dec!(0));
        assert!(report.meets_income_target);
    }

    #[test]
    fn test_zero_limit_is_zero_percent_not_an_error() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(0));
        let bill = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            10,
            vec![line(account, dec!(50))],
        );

        let report = performance(&budget, [&bill]);
        assert_eq!(report.percent, dec!(0));
        assert_eq!(report.remaining, dec!(-50));
    }

    #[test]
    fn test_overrun_yields_negative_remaining() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(100));
        let bill = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            10,
            vec![line(account, dec!(150))],
        );

        let report = performance(&budget, [&bill]);
        assert_eq!(report.remaining, dec!(-50));
        assert_eq!(report.percent, dec!(150.00));
    }

    #[test]
    fn test_percent_rounds_to_two_decimals() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(300));
        let bill = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            10,
            vec![line(account, dec!(100))],
        );

        // 100 / 300 * 100 = 33.333... -> 33.33
        assert_eq!(performance(&budget, [&bill]).percent, dec!(33.33));
    }

    #[test]
    fn test_contributing_documents_groups_per_document() {
        let account = AccountId::new();
        let budget = expense_budget(account, dec!(1000));

        let two_lines = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            20,
            vec![line(account, dec!(100)), line(account, dec!(150))],
        );
        let po = doc(
            DocumentType::PurchaseOrder,
            DocumentStatus::Confirmed,
            5,
            vec![line(account, dec!(40))],
        );
        let unrelated = doc(
            DocumentType::VendorBill,
            DocumentStatus::Confirmed,
            8,
            vec![line(AccountId::new(), dec!(999))],
        );

        let rows = contributing_documents(&budget, [&two_lines, &po, &unrelated]);
        assert_eq!(rows.len(), 2);
        // Sorted by date: the PO (day 5) before the bill (day 20).
        assert_eq!(rows[0].document_id, po.id);
        assert_eq!(rows[0].amount, dec!(40));
        assert_eq!(rows[1].document_id, two_lines.id);
        assert_eq!(rows[1].amount, dec!(250));
        assert_eq!(rows[1].counterparty.as_deref(), Some("ACME GmbH"));
    }
}
