//! Property-based tests for budget performance aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use centra_shared::types::{AccountId, BudgetId, DocumentId, Period};
use chrono::{NaiveDate, Utc};

use crate::budget::performance::{achieved, performance};
use crate::budget::types::{Budget, BudgetKind, BudgetStatus};
use crate::document::{DocumentStatus, DocumentType, DocumentView, LineView};

const BUDGET_ACCOUNT: u128 = 7;

fn account_pool() -> impl Strategy<Value = Option<AccountId>> {
    prop_oneof![
        Just(None),
        Just(Some(AccountId::from_uuid(Uuid::from_u128(BUDGET_ACCOUNT)))),
        Just(Some(AccountId::from_uuid(Uuid::from_u128(99)))),
    ]
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_status() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Draft),
        Just(DocumentStatus::Confirmed),
        Just(DocumentStatus::Posted),
        Just(DocumentStatus::Cancelled),
    ]
}

fn arb_doc_type() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::PurchaseOrder),
        Just(DocumentType::VendorBill),
        Just(DocumentType::SalesOrder),
        Just(DocumentType::CustomerInvoice),
    ]
}

fn arb_line() -> impl Strategy<Value = LineView> {
    (account_pool(), arb_amount()).prop_map(|(account_id, amount)| LineView { account_id, amount })
}

prop_compose! {
    fn arb_doc()(
        doc_type in arb_doc_type(),
        status in arb_status(),
        day in 1u32..60,
        lines in proptest::collection::vec(arb_line(), 0..5),
    ) -> DocumentView {
        // Days 1-31 fall inside the January budget period, 32-59 outside.
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
            + chrono::Days::new(u64::from(day - 1));
        DocumentView {
            id: DocumentId::new(),
            doc_type,
            reference: format!("DOC-{day:04}"),
            counterparty: None,
            date,
            status,
            lines,
        }
    }
}

fn budget(kind: BudgetKind, limit: Decimal) -> Budget {
    Budget {
        id: BudgetId::new(),
        name: "prop".to_string(),
        account_id: AccountId::from_uuid(Uuid::from_u128(BUDGET_ACCOUNT)),
        kind,
        period: Period::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        )
        .unwrap(),
        limit,
        status: BudgetStatus::Confirmed,
        is_read_only: false,
        original_budget_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// remaining = limit - achieved holds for arbitrary document sets, and
    /// achieved is never negative for non-negative line amounts.
    #[test]
    fn prop_remaining_is_limit_minus_achieved(
        docs in proptest::collection::vec(arb_doc(), 0..10),
        limit in arb_amount(),
    ) {
        let budget = budget(BudgetKind::Expense, limit);
        let report = performance(&budget, docs.iter());

        prop_assert_eq!(report.remaining, budget.limit - report.achieved);
        prop_assert!(report.achieved >= Decimal::ZERO);
    }

    /// Adding one more document never decreases the achieved amount.
    #[test]
    fn prop_achieved_is_monotone_in_documents(
        docs in proptest::collection::vec(arb_doc(), 0..10),
        extra in arb_doc(),
    ) {
        let budget = budget(BudgetKind::Expense, Decimal::ONE_HUNDRED);
        let without = achieved(&budget, docs.iter());
        let with = achieved(&budget, docs.iter().chain(std::iter::once(&extra)));
        prop_assert!(with >= without);
    }

    /// Income and expense budgets partition the document types: no document
    /// ever counts toward both kinds.
    #[test]
    fn prop_sides_are_disjoint(docs in proptest::collection::vec(arb_doc(), 0..10)) {
        let expense = budget(BudgetKind::Expense, Decimal::ONE_HUNDRED);
        let income = budget(BudgetKind::Income, Decimal::ONE_HUNDRED);

        for doc in &docs {
            let in_expense = achieved(&expense, [doc]) > Decimal::ZERO;
            let in_income = achieved(&income, [doc]) > Decimal::ZERO;
            prop_assert!(!(in_expense && in_income));
        }
    }

    /// Zero-limit budgets always report 0 percent, whatever the spend.
    #[test]
    fn prop_zero_limit_percent_is_zero(docs in proptest::collection::vec(arb_doc(), 0..10)) {
        let budget = budget(BudgetKind::Expense, Decimal::ZERO);
        let report = performance(&budget, docs.iter());
        prop_assert_eq!(report.percent, Decimal::ZERO);
    }
}
