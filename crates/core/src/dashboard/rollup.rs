//! Roll-up of budget performance across accounts and a time window.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use centra_shared::types::{AccountId, Period};

use super::types::{AccountRollup, DashboardSummary, RollupTotals};
use crate::account::AnalyticalAccount;
use crate::budget::performance;
use crate::budget::types::{Budget, BudgetKind};
use crate::document::DocumentView;

/// Rolls budget performance up per account and kind for a window.
///
/// Budgets participate when they are reportable (Confirmed or Revised) and
/// their period overlaps the window. Each budget's achieved amount uses its
/// own period filter, exactly as `ComputeBudgetPerformance` would report it.
#[must_use]
pub fn summarize(
    window: Period,
    budgets: &[Budget],
    accounts: &[AnalyticalAccount],
    docs: &[DocumentView],
) -> DashboardSummary {
    let mut rows: BTreeMap<(AccountId, BudgetKind), AccountRollup> = BTreeMap::new();
    let mut income = RollupTotals::zero();
    let mut expense = RollupTotals::zero();

    for budget in budgets {
        if !budget.status.is_reportable() || !budget.period.overlaps(&window) {
            continue;
        }

        let report = performance::performance(budget, docs);
        let row = rows
            .entry((budget.account_id, budget.kind))
            .or_insert_with(|| AccountRollup {
                account_id: budget.account_id,
                account_name: accounts
                    .iter()
                    .find(|a| a.id == budget.account_id)
                    .map(|a| a.name.clone()),
                kind: budget.kind,
                budget_count: 0,
                total_limit: Decimal::ZERO,
                total_achieved: Decimal::ZERO,
                total_remaining: Decimal::ZERO,
                percent: Decimal::ZERO,
            });

        row.budget_count += 1;
        row.total_limit += budget.limit;
        row.total_achieved += report.achieved;

        let totals = match budget.kind {
            BudgetKind::Income => &mut income,
            BudgetKind::Expense => &mut expense,
        };
        totals.budget_count += 1;
        totals.total_limit += budget.limit;
        totals.total_achieved += report.achieved;
    }

    let mut accounts_out: Vec<AccountRollup> = rows.into_values().collect();
    for row in &mut accounts_out {
        row.total_remaining = row.total_limit - row.total_achieved;
        row.percent = utilization(row.total_achieved, row.total_limit);
    }
    finish(&mut income);
    finish(&mut expense);

    DashboardSummary {
        window,
        accounts: accounts_out,
        income,
        expense,
    }
}

fn finish(totals: &mut RollupTotals) {
    totals.total_remaining = totals.total_limit - totals.total_achieved;
    totals.percent = utilization(totals.total_achieved, totals.total_limit);
}

fn utilization(achieved: Decimal, limit: Decimal) -> Decimal {
    if limit.is_zero() {
        Decimal::ZERO
    } else {
        (achieved / limit * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
