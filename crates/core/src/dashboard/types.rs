//! Dashboard roll-up types.

use centra_shared::types::{AccountId, Period};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetKind;

/// Aggregated performance for one account and budget kind within a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRollup {
    /// Account ID.
    pub account_id: AccountId,
    /// Account name at the time of the roll-up, if the account is known.
    pub account_name: Option<String>,
    /// Income or Expense.
    pub kind: BudgetKind,
    /// Number of budgets rolled into this row.
    pub budget_count: usize,
    /// Sum of the budgets' limits.
    pub total_limit: Decimal,
    /// Sum of the budgets' achieved amounts.
    pub total_achieved: Decimal,
    /// `total_limit - total_achieved`.
    pub total_remaining: Decimal,
    /// `total_achieved / total_limit * 100` rounded to 2 decimals; 0 when
    /// the total limit is zero.
    pub percent: Decimal,
}

/// Kind-wide totals across all accounts in the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupTotals {
    /// Number of budgets rolled up.
    pub budget_count: usize,
    /// Sum of limits.
    pub total_limit: Decimal,
    /// Sum of achieved amounts.
    pub total_achieved: Decimal,
    /// `total_limit - total_achieved`.
    pub total_remaining: Decimal,
    /// Overall utilization percent (zero-guarded, 2 decimals).
    pub percent: Decimal,
}

impl RollupTotals {
    /// An empty roll-up.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            budget_count: 0,
            total_limit: Decimal::ZERO,
            total_achieved: Decimal::ZERO,
            total_remaining: Decimal::ZERO,
            percent: Decimal::ZERO,
        }
    }
}

/// Dashboard summary for a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The reporting window.
    pub window: Period,
    /// Per-account, per-kind rows, sorted by account id then kind.
    pub accounts: Vec<AccountRollup>,
    /// Totals over income budgets.
    pub income: RollupTotals,
    /// Totals over expense budgets.
    pub expense: RollupTotals,
}
