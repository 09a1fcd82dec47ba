//! Budget data types.

use centra_shared::types::{AccountId, BudgetId, DocumentId, Period};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::DocumentType;

/// Budget classification: whether the amount is a spending limit or a
/// revenue target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    /// Revenue target; achieved sums revenue-side documents.
    Income,
    /// Spending limit; achieved sums cost-side documents.
    Expense,
}

impl BudgetKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Returns true if documents of the given type count toward budgets of
    /// this kind.
    #[must_use]
    pub fn includes(&self, doc_type: DocumentType) -> bool {
        match self {
            Self::Income => doc_type.is_revenue_side(),
            Self::Expense => doc_type.is_cost_side(),
        }
    }
}

impl fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget status in the revision lifecycle.
///
/// Valid transitions:
/// - Draft → Confirmed (confirm)
/// - Confirmed → Revised (revise; spawns a successor Draft)
/// - Confirmed → Archived (archive)
/// - Revised → Archived (archive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Budget is being drafted and can be modified.
    Draft,
    /// Budget is live; finalized documents count toward it.
    Confirmed,
    /// Budget has been superseded by a revision (immutable).
    Revised,
    /// Budget has been archived (terminal, immutable).
    Archived,
}

impl BudgetStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirmed => "confirmed",
            Self::Revised => "revised",
            Self::Archived => "archived",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "confirmed" => Some(Self::Confirmed),
            "revised" => Some(Self::Revised),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    /// Returns true if the budget's fields can still be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the budget represents a limit that was binding at
    /// some point (included in reporting roll-ups).
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Revised)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A budget record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Analytical account this budget tracks.
    pub account_id: AccountId,
    /// Income target or expense limit.
    pub kind: BudgetKind,
    /// Period the budget covers (inclusive).
    pub period: Period,
    /// Limit (Expense) or target (Income) amount; never negative.
    pub limit: Decimal,
    /// Lifecycle status.
    pub status: BudgetStatus,
    /// Whether the budget is frozen (Revised and Archived budgets).
    pub is_read_only: bool,
    /// Root of the revision chain; `None` when this budget is the root.
    pub original_budget_id: Option<BudgetId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Returns the id of this budget's revision chain root.
    #[must_use]
    pub fn chain_root(&self) -> BudgetId {
        self.original_budget_id.unwrap_or(self.id)
    }
}

/// Input for creating a new budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetInput {
    /// Budget name.
    pub name: String,
    /// Account to track.
    pub account_id: AccountId,
    /// Income or Expense.
    pub kind: BudgetKind,
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Limit or target amount.
    pub limit: Decimal,
}

/// Input for the successor Draft created by a revision.
///
/// Account, name, and kind are always copied from the source budget; only
/// the period and amount may differ.
#[derive(Debug, Clone)]
pub struct CreateRevisionInput {
    /// First day of the successor's period.
    pub period_start: NaiveDate,
    /// Last day of the successor's period (inclusive).
    pub period_end: NaiveDate,
    /// Successor limit or target amount.
    pub limit: Decimal,
}

/// Input for updating a Draft budget.
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetInput {
    /// New name.
    pub name: Option<String>,
    /// New period start.
    pub period_start: Option<NaiveDate>,
    /// New period end.
    pub period_end: Option<NaiveDate>,
    /// New limit.
    pub limit: Option<Decimal>,
}

/// Budget performance metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPerformance {
    /// Sum of finalized line amounts within the period.
    pub achieved: Decimal,
    /// `limit - achieved`; negative when over budget.
    pub remaining: Decimal,
    /// `achieved / limit * 100`, rounded to 2 decimals; 0 for a zero limit.
    pub percent: Decimal,
    /// True for an Income budget whose achieved amount has reached the
    /// target. The presentation layer uses this to suggest archiving.
    pub meets_income_target: bool,
}

/// One document contributing to a budget's achieved amount (drill-down row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributingDocument {
    /// Document ID.
    pub document_id: DocumentId,
    /// Document type.
    pub doc_type: DocumentType,
    /// Human-readable reference.
    pub reference: String,
    /// Document date.
    pub date: NaiveDate,
    /// Amount this document contributed (sum of its matching lines).
    pub amount: Decimal,
    /// Counterparty display name, if known.
    pub counterparty: Option<String>,
}
