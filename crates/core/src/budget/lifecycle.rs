//! Pure state-transition planning for the budget lifecycle.
//!
//! This module validates and plans transitions without touching storage;
//! the repository layer applies the returned values atomically. The state
//! machine:
//!
//! - Draft → Confirmed (confirm; idempotent when already Confirmed)
//! - Confirmed → Revised + successor Draft (revise)
//! - Confirmed → Archived (archive)
//! - Revised → Archived (archive)
//!
//! Draft budgets cannot be archived directly and neither Draft nor Archived
//! budgets can be revised.

use chrono::Utc;
use rust_decimal::Decimal;

use centra_shared::types::{BudgetId, Period};

use super::error::BudgetError;
use super::types::{
    Budget, BudgetStatus, CreateBudgetInput, CreateRevisionInput, UpdateBudgetInput,
};

/// The atomic effect of revising a confirmed budget.
///
/// The repository must apply both halves in one unit of work: flip the
/// source to Revised/read-only and insert the successor Draft.
#[derive(Debug, Clone)]
pub struct RevisionPlan {
    /// New status for the source budget.
    pub source_status: BudgetStatus,
    /// The successor Draft, already pointing at the chain root.
    pub successor: Budget,
}

/// Stateless service for budget lifecycle transitions.
pub struct LifecycleService;

impl LifecycleService {
    /// Builds a new Draft budget from validated input.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EmptyName`, `BudgetError::InvalidPeriod`, or
    /// `BudgetError::NegativeLimit` when the input fails validation.
    pub fn new_budget(input: &CreateBudgetInput) -> Result<Budget, BudgetError> {
        if input.name.trim().is_empty() {
            return Err(BudgetError::EmptyName);
        }
        let period = Self::validate_terms(input.period_start, input.period_end, input.limit)?;

        let now = Utc::now();
        Ok(Budget {
            id: BudgetId::new(),
            name: input.name.trim().to_string(),
            account_id: input.account_id,
            kind: input.kind,
            period,
            limit: input.limit,
            status: BudgetStatus::Draft,
            is_read_only: false,
            original_budget_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Plans confirming a budget.
    ///
    /// Returns `Ok(Some(Confirmed))` from Draft and `Ok(None)` when the
    /// budget is already Confirmed (idempotent no-op; the caller must not
    /// touch the record, not even its timestamp).
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidTransition` from Revised or Archived.
    pub fn confirm(current: BudgetStatus) -> Result<Option<BudgetStatus>, BudgetError> {
        match current {
            BudgetStatus::Draft => Ok(Some(BudgetStatus::Confirmed)),
            BudgetStatus::Confirmed => Ok(None),
            BudgetStatus::Revised | BudgetStatus::Archived => {
                Err(BudgetError::InvalidTransition {
                    from: current,
                    to: BudgetStatus::Confirmed,
                })
            }
        }
    }

    /// Plans revising a confirmed budget.
    ///
    /// The successor Draft copies the source's account, name, and kind and
    /// points at the root of the revision chain, never at an intermediate
    /// revision.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidTransition` unless the source is
    /// Confirmed, or a validation error for bad revision terms.
    pub fn plan_revision(
        source: &Budget,
        input: &CreateRevisionInput,
    ) -> Result<RevisionPlan, BudgetError> {
        if source.status != BudgetStatus::Confirmed {
            return Err(BudgetError::InvalidTransition {
                from: source.status,
                to: BudgetStatus::Revised,
            });
        }
        let period = Self::validate_terms(input.period_start, input.period_end, input.limit)?;

        let now = Utc::now();
        let successor = Budget {
            id: BudgetId::new(),
            name: source.name.clone(),
            account_id: source.account_id,
            kind: source.kind,
            period,
            limit: input.limit,
            status: BudgetStatus::Draft,
            is_read_only: false,
            original_budget_id: Some(source.chain_root()),
            created_at: now,
            updated_at: now,
        };

        Ok(RevisionPlan {
            source_status: BudgetStatus::Revised,
            successor,
        })
    }

    /// Plans archiving a budget.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidTransition` unless the budget is
    /// Confirmed or Revised.
    pub fn archive(current: BudgetStatus) -> Result<BudgetStatus, BudgetError> {
        match current {
            BudgetStatus::Confirmed | BudgetStatus::Revised => Ok(BudgetStatus::Archived),
            BudgetStatus::Draft | BudgetStatus::Archived => Err(BudgetError::InvalidTransition {
                from: current,
                to: BudgetStatus::Archived,
            }),
        }
    }

    /// Validates an in-place edit and returns the budget's new terms.
    ///
    /// Only Draft budgets are editable.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ReadOnly` for read-only or non-Draft budgets,
    /// or a validation error for bad terms.
    pub fn validate_update(
        budget: &Budget,
        input: &UpdateBudgetInput,
    ) -> Result<(String, Period, Decimal), BudgetError> {
        if budget.is_read_only || !budget.status.is_editable() {
            return Err(BudgetError::ReadOnly);
        }

        let name = match &input.name {
            Some(name) if name.trim().is_empty() => return Err(BudgetError::EmptyName),
            Some(name) => name.trim().to_string(),
            None => budget.name.clone(),
        };
        let start = input.period_start.unwrap_or(budget.period.start);
        let end = input.period_end.unwrap_or(budget.period.end);
        let limit = input.limit.unwrap_or(budget.limit);
        let period = Self::validate_terms(start, end, limit)?;

        Ok((name, period, limit))
    }

    /// Check if a status transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: BudgetStatus, to: BudgetStatus) -> bool {
        matches!(
            (from, to),
            (BudgetStatus::Draft, BudgetStatus::Confirmed)
                | (
                    BudgetStatus::Confirmed,
                    BudgetStatus::Revised | BudgetStatus::Archived
                )
                | (BudgetStatus::Revised, BudgetStatus::Archived)
        )
    }

    fn validate_terms(
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
        limit: Decimal,
    ) -> Result<Period, BudgetError> {
        let period =
            Period::new(start, end).map_err(|_| BudgetError::InvalidPeriod { start, end })?;
        if limit < Decimal::ZERO {
            return Err(BudgetError::NegativeLimit(limit));
        }
        Ok(period)
    }
}
