//! Budget-specific error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::BudgetStatus;

/// Errors raised by budget validation and lifecycle transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Requested transition is not allowed from the current status.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: BudgetStatus,
        /// Requested status.
        to: BudgetStatus,
    },

    /// Budget period end precedes its start.
    #[error("Budget period end {end} precedes start {start}")]
    InvalidPeriod {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Budget limit is negative.
    #[error("Budget limit cannot be negative: {0}")]
    NegativeLimit(Decimal),

    /// Budget name is empty or whitespace.
    #[error("Budget name cannot be empty")]
    EmptyName,

    /// Budget is read-only and cannot be modified.
    #[error("Budget is read-only")]
    ReadOnly,
}
