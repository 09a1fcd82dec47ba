//! Budget lifecycle and performance tracking.
//!
//! A budget is a limit (Expense) or target (Income) for one analytical
//! account over a fixed period. Budgets move Draft → Confirmed → Revised →
//! Archived; revising a confirmed budget freezes it and spawns a successor
//! Draft that points at the root of the revision chain.
//!
//! # Modules
//!
//! - `types` - Budget entity, statuses, kinds, inputs, performance report
//! - `error` - Budget-specific error types
//! - `lifecycle` - Pure state-transition planning
//! - `performance` - Achieved/remaining/percent aggregation over documents

pub mod error;
pub mod lifecycle;
pub mod performance;
pub mod types;

#[cfg(test)]
mod performance_props;

pub use error::BudgetError;
pub use lifecycle::{LifecycleService, RevisionPlan};
pub use types::{
    Budget, BudgetKind, BudgetPerformance, BudgetStatus, ContributingDocument, CreateBudgetInput,
    CreateRevisionInput, UpdateBudgetInput,
};
