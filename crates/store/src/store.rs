//! The in-memory dataset behind every repository.
//!
//! One `RwLock` guards the whole dataset: each repository operation takes
//! the guard once, so a multi-entity mutation (revision creation) commits
//! atomically or not at all. Optimistic versioning on budgets makes the
//! read-validate-write race observable to callers that held a stale read.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use centra_core::account::AnalyticalAccount;
use centra_core::assignment::AssignmentRule;
use centra_core::budget::Budget;
use centra_core::document::{DocumentKey, DocumentView};
use centra_shared::types::{AccountId, BudgetId, RuleId};

/// A budget plus its optimistic-concurrency version.
///
/// Mutating operations require the version the caller last read; a mismatch
/// means another writer got there first.
#[derive(Debug, Clone)]
pub struct BudgetRecord {
    /// The budget.
    pub budget: Budget,
    /// Version incremented on every successful mutation.
    pub version: u64,
}

/// The complete engine dataset.
#[derive(Debug, Default)]
pub(crate) struct Dataset {
    pub(crate) accounts: HashMap<AccountId, AnalyticalAccount>,
    pub(crate) rules: HashMap<RuleId, AssignmentRule>,
    pub(crate) budgets: HashMap<BudgetId, BudgetRecord>,
    pub(crate) documents: HashMap<DocumentKey, DocumentView>,
}

/// Cloneable handle to the shared dataset.
///
/// Every repository holds one, in the role a database connection handle
/// would otherwise play.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Dataset>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the shared read guard.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes the exclusive write guard; one logical unit of work per guard.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Dataset> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
