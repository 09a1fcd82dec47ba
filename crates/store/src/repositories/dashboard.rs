//! Dashboard roll-up over the live dataset.

use centra_core::account::AnalyticalAccount;
use centra_core::budget::Budget;
use centra_core::dashboard::{self, DashboardSummary};
use centra_core::document::DocumentView;
use centra_shared::types::Period;

use crate::store::Store;

/// Read-only repository producing the dashboard summary.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    store: Store,
}

impl DashboardRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Rolls budget performance up per account and kind for a window.
    ///
    /// One consistent snapshot: budgets, accounts, and documents are read
    /// under a single guard.
    #[must_use]
    pub fn summary(&self, window: Period) -> DashboardSummary {
        let data = self.store.read();
        let budgets: Vec<Budget> = data.budgets.values().map(|r| r.budget.clone()).collect();
        let accounts: Vec<AnalyticalAccount> = data.accounts.values().cloned().collect();
        let docs: Vec<DocumentView> = data.documents.values().cloned().collect();
        dashboard::summarize(window, &budgets, &accounts, &docs)
    }
}
