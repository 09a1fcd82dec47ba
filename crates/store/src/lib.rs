//! In-memory store and service boundary for Centra.
//!
//! This crate owns the dataset and exposes repositories over it; all domain
//! logic lives in `centra-core`. The `BudgetEngine` facade bundles the
//! repositories over one shared store and is the type an application embeds.
//!
//! # Example
//!
//! ```
//! use centra_store::BudgetEngine;
//! use centra_core::account::CreateAccountInput;
//!
//! let engine = BudgetEngine::new();
//! let account = engine.accounts().create(&CreateAccountInput {
//!     name: "Operations".to_string(),
//!     description: None,
//! })?;
//! assert!(!account.archived);
//! # Ok::<(), centra_store::repositories::AccountError>(())
//! ```

pub mod repositories;
pub mod store;

pub use repositories::{
    AccountError, AccountRepository, BudgetRepoError, BudgetRepository, DashboardRepository,
    DocumentError, DocumentFeed, RuleError, RuleRepository,
};
pub use store::{BudgetRecord, Store};

/// The assembled engine: every repository over one shared store.
///
/// Cloning is cheap and clones share the dataset.
#[derive(Debug, Clone)]
pub struct BudgetEngine {
    accounts: AccountRepository,
    rules: RuleRepository,
    budgets: BudgetRepository,
    documents: DocumentFeed,
    dashboard: DashboardRepository,
}

impl BudgetEngine {
    /// Creates an engine over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Creates an engine over an existing store.
    #[must_use]
    pub fn with_store(store: Store) -> Self {
        Self {
            accounts: AccountRepository::new(store.clone()),
            rules: RuleRepository::new(store.clone()),
            budgets: BudgetRepository::new(store.clone()),
            documents: DocumentFeed::new(store.clone()),
            dashboard: DashboardRepository::new(store),
        }
    }

    /// Analytical account registry.
    #[must_use]
    pub fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    /// Assignment rules and resolution.
    #[must_use]
    pub fn rules(&self) -> &RuleRepository {
        &self.rules
    }

    /// Budget lifecycle, performance, and warnings.
    #[must_use]
    pub fn budgets(&self) -> &BudgetRepository {
        &self.budgets
    }

    /// Document view ingestion.
    #[must_use]
    pub fn documents(&self) -> &DocumentFeed {
        &self.documents
    }

    /// Reporting roll-ups.
    #[must_use]
    pub fn dashboard(&self) -> &DashboardRepository {
        &self.dashboard
    }
}

impl Default for BudgetEngine {
    fn default() -> Self {
        Self::new()
    }
}
