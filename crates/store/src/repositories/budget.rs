//! Budget repository: lifecycle, performance, and pre-save warnings.
//!
//! Transitions are planned by `centra_core::budget::LifecycleService` and
//! applied here under one write guard, so a revision's two halves (freeze
//! the source, insert the successor Draft) commit together. Every mutation
//! takes the version the caller last read; a mismatch means another writer
//! won the race and the caller must re-read.

use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use centra_core::budget::{
    performance, Budget, BudgetError, BudgetPerformance, BudgetStatus, ContributingDocument,
    CreateBudgetInput, CreateRevisionInput, LifecycleService, UpdateBudgetInput,
};
use centra_core::document::DocumentView;
use centra_core::warning::{self, BudgetWarning, DocumentDraft};
use centra_shared::types::{AccountId, BudgetId};
use centra_shared::EngineError;

use crate::store::{BudgetRecord, Store};

/// Errors raised by budget operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetRepoError {
    /// Budget does not exist.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// Target account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Target account is archived and cannot take new budgets.
    #[error("Account is archived: {0}")]
    AccountArchived(AccountId),

    /// The caller's version is stale; another writer committed first.
    #[error("Stale budget version: expected {expected}, stored {actual}")]
    Conflict {
        /// Version the caller presented.
        expected: u64,
        /// Version currently stored.
        actual: u64,
    },

    /// Domain validation or lifecycle error.
    #[error(transparent)]
    Budget(#[from] BudgetError),
}

impl From<BudgetRepoError> for EngineError {
    fn from(err: BudgetRepoError) -> Self {
        match &err {
            BudgetRepoError::NotFound(_) | BudgetRepoError::AccountNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            BudgetRepoError::AccountArchived(_) => Self::Validation(err.to_string()),
            BudgetRepoError::Conflict { .. } => Self::Conflict(err.to_string()),
            BudgetRepoError::Budget(inner) => match inner {
                BudgetError::InvalidTransition { .. } | BudgetError::ReadOnly => {
                    Self::InvalidTransition(err.to_string())
                }
                BudgetError::InvalidPeriod { .. }
                | BudgetError::NegativeLimit(_)
                | BudgetError::EmptyName => Self::Validation(err.to_string()),
            },
        }
    }
}

/// Repository for budgets with optimistic concurrency control.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    store: Store,
}

impl BudgetRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a Draft budget for a live account. New records start at
    /// version 1.
    ///
    /// # Errors
    ///
    /// Returns an account error for a missing or archived account, or a
    /// validation error from the lifecycle service.
    pub fn create(&self, input: &CreateBudgetInput) -> Result<BudgetRecord, BudgetRepoError> {
        let mut data = self.store.write();
        match data.accounts.get(&input.account_id) {
            None => return Err(BudgetRepoError::AccountNotFound(input.account_id)),
            Some(account) if account.archived => {
                return Err(BudgetRepoError::AccountArchived(input.account_id));
            }
            Some(_) => {}
        }

        let budget = LifecycleService::new_budget(input)?;
        let record = BudgetRecord { budget, version: 1 };
        data.budgets.insert(record.budget.id, record.clone());
        info!(
            budget_id = %record.budget.id,
            account_id = %record.budget.account_id,
            kind = %record.budget.kind,
            "budget created"
        );
        Ok(record)
    }

    /// Fetches a budget record (budget plus current version).
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`.
    pub fn get(&self, id: BudgetId) -> Result<BudgetRecord, BudgetRepoError> {
        self.store
            .read()
            .budgets
            .get(&id)
            .cloned()
            .ok_or(BudgetRepoError::NotFound(id))
    }

    /// Lists all budgets sorted by id (creation order under UUIDv7).
    #[must_use]
    pub fn list(&self) -> Vec<BudgetRecord> {
        let data = self.store.read();
        let mut records: Vec<BudgetRecord> = data.budgets.values().cloned().collect();
        records.sort_by_key(|r| r.budget.id);
        records
    }

    /// Lists budgets tracking one account, sorted by id.
    #[must_use]
    pub fn list_by_account(&self, account_id: AccountId) -> Vec<BudgetRecord> {
        let data = self.store.read();
        let mut records: Vec<BudgetRecord> = data
            .budgets
            .values()
            .filter(|r| r.budget.account_id == account_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.budget.id);
        records
    }

    /// Lists budgets in one lifecycle status, sorted by id.
    #[must_use]
    pub fn list_by_status(&self, status: BudgetStatus) -> Vec<BudgetRecord> {
        let data = self.store.read();
        let mut records: Vec<BudgetRecord> = data
            .budgets
            .values()
            .filter(|r| r.budget.status == status)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.budget.id);
        records
    }

    /// Returns a budget's full revision chain, root first then revisions in
    /// creation order. Works given any member of the chain.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`.
    pub fn revision_chain(&self, id: BudgetId) -> Result<Vec<BudgetRecord>, BudgetRepoError> {
        let data = self.store.read();
        let member = data.budgets.get(&id).ok_or(BudgetRepoError::NotFound(id))?;
        let root = member.budget.chain_root();

        let mut chain: Vec<BudgetRecord> = data
            .budgets
            .values()
            .filter(|r| r.budget.chain_root() == root)
            .cloned()
            .collect();
        chain.sort_by_key(|r| r.budget.id);
        Ok(chain)
    }

    /// Confirms a Draft budget.
    ///
    /// Confirming an already-Confirmed budget is a no-op: the record,
    /// including its version and timestamps, is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`, `BudgetRepoError::Conflict`, or
    /// an invalid-transition error from Revised or Archived.
    pub fn confirm(
        &self,
        id: BudgetId,
        expected_version: u64,
    ) -> Result<BudgetRecord, BudgetRepoError> {
        let mut data = self.store.write();
        let record = data
            .budgets
            .get_mut(&id)
            .ok_or(BudgetRepoError::NotFound(id))?;
        Self::check_version(record, expected_version)?;

        if let Some(next) = LifecycleService::confirm(record.budget.status)? {
            record.budget.status = next;
            record.budget.updated_at = Utc::now();
            record.version += 1;
            info!(budget_id = %id, "budget confirmed");
        }
        Ok(record.clone())
    }

    /// Revises a Confirmed budget: freezes it as Revised/read-only and
    /// inserts the successor Draft, atomically.
    ///
    /// Returns the updated source record and the successor's record.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`, `BudgetRepoError::Conflict`, an
    /// invalid-transition error unless the source is Confirmed, or a
    /// validation error for bad revision terms.
    pub fn create_revision(
        &self,
        id: BudgetId,
        expected_version: u64,
        input: &CreateRevisionInput,
    ) -> Result<(BudgetRecord, BudgetRecord), BudgetRepoError> {
        let mut data = self.store.write();
        let record = data
            .budgets
            .get_mut(&id)
            .ok_or(BudgetRepoError::NotFound(id))?;
        Self::check_version(record, expected_version)?;

        let plan = LifecycleService::plan_revision(&record.budget, input)?;
        record.budget.status = plan.source_status;
        record.budget.is_read_only = true;
        record.budget.updated_at = Utc::now();
        record.version += 1;
        let source = record.clone();

        let successor = BudgetRecord {
            budget: plan.successor,
            version: 1,
        };
        data.budgets.insert(successor.budget.id, successor.clone());
        info!(
            budget_id = %id,
            successor_id = %successor.budget.id,
            "budget revised"
        );
        Ok((source, successor))
    }

    /// Archives a Confirmed or Revised budget.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`, `BudgetRepoError::Conflict`, or
    /// an invalid-transition error from Draft or Archived.
    pub fn archive(
        &self,
        id: BudgetId,
        expected_version: u64,
    ) -> Result<BudgetRecord, BudgetRepoError> {
        let mut data = self.store.write();
        let record = data
            .budgets
            .get_mut(&id)
            .ok_or(BudgetRepoError::NotFound(id))?;
        Self::check_version(record, expected_version)?;

        record.budget.status = LifecycleService::archive(record.budget.status)?;
        record.budget.is_read_only = true;
        record.budget.updated_at = Utc::now();
        record.version += 1;
        info!(budget_id = %id, "budget archived");
        Ok(record.clone())
    }

    /// Edits a Draft budget's name, period, or limit in place.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`, `BudgetRepoError::Conflict`, a
    /// read-only error for non-Draft budgets, or a validation error.
    pub fn update(
        &self,
        id: BudgetId,
        expected_version: u64,
        input: &UpdateBudgetInput,
    ) -> Result<BudgetRecord, BudgetRepoError> {
        let mut data = self.store.write();
        let record = data
            .budgets
            .get_mut(&id)
            .ok_or(BudgetRepoError::NotFound(id))?;
        Self::check_version(record, expected_version)?;

        let (name, period, limit) = LifecycleService::validate_update(&record.budget, input)?;
        record.budget.name = name;
        record.budget.period = period;
        record.budget.limit = limit;
        record.budget.updated_at = Utc::now();
        record.version += 1;
        Ok(record.clone())
    }

    /// Computes the budget's performance against the live document feed.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`.
    pub fn performance(&self, id: BudgetId) -> Result<BudgetPerformance, BudgetRepoError> {
        let data = self.store.read();
        let record = data.budgets.get(&id).ok_or(BudgetRepoError::NotFound(id))?;
        Ok(performance::performance(
            &record.budget,
            data.documents.values(),
        ))
    }

    /// Lists the documents contributing to the budget's achieved amount.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::NotFound`.
    pub fn contributing_documents(
        &self,
        id: BudgetId,
    ) -> Result<Vec<ContributingDocument>, BudgetRepoError> {
        let data = self.store.read();
        let record = data.budgets.get(&id).ok_or(BudgetRepoError::NotFound(id))?;
        Ok(performance::contributing_documents(
            &record.budget,
            data.documents.values(),
        ))
    }

    /// Evaluates a draft document against the confirmed expense budgets,
    /// returning warnings keyed by draft line index.
    ///
    /// Runs against live data under one read guard; results must not be
    /// cached across saves.
    #[must_use]
    pub fn evaluate_document(&self, draft: &DocumentDraft) -> BTreeMap<usize, BudgetWarning> {
        let data = self.store.read();
        let budgets: Vec<&Budget> = data.budgets.values().map(|r| &r.budget).collect();
        let docs: Vec<DocumentView> = data.documents.values().cloned().collect();
        let warnings = warning::evaluate(draft, budgets, &docs[..]);
        if !warnings.is_empty() {
            debug!(
                source = %draft.source,
                warned_lines = warnings.len(),
                "draft exceeds budget"
            );
        }
        warnings
    }

    fn check_version(record: &BudgetRecord, expected: u64) -> Result<(), BudgetRepoError> {
        if record.version == expected {
            Ok(())
        } else {
            Err(BudgetRepoError::Conflict {
                expected,
                actual: record.version,
            })
        }
    }
}
