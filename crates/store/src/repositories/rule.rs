//! Assignment rule repository and resolution entry point.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use centra_core::assignment::{
    self, AssignmentRule, CreateRuleInput, ResolveRequest, RuleStatus, UpdateRuleInput,
};
use centra_shared::types::{AccountId, RuleId};
use centra_shared::EngineError;

use crate::store::Store;

/// Errors raised by rule operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// Rule does not exist.
    #[error("Assignment rule not found: {0}")]
    NotFound(RuleId),

    /// Target account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Target account is archived and hidden from new assignment.
    #[error("Account is archived: {0}")]
    AccountArchived(AccountId),

    /// Only Draft rules can be edited.
    #[error("Rule is {0} and can no longer be edited")]
    NotEditable(RuleStatus),

    /// Requested transition is not allowed from the current status.
    #[error("Invalid rule transition from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: RuleStatus,
        /// Requested status.
        to: RuleStatus,
    },
}

impl From<RuleError> for EngineError {
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::NotFound(_) | RuleError::AccountNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            RuleError::AccountArchived(_) => Self::Validation(err.to_string()),
            RuleError::NotEditable(_) | RuleError::InvalidTransition { .. } => {
                Self::InvalidTransition(err.to_string())
            }
        }
    }
}

/// Repository for assignment rules.
///
/// Rules are born Draft, go live on confirm, and retire on archive. Only
/// live (Confirmed, non-archived) rules participate in resolution.
#[derive(Debug, Clone)]
pub struct RuleRepository {
    store: Store,
}

impl RuleRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a Draft rule targeting a live account.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::AccountNotFound` or `RuleError::AccountArchived`.
    pub fn create(&self, input: &CreateRuleInput) -> Result<AssignmentRule, RuleError> {
        let mut data = self.store.write();
        Self::check_account(&data, input.account_id)?;

        let now = Utc::now();
        let rule = AssignmentRule {
            id: RuleId::new(),
            partner_id: input.partner_id,
            partner_tag_id: input.partner_tag_id,
            product_id: input.product_id,
            product_category_id: input.product_category_id,
            account_id: input.account_id,
            status: RuleStatus::Draft,
            archived: false,
            created_at: now,
            updated_at: now,
        };
        data.rules.insert(rule.id, rule.clone());
        info!(rule_id = %rule.id, account_id = %rule.account_id, "assignment rule created");
        Ok(rule)
    }

    /// Fetches a rule by id.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound`.
    pub fn get(&self, id: RuleId) -> Result<AssignmentRule, RuleError> {
        self.store
            .read()
            .rules
            .get(&id)
            .cloned()
            .ok_or(RuleError::NotFound(id))
    }

    /// Lists rules sorted by id (creation order under UUIDv7), optionally
    /// including archived ones.
    #[must_use]
    pub fn list(&self, include_archived: bool) -> Vec<AssignmentRule> {
        let data = self.store.read();
        let mut rules: Vec<AssignmentRule> = data
            .rules
            .values()
            .filter(|r| include_archived || !r.archived)
            .cloned()
            .collect();
        rules.sort_by_key(|r| r.id);
        rules
    }

    /// Updates a Draft rule's matchers and target account.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound`, `RuleError::NotEditable` when the
    /// rule left Draft, or an account error for a bad target.
    pub fn update(&self, id: RuleId, input: &UpdateRuleInput) -> Result<AssignmentRule, RuleError> {
        let mut data = self.store.write();
        let current = data.rules.get(&id).ok_or(RuleError::NotFound(id))?;
        if current.status != RuleStatus::Draft {
            return Err(RuleError::NotEditable(current.status));
        }
        if let Some(account_id) = input.account_id {
            Self::check_account(&data, account_id)?;
        }

        let rule = data.rules.get_mut(&id).ok_or(RuleError::NotFound(id))?;
        if let Some(partner_id) = input.partner_id {
            rule.partner_id = partner_id;
        }
        if let Some(partner_tag_id) = input.partner_tag_id {
            rule.partner_tag_id = partner_tag_id;
        }
        if let Some(product_id) = input.product_id {
            rule.product_id = product_id;
        }
        if let Some(product_category_id) = input.product_category_id {
            rule.product_category_id = product_category_id;
        }
        if let Some(account_id) = input.account_id {
            rule.account_id = account_id;
        }
        rule.updated_at = Utc::now();
        Ok(rule.clone())
    }

    /// Confirms a Draft rule, making it live.
    ///
    /// Confirming an already-Confirmed rule is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` or `RuleError::InvalidTransition` from
    /// Archived.
    pub fn confirm(&self, id: RuleId) -> Result<AssignmentRule, RuleError> {
        let mut data = self.store.write();
        let rule = data.rules.get_mut(&id).ok_or(RuleError::NotFound(id))?;
        match rule.status {
            RuleStatus::Draft => {
                rule.status = RuleStatus::Confirmed;
                rule.updated_at = Utc::now();
                info!(rule_id = %id, "assignment rule confirmed");
            }
            RuleStatus::Confirmed => {}
            RuleStatus::Archived => {
                return Err(RuleError::InvalidTransition {
                    from: RuleStatus::Archived,
                    to: RuleStatus::Confirmed,
                });
            }
        }
        Ok(rule.clone())
    }

    /// Archives a rule, removing it from resolution. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound`.
    pub fn archive(&self, id: RuleId) -> Result<AssignmentRule, RuleError> {
        let mut data = self.store.write();
        let rule = data.rules.get_mut(&id).ok_or(RuleError::NotFound(id))?;
        if rule.status != RuleStatus::Archived {
            rule.status = RuleStatus::Archived;
            rule.archived = true;
            rule.updated_at = Utc::now();
            info!(rule_id = %id, "assignment rule archived");
        }
        Ok(rule.clone())
    }

    /// Resolves the analytical account for a line, if any live rule matches.
    ///
    /// Pure function of the current rule set; `None` leaves the line
    /// untagged.
    #[must_use]
    pub fn resolve(&self, request: &ResolveRequest) -> Option<AccountId> {
        let data = self.store.read();
        let result = assignment::resolve(data.rules.values(), request);
        debug!(
            source = %request.source,
            account_id = ?result,
            "assignment resolution"
        );
        result
    }

    fn check_account(data: &crate::store::Dataset, account_id: AccountId) -> Result<(), RuleError> {
        match data.accounts.get(&account_id) {
            None => Err(RuleError::AccountNotFound(account_id)),
            Some(account) if account.archived => Err(RuleError::AccountArchived(account_id)),
            Some(_) => Ok(()),
        }
    }
}
