//! Analytical account repository.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use centra_core::account::{AnalyticalAccount, CreateAccountInput, UpdateAccountInput};
use centra_shared::types::AccountId;
use centra_shared::EngineError;

use crate::store::Store;

/// Errors raised by account operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Account does not exist.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// Name is empty or whitespace.
    #[error("Account name cannot be empty")]
    EmptyName,

    /// Another live account already carries this name.
    #[error("Account name already in use: {0}")]
    DuplicateName(String),

    /// Archived accounts cannot be edited.
    #[error("Account is archived: {0}")]
    Archived(AccountId),
}

impl From<AccountError> for EngineError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => Self::NotFound(err.to_string()),
            AccountError::EmptyName | AccountError::DuplicateName(_) => {
                Self::Validation(err.to_string())
            }
            AccountError::Archived(_) => Self::InvalidTransition(err.to_string()),
        }
    }
}

/// Repository for analytical accounts.
///
/// Account names are unique case-insensitively among non-archived accounts;
/// archiving frees the name for reuse.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    store: Store,
}

impl AccountRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::EmptyName` or `AccountError::DuplicateName`.
    pub fn create(&self, input: &CreateAccountInput) -> Result<AnalyticalAccount, AccountError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AccountError::EmptyName);
        }

        let mut data = self.store.write();
        if data
            .accounts
            .values()
            .any(|a| !a.archived && a.name.eq_ignore_ascii_case(name))
        {
            return Err(AccountError::DuplicateName(name.to_string()));
        }

        let now = Utc::now();
        let account = AnalyticalAccount {
            id: AccountId::new(),
            name: name.to_string(),
            description: input.description.clone(),
            archived: false,
            created_at: now,
            updated_at: now,
        };
        data.accounts.insert(account.id, account.clone());
        info!(account_id = %account.id, name = %account.name, "account created");
        Ok(account)
    }

    /// Fetches an account by id.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound`.
    pub fn get(&self, id: AccountId) -> Result<AnalyticalAccount, AccountError> {
        self.store
            .read()
            .accounts
            .get(&id)
            .cloned()
            .ok_or(AccountError::NotFound(id))
    }

    /// Updates a non-archived account's name and description.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound`, `AccountError::Archived`,
    /// `AccountError::EmptyName`, or `AccountError::DuplicateName`.
    pub fn update(
        &self,
        id: AccountId,
        input: &UpdateAccountInput,
    ) -> Result<AnalyticalAccount, AccountError> {
        let mut data = self.store.write();
        let current = data.accounts.get(&id).ok_or(AccountError::NotFound(id))?;
        if current.archived {
            return Err(AccountError::Archived(id));
        }

        let name = match &input.name {
            Some(name) if name.trim().is_empty() => return Err(AccountError::EmptyName),
            Some(name) => name.trim().to_string(),
            None => current.name.clone(),
        };
        if data
            .accounts
            .values()
            .any(|a| a.id != id && !a.archived && a.name.eq_ignore_ascii_case(&name))
        {
            return Err(AccountError::DuplicateName(name));
        }

        let account = data
            .accounts
            .get_mut(&id)
            .ok_or(AccountError::NotFound(id))?;
        account.name = name;
        if let Some(description) = &input.description {
            account.description = description.clone();
        }
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    /// Archives an account, hiding it from new assignment and new budgets.
    ///
    /// Archiving an already-archived account is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound`.
    pub fn archive(&self, id: AccountId) -> Result<AnalyticalAccount, AccountError> {
        let mut data = self.store.write();
        let account = data
            .accounts
            .get_mut(&id)
            .ok_or(AccountError::NotFound(id))?;
        if !account.archived {
            account.archived = true;
            account.updated_at = Utc::now();
            info!(account_id = %id, "account archived");
        }
        Ok(account.clone())
    }

    /// Restores an archived account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound`, or `AccountError::DuplicateName`
    /// when a live account took the name in the meantime.
    pub fn unarchive(&self, id: AccountId) -> Result<AnalyticalAccount, AccountError> {
        let mut data = self.store.write();
        let current = data.accounts.get(&id).ok_or(AccountError::NotFound(id))?;
        if !current.archived {
            return Ok(current.clone());
        }
        let name = current.name.clone();
        if data
            .accounts
            .values()
            .any(|a| a.id != id && !a.archived && a.name.eq_ignore_ascii_case(&name))
        {
            return Err(AccountError::DuplicateName(name));
        }

        let account = data
            .accounts
            .get_mut(&id)
            .ok_or(AccountError::NotFound(id))?;
        account.archived = false;
        account.updated_at = Utc::now();
        info!(account_id = %id, "account restored");
        Ok(account.clone())
    }

    /// Lists accounts sorted by name, optionally including archived ones.
    #[must_use]
    pub fn list(&self, include_archived: bool) -> Vec<AnalyticalAccount> {
        let data = self.store.read();
        let mut accounts: Vec<AnalyticalAccount> = data
            .accounts
            .values()
            .filter(|a| include_archived || !a.archived)
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        accounts
    }

    /// Case-insensitive substring search over non-archived account names.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<AnalyticalAccount> {
        let needle = query.trim().to_lowercase();
        let data = self.store.read();
        let mut accounts: Vec<AnalyticalAccount> = data
            .accounts
            .values()
            .filter(|a| !a.archived && a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> AccountRepository {
        AccountRepository::new(Store::new())
    }

    fn create(repo: &AccountRepository, name: &str) -> AnalyticalAccount {
        repo.create(&CreateAccountInput {
            name: name.to_string(),
            description: None,
        })
        .unwrap()
    }

    #[test]
    fn test_create_trims_name() {
        let repo = repo();
        let account = create(&repo, "  Operations  ");
        assert_eq!(account.name, "Operations");
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let repo = repo();
        let err = repo
            .create(&CreateAccountInput {
                name: "   ".to_string(),
                description: None,
            })
            .unwrap_err();
        assert_eq!(err, AccountError::EmptyName);
    }

    #[test]
    fn test_duplicate_name_is_case_insensitive() {
        let repo = repo();
        create(&repo, "Operations");
        let err = repo
            .create(&CreateAccountInput {
                name: "OPERATIONS".to_string(),
                description: None,
            })
            .unwrap_err();
        assert_eq!(err, AccountError::DuplicateName("OPERATIONS".to_string()));
    }

    #[test]
    fn test_archiving_frees_the_name() {
        let repo = repo();
        let first = create(&repo, "Operations");
        repo.archive(first.id).unwrap();
        let second = create(&repo, "Operations");
        assert_ne!(first.id, second.id);

        // Restoring the first account now collides with the second.
        let err = repo.unarchive(first.id).unwrap_err();
        assert_eq!(err, AccountError::DuplicateName("Operations".to_string()));
    }

    #[test]
    fn test_update_clears_description() {
        let repo = repo();
        let account = repo
            .create(&CreateAccountInput {
                name: "Operations".to_string(),
                description: Some("ops".to_string()),
            })
            .unwrap();

        let updated = repo
            .update(
                account.id,
                &UpdateAccountInput {
                    name: None,
                    description: Some(None),
                },
            )
            .unwrap();
        assert_eq!(updated.description, None);
        assert_eq!(updated.name, "Operations");
    }

    #[test]
    fn test_update_archived_account_is_rejected() {
        let repo = repo();
        let account = create(&repo, "Operations");
        repo.archive(account.id).unwrap();
        let err = repo
            .update(
                account.id,
                &UpdateAccountInput {
                    name: Some("Ops".to_string()),
                    description: None,
                },
            )
            .unwrap_err();
        assert_eq!(err, AccountError::Archived(account.id));
    }

    #[test]
    fn test_list_hides_archived_by_default() {
        let repo = repo();
        let a = create(&repo, "Alpha");
        create(&repo, "Beta");
        repo.archive(a.id).unwrap();

        let live = repo.list(false);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].name, "Beta");
        assert_eq!(repo.list(true).len(), 2);
    }

    #[test]
    fn test_search_is_substring_and_case_insensitive() {
        let repo = repo();
        create(&repo, "Marketing EMEA");
        create(&repo, "Marketing APAC");
        create(&repo, "R&D");

        let hits = repo.search("marketing");
        assert_eq!(hits.len(), 2);
        assert!(repo.search("emea").len() == 1);
        assert!(repo.search("nothing").is_empty());
    }
}
