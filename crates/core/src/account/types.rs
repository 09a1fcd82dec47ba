//! Analytical account data types.

use centra_shared::types::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analytical account (cost or revenue center) used to tag transaction
/// lines and budgets.
///
/// Accounts are never deleted: archiving hides an account from new
/// assignment and new budgets while existing documents and budgets keep
/// referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticalAccount {
    /// Account ID.
    pub id: AccountId,
    /// Account name (unique among non-archived accounts).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the account is hidden from new assignment.
    pub archived: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an analytical account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Account name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Input for updating an analytical account.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    /// New name.
    pub name: Option<String>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
}
