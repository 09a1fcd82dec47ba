//! Repository abstractions for the engine's entities.
//!
//! Repositories provide the operations the application layer calls, hiding
//! the dataset layout. Pure validation and planning live in `centra-core`;
//! repositories apply the results under the store's transaction boundary.

pub mod account;
pub mod budget;
pub mod dashboard;
pub mod document;
pub mod rule;

pub use account::{AccountError, AccountRepository};
pub use budget::{BudgetRepoError, BudgetRepository};
pub use dashboard::DashboardRepository;
pub use document::{DocumentError, DocumentFeed};
pub use rule::{RuleError, RuleRepository};
