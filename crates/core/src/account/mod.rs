//! Analytical account (cost center) types.

pub mod types;

pub use types::{AnalyticalAccount, CreateAccountInput, UpdateAccountInput};
