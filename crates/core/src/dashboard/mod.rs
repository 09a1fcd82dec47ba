//! Cross-account performance roll-up for reporting.

pub mod rollup;
pub mod types;

pub use rollup::summarize;
pub use types::{AccountRollup, DashboardSummary, RollupTotals};
