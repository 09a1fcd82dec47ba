//! Auto-assignment of analytical accounts to transaction lines.
//!
//! A document line created without an analytical account asks this module
//! which account it should carry, given partner/product context. Resolution
//! is a pure, deterministic scoring pass over the confirmed rule set.
//!
//! # Modules
//!
//! - `types` - Rule entity, statuses, and the resolution request
//! - `engine` - Scoring and winner selection

pub mod engine;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::{resolve, score};
pub use types::{AssignmentRule, CreateRuleInput, ResolveRequest, RuleStatus, UpdateRuleInput};
