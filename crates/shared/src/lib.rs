//! Shared types and errors for Centra.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Inclusive date periods for budgets and document filtering
//! - Engine-wide error types

pub mod error;
pub mod types;

pub use error::{EngineError, EngineResult};
