//! Core business logic for Centra.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here; persistence and the service boundary live in `centra-store`.
//!
//! # Modules
//!
//! - `account` - Analytical account (cost center) types
//! - `assignment` - Auto-assignment rule scoring and resolution
//! - `budget` - Budget lifecycle state machine and performance aggregation
//! - `dashboard` - Cross-account performance roll-up
//! - `document` - Read-only projection of transactional documents
//! - `warning` - Pre-save budget overrun evaluation

pub mod account;
pub mod assignment;
pub mod budget;
pub mod dashboard;
pub mod document;
pub mod warning;
