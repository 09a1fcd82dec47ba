//! Common types used across the engine.

pub mod id;
pub mod period;

pub use id::*;
pub use period::{Period, PeriodError};
