//! Error and time types shared across the workspace.
//!
//! This module provides:
//! - `error`: Structured error types for solver and pricing operations
//! - `time`: Day count conversion from whole days to year fractions
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`], [`SolverError`] from `error`
//! - [`DayCountConvention`], [`DAYS_PER_YEAR`] from `time`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{PricingError, SolverError};
pub use time::{DayCountConvention, DAYS_PER_YEAR};
