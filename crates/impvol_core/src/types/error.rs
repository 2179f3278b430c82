//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers
//! - `PricingError`: Errors from option construction and pricing, with a
//!   `From<SolverError>` conversion so `?` works across both layers

use std::fmt;
use thiserror::Error;

/// Solver errors.
///
/// `NoSignChange` is an expected data outcome for implied volatility: the
/// market price is unreachable inside the bracket.
/// [`RootFinder::solve`](crate::math::solvers::RootFinder::solve) converts
/// it into the `NaN` sentinel.
///
/// # Examples
/// ```
/// use impvol_core::types::SolverError;
///
/// let err = SolverError::NotConverged { iterations: 200, last: 0.25 };
/// assert!(format!("{}", err).contains("200 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Root-finding method name not recognised.
    #[error("Unknown root-finding method: {0}")]
    UnknownMethod(String),

    /// Function values at the bracket endpoints have the same sign.
    #[error("No sign change: f({a}) and f({b}) have the same sign")]
    NoSignChange {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Iteration cap reached before the tolerance was met.
    #[error("Failed to converge after {iterations} iterations (last estimate {last})")]
    NotConverged {
        /// Number of iterations attempted
        iterations: usize,
        /// Last estimate of the root
        last: f64,
    },

    /// Bracket endpoint is not finite.
    #[error("Invalid bracket: [{a}, {b}]")]
    InvalidBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}

impl SolverError {
    /// Returns `true` for the no-sign-change outcome.
    pub fn is_no_sign_change(&self) -> bool {
        matches!(self, SolverError::NoSignChange { .. })
    }
}

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `UnknownInstrument`: Instrument name not recognised
/// - `UnknownOptionSide`: Option side name not recognised
/// - `UnknownConvention`: Volatility convention name not recognised
/// - `Solver`: Root finder failure
///
/// # Examples
/// ```
/// use impvol_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative strike".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative strike");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Instrument type not recognised
    UnknownInstrument(String),

    /// Option side not recognised
    UnknownOptionSide(String),

    /// Volatility convention not recognised
    UnknownConvention(String),

    /// Root finder failure
    Solver(SolverError),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::UnknownInstrument(name) => write!(f, "Unknown instrument: {}", name),
            PricingError::UnknownOptionSide(name) => write!(f, "Unknown option side: {}", name),
            PricingError::UnknownConvention(name) => {
                write!(f, "Unknown volatility convention: {}", name)
            }
            PricingError::Solver(err) => write!(f, "Solver error: {}", err),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::Solver(err)
    }
}
