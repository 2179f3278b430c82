//! Instrument error types.
//!
//! This module provides structured error handling for option construction
//! and for the volatility passed to price functions.

use impvol_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `UnknownInstrument`, `UnknownOptionSide`, `UnknownConvention`: Name not recognised
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Expiry time is non-positive
/// - `InvalidSpot`: Spot is non-positive under the lognormal convention
/// - `InvalidVolatility`: Volatility is non-positive or not finite
/// - `NonFiniteInput`: A market input is NaN or infinite
///
/// # Examples
/// ```
/// use impvol_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Instrument name not recognised.
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// Option side name not recognised.
    #[error("Unknown option side: {0}")]
    UnknownOptionSide(String),

    /// Volatility convention name not recognised.
    #[error("Unknown volatility convention: {0}")]
    UnknownConvention(String),

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid spot price (non-positive under the lognormal convention).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid volatility (non-positive or not finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Market input is NaN or infinite.
    #[error("Non-finite {field}: {value}")]
    NonFiniteInput {
        /// Name of the offending input
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::UnknownInstrument(name) => PricingError::UnknownInstrument(name),
            InstrumentError::UnknownOptionSide(name) => PricingError::UnknownOptionSide(name),
            InstrumentError::UnknownConvention(name) => PricingError::UnknownConvention(name),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
