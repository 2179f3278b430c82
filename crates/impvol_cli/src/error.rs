//! Error types for the impvol CLI.

use impvol_core::types::PricingError;
use impvol_models::instruments::InstrumentError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Option construction error
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// Pricing or solver error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
