//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.
//!
//! Priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables (`IMPVOL_*`)
//! 3. Config file (`impvol.toml`)
//! 4. Default values

use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
use impvol_core::types::SolverError;
use impvol_models::implied_vol::{ImpliedVolSolver, VolBracket};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Environment variable could not be parsed
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Unknown root-finding method
    #[error(transparent)]
    Method(#[from] SolverError),

    /// One or more invalid settings
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Solver and output configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImpvolConfig {
    /// Root-finding method
    #[serde(deserialize_with = "deserialize_method")]
    pub method: RootFindMethod,
    /// Root finder tolerance on volatility
    pub tolerance: f64,
    /// Root finder iteration cap
    pub max_iterations: usize,
    /// Lower volatility bound
    pub bracket_low: f64,
    /// Upper volatility bound
    pub bracket_high: f64,
    /// Text written when there is no implied volatility
    pub na_marker: String,
    /// Log level when `RUST_LOG` is not set
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_method<'de, D>(deserializer: D) -> Result<RootFindMethod, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    RootFindMethod::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ImpvolConfig {
    fn default() -> Self {
        let solver = SolverConfig::<f64>::default();
        Self {
            method: RootFindMethod::default(),
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
            bracket_low: VolBracket::DEFAULT_LOW,
            bracket_high: VolBracket::DEFAULT_HIGH,
            na_marker: "NA".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

/// Command-line overrides; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub method: Option<RootFindMethod>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub bracket_low: Option<f64>,
    pub bracket_high: Option<f64>,
    pub na_marker: Option<String>,
}

impl ImpvolConfig {
    /// Load configuration from a TOML file, or defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Apply `IMPVOL_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(method) = lookup("IMPVOL_METHOD") {
            self.method = method.parse()?;
        }
        if let Some(tolerance) = lookup("IMPVOL_TOLERANCE") {
            self.tolerance = parse_env("IMPVOL_TOLERANCE", &tolerance)?;
        }
        if let Some(max_iterations) = lookup("IMPVOL_MAX_ITERATIONS") {
            self.max_iterations = parse_env("IMPVOL_MAX_ITERATIONS", &max_iterations)?;
        }
        if let Some(low) = lookup("IMPVOL_BRACKET_LOW") {
            self.bracket_low = parse_env("IMPVOL_BRACKET_LOW", &low)?;
        }
        if let Some(high) = lookup("IMPVOL_BRACKET_HIGH") {
            self.bracket_high = parse_env("IMPVOL_BRACKET_HIGH", &high)?;
        }
        if let Some(na_marker) = lookup("IMPVOL_NA_MARKER") {
            self.na_marker = na_marker;
        }
        if let Some(log_level) = lookup("IMPVOL_LOG_LEVEL") {
            self.log_level = log_level.parse()?;
        }

        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(mut self, cli: &CliOverrides) -> Self {
        if let Some(method) = cli.method {
            self.method = method;
        }
        if let Some(tolerance) = cli.tolerance {
            self.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.max_iterations = max_iterations;
        }
        if let Some(low) = cli.bracket_low {
            self.bracket_low = low;
        }
        if let Some(high) = cli.bracket_high {
            self.bracket_high = high;
        }
        if let Some(na_marker) = &cli.na_marker {
            self.na_marker = na_marker.clone();
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            errors.push(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            ));
        }

        if self.max_iterations == 0 {
            errors.push("max_iterations must be greater than 0".to_string());
        }

        if let Err(err) = VolBracket::new(self.bracket_low, self.bracket_high) {
            errors.push(format!("{} (requires 0 <= low < high)", err));
        }

        if self.na_marker.contains(['\n', '\r']) {
            errors.push("na_marker cannot contain line breaks".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build the implied volatility solver
    pub fn solver(&self) -> Result<ImpliedVolSolver, ConfigError> {
        self.validate()?;
        let bracket = VolBracket::new(self.bracket_low, self.bracket_high)?;
        let finder = RootFinder::new(
            self.method,
            SolverConfig::new(self.tolerance, self.max_iterations),
        );
        Ok(ImpliedVolSolver::with_bracket(finder, bracket))
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", key, value)))
}
