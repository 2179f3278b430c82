//! Instrument, option side and volatility convention classifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InstrumentError;

/// Settlement of the underlying.
///
/// # Examples
/// ```
/// use impvol_models::instruments::InstrumentKind;
///
/// assert_eq!("future".parse::<InstrumentKind>().unwrap(), InstrumentKind::Future);
/// assert!("Bond".parse::<InstrumentKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentKind {
    /// Spot-settled underlying
    Stock,
    /// Futures-settled underlying
    Future,
}

impl InstrumentKind {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            InstrumentKind::Stock => "Stock",
            InstrumentKind::Future => "Future",
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stock" => Ok(InstrumentKind::Stock),
            "future" | "futures" => Ok(InstrumentKind::Future),
            _ => Err(InstrumentError::UnknownInstrument(s.to_string())),
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    /// Right to buy
    Call,
    /// Right to sell
    Put,
}

impl OptionSide {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            OptionSide::Call => "Call",
            OptionSide::Put => "Put",
        }
    }
}

impl FromStr for OptionSide {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionSide::Call),
            "put" => Ok(OptionSide::Put),
            _ => Err(InstrumentError::UnknownOptionSide(s.to_string())),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Volatility quoting convention.
///
/// `BlackScholes` volatilities are lognormal (relative); `Bachelier`
/// volatilities are normal, in price units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolConvention {
    /// Lognormal: Black-Scholes for stocks, Black-76 for futures
    BlackScholes,
    /// Normal
    Bachelier,
}

impl VolConvention {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            VolConvention::BlackScholes => "BlackScholes",
            VolConvention::Bachelier => "Bachelier",
        }
    }
}

impl FromStr for VolConvention {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blackscholes" | "black-scholes" | "lognormal" => Ok(VolConvention::BlackScholes),
            "bachelier" | "normal" => Ok(VolConvention::Bachelier),
            _ => Err(InstrumentError::UnknownConvention(s.to_string())),
        }
    }
}

impl fmt::Display for VolConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
