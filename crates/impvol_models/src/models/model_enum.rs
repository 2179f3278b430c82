//! Static dispatch enum over the closed-form call formulas.
//!
//! The pair (instrument kind, volatility convention) selects exactly one
//! formula:
//!
//! | Kind   | BlackScholes    | Bachelier         |
//! |--------|-----------------|-------------------|
//! | Stock  | [`BlackScholes`]| [`StockBachelier`]|
//! | Future | [`Black76`]     | [`FutureBachelier`]|
//!
//! ## Example
//!
//! ```
//! use impvol_models::instruments::{InstrumentKind, VolConvention};
//! use impvol_models::models::{CallPricer, PricingModel};
//!
//! let model = PricingModel::new(
//!     InstrumentKind::Future,
//!     VolConvention::BlackScholes,
//!     100.0, 100.0, 0.0, 1.0,
//! );
//! assert_eq!(model.name(), "Black76");
//! assert!(model.call_price(0.2) > 0.0);
//! ```

use super::CallPricer;
use crate::analytical::{Black76, BlackScholes, FutureBachelier, StockBachelier};
use crate::instruments::{InstrumentKind, VolConvention};

/// One of the four closed-form call formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingModel {
    /// Stock, lognormal
    BlackScholes(BlackScholes),
    /// Future, lognormal
    Black76(Black76),
    /// Stock, normal
    StockBachelier(StockBachelier),
    /// Future, normal
    FutureBachelier(FutureBachelier),
}

impl PricingModel {
    /// Selects and builds the formula for an instrument kind and convention.
    ///
    /// # Arguments
    /// * `spot` - Spot price for stocks, futures price for futures
    /// * `strike` - Strike price
    /// * `rate` - Risk-free rate (annualised)
    /// * `expiry` - Time to expiry in years
    pub fn new(
        kind: InstrumentKind,
        convention: VolConvention,
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
    ) -> Self {
        match (kind, convention) {
            (InstrumentKind::Stock, VolConvention::BlackScholes) => {
                PricingModel::BlackScholes(BlackScholes::new(spot, strike, rate, expiry))
            }
            (InstrumentKind::Future, VolConvention::BlackScholes) => {
                PricingModel::Black76(Black76::new(spot, strike, rate, expiry))
            }
            (InstrumentKind::Stock, VolConvention::Bachelier) => {
                PricingModel::StockBachelier(StockBachelier::new(spot, strike, rate, expiry))
            }
            (InstrumentKind::Future, VolConvention::Bachelier) => {
                PricingModel::FutureBachelier(FutureBachelier::new(spot, strike, rate, expiry))
            }
        }
    }

    /// Formula name.
    pub fn name(&self) -> &'static str {
        match self {
            PricingModel::BlackScholes(_) => "BlackScholes",
            PricingModel::Black76(_) => "Black76",
            PricingModel::StockBachelier(_) => "StockBachelier",
            PricingModel::FutureBachelier(_) => "FutureBachelier",
        }
    }

    /// Instrument kind the formula applies to.
    pub fn kind(&self) -> InstrumentKind {
        match self {
            PricingModel::BlackScholes(_) | PricingModel::StockBachelier(_) => {
                InstrumentKind::Stock
            }
            PricingModel::Black76(_) | PricingModel::FutureBachelier(_) => InstrumentKind::Future,
        }
    }

    /// Volatility convention of the formula.
    pub fn convention(&self) -> VolConvention {
        match self {
            PricingModel::BlackScholes(_) | PricingModel::Black76(_) => VolConvention::BlackScholes,
            PricingModel::StockBachelier(_) | PricingModel::FutureBachelier(_) => {
                VolConvention::Bachelier
            }
        }
    }
}

impl CallPricer for PricingModel {
    #[inline]
    fn call_price(&self, volatility: f64) -> f64 {
        match self {
            PricingModel::BlackScholes(m) => m.call_price(volatility),
            PricingModel::Black76(m) => m.call_price(volatility),
            PricingModel::StockBachelier(m) => m.call_price(volatility),
            PricingModel::FutureBachelier(m) => m.call_price(volatility),
        }
    }

    #[inline]
    fn parity_offset(&self) -> f64 {
        match self {
            PricingModel::BlackScholes(m) => m.parity_offset(),
            PricingModel::Black76(m) => m.parity_offset(),
            PricingModel::StockBachelier(m) => m.parity_offset(),
            PricingModel::FutureBachelier(m) => m.parity_offset(),
        }
    }

    #[inline]
    fn zero_vol_call(&self) -> f64 {
        match self {
            PricingModel::BlackScholes(m) => m.zero_vol_call(),
            PricingModel::Black76(m) => m.zero_vol_call(),
            PricingModel::StockBachelier(m) => m.zero_vol_call(),
            PricingModel::FutureBachelier(m) => m.zero_vol_call(),
        }
    }
}
