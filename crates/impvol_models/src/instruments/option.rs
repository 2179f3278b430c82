//! European option entity and factory.

use impvol_core::types::time::DayCountConvention;
use impvol_core::types::PricingError;

use super::{InstrumentError, InstrumentKind, OptionSide, VolConvention};
use crate::models::{CallPricer, PricingModel};

/// European option with validated market inputs.
///
/// Immutable after construction. The pricing formula is selected once from
/// the instrument kind and volatility convention; the put price is always
/// the call price plus [`parity_offset`](VanillaOption::parity_offset).
///
/// # Examples
/// ```
/// use impvol_models::instruments::{InstrumentKind, OptionSide, VanillaOption, VolConvention};
///
/// let option = VanillaOption::new(
///     InstrumentKind::Stock,
///     VolConvention::BlackScholes,
///     OptionSide::Put,
///     5.57,   // market price
///     100.0,  // spot
///     100.0,  // strike
///     1.0,    // years to expiry
///     0.05,   // rate
/// )
/// .unwrap();
///
/// let put = option.price(0.2).unwrap();
/// let call = option.call_price(0.2).unwrap();
/// assert!((put - call - option.parity_offset()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    side: OptionSide,
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    model: PricingModel,
}

impl VanillaOption {
    /// Creates an option with the expiry given in years.
    ///
    /// # Errors
    /// - `InstrumentError::NonFiniteInput` if any market input is NaN or infinite
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    /// - `InstrumentError::InvalidExpiry` if expiry <= 0
    /// - `InstrumentError::InvalidSpot` if spot <= 0 under the lognormal convention
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: InstrumentKind,
        convention: VolConvention,
        side: OptionSide,
        market_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
    ) -> Result<Self, InstrumentError> {
        for (field, value) in [
            ("market price", market_price),
            ("spot", spot),
            ("strike", strike),
            ("expiry", expiry),
            ("rate", rate),
        ] {
            if !value.is_finite() {
                return Err(InstrumentError::NonFiniteInput { field, value });
            }
        }

        if strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if expiry <= 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        // ln(S/K) in the lognormal formulas
        if convention == VolConvention::BlackScholes && spot <= 0.0 {
            return Err(InstrumentError::InvalidSpot { spot });
        }

        Ok(Self {
            side,
            market_price,
            spot,
            strike,
            expiry,
            rate,
            model: PricingModel::new(kind, convention, spot, strike, rate, expiry),
        })
    }

    /// Instrument kind.
    #[inline]
    pub fn kind(&self) -> InstrumentKind {
        self.model.kind()
    }

    /// Volatility convention.
    #[inline]
    pub fn convention(&self) -> VolConvention {
        self.model.convention()
    }

    /// Call or put.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Observed market price.
    #[inline]
    pub fn market_price(&self) -> f64 {
        self.market_price
    }

    /// Spot price, or futures price for futures.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn years_to_expiry(&self) -> f64 {
        self.expiry
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The selected pricing formula.
    #[inline]
    pub fn model(&self) -> &PricingModel {
        &self.model
    }

    /// Put price minus call price, independent of volatility.
    #[inline]
    pub fn parity_offset(&self) -> f64 {
        self.model.parity_offset()
    }

    /// Payoff if exercised now: `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    pub fn intrinsic_value(&self) -> f64 {
        match self.side {
            OptionSide::Call => (self.spot - self.strike).max(0.0),
            OptionSide::Put => (self.strike - self.spot).max(0.0),
        }
    }

    /// Model price of this option's side in the limit of zero volatility.
    pub fn zero_vol_price(&self) -> f64 {
        self.side_price(self.model.zero_vol_call())
    }

    /// Call price at `volatility`.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` unless `volatility` is finite and positive.
    pub fn call_price(&self, volatility: f64) -> Result<f64, PricingError> {
        check_volatility(volatility)?;
        Ok(self.model.call_price(volatility))
    }

    /// Put price at `volatility`, by put-call parity.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` unless `volatility` is finite and positive.
    pub fn put_price(&self, volatility: f64) -> Result<f64, PricingError> {
        check_volatility(volatility)?;
        Ok(self.model.put_price(volatility))
    }

    /// Price of this option's side at `volatility`.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` unless `volatility` is finite and positive.
    pub fn price(&self, volatility: f64) -> Result<f64, PricingError> {
        check_volatility(volatility)?;
        Ok(self.side_price(self.model.call_price(volatility)))
    }

    /// Price at `volatility` with the zero-volatility limit at exactly zero.
    ///
    /// Used as the root-finding objective, where a bracket may start at 0.
    /// Negative volatilities are not checked.
    pub(crate) fn price_or_limit(&self, volatility: f64) -> f64 {
        if volatility == 0.0 {
            self.zero_vol_price()
        } else {
            self.side_price(self.model.call_price(volatility))
        }
    }

    #[inline]
    fn side_price(&self, call: f64) -> f64 {
        match self.side {
            OptionSide::Call => call,
            OptionSide::Put => call + self.model.parity_offset(),
        }
    }
}

fn check_volatility(volatility: f64) -> Result<(), InstrumentError> {
    if volatility.is_finite() && volatility > 0.0 {
        Ok(())
    } else {
        Err(InstrumentError::InvalidVolatility { volatility })
    }
}

/// Creates an option from an expiry in calendar days (ACT/365).
///
/// Dispatches on `kind` to the stock or future variant; the convention then
/// selects the formula.
///
/// # Examples
/// ```
/// use impvol_models::instruments::{create_instrument, InstrumentKind, OptionSide, VolConvention};
///
/// let option = create_instrument(
///     InstrumentKind::Future, 0.41, 50.0, 55.0, 90.0, 0.0,
///     OptionSide::Call, VolConvention::Bachelier,
/// )
/// .unwrap();
/// assert!((option.years_to_expiry() - 90.0 / 365.0).abs() < 1e-15);
///
/// let err = create_instrument(
///     InstrumentKind::Stock, 1.0, 100.0, 100.0, 0.0, 0.0,
///     OptionSide::Call, VolConvention::BlackScholes,
/// );
/// assert!(err.is_err());
/// ```
///
/// # Errors
/// See [`VanillaOption::new`].
#[allow(clippy::too_many_arguments)]
pub fn create_instrument(
    kind: InstrumentKind,
    market_price: f64,
    spot: f64,
    strike: f64,
    days_to_expiry: f64,
    rate: f64,
    side: OptionSide,
    convention: VolConvention,
) -> Result<VanillaOption, InstrumentError> {
    let expiry = DayCountConvention::ActualActual365.year_fraction_from_days(days_to_expiry);
    VanillaOption::new(kind, convention, side, market_price, spot, strike, expiry, rate)
}
