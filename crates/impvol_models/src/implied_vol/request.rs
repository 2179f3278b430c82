//! Typed implied volatility input and output rows.

use serde::{Deserialize, Serialize};

use crate::instruments::{create_instrument, InstrumentError, VanillaOption};
use impvol_core::types::time::DayCountConvention;

/// One option to invert.
///
/// Classifier columns are kept as text so that an unknown name rejects only
/// its own row, through [`to_option`](ImpliedVolRequest::to_option). Spaced
/// column headers such as `"Market Price"` are accepted as aliases.
///
/// # Examples
/// ```
/// use impvol_models::implied_vol::ImpliedVolRequest;
///
/// let json = r#"{
///     "ID": "A1",
///     "Underlying Type": "Future",
///     "Market Price": 0.41,
///     "Underlying": 50.0,
///     "Strike": 55.0,
///     "Days To Expiry": 90,
///     "Risk-Free Rate": 0.0,
///     "Option Type": "Call",
///     "Model Type": "Bachelier"
/// }"#;
/// let request: ImpliedVolRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.underlying_type, "Future");
/// assert!(request.to_option().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolRequest {
    /// Optional row identifier
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    /// `Stock` or `Future`
    #[serde(rename = "UnderlyingType", alias = "Underlying Type")]
    pub underlying_type: String,
    /// Observed option price
    #[serde(rename = "MarketPrice", alias = "Market Price")]
    pub market_price: f64,
    /// Spot price, or futures price for futures
    #[serde(rename = "Underlying", alias = "Spot")]
    pub underlying: f64,
    /// Strike price
    #[serde(rename = "Strike")]
    pub strike: f64,
    /// Calendar days to expiry
    #[serde(rename = "DaysToExpiry", alias = "Days To Expiry")]
    pub days_to_expiry: f64,
    /// Risk-free rate
    #[serde(rename = "RiskFreeRate", alias = "Risk-Free Rate")]
    pub risk_free_rate: f64,
    /// `Call` or `Put`
    #[serde(rename = "OptionSide", alias = "Option Type", alias = "OptionType")]
    pub option_side: String,
    /// `BlackScholes` or `Bachelier`
    #[serde(rename = "ModelType", alias = "Model Type")]
    pub model_type: String,
}

impl ImpliedVolRequest {
    /// Parses the classifiers and builds the option.
    ///
    /// # Errors
    /// `UnknownInstrument`, `UnknownOptionSide` or `UnknownConvention` for an
    /// unrecognised name, or any validation error of
    /// [`VanillaOption::new`].
    pub fn to_option(&self) -> Result<VanillaOption, InstrumentError> {
        create_instrument(
            self.underlying_type.parse()?,
            self.market_price,
            self.underlying,
            self.strike,
            self.days_to_expiry,
            self.risk_free_rate,
            self.option_side.parse()?,
            self.model_type.parse()?,
        )
    }

    /// Expiry in years (ACT/365).
    pub fn years_to_expiry(&self) -> f64 {
        DayCountConvention::ActualActual365.year_fraction_from_days(self.days_to_expiry)
    }
}

/// One solved row.
///
/// `implied_volatility` is `None` when the row has no implied volatility,
/// whatever the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolRecord {
    /// Row identifier, echoed from the request
    #[serde(rename = "ID")]
    pub id: Option<String>,
    /// Spot price, or futures price for futures
    #[serde(rename = "Spot")]
    pub spot: f64,
    /// Strike price
    #[serde(rename = "Strike")]
    pub strike: f64,
    /// Risk-free rate
    #[serde(rename = "RiskFreeRate")]
    pub risk_free_rate: f64,
    /// Expiry in years (days / 365)
    #[serde(rename = "YearsToExpiry")]
    pub years_to_expiry: f64,
    /// Option side, echoed from the request
    #[serde(rename = "OptionSide")]
    pub option_side: String,
    /// Volatility convention, echoed from the request
    #[serde(rename = "ModelType")]
    pub model_type: String,
    /// Implied volatility, if any
    #[serde(rename = "ImpliedVolatility")]
    pub implied_volatility: Option<f64>,
    /// Observed option price
    #[serde(rename = "MarketPrice")]
    pub market_price: f64,
}

impl ImpliedVolRecord {
    /// Builds the output row for `request`.
    ///
    /// A `NaN` volatility is stored as `None`.
    pub fn from_request(request: &ImpliedVolRequest, implied_volatility: Option<f64>) -> Self {
        Self {
            id: request.id.clone(),
            spot: request.underlying,
            strike: request.strike,
            risk_free_rate: request.risk_free_rate,
            years_to_expiry: request.years_to_expiry(),
            option_side: request.option_side.clone(),
            model_type: request.model_type.clone(),
            implied_volatility: implied_volatility.filter(|vol| !vol.is_nan()),
            market_price: request.market_price,
        }
    }
}
