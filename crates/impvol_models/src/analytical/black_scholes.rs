//! Lognormal pricing formulas for European calls.
//!
//! ## Mathematical Formulas
//!
//! **Black-Scholes (stock)**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//!
//! **Black-76 (future)**: C = e^(-rT)·[F·N(d₁) - K·N(d₂)]
//! with d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//!
//! In both cases d₂ = d₁ - σ√T.

use super::distributions::norm_cdf;
use crate::models::CallPricer;

/// Black-Scholes call on a spot-settled underlying.
///
/// # Examples
/// ```
/// use impvol_models::analytical::BlackScholes;
/// use impvol_models::models::CallPricer;
///
/// let bs = BlackScholes::new(100.0, 100.0, 0.05, 1.0);
/// assert!((bs.call_price(0.2) - 10.450583572185565).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Risk-free rate (r)
    rate: f64,
    /// Time to expiry in years (T)
    expiry: f64,
}

impl BlackScholes {
    /// Creates the formula for fixed market inputs.
    ///
    /// Requires `spot > 0`, `strike > 0` and `expiry > 0`.
    pub fn new(spot: f64, strike: f64, rate: f64, expiry: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            expiry,
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Returns (d₁, d₂) at the given volatility.
    pub fn d1_d2(&self, volatility: f64) -> (f64, f64) {
        let vol_sqrt_t = volatility * self.expiry.sqrt();
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * volatility * volatility) * self.expiry)
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }
}

impl CallPricer for BlackScholes {
    fn call_price(&self, volatility: f64) -> f64 {
        let (d1, d2) = self.d1_d2(volatility);
        self.spot * norm_cdf(d1) - self.strike * self.discount_factor() * norm_cdf(d2)
    }

    fn parity_offset(&self) -> f64 {
        self.strike * self.discount_factor() - self.spot
    }

    fn zero_vol_call(&self) -> f64 {
        (self.spot - self.strike * self.discount_factor()).max(0.0)
    }
}

/// Black-76 call on a futures-settled underlying.
///
/// # Examples
/// ```
/// use impvol_models::analytical::Black76;
/// use impvol_models::models::CallPricer;
///
/// // ATM with zero rate: C = F·(2N(σ√T/2) - 1)
/// let black = Black76::new(100.0, 100.0, 0.0, 1.0);
/// assert!((black.call_price(0.2) - 7.965567455405804).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76 {
    /// Futures price (F)
    forward: f64,
    /// Strike price (K)
    strike: f64,
    /// Risk-free rate (r)
    rate: f64,
    /// Time to expiry in years (T)
    expiry: f64,
}

impl Black76 {
    /// Creates the formula for fixed market inputs.
    ///
    /// Requires `forward > 0`, `strike > 0` and `expiry > 0`.
    pub fn new(forward: f64, strike: f64, rate: f64, expiry: f64) -> Self {
        Self {
            forward,
            strike,
            rate,
            expiry,
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Returns (d₁, d₂) at the given volatility.
    pub fn d1_d2(&self, volatility: f64) -> (f64, f64) {
        let vol_sqrt_t = volatility * self.expiry.sqrt();
        let d1 = ((self.forward / self.strike).ln()
            + 0.5 * volatility * volatility * self.expiry)
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }
}

impl CallPricer for Black76 {
    fn call_price(&self, volatility: f64) -> f64 {
        let (d1, d2) = self.d1_d2(volatility);
        self.discount_factor() * (self.forward * norm_cdf(d1) - self.strike * norm_cdf(d2))
    }

    fn parity_offset(&self) -> f64 {
        (self.strike - self.forward) * self.discount_factor()
    }

    fn zero_vol_call(&self) -> f64 {
        self.discount_factor() * (self.forward - self.strike).max(0.0)
    }
}
