//! Normal (Bachelier) pricing formulas for European calls.
//!
//! ## Mathematical Formulas
//!
//! **Future**: C = (F - K)·N(d) + σ√T·φ(d), d = (F - K) / (σ√T)
//!
//! The futures price is a driftless normal martingale, dF = σ dW, and the
//! formula is quoted undiscounted.
//!
//! **Stock**: C = (S - K*)·N(d) + v·φ(d), d = (S - K*) / v
//!
//! Where:
//! - K* = K·e^(-rT) is the discounted strike
//! - v = σ²·(1 - e^(-2rT)) / (2r) is the integrated scale, with limit σ²T at r = 0
//!
//! The stock formula assumes dS = rS dt + σ dW under the pricing measure.

use super::distributions::{norm_cdf, norm_pdf};
use crate::models::CallPricer;

/// Bachelier call on a spot-settled underlying.
///
/// # Examples
/// ```
/// use impvol_models::analytical::StockBachelier;
/// use impvol_models::models::CallPricer;
///
/// // With r = 0 the integrated scale is σ²T and at the money C = σ²T·φ(0)
/// let model = StockBachelier::new(100.0, 100.0, 0.0, 1.0);
/// assert!((model.call_price(2.0) - 4.0 * 0.3989422804014327).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockBachelier {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Risk-free rate (r)
    rate: f64,
    /// Time to expiry in years (T)
    expiry: f64,
}

impl StockBachelier {
    /// Creates the formula for fixed market inputs.
    ///
    /// Requires `strike > 0` and `expiry > 0`. Zero and negative rates are
    /// supported.
    pub fn new(spot: f64, strike: f64, rate: f64, expiry: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            expiry,
        }
    }

    /// Discounted strike K* = K·e^(-rT).
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.expiry).exp()
    }

    /// Rate-dependent time factor (1 - e^(-2rT)) / (2r).
    ///
    /// Evaluated through `expm1` so that it stays accurate for small rates,
    /// and equal to `T` at `r = 0`.
    #[inline]
    pub fn time_factor(&self) -> f64 {
        if self.rate == 0.0 {
            self.expiry
        } else {
            -(-2.0 * self.rate * self.expiry).exp_m1() / (2.0 * self.rate)
        }
    }

    /// Integrated scale v = σ²·time_factor at the given volatility.
    #[inline]
    pub fn integrated_scale(&self, volatility: f64) -> f64 {
        volatility * volatility * self.time_factor()
    }
}

impl CallPricer for StockBachelier {
    fn call_price(&self, volatility: f64) -> f64 {
        let moneyness = self.spot - self.discounted_strike();
        let v = self.integrated_scale(volatility);
        let d = moneyness / v;
        moneyness * norm_cdf(d) + v * norm_pdf(d)
    }

    fn parity_offset(&self) -> f64 {
        self.discounted_strike() - self.spot
    }

    fn zero_vol_call(&self) -> f64 {
        (self.spot - self.discounted_strike()).max(0.0)
    }
}

/// Bachelier call on a futures-settled underlying.
///
/// # Examples
/// ```
/// use impvol_models::analytical::FutureBachelier;
/// use impvol_models::models::CallPricer;
///
/// // At the money: C = σ√T·φ(0)
/// let model = FutureBachelier::new(100.0, 100.0, 0.05, 1.0);
/// assert!((model.call_price(2.0) - 2.0 * 0.3989422804014327).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FutureBachelier {
    /// Futures price (F)
    forward: f64,
    /// Strike price (K)
    strike: f64,
    /// Risk-free rate (r), used only by the parity offset
    rate: f64,
    /// Time to expiry in years (T)
    expiry: f64,
}

impl FutureBachelier {
    /// Creates the formula for fixed market inputs.
    ///
    /// Requires `strike > 0` and `expiry > 0`. The futures price may be
    /// zero or negative.
    pub fn new(forward: f64, strike: f64, rate: f64, expiry: f64) -> Self {
        Self {
            forward,
            strike,
            rate,
            expiry,
        }
    }

    /// Standard deviation of the terminal futures price, σ√T.
    #[inline]
    pub fn terminal_std_dev(&self, volatility: f64) -> f64 {
        volatility * self.expiry.sqrt()
    }
}

impl CallPricer for FutureBachelier {
    fn call_price(&self, volatility: f64) -> f64 {
        let moneyness = self.forward - self.strike;
        let std_dev = self.terminal_std_dev(volatility);
        let d = moneyness / std_dev;
        moneyness * norm_cdf(d) + std_dev * norm_pdf(d)
    }

    fn parity_offset(&self) -> f64 {
        (self.strike - self.forward) * (-self.rate * self.expiry).exp()
    }

    fn zero_vol_call(&self) -> f64 {
        (self.forward - self.strike).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_future_bachelier_reference_price() {
        let model = FutureBachelier::new(50.0, 55.0, 0.0, 90.0 / 365.0);
        assert_relative_eq!(
            model.call_price(10.0),
            0.408_290_815_670_405_26,
            epsilon = 1e-14
        );
        assert_eq!(format!("{:.10}", model.call_price(10.0)), "0.4082908157");
    }

    #[test]
    fn test_stock_bachelier_flat_at_low_vol_near_the_money() {
        // d = (S - K*) / v grows like 1/σ², so the price sits on its
        // zero-volatility value until σ is large enough
        let model = StockBachelier::new(100.0, 100.0, 0.01, 30.0 / 365.0);
        for vol in [0.05, 0.1, 0.2] {
            assert_eq!(model.call_price(vol), model.zero_vol_call());
        }
        assert!(model.call_price(0.5) > model.zero_vol_call());
    }

    #[test]
    fn test_future_bachelier_is_undiscounted() {
        let no_rate = FutureBachelier::new(100.0, 100.0, 0.0, 1.0);
        let with_rate = FutureBachelier::new(100.0, 100.0, 0.08, 1.0);
        assert_eq!(no_rate.call_price(2.0), with_rate.call_price(2.0));
        assert!(with_rate.parity_offset() == 0.0);
    }

    #[test]
    fn test_future_bachelier_negative_forward() {
        let model = FutureBachelier::new(-0.5, 1.0, 0.0, 1.0);
        let price = model.call_price(1.0);
        assert!(price > 0.0 && price < 0.1);
    }

    #[test]
    fn test_future_bachelier_zero_vol_limit() {
        let model = FutureBachelier::new(60.0, 55.0, 0.03, 0.5);
        assert_eq!(model.zero_vol_call(), 5.0);
        assert_relative_eq!(model.call_price(1e-8), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stock_bachelier_reference_prices() {
        let model = StockBachelier::new(100.0, 100.0, 0.05, 1.0);
        assert_relative_eq!(model.call_price(2.0), 5.057_386_802_524_545, epsilon = 1e-10);

        let model = StockBachelier::new(100.0, 102.0, 0.02, 0.5);
        assert_relative_eq!(model.call_price(3.0), 1.328_135_206_728_911, epsilon = 1e-10);
    }

    #[test]
    fn test_stock_bachelier_zero_rate_limit_is_continuous() {
        let at_zero = StockBachelier::new(100.0, 100.0, 0.0, 1.0);
        let tiny = StockBachelier::new(100.0, 100.0, 1e-12, 1.0);
        assert_eq!(at_zero.time_factor(), 1.0);
        assert_relative_eq!(tiny.time_factor(), 1.0, epsilon = 1e-11);
        assert_relative_eq!(at_zero.call_price(2.0), tiny.call_price(2.0), epsilon = 1e-9);
    }

    #[test]
    fn test_stock_bachelier_negative_rate() {
        let model = StockBachelier::new(100.0, 100.0, -0.01, 1.0);
        assert!(model.time_factor() > 1.0);
        assert!(model.call_price(2.0).is_finite());
        assert!(model.discounted_strike() > 100.0);
    }

    #[test]
    fn test_stock_bachelier_parity_and_zero_vol() {
        let model = StockBachelier::new(100.0, 90.0, 0.05, 2.0);
        let k_star = 90.0 * (-0.1_f64).exp();
        assert_relative_eq!(model.parity_offset(), k_star - 100.0, epsilon = 1e-12);
        assert_relative_eq!(model.zero_vol_call(), 100.0 - k_star, epsilon = 1e-12);
        assert_relative_eq!(
            model.put_price(1.5) - model.call_price(1.5),
            model.parity_offset(),
            epsilon = 1e-12
        );
    }
}
