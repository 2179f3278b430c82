//! Call pricing capability.

/// A closed-form European call price as a function of volatility.
///
/// Market inputs (spot, strike, rate, expiry) are fixed by the implementor;
/// only the volatility varies. Puts are never priced directly: they follow
/// from the call through [`parity_offset`](CallPricer::parity_offset).
///
/// # Required Methods
///
/// - [`call_price`](CallPricer::call_price) - Call price at `volatility > 0`
/// - [`parity_offset`](CallPricer::parity_offset) - `put - call`, independent of volatility
/// - [`zero_vol_call`](CallPricer::zero_vol_call) - Call price as volatility tends to zero
///
/// # Provided Methods
///
/// - [`put_price`](CallPricer::put_price) - `call_price + parity_offset`
///
/// # Examples
///
/// ```
/// use impvol_models::analytical::BlackScholes;
/// use impvol_models::models::CallPricer;
///
/// let model = BlackScholes::new(100.0, 100.0, 0.05, 1.0);
/// let call = model.call_price(0.2);
/// let put = model.put_price(0.2);
/// assert!((put - call - model.parity_offset()).abs() < 1e-12);
/// ```
pub trait CallPricer {
    /// Call price at the given volatility.
    fn call_price(&self, volatility: f64) -> f64;

    /// Put minus call, for any volatility.
    fn parity_offset(&self) -> f64;

    /// Call price in the limit `volatility -> 0+`.
    fn zero_vol_call(&self) -> f64;

    /// Put price at the given volatility, by put-call parity.
    #[inline]
    fn put_price(&self, volatility: f64) -> f64 {
        self.call_price(volatility) + self.parity_offset()
    }
}
