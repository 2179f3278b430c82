//! Pricing model capability and dispatch.
//!
//! - [`CallPricer`]: call price as a function of volatility, plus the
//!   parity offset and zero-volatility limit
//! - [`PricingModel`]: static dispatch over the four closed-form formulas

pub mod model_enum;
pub mod traits;

pub use model_enum::PricingModel;
pub use traits::CallPricer;
