//! Analytical pricing formulas for European options.
//!
//! Each formula prices a call as a function of volatility, with market
//! inputs fixed at construction:
//! - [`BlackScholes`]: lognormal stock
//! - [`Black76`]: lognormal future
//! - [`StockBachelier`]: normal stock with discounted strike
//! - [`FutureBachelier`]: normal future
//!
//! ## Design Principles
//!
//! - **Infallible formulas**: inputs are validated by the option entity
//!   before any formula is built
//! - **Numerical Stability**: erfc-based CDF, `expm1` for small-rate terms

pub mod bachelier;
pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use bachelier::{FutureBachelier, StockBachelier};
pub use black_scholes::{Black76, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
