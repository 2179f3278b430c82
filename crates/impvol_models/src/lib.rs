//! # impvol_models: Pricing Models and Implied Volatility
//!
//! Closed-form European option prices as functions of volatility, and their
//! inversion back to implied volatility.
//!
//! This crate provides:
//! - Normal distribution functions and the four closed-form call formulas
//!   (`analytical`)
//! - The [`CallPricer`](models::CallPricer) capability and the
//!   [`PricingModel`](models::PricingModel) dispatch enum (`models`)
//! - The option entity and its factory (`instruments`)
//! - Implied volatility inversion, typed request/record rows and the
//!   parallel batch helper (`implied_vol`)
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** over {Stock, Future} × {BlackScholes, Bachelier}
//! - **Put prices by parity**: a put is always the call plus a fixed,
//!   instrument-specific offset, so parity holds to the last bit
//! - **No-solution is data**: a market price outside the model's range
//!   yields `NaN`, not an error
//!
//! ## Example
//!
//! ```
//! use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
//! use impvol_models::implied_vol::ImpliedVolSolver;
//! use impvol_models::instruments::{create_instrument, InstrumentKind, OptionSide, VolConvention};
//!
//! let market_price = create_instrument(
//!     InstrumentKind::Stock, 0.0, 100.0, 100.0, 30.0, 0.01,
//!     OptionSide::Call, VolConvention::BlackScholes,
//! )
//! .unwrap()
//! .price(0.2)
//! .unwrap();
//!
//! let option = create_instrument(
//!     InstrumentKind::Stock, market_price, 100.0, 100.0, 30.0, 0.01,
//!     OptionSide::Call, VolConvention::BlackScholes,
//! )
//! .unwrap();
//!
//! let solver = ImpliedVolSolver::new(RootFinder::new(
//!     RootFindMethod::Dekker,
//!     SolverConfig::default(),
//! ));
//! let vol = solver.solve(&option).unwrap();
//! assert!((vol - 0.2).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod instruments;
pub mod models;
