//! # impvol_core: Numerical Foundation for Implied Volatility
//!
//! ## Layer 1 (Foundation) Role
//!
//! impvol_core is the bottom layer of the workspace, providing:
//! - Bracketing root finders: bisection and Dekker's method (`math::solvers`)
//! - Error types: `SolverError`, `PricingError` (`types::error`)
//! - Day count conversion: `DayCountConvention` (`types::time`)
//!
//! The root finders know nothing about options. They solve `f(x) = 0` for any
//! continuous scalar function over a bracket `[a, b]`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
//!
//! let finder = RootFinder::new(RootFindMethod::Dekker, SolverConfig::default());
//!
//! // Solve x² - 2 = 0 over [0, 2]
//! let root = finder.solve(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
//!
//! // No sign change over [3, 4]: the no-solution sentinel is NaN
//! let none = finder.solve(|x: f64| x * x - 2.0, 3.0, 4.0).unwrap();
//! assert!(none.is_nan());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for solver configuration and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
