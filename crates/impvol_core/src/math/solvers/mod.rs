//! Bracketing root-finding solvers.
//!
//! This module provides derivative-free root finders for continuous scalar
//! functions over a bracket `[a, b]`, designed for implied volatility
//! inversion where the objective is a closed-form price minus a market price.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Classic interval halving, linear convergence
//! - [`DekkerSolver`]: Secant steps guarded by bisection, superlinear convergence
//! - [`RootFinder`]: Configure-once front end selecting one of the above
//!   through [`RootFindMethod`]
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`] for:
//! - `tolerance`: Bracket width at which iteration stops (default: 1e-8)
//! - `max_iterations`: Iteration cap (default: 200)
//! - `zero_threshold`: Early exit on `|f(c)|` for bisection (default: exact zero)
//!
//! ## No Sign Change
//!
//! When `f(a)` and `f(b)` share a sign the individual solvers report
//! [`SolverError::NoSignChange`](crate::types::SolverError::NoSignChange).
//! [`RootFinder::solve`] turns that outcome into the `NaN` sentinel, since an
//! unreachable market price is a normal data outcome rather than a failure.
//!
//! ## Examples
//!
//! ```
//! use impvol_core::math::solvers::{BisectionSolver, DekkerSolver, SolverConfig};
//!
//! let f = |x: f64| x.exp() - 2.0;
//!
//! let bisection = BisectionSolver::new(SolverConfig::default());
//! let dekker = DekkerSolver::new(SolverConfig::default());
//!
//! let r1 = bisection.find_root(f, 0.0, 1.0).unwrap();
//! let r2 = dekker.find_root(f, 0.0, 1.0).unwrap();
//! assert!((r1 - r2).abs() < 2e-8);
//! ```

mod bisection;
mod bracket;
mod config;
mod dekker;
mod method;
mod root_finder;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use dekker::DekkerSolver;
pub use method::RootFindMethod;
pub use root_finder::RootFinder;
