//! Implied volatility inversion.
//!
//! - [`ImpliedVolSolver`]: solves `price(σ) = market price` for one option
//!   over a [`VolBracket`]
//! - [`ImpliedVolRequest`] / [`ImpliedVolRecord`]: typed input and output rows
//! - [`solve_batch`]: independent rows solved in parallel, order preserved
//!
//! A market price the model cannot reach inside the bracket has no implied
//! volatility. [`ImpliedVolSolver::solve`] reports it as `NaN`, and
//! [`ImpliedVolSolver::solve_detailed`] as [`ImpliedVolOutcome::NoSolution`].

mod batch;
mod request;
mod solver;

pub use batch::solve_batch;
pub use request::{ImpliedVolRecord, ImpliedVolRequest};
pub use solver::{ImpliedVolOutcome, ImpliedVolSolver, VolBracket};
