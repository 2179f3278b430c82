//! Numerical methods.
//!
//! - `solvers`: Bracketing root finders (bisection, Dekker)

pub mod solvers;
