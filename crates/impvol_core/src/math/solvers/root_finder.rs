//! Configure-once root finder front end.

use num_traits::Float;

use super::{BisectionSolver, DekkerSolver, RootFindMethod, SolverConfig};
use crate::types::SolverError;

/// A bracketing root finder bound to one method and one configuration.
///
/// The method is a required constructor argument and there are no setters:
/// a `RootFinder` is configured once and then used as a pure function of
/// `(objective, a, b)`. Being `Copy + Send + Sync`, it can be shared freely
/// across worker threads.
///
/// # Example
///
/// ```
/// use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
///
/// let finder = RootFinder::new(RootFindMethod::Bisection, SolverConfig::new(1e-10, 100));
///
/// let root = finder.solve(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
/// assert!((root - 2.0_f64.ln()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinder<T: Float = f64> {
    method: RootFindMethod,
    config: SolverConfig<T>,
}

impl<T: Float> RootFinder<T> {
    /// Create a root finder using `method` with `config`.
    pub fn new(method: RootFindMethod, config: SolverConfig<T>) -> Self {
        Self { method, config }
    }

    /// Create a root finder using `method` with the default configuration.
    pub fn with_method(method: RootFindMethod) -> Self {
        Self::new(method, SolverConfig::default())
    }

    /// Returns the configured method.
    pub fn method(&self) -> RootFindMethod {
        self.method
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in `[a, b]`, reporting every outcome as a `Result`.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidBracket` - Non-finite endpoint
    /// * `SolverError::NoSignChange` - `f(a)` and `f(b)` have the same sign
    /// * `SolverError::NotConverged` - Iteration cap reached
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        match self.method {
            RootFindMethod::Bisection => BisectionSolver::new(self.config).find_root(f, a, b),
            RootFindMethod::Dekker => DekkerSolver::new(self.config).find_root(f, a, b),
        }
    }

    /// Find a root of `f` in `[a, b]`, returning `NaN` when the bracket holds
    /// no sign change.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidBracket` - Non-finite endpoint
    /// * `SolverError::NotConverged` - Iteration cap reached
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        match self.find_root(f, a, b) {
            Err(SolverError::NoSignChange { .. }) => Ok(T::nan()),
            other => other,
        }
    }
}
