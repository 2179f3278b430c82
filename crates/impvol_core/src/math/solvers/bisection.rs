//! Bisection root-finding solver.

use num_traits::Float;

use super::bracket::{ensure_finite, ensure_sign_change, not_converged};
use super::SolverConfig;
use crate::types::SolverError;

/// Bisection root finder.
///
/// Halves the bracket on every iteration, keeping the half whose endpoints
/// still straddle zero. Slow (one bit per iteration) but unconditionally
/// convergent for continuous functions with a valid bracket.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use impvol_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((root - 1.5213797068).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// A reversed bracket (`a > b`) is normalised first. When the bracket is
    /// already narrower than the tolerance its midpoint is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(c)` - Last midpoint, within `tolerance` of a root
    /// * `Err(SolverError::InvalidBracket)` - Non-finite endpoint
    /// * `Err(SolverError::NoSignChange)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::NotConverged)` - Iteration cap reached
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        ensure_finite(a, b)?;
        let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };

        let mut fa = f(a);
        let fb = f(b);
        ensure_sign_change(a, fa, b, fb)?;

        let two = T::one() + T::one();
        let mut c = (a + b) / two;
        let mut iterations = 0;

        while (b - a).abs() > self.config.tolerance {
            if iterations == self.config.max_iterations {
                return Err(not_converged(iterations, c));
            }
            iterations += 1;

            c = (a + b) / two;
            let fc = f(c);

            if fc.abs() <= self.config.zero_threshold {
                return Ok(c);
            }

            if fa * fc > T::zero() {
                a = c;
                fa = fc;
            } else {
                b = c;
            }
        }

        Ok(c)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
