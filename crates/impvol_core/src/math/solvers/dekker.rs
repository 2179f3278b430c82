//! Dekker's method root-finding solver.

use num_traits::Float;

use super::bracket::{ensure_finite, ensure_sign_change, not_converged};
use super::SolverConfig;
use crate::types::SolverError;

/// Dekker's method root finder.
///
/// Tracks three points:
/// - `b`: current best estimate (smallest `|f|`)
/// - `a`: previous best estimate, used for the secant step
/// - `c`: contrapoint, with `f(c)` of opposite sign to `f(b)`
///
/// Each iteration proposes the secant step through `(a, f(a))` and
/// `(b, f(b))` and accepts it only when it lands between `b` and the
/// bisection midpoint `(b + c) / 2`; otherwise the midpoint is taken.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use impvol_core::math::solvers::{DekkerSolver, SolverConfig};
///
/// let solver = DekkerSolver::new(SolverConfig::default());
///
/// // Solve x - cos(x) = 0 in bracket [0, 1]
/// let f = |x: f64| x - x.cos();
///
/// let root = solver.find_root(f, 0.0, 1.0).unwrap();
/// assert!(f(root).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DekkerSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> DekkerSolver<T> {
    /// Create a new Dekker solver with the given configuration.
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
    /// The bracket may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(b)` - Best estimate once successive estimates are within `tolerance`,
    ///   or an exact root
    /// * `Err(SolverError::InvalidBracket)` - Non-finite endpoint
    /// * `Err(SolverError::NoSignChange)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::NotConverged)` - Iteration cap reached
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        ensure_finite(a, b)?;

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);
        ensure_sign_change(a, fa, b, fb)?;

        let zero = T::zero();
        let half = T::from(0.5).unwrap_or_else(|| T::one() / (T::one() + T::one()));

        let mut c = a;
        let mut fc = fa;
        let mut iterations = 0;

        while (b - a).abs() > self.config.tolerance {
            if iterations == self.config.max_iterations {
                return Err(not_converged(iterations, b));
            }
            iterations += 1;

            // Restore the contrapoint when b and c ended up on the same side
            if fb * fc > zero {
                c = a;
                fc = fa;
            }

            // Keep the better estimate in b
            if fc.abs() < fb.abs() {
                a = b;
                fa = fb;
                b = c;
                fb = fc;
                c = a;
                fc = fa;
            }

            if fb == zero {
                return Ok(b);
            }

            let m = half * (b + c);

            // Secant step p / q, with p >= 0 so that the acceptance test
            // works for either orientation of the bracket
            let mut p = (b - a) * fb;
            let q = if p >= zero {
                fa - fb
            } else {
                p = -p;
                fb - fa
            };

            a = b;
            fa = fb;

            b = if q != zero && p <= (m - b) * q {
                b + p / q
            } else {
                m
            };
            fb = f(b);
        }

        Ok(b)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_find_sqrt_2() {
        let solver = DekkerSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_find_cubic_root() {
        let solver = DekkerSolver::new(SolverConfig::default());
        let f = |x: f64| x * x * x - x - 2.0;
        let root = solver.find_root(f, 1.0, 2.0).unwrap();
        assert!(f(root).abs() < 1e-8, "f(root) = {}", f(root));
    }

    #[test]
    fn test_find_exp_root() {
        let solver = DekkerSolver::new(SolverConfig::new(1e-12, 100));
        let root = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(root, 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_decreasing_function() {
        let solver = DekkerSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| 1.0 - x * x, 0.0, 3.0).unwrap();
        assert_abs_diff_eq!(root, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_bracket_reversed() {
        let solver = DekkerSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x * x - 2.0, 2.0, 0.0).unwrap();
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_linear_function_exact_root() {
        let solver = DekkerSolver::new(SolverConfig::default());
        // Secant on a line lands on the root in one step
        let root = solver.find_root(|x: f64| 2.0 * x - 1.0, 0.0, 4.0).unwrap();
        assert_abs_diff_eq!(root, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_root_at_bracket_endpoint() {
        let solver = DekkerSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x - 1.0, 0.0, 1.0).unwrap();
        assert_eq!(root, 1.0);

        let root = solver.find_root(|x: f64| x - 1.0, 1.0, 3.0).unwrap();
        assert_abs_diff_eq!(root, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_flat_region_converges() {
        let solver = DekkerSolver::new(SolverConfig::default());
        // Very flat near the root: slow secant progress, bisection fallback
        let f = |x: f64| (x - 0.3).powi(3);
        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(root, 0.3, epsilon = 1e-2);
        assert!(f(root).abs() < 1e-6);
    }

    #[test]
    fn test_no_sign_change() {
        let solver = DekkerSolver::new(SolverConfig::default());
        let result = solver.find_root(|x: f64| x * x, 1.0, 2.0);
        assert!(matches!(result, Err(SolverError::NoSignChange { .. })));
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = DekkerSolver::new(SolverConfig::new(1e-300, 3));
        let result = solver.find_root(|x: f64| x - x.cos(), 0.0, 1.0);
        match result {
            Err(SolverError::NotConverged { iterations, .. }) => assert_eq!(iterations, 3),
            other => panic!("Expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_config_accessor() {
        let solver = DekkerSolver::new(SolverConfig::new(1e-6, 25));
        assert_eq!(solver.config().max_iterations, 25);
        assert_eq!(solver.config().tolerance, 1e-6);
    }

    #[test]
    fn test_with_f32() {
        let solver: DekkerSolver<f32> = DekkerSolver::new(SolverConfig::new(1e-5, 100));
        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
