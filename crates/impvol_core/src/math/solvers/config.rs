//! Solver configuration types.

use num_traits::Float;

/// Configuration for the bracketing root finders.
///
/// Shared by [`BisectionSolver`](super::BisectionSolver),
/// [`DekkerSolver`](super::DekkerSolver) and [`RootFinder`](super::RootFinder).
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use impvol_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-8);
/// assert_eq!(config.zero_threshold, 0.0);
///
/// let custom = SolverConfig::new(1e-12, 500);
/// assert_eq!(custom.max_iterations, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the abscissa.
    ///
    /// Iteration stops once the distance between the two points the solver
    /// is tracking is at most `tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// Exceeding it yields `SolverError::NotConverged`.
    pub max_iterations: usize,

    /// Bisection returns a midpoint early when `|f(c)| <= zero_threshold`.
    ///
    /// The default of zero only accepts exact roots.
    pub zero_threshold: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-8
    /// - `max_iterations`: 200
    /// - `zero_threshold`: 0
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap_or_else(T::epsilon),
            max_iterations: 200,
            zero_threshold: T::zero(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with an exact-zero early exit.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            zero_threshold: T::zero(),
        }
    }

    /// Sets the bisection early-exit threshold.
    ///
    /// # Panics
    ///
    /// Panics if `zero_threshold` is negative or NaN.
    #[must_use]
    pub fn with_zero_threshold(mut self, zero_threshold: T) -> Self {
        assert!(
            zero_threshold >= T::zero(),
            "zero_threshold must be non-negative"
        );
        self.zero_threshold = zero_threshold;
        self
    }
}
