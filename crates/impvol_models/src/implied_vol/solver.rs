//! Single-option implied volatility solver.

use impvol_core::math::solvers::RootFinder;
use impvol_core::types::{PricingError, SolverError};
use tracing::debug;

use crate::instruments::VanillaOption;

/// Volatility search interval `[low, high]`.
///
/// Validated as finite with `0 <= low < high`. Defaults to `[0, 100]`,
/// which covers lognormal volatilities and normal volatilities quoted in
/// price units for most underlyings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolBracket {
    low: f64,
    high: f64,
}

impl VolBracket {
    /// Default lower bound.
    pub const DEFAULT_LOW: f64 = 0.0;
    /// Default upper bound.
    pub const DEFAULT_HIGH: f64 = 100.0;

    /// Creates a bracket.
    ///
    /// # Errors
    /// `SolverError::InvalidBracket` unless both bounds are finite and
    /// `0 <= low < high`.
    ///
    /// # Examples
    /// ```
    /// use impvol_models::implied_vol::VolBracket;
    ///
    /// assert!(VolBracket::new(1e-6, 5.0).is_ok());
    /// assert!(VolBracket::new(-1.0, 5.0).is_err());
    /// assert!(VolBracket::new(2.0, 2.0).is_err());
    /// ```
    pub fn new(low: f64, high: f64) -> Result<Self, SolverError> {
        if low.is_finite() && high.is_finite() && low >= 0.0 && low < high {
            Ok(Self { low, high })
        } else {
            Err(SolverError::InvalidBracket { a: low, b: high })
        }
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for VolBracket {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

/// Result of an implied volatility solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpliedVolOutcome {
    /// Implied volatility found.
    Solved(f64),
    /// Market price not reachable inside the bracket.
    NoSolution,
    /// Iteration cap reached.
    NotConverged {
        /// Iterations performed
        iterations: usize,
        /// Last volatility estimate
        last: f64,
    },
}

impl ImpliedVolOutcome {
    /// The implied volatility, if one was found.
    pub fn volatility(&self) -> Option<f64> {
        match self {
            ImpliedVolOutcome::Solved(vol) => Some(*vol),
            _ => None,
        }
    }
}

/// Implied volatility solver: a root finder plus a volatility bracket.
///
/// Builds the mispricing `g(σ) = price(σ) - market price`, substituting the
/// zero-volatility limit at `σ = 0`, and hands it to the root finder.
///
/// # Examples
/// ```
/// use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
/// use impvol_models::implied_vol::{ImpliedVolSolver, VolBracket};
/// use impvol_models::instruments::{create_instrument, InstrumentKind, OptionSide, VolConvention};
///
/// let solver = ImpliedVolSolver::with_bracket(
///     RootFinder::new(RootFindMethod::Bisection, SolverConfig::default()),
///     VolBracket::new(1e-6, 5.0).unwrap(),
/// );
///
/// // A call priced above the spot has no implied volatility
/// let option = create_instrument(
///     InstrumentKind::Stock, 150.0, 100.0, 100.0, 30.0, 0.01,
///     OptionSide::Call, VolConvention::BlackScholes,
/// )
/// .unwrap();
/// assert!(solver.solve(&option).unwrap().is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolSolver {
    finder: RootFinder<f64>,
    bracket: VolBracket,
}

impl ImpliedVolSolver {
    /// Creates a solver over the default bracket `[0, 100]`.
    pub fn new(finder: RootFinder<f64>) -> Self {
        Self::with_bracket(finder, VolBracket::default())
    }

    /// Creates a solver over `bracket`.
    pub fn with_bracket(finder: RootFinder<f64>, bracket: VolBracket) -> Self {
        Self { finder, bracket }
    }

    /// The root finder.
    pub fn finder(&self) -> &RootFinder<f64> {
        &self.finder
    }

    /// The volatility bracket.
    pub fn bracket(&self) -> VolBracket {
        self.bracket
    }

    /// Implied volatility of `option`, or `NaN` when there is none in the
    /// bracket.
    ///
    /// # Errors
    /// `PricingError::Solver` wrapping `SolverError::NotConverged` when the
    /// iteration cap is reached.
    pub fn solve(&self, option: &VanillaOption) -> Result<f64, PricingError> {
        match self.solve_detailed(option)? {
            ImpliedVolOutcome::Solved(vol) => Ok(vol),
            ImpliedVolOutcome::NoSolution => Ok(f64::NAN),
            ImpliedVolOutcome::NotConverged { iterations, last } => {
                Err(SolverError::NotConverged { iterations, last }.into())
            }
        }
    }

    /// Implied volatility of `option` as an [`ImpliedVolOutcome`].
    ///
    /// # Errors
    /// `PricingError::Solver` for root finder failures other than a missing
    /// sign change or non-convergence.
    pub fn solve_detailed(
        &self,
        option: &VanillaOption,
    ) -> Result<ImpliedVolOutcome, PricingError> {
        let market_price = option.market_price();
        let mispricing = |vol: f64| option.price_or_limit(vol) - market_price;

        let outcome = match self
            .finder
            .find_root(mispricing, self.bracket.low, self.bracket.high)
        {
            Ok(vol) => ImpliedVolOutcome::Solved(vol),
            Err(SolverError::NoSignChange { .. }) => ImpliedVolOutcome::NoSolution,
            Err(SolverError::NotConverged { iterations, last }) => {
                ImpliedVolOutcome::NotConverged { iterations, last }
            }
            Err(err) => return Err(err.into()),
        };

        debug!(
            model = option.model().name(),
            side = %option.side(),
            market_price,
            method = %self.finder.method(),
            ?outcome,
            "implied volatility solve"
        );

        Ok(outcome)
    }
}
