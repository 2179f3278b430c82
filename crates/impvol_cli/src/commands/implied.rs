//! Implied command implementation
//!
//! Solves the implied volatility of one option given on the command line.

use impvol_models::implied_vol::ImpliedVolSolver;
use tracing::info;

use super::build_option;
use crate::{OptionArgs, Result};

/// Run the implied command
pub fn run(
    args: &OptionArgs,
    market_price: f64,
    solver: &ImpliedVolSolver,
    na_marker: &str,
) -> Result<()> {
    match implied(args, market_price, solver)? {
        Some(vol) => println!("{}", vol),
        None => {
            info!("No implied volatility in the bracket for price {}", market_price);
            println!("{}", na_marker);
        }
    }
    Ok(())
}

/// Implied volatility, or `None` when no volatility reproduces `market_price`
pub fn implied(
    args: &OptionArgs,
    market_price: f64,
    solver: &ImpliedVolSolver,
) -> Result<Option<f64>> {
    let option = build_option(args, market_price)?;
    let vol = solver.solve(&option)?;
    Ok((!vol.is_nan()).then_some(vol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_abs_diff_eq;
    use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
    use impvol_models::instruments::{InstrumentKind, OptionSide, VolConvention};

    fn args() -> OptionArgs {
        OptionArgs {
            underlying_type: InstrumentKind::Stock,
            model_type: VolConvention::BlackScholes,
            side: OptionSide::Call,
            underlying: 100.0,
            strike: 100.0,
            days: 365.0,
            rate: 0.05,
        }
    }

    #[test]
    fn test_implied_recovers_volatility() {
        for method in RootFindMethod::ALL {
            let solver = ImpliedVolSolver::new(RootFinder::new(method, SolverConfig::default()));
            let vol = implied(&args(), 10.450_583_572_185_565, &solver).unwrap().unwrap();
            assert_abs_diff_eq!(vol, 0.2, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_unreachable_price_is_none() {
        let solver = ImpliedVolSolver::new(RootFinder::with_method(RootFindMethod::Dekker));
        assert_eq!(implied(&args(), 150.0, &solver).unwrap(), None);
    }

    #[test]
    fn test_not_converged_is_error() {
        let solver = ImpliedVolSolver::new(RootFinder::new(
            RootFindMethod::Bisection,
            SolverConfig::new(1e-12, 2),
        ));
        assert!(matches!(
            implied(&args(), 10.45, &solver),
            Err(CliError::Pricing(_))
        ));
    }
}
