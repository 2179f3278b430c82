//! Parallel batch inversion.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::{ImpliedVolOutcome, ImpliedVolRecord, ImpliedVolRequest, ImpliedVolSolver};

/// Solves every request independently and in parallel.
///
/// Output order matches input order. A row that cannot be built or solved
/// yields a record without implied volatility and a `warn` event; it never
/// aborts the batch.
///
/// # Examples
/// ```
/// use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
/// use impvol_models::implied_vol::{solve_batch, ImpliedVolRequest, ImpliedVolSolver};
///
/// let row = |id: &str, kind: &str| ImpliedVolRequest {
///     id: Some(id.to_string()),
///     underlying_type: kind.to_string(),
///     market_price: 2.5,
///     underlying: 100.0,
///     strike: 100.0,
///     days_to_expiry: 30.0,
///     risk_free_rate: 0.01,
///     option_side: "Call".to_string(),
///     model_type: "BlackScholes".to_string(),
/// };
///
/// let finder = RootFinder::new(RootFindMethod::Dekker, SolverConfig::default());
/// let solver = ImpliedVolSolver::new(finder);
/// let records = solve_batch(&[row("a", "Stock"), row("b", "Bond")], &solver);
///
/// assert_eq!(records[0].id.as_deref(), Some("a"));
/// assert!(records[0].implied_volatility.is_some());
/// assert!(records[1].implied_volatility.is_none());
/// ```
pub fn solve_batch(
    requests: &[ImpliedVolRequest],
    solver: &ImpliedVolSolver,
) -> Vec<ImpliedVolRecord> {
    requests
        .par_iter()
        .enumerate()
        .map(|(row, request)| solve_row(row, request, solver))
        .collect()
}

fn solve_row(
    row: usize,
    request: &ImpliedVolRequest,
    solver: &ImpliedVolSolver,
) -> ImpliedVolRecord {
    let option = match request.to_option() {
        Ok(option) => option,
        Err(err) => {
            warn!(row, id = ?request.id, error = %err, "rejected option row");
            return ImpliedVolRecord::from_request(request, None);
        }
    };

    let volatility = match solver.solve_detailed(&option) {
        Ok(ImpliedVolOutcome::Solved(vol)) => Some(vol),
        Ok(ImpliedVolOutcome::NoSolution) => {
            debug!(row, id = ?request.id, "no implied volatility in bracket");
            None
        }
        Ok(ImpliedVolOutcome::NotConverged { iterations, last }) => {
            warn!(row, id = ?request.id, iterations, last, "implied volatility did not converge");
            None
        }
        Err(err) => {
            warn!(row, id = ?request.id, error = %err, "implied volatility solve failed");
            None
        }
    };

    ImpliedVolRecord::from_request(request, volatility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::create_instrument;
    use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};

    fn request(id: usize, kind: &str, side: &str, model: &str, days: f64) -> ImpliedVolRequest {
        ImpliedVolRequest {
            id: Some(id.to_string()),
            underlying_type: kind.to_string(),
            market_price: 0.0,
            underlying: 100.0,
            strike: 95.0 + id as f64,
            days_to_expiry: days,
            risk_free_rate: 0.02,
            option_side: side.to_string(),
            model_type: model.to_string(),
        }
    }

    fn priced(mut request: ImpliedVolRequest, vol: f64) -> ImpliedVolRequest {
        let option = create_instrument(
            request.underlying_type.parse().unwrap(),
            0.0,
            request.underlying,
            request.strike,
            request.days_to_expiry,
            request.risk_free_rate,
            request.option_side.parse().unwrap(),
            request.model_type.parse().unwrap(),
        )
        .unwrap();
        request.market_price = option.price(vol).unwrap();
        request
    }

    fn solver() -> ImpliedVolSolver {
        ImpliedVolSolver::new(RootFinder::new(
            RootFindMethod::Dekker,
            SolverConfig::default(),
        ))
    }

    #[test]
    fn test_batch_preserves_order_and_solves() {
        let requests: Vec<ImpliedVolRequest> = (0..64)
            .map(|i| {
                let side = if i % 2 == 0 { "Call" } else { "Put" };
                priced(request(i % 10, "Stock", side, "BlackScholes", 120.0), 0.3)
            })
            .collect();

        let records = solve_batch(&requests, &solver());
        assert_eq!(records.len(), requests.len());
        for (request, record) in requests.iter().zip(&records) {
            assert_eq!(record.id, request.id);
            assert_eq!(record.strike, request.strike);
            let vol = record.implied_volatility.unwrap();
            assert!((vol - 0.3).abs() < 1e-7, "vol = {}", vol);
        }
    }

    #[test]
    fn test_bad_rows_do_not_abort_batch() {
        let requests = vec![
            priced(request(1, "Future", "Call", "Bachelier", 90.0), 4.0),
            request(2, "Bond", "Call", "Bachelier", 90.0),
            request(3, "Stock", "Call", "BlackScholes", 0.0),
            request(4, "Stock", "Straddle", "BlackScholes", 30.0),
            priced(request(5, "Future", "Put", "BlackScholes", 200.0), 0.25),
        ];

        let records = solve_batch(&requests, &solver());
        let vols: Vec<bool> = records
            .iter()
            .map(|r| r.implied_volatility.is_some())
            .collect();
        assert_eq!(vols, vec![true, false, false, false, true]);
        assert_eq!(records[1].option_side, "Call");
        assert_eq!(records[3].option_side, "Straddle");
    }

    #[test]
    fn test_empty_batch() {
        assert!(solve_batch(&[], &solver()).is_empty());
    }
}
