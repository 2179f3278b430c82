//! Bracket validation shared by the bracketing solvers.

use num_traits::Float;

use crate::types::SolverError;

#[inline]
fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Rejects brackets with a non-finite endpoint.
pub(super) fn ensure_finite<T: Float>(a: T, b: T) -> Result<(), SolverError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(SolverError::InvalidBracket {
            a: as_f64(a),
            b: as_f64(b),
        })
    }
}

/// Requires `f(a)` and `f(b)` to straddle zero.
///
/// A NaN function value cannot establish a sign change and is reported the
/// same way as two values of equal sign.
pub(super) fn ensure_sign_change<T: Float>(a: T, fa: T, b: T, fb: T) -> Result<(), SolverError> {
    if fa.is_nan() || fb.is_nan() || fa * fb > T::zero() {
        return Err(SolverError::NoSignChange {
            a: as_f64(a),
            b: as_f64(b),
        });
    }
    Ok(())
}

/// Builds the non-convergence error for the last iterate.
pub(super) fn not_converged<T: Float>(iterations: usize, last: T) -> SolverError {
    SolverError::NotConverged {
        iterations,
        last: as_f64(last),
    }
}
