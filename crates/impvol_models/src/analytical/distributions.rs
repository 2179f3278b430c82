//! Standard normal distribution functions.
//!
//! The CDF is computed from `libm`'s complementary error function (the
//! FreeBSD/musl `erfc`, within one ulp), so it keeps relative accuracy in
//! the lower tail. Prices built on it stay monotone in volatility, which the
//! root finders rely on.

use libm::erfc;
use std::f64::consts::FRAC_1_SQRT_2;

/// 1 / √(2π)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function Φ(x).
///
/// Φ(x) = erfc(-x/√2) / 2
///
/// # Examples
/// ```
/// use impvol_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96) - 0.9750021048517795).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function φ(x).
///
/// # Examples
/// ```
/// use impvol_models::analytical::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}
