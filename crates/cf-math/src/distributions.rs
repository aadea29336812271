//! Standard normal distribution.

use cf_core::Real;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Computed as `Φ(x) = erfc(-x/√2) / 2` via the `statrs` complementary
/// error function, accurate to full double precision.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * statrs::function::erf::erfc(-x * FRAC_1_SQRT_2)
}
