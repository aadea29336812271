//! 1D root-finding.

use cf_core::{
    errors::{Error, Result},
    Real,
};

const MAX_ITERATIONS: u32 = 100;
const DEFAULT_ACCURACY: Real = 1.0e-11;

/// Newton-Raphson method using function value and its derivative.
///
/// `f_df(x)` returns `(f(x), f'(x))`.  Iterates from `x0`, keeping every
/// iterate clamped to `[x_min, x_max]`; convergence is declared when the
/// residual `|f(x)|` falls below `accuracy` (or the default 1e-11 when
/// `accuracy <= 0`).
pub fn newton<F>(f_df: F, x0: Real, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> (Real, Real),
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let mut x = x0.clamp(x_min, x_max);

    for _ in 0..MAX_ITERATIONS {
        let (fx, dfx) = f_df(x);
        if !fx.is_finite() || !dfx.is_finite() {
            return Err(Error::NoConvergence(format!(
                "Newton solver: objective not finite at x = {x}"
            )));
        }
        if fx.abs() < acc {
            return Ok(x);
        }
        if dfx.abs() <= f64::EPSILON * fx.abs() {
            return Err(Error::NoConvergence(format!(
                "Newton solver: derivative vanished at x = {x}"
            )));
        }
        x = (x - fx / dfx).clamp(x_min, x_max);
    }
    Err(Error::NoConvergence(
        "Newton solver: maximum iterations reached".into(),
    ))
}
