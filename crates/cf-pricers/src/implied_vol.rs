//! Implied-volatility inversion.
//!
//! Inverts the Black closed form: finds the σ whose undiscounted forward
//! call price matches a target price.  Used to compare prices produced by
//! different methods on a common volatility scale.

use cf_core::{
    ensure,
    errors::{Error, Result},
    Price, Real, Time, Volatility,
};
use cf_math::solvers1d::newton;
use cf_models::black_forward;

const INITIAL_GUESS: Volatility = 0.2;
const VOL_MIN: Volatility = 1.0e-9;
const VOL_MAX: Volatility = 10.0;
const PRICE_ACCURACY: Real = 1.0e-12;

/// Find the volatility `σ ≥ 0` whose Black forward price matches `price`.
///
/// Newton iteration on `σ ↦ black_forward(F, K, σ, T) − price` with the
/// analytic vega as derivative, started from the fixed guess 0.2 and kept
/// inside `[1e-9, 10]`.  Fails with [`Error::ImpliedVolFailed`] — carrying
/// the original inputs — whenever the iteration does not meet its
/// tolerance within the budget, including for target prices outside the
/// attainable band `[max(F−K, 0), F)`.  There is no closed-form fallback.
pub fn implied_vol(
    forward: Real,
    strike: Real,
    maturity: Time,
    price: Price,
) -> Result<Volatility> {
    ensure!(forward > 0.0, "forward must be positive, got {forward}");
    ensure!(strike > 0.0, "strike must be positive, got {strike}");
    ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");

    let objective = |sigma: Volatility| {
        let (value, vega) = black_forward(forward, strike, sigma, maturity);
        (value - price, vega)
    };

    newton(objective, INITIAL_GUESS, VOL_MIN, VOL_MAX, PRICE_ACCURACY).map_err(|_| {
        Error::ImpliedVolFailed {
            forward,
            strike,
            maturity,
            price,
        }
    })
}
