//! Black-Scholes model.
//!
//! Serves two roles: the closed-form undiscounted forward price is the
//! ground truth the Fourier pricers are validated against, and the
//! log-normal characteristic function is the simplest model the pricers
//! consume.

use crate::CharacteristicFunction;
use cf_core::{ensure, ensure_domain, errors::Result, Real, Time, Volatility};
use cf_math::distributions::{normal_cdf, normal_pdf};
use num_complex::Complex64;

/// Undiscounted Black forward call price and vega.
///
/// ```text
/// price = F·Φ(d₁) − K·Φ(d₂)
/// d₁    = (ln(F/K) + σ²T/2) / (σ√T),   d₂ = d₁ − σ√T
/// vega  = F·φ(d₁)·√T
/// ```
///
/// Assumes `forward > 0`, `strike > 0`, `volatility > 0`, `maturity > 0`;
/// the caller validates.  Exposed as a free function so the
/// implied-volatility Newton iteration can evaluate price and derivative
/// in one pass.
pub fn black_forward(
    forward: Real,
    strike: Real,
    volatility: Volatility,
    maturity: Time,
) -> (Real, Real) {
    let std_dev = volatility * maturity.sqrt();
    let d1 = ((forward / strike).ln() + 0.5 * volatility * volatility * maturity) / std_dev;
    let d2 = d1 - std_dev;
    let price = forward * normal_cdf(d1) - strike * normal_cdf(d2);
    let vega = forward * normal_pdf(d1) * maturity.sqrt();
    (price, vega)
}

/// Log-normal (Black-Scholes) model of the forward price.
///
/// Immutable after construction; `ln(forward)` is cached because every
/// characteristic-function evaluation uses it.
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    forward: Real,
    volatility: Volatility,
    ln_forward: Real,
}

impl BlackScholes {
    /// Create a model with the given forward (> 0) and volatility (≥ 0).
    pub fn new(forward: Real, volatility: Volatility) -> Result<Self> {
        ensure!(forward > 0.0, "forward must be positive, got {forward}");
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self {
            forward,
            volatility,
            ln_forward: forward.ln(),
        })
    }

    /// Volatility parameter σ.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Closed-form undiscounted forward call price.
    ///
    /// Requires `maturity > 0` and `volatility > 0` (the d₁/d₂ quotient
    /// divides by σ√T), signalled as a domain error otherwise.
    pub fn forward_price(&self, strike: Real, maturity: Time) -> Result<Real> {
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure_domain!(
            maturity > 0.0,
            "closed form requires positive maturity, got {maturity}"
        );
        ensure_domain!(
            self.volatility > 0.0,
            "closed form requires positive volatility, got {}",
            self.volatility
        );
        let (price, _) = black_forward(self.forward, strike, self.volatility, maturity);
        Ok(price)
    }

    /// Black vega, ∂(forward price)/∂σ.  Same domain requirements as
    /// [`forward_price`](Self::forward_price).
    pub fn vega(&self, strike: Real, maturity: Time) -> Result<Real> {
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure_domain!(
            maturity > 0.0,
            "vega requires positive maturity, got {maturity}"
        );
        ensure_domain!(
            self.volatility > 0.0,
            "vega requires positive volatility, got {}",
            self.volatility
        );
        let (_, vega) = black_forward(self.forward, strike, self.volatility, maturity);
        Ok(vega)
    }
}

impl CharacteristicFunction for BlackScholes {
    fn forward(&self) -> Real {
        self.forward
    }

    /// `φ(u, T) = exp(i·u·ln F − σ²T/2 · u·(u + i))`
    fn phi(&self, u: Complex64, maturity: Time) -> Complex64 {
        let i = Complex64::i();
        let half_var = 0.5 * self.volatility * self.volatility * maturity;
        (i * u * self.ln_forward - half_var * u * (u + i)).exp()
    }
}
