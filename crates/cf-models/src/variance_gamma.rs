//! Variance Gamma model.
//!
//! A pure-jump Lévy model of the log-forward price, parameterized by a
//! skewness θ, a variance rate ν, and a volatility σ.  The drift
//! correction ω making the forward process a martingale is derived at
//! construction:
//!
//! ```text
//! ω = ln(1 − θν − σ²ν/2) / ν
//! ```

use crate::CharacteristicFunction;
use cf_core::{ensure, ensure_domain, errors::Result, Real, Time, Volatility};
use num_complex::Complex64;

/// Variance Gamma model of the forward price.
///
/// Immutable after construction; ω is derived from (θ, ν, σ) and not
/// independently settable.
#[derive(Debug, Clone, Copy)]
pub struct VarianceGamma {
    forward: Real,
    skew: Real,
    nu: Real,
    sigma: Volatility,
    omega: Real,
    ln_forward: Real,
}

impl VarianceGamma {
    /// Create a model with forward (> 0), skewness θ, variance rate
    /// ν (> 0), and volatility σ (≥ 0).
    ///
    /// Fails with a domain error when `1 − θν − σ²ν/2 ≤ 0`, where the
    /// martingale-correction logarithm is undefined.
    pub fn new(forward: Real, skew: Real, nu: Real, sigma: Volatility) -> Result<Self> {
        ensure!(forward > 0.0, "forward must be positive, got {forward}");
        ensure!(nu > 0.0, "variance rate must be positive, got {nu}");
        ensure!(sigma >= 0.0, "volatility must be non-negative, got {sigma}");

        let omega_arg = 1.0 - skew * nu - 0.5 * sigma * sigma * nu;
        ensure_domain!(
            omega_arg > 0.0,
            "martingale correction undefined: 1 - θν - σ²ν/2 = {omega_arg} must be positive"
        );
        Ok(Self {
            forward,
            skew,
            nu,
            sigma,
            omega: omega_arg.ln() / nu,
            ln_forward: forward.ln(),
        })
    }

    /// Skewness parameter θ.
    pub fn skew(&self) -> Real {
        self.skew
    }

    /// Variance rate ν.
    pub fn nu(&self) -> Real {
        self.nu
    }

    /// Volatility parameter σ.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// Derived martingale drift correction ω.
    pub fn omega(&self) -> Real {
        self.omega
    }
}

impl CharacteristicFunction for VarianceGamma {
    fn forward(&self) -> Real {
        self.forward
    }

    /// `φ(u, T) = exp(i·u·(ln F + ωT) − T/ν · ln(1 − i·u·ν·(θ + σ²·i·u/2)))`
    ///
    /// The logarithm is the principal complex branch, taken independently
    /// at every evaluation point.  Along the real axis the argument keeps
    /// a positive real part (`Re = 1 + σ²νu²/2`) and never crosses the
    /// cut; for contours far off the axis or extreme parameter regimes the
    /// per-point branch choice can jump, producing a discontinuous
    /// integrand.  Callers integrating over wide ranges should verify
    /// continuity for their parameter set (see the node-sweep integration
    /// test) rather than assume it.
    fn phi(&self, u: Complex64, maturity: Time) -> Complex64 {
        let i = Complex64::i();
        let f_tilde = self.ln_forward + self.omega * maturity;
        let z = self.skew + 0.5 * self.sigma * self.sigma * i * u;
        let w = 1.0 - i * u * self.nu * z;
        (i * u * f_tilde - (maturity / self.nu) * w.ln()).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cf_core::Error;

    fn calibrated() -> VarianceGamma {
        VarianceGamma::new(1.0, -0.14, 0.2, 0.12).unwrap()
    }

    #[test]
    fn construction_validates_parameters() {
        assert!(VarianceGamma::new(0.0, -0.14, 0.2, 0.12).is_err());
        assert!(VarianceGamma::new(1.0, -0.14, 0.0, 0.12).is_err());
        assert!(VarianceGamma::new(1.0, -0.14, -0.2, 0.12).is_err());
        assert!(VarianceGamma::new(1.0, -0.14, 0.2, -0.12).is_err());
    }

    #[test]
    fn martingale_correction_value() {
        // ω = ln(1 + 0.14·0.2 − 0.0144·0.2/2) / 0.2
        let model = calibrated();
        let expected = (1.0_f64 + 0.14 * 0.2 - 0.5 * 0.12 * 0.12 * 0.2).ln() / 0.2;
        assert_abs_diff_eq!(model.omega(), expected, epsilon = 1e-15);
    }

    #[test]
    fn non_positive_log_argument_is_domain_error() {
        // θν + σ²ν/2 ≥ 1 leaves no admissible drift correction.
        let result = VarianceGamma::new(1.0, 2.5, 0.5, 0.5);
        assert!(matches!(result, Err(Error::Domain(_))));
    }

    #[test]
    fn phi_at_zero_is_one() {
        let value = calibrated().phi(Complex64::new(0.0, 0.0), 0.25);
        assert_abs_diff_eq!(value.re, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(value.im, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn phi_at_minus_i_recovers_forward() {
        // Martingale property: φ(−i, T) = E[e^X] = F, by construction of ω.
        for maturity in [0.1, 0.25, 1.0, 5.0] {
            let value = calibrated().phi(-Complex64::i(), maturity);
            assert_abs_diff_eq!(value.re, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(value.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn phi_decays_polynomially_on_real_axis() {
        // |φ(u)| ~ u^(−2T/ν) for large real u; slower than log-normal but
        // still vanishing.
        let model = calibrated();
        let n50 = model.phi(Complex64::new(50.0, 0.0), 0.25).norm();
        let n200 = model.phi(Complex64::new(200.0, 0.0), 0.25).norm();
        assert!(n200 < n50 && n50 < 1.0);
    }

    #[test]
    fn log_argument_stays_right_of_cut_on_real_axis() {
        // Re(1 − iuν(θ + σ²iu/2)) = 1 + σ²νu²/2 > 0 for real u, so the
        // principal branch is continuous along the integration axis.
        let model = calibrated();
        for k in 0..=400 {
            let u = Complex64::new(k as Real, 0.0);
            let i = Complex64::i();
            let z = model.skew() + 0.5 * model.sigma() * model.sigma() * i * u;
            let w = 1.0 - i * u * model.nu() * z;
            assert!(w.re > 0.0, "Re(w) = {} at u = {}", w.re, k);
        }
    }
}
