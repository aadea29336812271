//! # cf-models
//!
//! Characteristic-function models for cfpricer-rs.
//!
//! A model is anything exposing a forward price and the risk-neutral
//! characteristic function of its log-forward price at a complex frequency
//! argument.  Anything satisfying that capability set prices through the
//! Fourier pricers without model-specific code; Black-Scholes and Variance
//! Gamma are provided as peers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use cf_core::{Real, Time};
use num_complex::Complex64;

/// Black-Scholes model (closed form and characteristic function).
pub mod black_scholes;

/// Variance Gamma pure-jump model.
pub mod variance_gamma;

pub use black_scholes::{black_forward, BlackScholes};
pub use variance_gamma::VarianceGamma;

/// A model of the log-forward price specified through its risk-neutral
/// characteristic function.
///
/// Implementations must be pure: two calls with the same arguments return
/// bit-identical values.  The pricers evaluate `phi` off the real axis
/// (e.g. at `u − i` or along a damped contour), so implementations must
/// accept arbitrary complex arguments inside their strip of analyticity.
pub trait CharacteristicFunction {
    /// The undiscounted forward price of the underlying.
    fn forward(&self) -> Real;

    /// The characteristic function φ(u, T) of the log-forward price at
    /// maturity `maturity`, evaluated at the complex frequency `u`.
    fn phi(&self, u: Complex64, maturity: Time) -> Complex64;
}
