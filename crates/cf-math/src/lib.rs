//! # cf-math
//!
//! Numerical building blocks for cfpricer-rs: fixed-order Gauss-Legendre
//! quadrature (real and complex integrands), a memoizing quadrature-rule
//! cache, a 1D Newton root-finder, and the standard normal distribution
//! (via `statrs` special functions).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Standard normal probability density and cumulative distribution.
pub mod distributions;

/// Fixed-order numerical integration.
pub mod integrals;

/// 1D root-finding.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_pdf};
pub use integrals::{integrate, GaussLegendre, QuadratureCache};
