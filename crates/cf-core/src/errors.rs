//! Error types for cfpricer-rs.
//!
//! A single `thiserror`-derived enum covers the whole library: invalid
//! caller input, mathematical domain violations, and root-finder
//! convergence failures.  Errors are raised at the point of failure and
//! propagated to the caller unchanged — there is no internal retry and no
//! fallback pricing path.

use crate::Real;
use thiserror::Error;

/// The top-level error type used throughout cfpricer-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A caller-supplied argument was outside its admissible range
    /// (non-positive strike, maturity, abscissa count, interval width, …).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A mathematical domain violation (logarithm of a non-positive
    /// argument, vanishing normalizing factor, …).
    #[error("domain error: {0}")]
    Domain(String),

    /// A root-finder exhausted its iteration budget or produced a
    /// non-finite iterate.
    #[error("no convergence: {0}")]
    NoConvergence(String),

    /// The implied-volatility inversion failed to converge.  Carries the
    /// original inputs for diagnosis.
    #[error(
        "implied volatility did not converge \
         (forward={forward}, strike={strike}, maturity={maturity}, price={price})"
    )]
    ImpliedVolFailed {
        /// Forward price passed to the solver.
        forward: Real,
        /// Strike passed to the solver.
        strike: Real,
        /// Maturity (year fraction) passed to the solver.
        maturity: Real,
        /// Target option price passed to the solver.
        price: Real,
    },
}

/// Shorthand `Result` type used throughout cfpricer-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a caller-supplied precondition.
///
/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cf_core::ensure;
/// fn positive(x: f64) -> cf_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Validate a mathematical domain requirement.
///
/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cf_core::ensure_domain;
/// fn safe_ln(x: f64) -> cf_core::Result<f64> {
///     ensure_domain!(x > 0.0, "log of non-positive argument {x}");
///     Ok(x.ln())
/// }
/// assert!(safe_ln(2.0).is_ok());
/// assert!(safe_ln(0.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}
