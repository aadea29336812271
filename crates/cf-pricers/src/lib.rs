//! # cf-pricers
//!
//! Fourier-inversion pricing of European calls under
//! characteristic-function models, plus the implied-volatility inversion
//! used to compare methods on a volatility scale.
//!
//! Two competing inversion algorithms are provided:
//!
//! - [`gil_pelaez`] recovers the two exercise probabilities from the
//!   characteristic function and combines them as `F·S − K·P`;
//! - [`carr_madan_price`] integrates a damped transform of the call payoff
//!   along a contour chosen by the damping exponent α, with residue
//!   corrections at the singular values of α and an optimal-contour
//!   selector for Variance Gamma.
//!
//! All prices are **undiscounted forward** prices; callers apply a
//! discount factor externally.  Both pricers take a fixed abscissa count
//! and a finite truncation bound and perform no adaptivity — truncation
//! and resolution bias is the caller's to control via convergence studies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Carr-Madan / Lewis damped-contour pricer and optimal damping selector.
pub mod carr_madan;

/// Gil-Pelaez probability-inversion pricer.
pub mod gil_pelaez;

/// Implied-volatility inversion against the Black closed form.
pub mod implied_vol;

pub use carr_madan::{carr_madan_price, carr_madan_price_with_rule, optimal_alpha};
pub use gil_pelaez::{gil_pelaez, gil_pelaez_price, gil_pelaez_with_rule, GilPelaezPrice};
pub use implied_vol::implied_vol;
