//! # cfpricer
//!
//! Model-agnostic Fourier-inversion pricing of European options.
//!
//! Any model exposing a forward price and the risk-neutral characteristic
//! function of its log-forward price plugs into the pricers without
//! model-specific code.  Two inversion methods are provided — Gil-Pelaez
//! probability inversion and Carr-Madan/Lewis damped-contour pricing — on
//! top of a fixed-order Gauss-Legendre quadrature primitive, together with
//! the Black-Scholes closed form as ground truth and an
//! implied-volatility inversion to compare methods on a volatility scale.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `cf-*` crates.
//!
//! All prices are undiscounted forward prices; apply a discount factor
//! externally.
//!
//! ## Quick start
//!
//! ```rust
//! use cfpricer::models::BlackScholes;
//! use cfpricer::pricers::{gil_pelaez_price, implied_vol};
//!
//! let model = BlackScholes::new(100.0, 0.4)?;
//! let closed = model.forward_price(125.0, 5.0)?;
//! let inverted = gil_pelaez_price(&model, 125.0, 5.0, 256, 1000.0)?;
//! assert!((closed - inverted).abs() < 1e-6);
//!
//! let vol = implied_vol(100.0, 125.0, 5.0, inverted)?;
//! assert!((vol - 0.4).abs() < 1e-6);
//! # Ok::<(), cfpricer::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use cf_core as core;

/// Quadrature, root finding, and distributions.
pub use cf_math as math;

/// Characteristic-function models.
pub use cf_models as models;

/// Fourier pricers and implied-volatility inversion.
pub use cf_pricers as pricers;
