//! # cf-core
//!
//! Core types and error definitions for cfpricer-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – primitive type aliases, the error
//! enum, and the `ensure!` / `ensure_domain!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_domain!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years (year fraction to maturity).
pub type Time = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A price or value.
pub type Price = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
