//! Fixed-order numerical integration.
//!
//! The only rule provided is Gauss-Legendre: the pricing integrands this
//! library produces are smooth and rapidly decaying, and the fixed-order
//! primitive is part of the public contract.  Callers choose the abscissa
//! count and the truncation bound, and downstream convergence studies
//! depend on reproducing the rule exactly; there is **no adaptivity and
//! no error estimate** anywhere in this module.

pub mod gauss_legendre;

pub use gauss_legendre::GaussLegendre;

use cf_core::{errors::Result, Real};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Integrate `f` over `[a, b]` with a Gauss-Legendre rule of the given
/// `order`.
///
/// Convenience wrapper that builds the rule on the fly; callers evaluating
/// many integrals at the same order should hold a [`GaussLegendre`] rule
/// (or a [`QuadratureCache`]) and use
/// [`GaussLegendre::integrate`] directly.
pub fn integrate<F: Fn(Real) -> Real>(f: F, order: usize, a: Real, b: Real) -> Result<Real> {
    GaussLegendre::new(order)?.integrate(f, a, b)
}

/// A memoizing store of Gauss-Legendre rules keyed by order.
///
/// Computing a rule's nodes and weights dominates the cost of a pricing
/// call, so rules are built lazily, at most once per distinct order, and
/// shared.  The cache is an explicit object rather than process-global
/// state so tests and concurrent callers can use isolated instances.
#[derive(Debug, Default)]
pub struct QuadratureCache {
    rules: Mutex<HashMap<usize, Arc<GaussLegendre>>>,
}

impl QuadratureCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the rule for `order`, building and storing it on first use.
    pub fn rule(&self, order: usize) -> Result<Arc<GaussLegendre>> {
        // A poisoned lock only means another thread panicked mid-lookup;
        // the map itself is append-only and stays valid.
        let mut rules = match self.rules.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(rule) = rules.get(&order) {
            return Ok(Arc::clone(rule));
        }
        let rule = Arc::new(GaussLegendre::new(order)?);
        rules.insert(order, Arc::clone(&rule));
        Ok(rule)
    }

    /// Number of distinct orders currently stored.
    pub fn len(&self) -> usize {
        match self.rules.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
