//! Gauss-Legendre quadrature.
//!
//! Nodes and weights are the roots of the order-n Legendre polynomial and
//! the associated Christoffel numbers, computed by Newton iteration on the
//! three-term recurrence.  The rule is exact for polynomials of degree
//! ≤ 2n−1; for the smooth, decaying integrands produced by the Fourier
//! pricers convergence is spectral in n, up to the bias introduced by
//! truncating an infinite domain at the caller's bound.

use cf_core::{ensure, errors::Result, Real};
use num_complex::Complex64;
use std::f64::consts::PI;

/// A Gauss-Legendre quadrature rule on the canonical interval [−1, 1].
///
/// Immutable once built; reuse it (or share it through a
/// [`QuadratureCache`](super::QuadratureCache)) across pricing calls.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    x: Vec<Real>,
    w: Vec<Real>,
}

impl GaussLegendre {
    /// Build the rule of the given `order` (number of abscissae).
    ///
    /// Fails with `InvalidInput` for `order == 0`.
    pub fn new(order: usize) -> Result<Self> {
        ensure!(order > 0, "quadrature order must be positive, got {order}");
        let (x, w) = legendre_nodes_weights(order);
        Ok(Self { x, w })
    }

    /// Quadrature nodes on [−1, 1], in increasing order.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Quadrature weights.
    pub fn w(&self) -> &[Real] {
        &self.w
    }

    /// Number of abscissae.
    pub fn order(&self) -> usize {
        self.x.len()
    }

    /// Integrate `f` on `[a, b]` by affinely mapping the canonical nodes.
    ///
    /// Requires `a < b`; performs no adaptivity and reports no error
    /// estimate — the caller is responsible for choosing the order and the
    /// truncation bound.
    pub fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure!(b > a, "integration interval [{a}, {b}] must have positive width");
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        Ok(self
            .x
            .iter()
            .zip(self.w.iter())
            .map(|(&xi, &wi)| wi * f(mid + half * xi))
            .sum::<Real>()
            * half)
    }

    /// Integrate a complex-valued `f` on `[a, b]`.
    ///
    /// Same contract as [`integrate`](Self::integrate); the nodes stay on
    /// the real line, only the integrand values are complex.
    pub fn integrate_complex<F: Fn(Real) -> Complex64>(
        &self,
        f: F,
        a: Real,
        b: Real,
    ) -> Result<Complex64> {
        ensure!(b > a, "integration interval [{a}, {b}] must have positive width");
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        Ok(self
            .x
            .iter()
            .zip(self.w.iter())
            .map(|(&xi, &wi)| f(mid + half * xi) * wi)
            .sum::<Complex64>()
            * half)
    }
}

/// Order-n Legendre polynomial and its derivative at `x`.
fn legendre_polynomial_and_derivative(n: usize, x: Real) -> (Real, Real) {
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let kf = k as Real;
        let p_next = ((2.0 * kf - 1.0) * x * p - (kf - 1.0) * p_prev) / kf;
        p_prev = p;
        p = p_next;
    }
    // P'_n(x) = n (x P_n(x) − P_{n−1}(x)) / (x² − 1)
    let dp = (n as Real) * (x * p - p_prev) / (x * x - 1.0);
    (p, dp)
}

/// Compute the order-n nodes and weights on [−1, 1].
///
/// Newton iteration from the cosine initial guess; roots are symmetric
/// about zero, so only half of them are solved for and the rest mirrored.
fn legendre_nodes_weights(n: usize) -> (Vec<Real>, Vec<Real>) {
    if n == 1 {
        // Midpoint rule: single node at the origin, weight μ₀ = 2.
        return (vec![0.0], vec![2.0]);
    }

    let mut x = vec![0.0; n];
    let mut w = vec![0.0; n];
    let half = n.div_ceil(2);

    for i in 0..half {
        let mut z = (PI * (i as Real + 0.75) / (n as Real + 0.5)).cos();
        for _ in 0..100 {
            let (p, dp) = legendre_polynomial_and_derivative(n, z);
            let dz = -p / dp;
            z += dz;
            if dz.abs() < 1e-15 {
                break;
            }
        }
        let (_, dp) = legendre_polynomial_and_derivative(n, z);
        let weight = 2.0 / ((1.0 - z * z) * dp * dp);

        x[i] = -z;
        x[n - 1 - i] = z;
        w[i] = weight;
        w[n - 1 - i] = weight;
    }

    (x, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::Error;
    use proptest::prelude::*;

    fn assert_near(a: Real, b: Real, tol: Real) {
        assert!((a - b).abs() < tol, "expected {b}, got {a}, diff = {}", (a - b).abs());
    }

    #[test]
    fn zero_order_is_invalid() {
        assert!(matches!(GaussLegendre::new(0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn degenerate_interval_is_invalid() {
        let q = GaussLegendre::new(4).unwrap();
        assert!(q.integrate(|x| x, 1.0, 1.0).is_err());
        assert!(q.integrate(|x| x, 2.0, 1.0).is_err());
    }

    #[test]
    fn order_one_is_midpoint() {
        let q = GaussLegendre::new(1).unwrap();
        assert_eq!(q.x(), &[0.0]);
        assert_eq!(q.w(), &[2.0]);
    }

    #[test]
    fn order_five_reference_nodes() {
        // Abramowitz & Stegun 25.4.30: largest node and its weight.
        let q = GaussLegendre::new(5).unwrap();
        assert_near(q.x()[4], 0.906_179_845_938_664, 1e-12);
        assert_near(q.w()[4], 0.236_926_885_056_189, 1e-12);
        assert_near(q.x()[2], 0.0, 1e-15);
    }

    #[test]
    fn weights_sum_to_interval_length() {
        for order in [2, 7, 32, 128] {
            let q = GaussLegendre::new(order).unwrap();
            let total: Real = q.w().iter().sum();
            assert_near(total, 2.0, 1e-12);
        }
    }

    #[test]
    fn exact_for_polynomials() {
        // ∫_{-1}^{1} x⁴ dx = 2/5 — exact with order ≥ 3.
        let q = GaussLegendre::new(3).unwrap();
        let result = q.integrate(|x| x.powi(4), -1.0, 1.0).unwrap();
        assert_near(result, 0.4, 1e-14);
    }

    #[test]
    fn integrate_sin() {
        // ∫₀^π sin(x) dx = 2
        let q = GaussLegendre::new(10).unwrap();
        let result = q.integrate(|x| x.sin(), 0.0, PI).unwrap();
        assert_near(result, 2.0, 1e-10);
    }

    #[test]
    fn gaussian_density_integrates_to_one() {
        // ∫ exp(−x²/2)/√(2π) dx over [−10, 10] ≈ 1, order 256.
        let q = GaussLegendre::new(256).unwrap();
        let norm = (2.0 * PI).sqrt();
        let result = q.integrate(|x| (-0.5 * x * x).exp() / norm, -10.0, 10.0).unwrap();
        assert_near(result, 1.0, 1e-6);
    }

    #[test]
    fn complex_integrand_oscillatory() {
        // ∫₀¹ e^{ix} dx = sin(1) + i(1 − cos(1))
        let q = GaussLegendre::new(16).unwrap();
        let result = q
            .integrate_complex(|x| Complex64::new(0.0, x).exp(), 0.0, 1.0)
            .unwrap();
        assert_near(result.re, 1.0_f64.sin(), 1e-12);
        assert_near(result.im, 1.0 - 1.0_f64.cos(), 1e-12);
    }

    #[test]
    fn complex_agrees_with_real_on_real_integrands() {
        let q = GaussLegendre::new(12).unwrap();
        let real = q.integrate(|x| x.exp(), 0.0, 2.0).unwrap();
        let complex = q.integrate_complex(|x| Complex64::new(x.exp(), 0.0), 0.0, 2.0).unwrap();
        assert_near(complex.re, real, 1e-14);
        assert_near(complex.im, 0.0, 1e-14);
    }

    proptest! {
        /// Exactness on random cubics with the two-point rule
        /// (degree ≤ 2·2 − 1 = 3).
        #[test]
        fn two_point_rule_exact_on_cubics(
            c0 in -10.0..10.0f64,
            c1 in -10.0..10.0f64,
            c2 in -10.0..10.0f64,
            c3 in -10.0..10.0f64,
        ) {
            let q = GaussLegendre::new(2).unwrap();
            let f = |x: Real| c0 + x * (c1 + x * (c2 + x * c3));
            let numeric = q.integrate(f, -1.0, 1.0).unwrap();
            // ∫_{-1}^{1}: odd powers cancel.
            let analytic = 2.0 * c0 + 2.0 / 3.0 * c2;
            prop_assert!((numeric - analytic).abs() < 1e-10 * (1.0 + analytic.abs()));
        }
    }
}
