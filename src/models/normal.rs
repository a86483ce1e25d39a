// Standard normal distribution helpers used by the closed-form formulas.

use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function.
///
/// Φ(x) = 0.5 * [1 + erf(x / sqrt(2))]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Standard normal probability density function.
pub fn normal_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}
