pub mod bs;

/// Standard normal distribution helpers shared by the pricing formulas
pub mod utils {
    use statrs::function::erf::erfc;
    use std::f64::consts::{PI, SQRT_2};

    /// Standard normal cumulative distribution function Φ(x)
    ///
    /// Written as `0.5 * erfc(-x / sqrt(2))` so the lower tail does not cancel
    /// against 1. Absolute accuracy is that of statrs' `erfc`, around 1e-11.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / SQRT_2)
    }

    /// Standard normal probability density function φ(x)
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
