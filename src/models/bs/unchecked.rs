// Raw Black-Scholes-Merton formulas with no input guards. Degenerate inputs
// (T = 0, sigma = 0, non-positive S or K) follow IEEE-754 arithmetic and come
// out as NaN or infinities.

use crate::models::utils::{norm_cdf, norm_pdf};
use crate::pricing::types::Greeks;

/// d1 = (ln(S/K) + (r + sigma²/2)·T) / (sigma·√T)
#[allow(non_snake_case)]
pub fn compute_d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / (sigma * T.sqrt())
}

/// d2 = d1 - sigma·√T
#[allow(non_snake_case)]
pub fn compute_d2(d1: f64, sigma: f64, T: f64) -> f64 {
    d1 - sigma * T.sqrt()
}

#[allow(non_snake_case)]
pub fn call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = compute_d1(S, K, T, r, sigma);
    let d2 = compute_d2(d1, sigma, T);
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

#[allow(non_snake_case)]
pub fn put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = compute_d1(S, K, T, r, sigma);
    let d2 = compute_d2(d1, sigma, T);
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// All six sensitivities from a single evaluation of d1 and d2.
#[allow(non_snake_case)]
pub fn greeks(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Greeks {
    let d1 = compute_d1(S, K, T, r, sigma);
    let d2 = compute_d2(d1, sigma, T);

    let sqrt_t = T.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = K * (-r * T).exp();

    let delta_call = norm_cdf(d1);
    let delta_put = delta_call - 1.0;

    // Gamma and vega are identical for calls and puts
    let gamma = pdf_d1 / (S * sigma * sqrt_t);
    let vega = S * sqrt_t * pdf_d1;

    let decay = -S * pdf_d1 * sigma / (2.0 * sqrt_t);
    let theta_call = decay - r * discounted_strike * norm_cdf(d2);
    let theta_put = decay + r * discounted_strike * norm_cdf(-d2);

    Greeks {
        delta_call,
        delta_put,
        gamma,
        theta_call,
        theta_put,
        vega,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_maturity_propagates_non_finite() {
        // ln(S/K) = 0 over a zero denominator
        assert!(compute_d1(100.0, 100.0, 0.0, 0.05, 0.2).is_nan());
        // ln(S/K) > 0 over a zero denominator
        assert_eq!(compute_d1(110.0, 100.0, 0.0, 0.05, 0.2), f64::INFINITY);
        let g = greeks(110.0, 100.0, 0.0, 0.05, 0.2);
        assert!(!g.is_finite());
    }

    #[test]
    fn test_zero_volatility_propagates_non_finite() {
        assert_eq!(compute_d1(90.0, 100.0, 1.0, 0.0, 0.0), f64::NEG_INFINITY);
        assert!(greeks(90.0, 100.0, 1.0, 0.0, 0.0).gamma.is_nan());
    }

    #[test]
    fn test_negative_spot_yields_nan_price() {
        assert!(call_price(-1.0, 100.0, 1.0, 0.05, 0.2).is_nan());
        assert!(put_price(-1.0, 100.0, 1.0, 0.05, 0.2).is_nan());
    }
}
