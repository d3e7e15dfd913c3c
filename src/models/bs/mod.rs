// Validated Black-Scholes-Merton pricing for European options on a
// non-dividend-paying underlying. Every entry point checks its inputs and
// reports the first violated precondition; the arithmetic itself lives in
// `unchecked`.

pub mod unchecked;

use crate::error::{Param, PricingError, Result};
use crate::pricing::types::Greeks;

fn require_positive(param: Param, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(param, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(param, value, "must be strictly positive"));
    }
    Ok(())
}

fn require_finite(param: Param, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(param, value, "must be finite"))
    }
}

/// Check the five pricing inputs in formula order: S, K, T, r, sigma.
#[allow(non_snake_case)]
pub fn validate_inputs(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<()> {
    require_positive(Param::Spot, S)?;
    require_positive(Param::Strike, K)?;
    require_positive(Param::TimeToMaturity, T)?;
    require_finite(Param::Rate, r)?;
    require_positive(Param::Volatility, sigma)
}

/// Standardised moneyness term `d1`.
///
/// ```text
/// d1 = (ln(S/K) + (r + sigma²/2)·T) / (sigma·√T)
/// ```
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] when S, K, T or sigma is not strictly
/// positive, or any input is not finite.
#[allow(non_snake_case)]
pub fn compute_d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<f64> {
    validate_inputs(S, K, T, r, sigma)?;
    Ok(unchecked::compute_d1(S, K, T, r, sigma))
}

/// `d2 = d1 - sigma·√T`.
#[allow(non_snake_case)]
pub fn compute_d2(d1: f64, sigma: f64, T: f64) -> Result<f64> {
    require_finite(Param::D1, d1)?;
    require_positive(Param::Volatility, sigma)?;
    require_positive(Param::TimeToMaturity, T)?;
    Ok(unchecked::compute_d2(d1, sigma, T))
}

/// Price of a European call: `S·Φ(d1) - K·e^(-rT)·Φ(d2)`.
///
/// Rounding can leave a residual of order 1e-16 below zero for options far
/// out of the money; clamp with `.max(0.0)` if a sign guarantee matters.
#[allow(non_snake_case)]
pub fn call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<f64> {
    validate_inputs(S, K, T, r, sigma)?;
    Ok(unchecked::call_price(S, K, T, r, sigma))
}

/// Price of a European put: `K·e^(-rT)·Φ(-d2) - S·Φ(-d1)`.
#[allow(non_snake_case)]
pub fn put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<f64> {
    validate_inputs(S, K, T, r, sigma)?;
    Ok(unchecked::put_price(S, K, T, r, sigma))
}

/// Delta, gamma, theta and vega for the call and put sharing these inputs.
///
/// Theta is per year and vega per unit of volatility (not per percentage
/// point).
#[allow(non_snake_case)]
pub fn greeks(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<Greeks> {
    validate_inputs(S, K, T, r, sigma)?;
    Ok(unchecked::greeks(S, K, T, r, sigma))
}
