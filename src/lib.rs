//! # BSM-Lib: Black-Scholes-Merton Pricing and Greeks
//!
//! `bsm-lib` prices European options on a non-dividend-paying underlying with the
//! closed-form Black-Scholes-Merton model and computes their first and second order
//! sensitivities.
//!
//! ## Core Features
//!
//! - **d1 / d2**: the standardised moneyness terms behind every formula
//! - **Pricing**: call and put prices, consistent with put-call parity
//! - **Greeks**: delta (call and put), gamma, theta (call and put) and vega
//! - **Validated inputs**: typed [`PricingError`] naming the offending parameter,
//!   with the unguarded formulas kept in [`models::bs::unchecked`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{call_price, greeks, put_price};
//!
//! let (s, k, t, r, sigma) = (100.0, 100.0, 1.0, 0.05, 0.2);
//! let call = call_price(s, k, t, r, sigma)?;
//! let put = put_price(s, k, t, r, sigma)?;
//! let g = greeks(s, k, t, r, sigma)?;
//!
//! assert!((call - 10.4506).abs() < 1e-4);
//! assert!((put - 5.5735).abs() < 1e-4);
//! assert!((g.delta_call - g.delta_put - 1.0).abs() < 1e-12);
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! ## Input Domain
//!
//! S, K, T and sigma must be strictly positive and finite; r may take any finite
//! value. A zero maturity or zero volatility divides by zero inside d1, so the
//! validated API rejects it instead of returning NaN or infinity.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{Param, PricingError, Result};

// The five pricing functions
pub use models::bs::{call_price, compute_d1, compute_d2, greeks, put_price, validate_inputs};

// Standard normal helpers
pub use models::utils::{norm_cdf, norm_pdf};

pub use pricing::report::render as render_report;
pub use pricing::types::{Greeks, OptionParams, PricingResult};

#[cfg(feature = "serde")]
pub use pricing::config::DemoConfig;

use tracing::{debug, warn};

/// Price a call/put pair and compute its Greeks in one call.
///
/// Inputs are validated once, then d1 and d2 are evaluated and shared by every
/// output.
///
/// # Arguments
///
/// * `params` - Spot, strike, maturity (years), continuously-compounded rate and
///   volatility of the option
///
/// # Returns
///
/// [`PricingResult`] holding the inputs, the call and put prices and the six Greeks.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] identifying the first input that violates its
/// precondition, checked in the order S, K, T, r, sigma.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{price_option, OptionParams};
///
/// let result = price_option(&OptionParams::new(110.0, 100.0, 0.5, 0.03, 0.25))?;
/// println!("call {:.4} put {:.4} gamma {:.6}", result.call, result.put, result.greeks.gamma);
/// # Ok::<(), bsm_lib::PricingError>(())
/// ```
pub fn price_option(params: &OptionParams) -> Result<PricingResult> {
    let result = params.price().inspect_err(|err| {
        warn!(%err, "rejected option parameters");
    })?;

    debug!(
        spot = params.spot,
        strike = params.strike,
        maturity = params.time_to_maturity,
        rate = params.rate,
        volatility = params.volatility,
        call = result.call,
        put = result.put,
        "priced option"
    );

    Ok(result)
}
