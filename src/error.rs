//! Error types for option pricing.

use std::fmt;

use thiserror::Error;

/// Pricing inputs that carry a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Spot,
    Strike,
    TimeToMaturity,
    Rate,
    Volatility,
    /// Only checked when `d1` is passed explicitly to `compute_d2`.
    D1,
}

impl Param {
    /// Conventional symbol used in the Black-Scholes formulas.
    pub fn symbol(&self) -> &'static str {
        match self {
            Param::Spot => "S",
            Param::Strike => "K",
            Param::TimeToMaturity => "T",
            Param::Rate => "r",
            Param::Volatility => "sigma",
            Param::D1 => "d1",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter {param}={value}: {reason}")]
    InvalidParameter {
        param: Param,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn invalid(param: Param, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            param,
            value,
            reason,
        }
    }

    /// The parameter whose precondition was violated.
    pub fn param(&self) -> Param {
        match self {
            Self::InvalidParameter { param, .. } => *param,
        }
    }
}
