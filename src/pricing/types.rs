use crate::error::Result;
use crate::models::bs;

/// Market and contract inputs for a single European option
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct OptionParams {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility of log-returns (sigma)
    pub volatility: f64,
}

impl Default for OptionParams {
    /// At-the-money one-year option: S=100, K=100, T=1, r=5%, sigma=20%
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl OptionParams {
    pub fn new(spot: f64, strike: f64, time_to_maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_maturity,
            rate,
            volatility,
        }
    }

    pub fn validate(&self) -> Result<()> {
        bs::validate_inputs(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        )
    }

    pub fn d1(&self) -> Result<f64> {
        bs::compute_d1(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        )
    }

    pub fn d2(&self) -> Result<f64> {
        bs::compute_d2(self.d1()?, self.volatility, self.time_to_maturity)
    }

    pub fn call_price(&self) -> Result<f64> {
        bs::call_price(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        )
    }

    pub fn put_price(&self) -> Result<f64> {
        bs::put_price(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        )
    }

    pub fn greeks(&self) -> Result<Greeks> {
        bs::greeks(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        )
    }

    /// Call, put and Greeks in one pass; inputs are validated once.
    pub fn price(&self) -> Result<PricingResult> {
        self.validate()?;
        Ok(self.price_unchecked())
    }

    /// Same as [`OptionParams::price`] but without input guards, so degenerate
    /// inputs surface as NaN or infinities in the result.
    pub fn price_unchecked(&self) -> PricingResult {
        let (s, k, t, r, sigma) = (
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        );
        PricingResult {
            params: *self,
            call: bs::unchecked::call_price(s, k, t, r, sigma),
            put: bs::unchecked::put_price(s, k, t, r, sigma),
            greeks: bs::unchecked::greeks(s, k, t, r, sigma),
        }
    }
}

/// First and second order sensitivities for a call/put pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// dC/dS = Φ(d1)
    pub delta_call: f64,
    /// dP/dS = Φ(d1) - 1
    pub delta_put: f64,
    /// d²V/dS², shared by call and put
    pub gamma: f64,
    /// dC/dt, per year
    pub theta_call: f64,
    /// dP/dt, per year
    pub theta_put: f64,
    /// dV/dsigma, shared by call and put
    pub vega: f64,
}

impl Greeks {
    /// Greek names in output order
    pub const NAMES: [&'static str; 6] = [
        "delta_call",
        "delta_put",
        "gamma",
        "theta_call",
        "theta_put",
        "vega",
    ];

    /// `(name, value)` pairs in [`Greeks::NAMES`] order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let values = [
            self.delta_call,
            self.delta_put,
            self.gamma,
            self.theta_call,
            self.theta_put,
            self.vega,
        ];
        Self::NAMES.into_iter().zip(values)
    }

    /// Look up a greek by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite())
    }
}

/// Everything one pricing invocation produces
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub params: OptionParams,
    pub call: f64,
    pub put: f64,
    pub greeks: Greeks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeks_lookup_by_name() {
        let g = OptionParams::default().greeks().unwrap();
        assert_eq!(g.get("gamma"), Some(g.gamma));
        assert_eq!(g.get("theta_put"), Some(g.theta_put));
        assert_eq!(g.get("rho"), None);

        let names: Vec<_> = g.iter().map(|(n, _)| n).collect();
        assert_eq!(names, Greeks::NAMES);
    }

    #[test]
    fn test_price_matches_individual_calls() {
        let params = OptionParams::new(105.0, 95.0, 0.5, 0.03, 0.25);
        let result = params.price().unwrap();
        assert_eq!(result.call, params.call_price().unwrap());
        assert_eq!(result.put, params.put_price().unwrap());
        assert_eq!(result.greeks, params.greeks().unwrap());
        assert_eq!(result.params, params);
    }

    #[test]
    fn test_price_unchecked_keeps_degenerate_values() {
        let params = OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2);
        assert!(params.price().is_err());
        let result = params.price_unchecked();
        assert!(result.call.is_nan());
        assert!(!result.greeks.is_finite());
    }
}
