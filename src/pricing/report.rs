//! Plain-text rendering of a pricing run.

use std::fmt;

use crate::pricing::types::PricingResult;

const DEFAULT_PRECISION: usize = 4;

/// Call/put prices followed by one line per greek. The formatter precision
/// (`{:.6}`) sets the decimals, 4 when none is given.
///
/// ```text
/// Call Option Price: 10.4506
/// Put Option Price: 5.5735
///
/// Greeks:
/// delta_call: 0.6368
/// ...
/// ```
impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        writeln!(f, "Call Option Price: {:.*}", precision, self.call)?;
        writeln!(f, "Put Option Price: {:.*}", precision, self.put)?;
        writeln!(f)?;
        writeln!(f, "Greeks:")?;
        for (name, value) in self.greeks.iter() {
            writeln!(f, "{}: {:.*}", name, precision, value)?;
        }
        Ok(())
    }
}

/// Render `result` with `precision` decimals per value.
pub fn render(result: &PricingResult, precision: usize) -> String {
    format!("{:.*}", precision, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::types::OptionParams;

    #[test]
    fn test_reference_report() {
        let result = OptionParams::default().price().unwrap();
        let expected = "\
Call Option Price: 10.4506
Put Option Price: 5.5735

Greeks:
delta_call: 0.6368
delta_put: -0.3632
gamma: 0.0188
theta_call: -6.4140
theta_put: -1.6579
vega: 37.5240
";
        assert_eq!(render(&result, 4), expected);
        assert_eq!(result.to_string(), expected);
        assert_eq!(format!("{:.4}", result), expected);
    }

    #[test]
    fn test_display_precision_follows_formatter() {
        let result = OptionParams::default().price().unwrap();
        let report = format!("{:.2}", result);
        assert!(
            report.starts_with("Call Option Price: 10.45\nPut Option Price: 5.57\n")
        );
        assert!(report.ends_with("vega: 37.52\n"));
        assert_eq!(report, render(&result, 2));
    }

    #[test]
    fn test_precision_and_non_finite_values() {
        let params = OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2);
        let result = params.price_unchecked();
        let report = render(&result, 2);
        assert!(report.starts_with("Call Option Price: NaN\n"));
        assert_eq!(report.lines().count(), 10);
    }
}
