use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pricing::types::OptionParams;

/// Settings for the demonstration run, readable from TOML:
///
/// ```toml
/// precision = 6
/// validate = true
///
/// [params]
/// spot = 100.0
/// strike = 95.0
/// time_to_maturity = 0.5
/// rate = 0.03
/// volatility = 0.25
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default)]
    pub params: OptionParams,

    /// Decimal places printed for every value
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Reject invalid inputs before pricing. When false the raw formulas run
    /// and degenerate inputs show up as NaN/inf in the report.
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            params: OptionParams::default(),
            precision: default_precision(),
            validate: default_validate(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse demo configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
    }
}

fn default_precision() -> usize {
    4
}

fn default_validate() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_reference_scenario() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(
            config.params,
            OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2)
        );
        assert_eq!(config.precision, 4);
        assert!(config.validate);
    }

    #[test]
    fn test_full_config() {
        let config = DemoConfig::from_toml_str(
            r#"
            precision = 6
            validate = false

            [params]
            spot = 120.0
            strike = 100.0
            time_to_maturity = 0.25
            rate = -0.005
            volatility = 0.35
            "#,
        )
        .unwrap();
        assert_eq!(config.precision, 6);
        assert!(!config.validate);
        assert_eq!(config.params.spot, 120.0);
        assert_eq!(config.params.rate, -0.005);
    }

    #[test]
    fn test_partial_params_rejected() {
        // A [params] table must name all five inputs
        let err = DemoConfig::from_toml_str("[params]\nspot = 90.0\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DemoConfig::from_toml_str("precison = 3").is_err());
        assert!(DemoConfig::load("does/not/exist.toml").is_err());
    }
}
