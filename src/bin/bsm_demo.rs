//! Black-Scholes-Merton demonstration
//!
//! Prices a European call/put pair and prints the prices and Greeks. With no
//! arguments it uses S=100, K=100, T=1, r=0.05, sigma=0.2.
//!
//! ```text
//! bsm_demo
//! bsm_demo --spot 110 --vol 0.3 --precision 6
//! bsm_demo --config demo.toml
//! RUST_LOG=debug bsm_demo
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bsm_lib::{price_option, render_report, DemoConfig};

#[derive(Parser, Debug)]
#[command(name = "bsm_demo")]
#[command(author, version, about = "Black-Scholes-Merton prices and Greeks", long_about = None)]
struct Cli {
    /// TOML file with `precision`, `validate` and a `[params]` table
    #[arg(short, long)]
    config: Option<String>,

    /// Spot price of the underlying (S)
    #[arg(long, allow_negative_numbers = true)]
    spot: Option<f64>,

    /// Strike price (K)
    #[arg(long, allow_negative_numbers = true)]
    strike: Option<f64>,

    /// Time to maturity in years (T)
    #[arg(long, allow_negative_numbers = true)]
    maturity: Option<f64>,

    /// Continuously-compounded risk-free rate (r)
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility (sigma)
    #[arg(long, allow_negative_numbers = true)]
    vol: Option<f64>,

    /// Decimal places in the output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Skip input validation and print whatever the raw formulas produce
    #[arg(long)]
    unchecked: bool,
}

impl Cli {
    fn into_config(self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };

        let params = &mut config.params;
        if let Some(spot) = self.spot {
            params.spot = spot;
        }
        if let Some(strike) = self.strike {
            params.strike = strike;
        }
        if let Some(maturity) = self.maturity {
            params.time_to_maturity = maturity;
        }
        if let Some(rate) = self.rate {
            params.rate = rate;
        }
        if let Some(vol) = self.vol {
            params.volatility = vol;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.unchecked {
            config.validate = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = Cli::parse().into_config()?;
    info!(?config, "running demonstration");

    let result = if config.validate {
        price_option(&config.params).context("cannot price option")?
    } else {
        config.params.price_unchecked()
    };

    print!("{}", render_report(&result, config.precision));
    Ok(())
}
