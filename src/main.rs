//! quantcalc - prints SMA, returns, volatility and Sharpe ratio for a price series.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quant_metrics::input::{parse_rate, parse_window_size, split_series};
use quant_metrics::{validate_window_size, MetricsReport, ReportCfg, SeriesKind, EXAMPLE_PRICES};

#[derive(Parser, Debug)]
#[command(name = "quantcalc")]
#[command(about = "Basic quantitative metrics over a price series")]
#[command(version)]
struct Cli {
    /// Prices separated by commas or spaces. Defaults to a sample series.
    #[arg(long, allow_hyphen_values = true)]
    prices: Option<String>,

    /// SMA window size (default 3).
    #[arg(long, allow_hyphen_values = true)]
    window: Option<String>,

    /// Per-period risk-free rate (default 0.01).
    #[arg(long = "risk-free-rate", allow_hyphen_values = true)]
    risk_free_rate: Option<String>,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let defaults = ReportCfg::default();

    let prices = match cli.prices.as_deref() {
        Some(text) => split_series(text, SeriesKind::Price)?,
        None => EXAMPLE_PRICES.to_vec(),
    };

    let window = match cli.window.as_deref() {
        Some(tok) => {
            let w = parse_window_size(tok)?;
            validate_window_size(w, prices.len())?;
            usize::try_from(w).context("window size does not fit in usize")?
        }
        None => defaults.window,
    };

    let risk_free_rate = match cli.risk_free_rate.as_deref() {
        Some(tok) => parse_rate(tok)?,
        None => defaults.risk_free_rate,
    };

    let cfg = ReportCfg { window, risk_free_rate };
    debug!(?cfg, prices = prices.len(), "running quantcalc");

    let report = MetricsReport::compute(&prices, &cfg)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
