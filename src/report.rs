//! All four metrics for one price series, computed in one call.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::metrics::returns::calculate_returns;
use crate::metrics::sharpe::{sharpe_ratio_detailed, SharpeOut};
use crate::metrics::sma::simple_moving_average;
use crate::metrics::std_dev::volatility;

/// Sample price series used when no prices are supplied.
pub const EXAMPLE_PRICES: [f64; 10] =
    [100.0, 102.0, 101.0, 103.0, 105.0, 107.0, 106.0, 108.0, 110.0, 112.0];

/// Report configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportCfg {
    /// SMA window.
    pub window: usize,
    /// Per-period risk-free rate for the Sharpe ratio.
    pub risk_free_rate: f64,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self { window: 3, risk_free_rate: 0.01 }
    }
}

/// SMA, returns, volatility and Sharpe ratio of one price series.
///
/// A single price has no returns, so `volatility` and `sharpe` are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub prices: Vec<f64>,
    pub window: usize,
    pub risk_free_rate: f64,
    pub sma: Vec<f64>,
    pub returns: Vec<f64>,
    pub volatility: Option<f64>,
    pub sharpe: Option<SharpeOut>,
}

impl MetricsReport {
    /// Runs every metric over `prices`. The first failing step's error is
    /// returned and nothing else.
    pub fn compute(prices: &[f64], cfg: &ReportCfg) -> Result<Self> {
        let sma = simple_moving_average(prices, cfg.window)?;
        let returns = calculate_returns(prices)?;

        let (volatility, sharpe) = if returns.is_empty() {
            (None, None)
        } else {
            let vol = volatility(&returns)?;
            let sharpe = sharpe_ratio_detailed(&returns, cfg.risk_free_rate)?;
            (Some(vol), Some(sharpe))
        };

        info!(
            prices = prices.len(),
            window = cfg.window,
            returns = returns.len(),
            "metrics report computed"
        );

        Ok(Self {
            prices: prices.to_vec(),
            window: cfg.window,
            risk_free_rate: cfg.risk_free_rate,
            sma,
            returns,
            volatility,
            sharpe,
        })
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quantitative Metrics Report")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Prices: {:?}", self.prices)?;
        writeln!(f, "Risk-free rate: {}", self.risk_free_rate)?;
        writeln!(f)?;
        writeln!(f, "Simple Moving Average (window={}):", self.window)?;
        writeln!(f, "  {:?}", self.sma)?;
        writeln!(f)?;

        // Display only; the stored returns keep full precision.
        let rounded: Vec<f64> = self.returns.iter().map(|r| (r * 1e6).round() / 1e6).collect();
        writeln!(f, "Returns:")?;
        writeln!(f, "  {rounded:?}")?;
        writeln!(f)?;

        match (self.volatility, &self.sharpe) {
            (Some(vol), Some(sharpe)) => {
                writeln!(f, "Volatility: {vol:.6}")?;
                writeln!(f)?;
                write!(f, "Sharpe Ratio: {:.6}", sharpe.sr)
            }
            _ => write!(f, "Volatility and Sharpe Ratio need at least two prices"),
        }
    }
}
