//! Module: `metrics::sharpe`
//!
//! Deterministic **non-annualized Sharpe Ratio** with a constant risk-free rate:
//!
//! \[ \mathrm{SR} = \frac{\mathbb{E}[R] - R_f}{\mathrm{SD}[R]} \]
//!
//! - **Numerator** is the KBN mean of the returns minus `risk_free_rate`.
//! - **Denominator** is [`volatility`](crate::metrics::std_dev::volatility)
//!   (sample SD, `n - 1` divisor). Subtracting a constant rate leaves the
//!   dispersion unchanged, so `SD[R]` is used directly.
//!
//! # Zero volatility
//! When the denominator is exactly zero the ratio is decided explicitly
//! instead of relying on IEEE division:
//!
//! | volatility | excess | ratio |
//! |---|---|---|
//! | 0 | 0 | `0.0` |
//! | 0 | ≠ 0 | `±inf`, sign of the excess |
//! | ≠ 0 | any | `excess / volatility` |
//!
//! An infinite ratio is a valid result; test for it with `f64::is_infinite`
//! or [`SharpeFlags::unbounded`].
//!
//! # Non-annualized only
//! The ratio is per period. Annualize on the caller side with
//! `sr * sqrt(periods_per_year)` where appropriate.
//!
//! # Examples
//! ```
//! use quant_metrics::metrics::sharpe::{sharpe_ratio, sharpe_ratio_detailed};
//!
//! let rets = [0.01, 0.02, 0.03];
//! let sr = sharpe_ratio(&rets, 0.0).unwrap();
//! assert!((sr - 2.0).abs() < 1e-12);
//!
//! let flat = sharpe_ratio_detailed(&[0.01, 0.01, 0.01], 0.0).unwrap();
//! assert!(flat.flags.zero_volatility && flat.flags.unbounded);
//! assert_eq!(flat.sr, f64::INFINITY);
//! ```
//!
//! ---
//! Licensed under **MIT OR Apache-2.0** at your option.
//!

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{MetricsError, Result, SeriesKind};
use crate::metrics::mean::mean;
use crate::metrics::std_dev::volatility;
use crate::metrics::validate::{validate_rate, validate_returns};

/// Diagnostic flags for a Sharpe computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SharpeFlags {
    /// The denominator was exactly zero.
    pub zero_volatility: bool,
    /// The ratio is `±inf` (zero volatility with a non-zero excess).
    pub unbounded: bool,
}

/// Output bundle for a Sharpe computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SharpeOut {
    /// Non-annualized Sharpe Ratio.
    pub sr: f64,
    /// Mean of the returns.
    pub mean_return: f64,
    /// `mean_return - risk_free_rate`.
    pub excess_return: f64,
    /// Sample standard deviation of the returns.
    pub volatility: f64,
    /// Number of returns used.
    pub n: usize,
    /// Additional flags.
    pub flags: SharpeFlags,
}

/// Sharpe ratio of `returns` over a constant `risk_free_rate`, with the
/// numerator and denominator reported alongside.
///
/// # Errors
/// - empty `returns`
/// - non-finite `risk_free_rate`
/// - non-finite element of `returns`, reported at its index
pub fn sharpe_ratio_detailed(returns: &[f64], risk_free_rate: f64) -> Result<SharpeOut> {
    if returns.is_empty() {
        return Err(MetricsError::EmptySeries { kind: SeriesKind::Return });
    }
    validate_rate(risk_free_rate)?;
    validate_returns(returns)?;

    debug!(len = returns.len(), risk_free_rate, "computing sharpe ratio");

    let mean_return = mean(returns);
    let excess_return = mean_return - risk_free_rate;
    let vol = volatility(returns)?;

    let mut flags = SharpeFlags::default();
    let sr = if vol == 0.0 {
        flags.zero_volatility = true;
        if excess_return == 0.0 {
            0.0
        } else {
            flags.unbounded = true;
            warn!(
                excess_return,
                "zero volatility with non-zero excess return; sharpe ratio is unbounded"
            );
            f64::INFINITY.copysign(excess_return)
        }
    } else {
        excess_return / vol
    };

    Ok(SharpeOut { sr, mean_return, excess_return, volatility: vol, n: returns.len(), flags })
}

/// Sharpe ratio of `returns` over a constant `risk_free_rate`.
///
/// See [`sharpe_ratio_detailed`] for errors.
#[inline]
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Result<f64> {
    sharpe_ratio_detailed(returns, risk_free_rate).map(|out| out.sr)
}

/// Sharpe ratio with a zero risk-free rate.
#[inline]
pub fn sharpe_ratio_default(returns: &[f64]) -> Result<f64> {
    sharpe_ratio(returns, 0.0)
}
