//! Module: `metrics::sma`
//!
//! Simple moving average over a price series.
//!
//! Each window is summed independently with compensated summation, so a
//! window's value never depends on rounding carried over from its
//! neighbours. Cost is `O(n * window)`.
//!
//! Output is rounded to [`SMA_DECIMALS`] places, half away from zero
//! (`f64::round` on the value scaled by `10^6`). Returns, volatility and
//! Sharpe are left unrounded.
//!
//! # Examples
//! ```
//! use quant_metrics::metrics::sma::simple_moving_average;
//!
//! let sma = simple_moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
//! assert_eq!(sma, vec![1.5, 2.5, 3.5]);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::metrics::mean::mean;
use crate::metrics::validate::{validate_prices, validate_window_size};

/// Decimal places kept in SMA output.
pub const SMA_DECIMALS: i32 = 6;

/// Rounds to `SMA_DECIMALS` places, half away from zero.
///
/// Values whose scaled form reaches `2^52` have no fractional digit left at
/// that precision and are returned as-is.
#[inline]
fn round_sma(x: f64) -> f64 {
    let scale = 10f64.powi(SMA_DECIMALS);
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return x;
    }
    scaled.round() / scale
}

/// Mean of every contiguous `window_size` slice of `prices`.
///
/// Returns `prices.len() - window_size + 1` values.
///
/// # Errors
/// - empty or non-finite `prices`
/// - `window_size == 0` or `window_size > prices.len()`
pub fn simple_moving_average(prices: &[f64], window_size: usize) -> Result<Vec<f64>> {
    validate_prices(prices)?;
    let window = i64::try_from(window_size).unwrap_or(i64::MAX);
    validate_window_size(window, prices.len())?;

    debug!(len = prices.len(), window_size, "computing simple moving average");

    Ok(prices.windows(window_size).map(|w| round_sma(mean(w))).collect())
}
