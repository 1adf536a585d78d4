//! Module: `metrics::validate`
//!
//! Input checks shared by every metric. A series must be non-empty and every
//! element finite; a window must be positive and no wider than the series.
//! Element types are fixed to `f64` by signature, so only finiteness is
//! checked here. Text-sourced inputs get their type checks in [`crate::input`].

use crate::error::{MetricsError, Result, SeriesKind};

/// Checks that `values` is non-empty and contains no `NaN`/`±Inf`.
///
/// Scans left to right and reports the first offending index.
pub fn validate_sequence(values: &[f64], kind: SeriesKind) -> Result<()> {
    if values.is_empty() {
        return Err(MetricsError::EmptySeries { kind });
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MetricsError::NonFinite { kind, index, value: values[index] }),
        None => Ok(()),
    }
}

#[inline]
pub fn validate_prices(prices: &[f64]) -> Result<()> {
    validate_sequence(prices, SeriesKind::Price)
}

#[inline]
pub fn validate_returns(returns: &[f64]) -> Result<()> {
    validate_sequence(returns, SeriesKind::Return)
}

/// Checks `0 < window_size <= data_length`.
///
/// Signed so that windows read from outside the crate can be rejected
/// rather than wrapping.
pub fn validate_window_size(window_size: i64, data_length: usize) -> Result<()> {
    if window_size <= 0 {
        return Err(MetricsError::WindowNotPositive(window_size));
    }
    // Only fails on targets where usize is narrower than i64: too large either way.
    let too_large = usize::try_from(window_size).map_or(true, |w| w > data_length);
    if too_large {
        return Err(MetricsError::WindowTooLarge { window: window_size, len: data_length });
    }
    Ok(())
}

/// Checks that a risk-free rate is finite.
pub fn validate_rate(rate: f64) -> Result<()> {
    if rate.is_finite() {
        Ok(())
    } else {
        Err(MetricsError::RateNonFinite(rate))
    }
}
