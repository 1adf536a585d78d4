//! Module: `metrics::returns`
//!
//! Simple period-over-period returns: `r_t = (p_t - p_{t-1}) / p_{t-1}`.
//! Values are full precision; round for display only.

use tracing::debug;

use crate::error::{MetricsError, Result};
use crate::metrics::validate::validate_prices;

/// Returns of `prices`, one per consecutive pair.
///
/// A single price has no returns and yields an empty vector.
///
/// # Errors
/// - empty or non-finite `prices`
/// - a zero previous price, reported at its index
pub fn calculate_returns(prices: &[f64]) -> Result<Vec<f64>> {
    validate_prices(prices)?;

    debug!(len = prices.len(), "computing returns");

    prices
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (prev, curr) = (pair[0], pair[1]);
            if prev == 0.0 {
                return Err(MetricsError::ZeroPreviousPrice { index });
            }
            Ok((curr - prev) / prev)
        })
        .collect()
}
