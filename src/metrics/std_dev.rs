//! Module: `metrics::std_dev`
//!
//! Deterministic **sample standard deviation** of a return series, used as
//! volatility and as the Sharpe denominator.
//!
//! ## Design goals
//! - **Determinism**: strict left-to-right evaluation; no internal parallelism.
//! - **Bessel's correction**: the squared deviations are divided by `n - 1`.
//! - **Numeric robustness**: two passes (mean, then squared deviations), both
//!   accumulated with KBN.
//!
//! A single return has no dispersion to measure; its volatility is `0.0`
//! rather than an error.
//!
//! # Examples
//! ```
//! use quant_metrics::metrics::std_dev::volatility;
//!
//! let sd = volatility(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert!((sd - 1.290_994_448_735_805_6).abs() < 1e-12);
//! assert_eq!(volatility(&[0.05]).unwrap(), 0.0);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::metrics::mean::mean;
use crate::metrics::sum::kbn_ext::sum_kbn_iter;
use crate::metrics::validate::validate_returns;

/// Degrees of freedom removed from the variance denominator.
const DDOF: usize = 1;

/// Two-pass sample standard deviation of an already validated series with
/// at least two elements.
fn sample_std_dev(xs: &[f64]) -> f64 {
    let mu = mean(xs);
    let ss = sum_kbn_iter(xs.iter().map(|&v| {
        let d = v - mu;
        d * d
    }));
    // Sum of squares is non-negative, so the root is too.
    (ss / (xs.len() - DDOF) as f64).sqrt()
}

/// Volatility of `returns`: Bessel-corrected sample standard deviation.
///
/// # Errors
/// Empty or non-finite `returns`, reported as a `Return` series.
pub fn volatility(returns: &[f64]) -> Result<f64> {
    validate_returns(returns)?;

    if returns.len() == 1 {
        return Ok(0.0);
    }

    debug!(len = returns.len(), "computing volatility");
    Ok(sample_std_dev(returns))
}
