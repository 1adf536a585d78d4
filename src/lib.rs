//! Basic quantitative metrics over in-memory price series: simple moving
//! average, period returns, volatility and Sharpe ratio.
//!
//! Every function is pure: inputs are borrowed and never mutated, and the
//! same input always produces the same bits (sums are compensated and
//! evaluated left to right). Invalid input is reported through
//! [`MetricsError`]; no partial result is ever returned.
//!
//! # Examples
//! ```
//! use quant_metrics::{calculate_returns, sharpe_ratio, simple_moving_average, volatility};
//!
//! let prices = [100.0, 102.0, 101.0, 103.0, 105.0];
//! let sma = simple_moving_average(&prices, 3).unwrap();
//! assert_eq!(sma, vec![101.0, 102.0, 103.0]);
//!
//! let rets = calculate_returns(&prices).unwrap();
//! let vol = volatility(&rets).unwrap();
//! let sr = sharpe_ratio(&rets, 0.0).unwrap();
//! assert!(vol > 0.0 && sr.is_finite());
//! ```

pub mod error;
pub mod input;
pub mod metrics;
pub mod report;

pub use error::{ErrorKind, MetricsError, Result, SeriesKind};
pub use metrics::returns::calculate_returns;
pub use metrics::sharpe::{
    sharpe_ratio, sharpe_ratio_default, sharpe_ratio_detailed, SharpeFlags, SharpeOut,
};
pub use metrics::sma::simple_moving_average;
pub use metrics::std_dev::volatility;
pub use metrics::validate::{validate_rate, validate_sequence, validate_window_size};
pub use report::{MetricsReport, ReportCfg, EXAMPLE_PRICES};
