//! Metric implementations, one module per metric.

pub mod mean;
pub mod returns;
pub mod sharpe;
pub mod sma;
pub mod std_dev;
pub mod sum;
pub mod validate;
