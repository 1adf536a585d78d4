//! Deterministic compensated summation.

pub mod kbn_ext;

pub use kbn_ext::{sum_kbn, sum_kbn_iter};
