//! Module: `metrics::sum::kbn_ext`
//!
//! Kahan–Babuška–Neumaier (KBN) compensated summation for `f64` with a
//! **deterministic** evaluation order.
//!
//! # Why
//! Floating-point addition is not associative; a naive `sum()` depends on the
//! numeric path. KBN keeps a running compensation term so that long price
//! windows and return series do not lose low-order bits to cancellation.
//! Accumulation is strictly left-to-right and single-threaded, so the same
//! input order always produces the same bits.
//!
//! # Inputs
//! Every public metric validates its series before summing, so these helpers
//! do not screen for `NaN`/`±Inf`; a non-finite input simply propagates
//! through IEEE-754 arithmetic.
//!
//! # Examples
//! Classic cancellation case:
//! ```rust
//! use quant_metrics::metrics::sum::kbn_ext::sum_kbn;
//!
//! let xs = [-1e16, 1.0, 1.0, 1e16];
//! assert!((sum_kbn(&xs) - 2.0).abs() < 1e-9);
//! ```

use compensated_summation::KahanBabuskaNeumaier;

/// Compensated sum of a slice, evaluated left to right.
#[inline]
pub fn sum_kbn(xs: &[f64]) -> f64 {
    sum_kbn_iter(xs.iter().copied())
}

/// Compensated sum of any `f64` iterator, evaluated in iteration order.
///
/// Useful when the summands are derived on the fly (e.g. squared
/// deviations) and materialising them would only cost an allocation.
#[inline]
pub fn sum_kbn_iter<I>(iter: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    iter.into_iter().sum::<KahanBabuskaNeumaier<f64>>().total()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kbn_corrects_cancellation() {
        let xs = [-1e16, 1.0, 1.0, 1e16];
        let out = sum_kbn(&xs);
        assert!((out - 2.0).abs() < 1e-9, "sum={out}");
    }

    #[test]
    fn kbn_handles_decimal_representation() {
        let xs = [0.1f64; 10];
        let out = sum_kbn(&xs);
        assert!((out - 1.0).abs() < 1e-15, "sum={out}");
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(sum_kbn(&[]), 0.0);
    }

    #[test]
    fn slice_and_iter_agree_bitwise() {
        let xs: Vec<f64> = (0..1_000).map(|i| (i as f64 * 0.37).sin()).collect();
        let a = sum_kbn(&xs);
        let b = sum_kbn_iter(xs.iter().copied());
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
