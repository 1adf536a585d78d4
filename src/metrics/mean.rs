use crate::metrics::sum::kbn_ext::{sum_kbn, sum_kbn_iter};

/// Arithmetic mean via compensated summation.
///
/// Callers validate first; an empty slice yields `NaN`. If the total of
/// finite values overflows, the terms are divided by `n` before summing.
#[inline]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let n = xs.len() as f64;
    let total = sum_kbn(xs);
    if total.is_finite() {
        return total / n;
    }
    sum_kbn_iter(xs.iter().map(|&v| v / n))
}
