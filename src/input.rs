//! Parsing of text-sourced inputs (command line, config strings).
//!
//! Metric functions take `&[f64]` and `usize`, so element and window types
//! are settled at compile time. Anything arriving as text is checked here
//! instead: a token that is not a number, or a window that is not an
//! integer, is an [`ErrorKind::Type`](crate::ErrorKind::Type) failure.
//! Parsed values are then run through the same validation the metrics use.

use crate::error::{MetricsError, Result, SeriesKind};
use crate::metrics::validate::{validate_rate, validate_sequence};

/// Parses each token as `f64` and validates the resulting series.
///
/// # Errors
/// - a token that is not a number ([`MetricsError::NotNumeric`], type kind)
/// - an empty token list, or a `NaN`/`inf` literal (value kind)
pub fn parse_series<S: AsRef<str>>(tokens: &[S], kind: SeriesKind) -> Result<Vec<f64>> {
    let values = tokens
        .iter()
        .enumerate()
        .map(|(index, tok)| {
            let raw = tok.as_ref().trim();
            raw.parse::<f64>().map_err(|_| MetricsError::NotNumeric {
                kind,
                index,
                raw: raw.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    validate_sequence(&values, kind)?;
    Ok(values)
}

/// Splits `text` on commas and whitespace, then parses it like [`parse_series`].
///
/// ```
/// use quant_metrics::input::split_series;
/// use quant_metrics::SeriesKind;
///
/// let prices = split_series("100, 102 101", SeriesKind::Price).unwrap();
/// assert_eq!(prices, vec![100.0, 102.0, 101.0]);
/// ```
pub fn split_series(text: &str, kind: SeriesKind) -> Result<Vec<f64>> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    parse_series(&tokens, kind)
}

/// Parses a window size. Only integer literals are accepted; `"3.0"` is a
/// type error. The value is not checked against any series length.
pub fn parse_window_size(token: &str) -> Result<i64> {
    let raw = token.trim();
    raw.parse::<i64>().map_err(|_| MetricsError::WindowNotInteger(raw.to_string()))
}

/// Parses and validates a risk-free rate.
pub fn parse_rate(token: &str) -> Result<f64> {
    let raw = token.trim();
    let rate = raw.parse::<f64>().map_err(|_| MetricsError::RateNotNumeric(raw.to_string()))?;
    validate_rate(rate)?;
    Ok(rate)
}
