//! Integration tests for the public metric surface.

use quant_metrics::input::{parse_series, parse_window_size};
use quant_metrics::{
    calculate_returns, sharpe_ratio, simple_moving_average, validate_sequence,
    validate_window_size, volatility, ErrorKind, MetricsError, SeriesKind, EXAMPLE_PRICES,
};
use rstest::*;

#[fixture]
fn prices() -> Vec<f64> {
    EXAMPLE_PRICES.to_vec()
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}

#[rstest]
fn sma_worked_example(prices: Vec<f64>) {
    let out = simple_moving_average(&prices, 3).unwrap();
    assert_eq!(out, vec![101.0, 102.0, 103.0, 105.0, 106.0, 107.0, 108.0, 110.0]);
}

#[rstest]
#[case(1, 10)]
#[case(2, 9)]
#[case(5, 6)]
#[case(10, 1)]
fn sma_length(prices: Vec<f64>, #[case] window: usize, #[case] expected: usize) {
    assert_eq!(simple_moving_average(&prices, window).unwrap().len(), expected);
}

#[rstest]
fn returns_worked_example() {
    let out: Vec<f64> = calculate_returns(&[100.0, 102.0, 101.0])
        .unwrap()
        .into_iter()
        .map(round6)
        .collect();
    assert_eq!(out, vec![0.02, -0.009804]);
}

#[rstest]
fn returns_edge_cases() {
    assert!(calculate_returns(&[7.0]).unwrap().is_empty());
    assert_eq!(calculate_returns(&[]).unwrap_err().kind(), ErrorKind::Value);
}

#[rstest]
fn volatility_reference() {
    let rets = [0.02, -0.01, 0.03];
    let n = rets.len() as f64;
    let m = rets.iter().sum::<f64>() / n;
    let expected = (rets.iter().map(|r| (r - m) * (r - m)).sum::<f64>() / (n - 1.0)).sqrt();
    assert!((volatility(&rets).unwrap() - expected).abs() < 1e-15);
}

#[rstest]
#[case(0.0)]
#[case(1.5)]
#[case(-0.25)]
fn volatility_single_value_is_zero(#[case] r: f64) {
    assert_eq!(volatility(&[r]).unwrap(), 0.0);
}

#[rstest]
#[case(0.01, 0.0)]
#[case(0.0, f64::INFINITY)]
#[case(0.02, f64::NEG_INFINITY)]
fn sharpe_zero_volatility(#[case] rate: f64, #[case] expected: f64) {
    assert_eq!(sharpe_ratio(&[0.01, 0.01, 0.01], rate).unwrap(), expected);
}

#[rstest]
fn sharpe_of_example_returns(prices: Vec<f64>) {
    let rets = calculate_returns(&prices).unwrap();
    let vol = volatility(&rets).unwrap();
    let m = rets.iter().sum::<f64>() / rets.len() as f64;
    let sr = sharpe_ratio(&rets, 0.01).unwrap();
    assert!((sr - (m - 0.01) / vol).abs() < 1e-9);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn non_finite_rejected_everywhere(#[case] bad: f64) {
    let series = [100.0, 101.0, bad, 102.0];
    let checks: Vec<MetricsError> = vec![
        validate_sequence(&series, SeriesKind::Price).unwrap_err(),
        simple_moving_average(&series, 2).unwrap_err(),
        calculate_returns(&series).unwrap_err(),
        volatility(&series).unwrap_err(),
        sharpe_ratio(&series, 0.0).unwrap_err(),
    ];
    for err in checks {
        assert_eq!(err.kind(), ErrorKind::Value, "{err}");
        assert_eq!(err.index(), Some(2), "{err}");
    }
}

#[rstest]
#[case(0, 5)]
#[case(-1, 5)]
#[case(6, 5)]
fn window_value_errors(#[case] window: i64, #[case] len: usize) {
    assert_eq!(validate_window_size(window, len).unwrap_err().kind(), ErrorKind::Value);
}

#[rstest]
#[case("2.5")]
#[case("two")]
fn window_type_errors(#[case] token: &str) {
    assert_eq!(parse_window_size(token).unwrap_err().kind(), ErrorKind::Type);
}

#[rstest]
fn non_numeric_price_token_is_type_error() {
    let err = parse_series(&["100", "oops", "101"], SeriesKind::Price).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.index(), Some(1));
}

#[rstest]
fn calls_are_idempotent(prices: Vec<f64>) {
    let a = simple_moving_average(&prices, 4).unwrap();
    let b = simple_moving_average(&prices, 4).unwrap();
    assert_eq!(a, b);

    let ra = calculate_returns(&prices).unwrap();
    let rb = calculate_returns(&prices).unwrap();
    assert_eq!(ra, rb);

    assert_eq!(volatility(&ra).unwrap().to_bits(), volatility(&rb).unwrap().to_bits());
    assert_eq!(
        sharpe_ratio(&ra, 0.01).unwrap().to_bits(),
        sharpe_ratio(&rb, 0.01).unwrap().to_bits()
    );
}
