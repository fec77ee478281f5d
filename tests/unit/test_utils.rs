//! Bar fixtures shared by the unit tests

use chrono::{Duration, NaiveDate};
use klinesight::models::Bar;

pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

pub fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(i as i64)
}

/// One bar per close with open = high = low = close.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::new(day(i), c, c, c, c, 1_000))
        .collect()
}

pub fn flat_bars(count: usize, price: f64) -> Vec<Bar> {
    bars_from_closes(&vec![price; count])
}

/// Closes with high/low set `wick` (fraction of close) above/below.
pub fn bars_with_wicks(closes: &[f64], wick: f64) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::new(day(i), c, c * (1.0 + wick), c * (1.0 - wick), c, 1_000 + i as u64))
        .collect()
}

/// Linear closes from `start` to `end` inclusive.
pub fn linear_closes(count: usize, start: f64, end: f64) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Deterministic choppy series for property checks.
pub fn choppy_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let close = 50.0 + 8.0 * (t * 0.7).sin() + 3.0 * (t * 0.23).cos() + t * 0.05;
            let open = close + 0.5 * (t * 1.3).sin();
            let high = close.max(open) + 0.4 + 0.2 * (t * 0.9).cos().abs();
            let low = close.min(open) - 0.4 - 0.2 * (t * 1.1).sin().abs();
            Bar::new(day(i), open, high, low, close, 10_000 + (i as u64 * 37) % 5_000)
        })
        .collect()
}
