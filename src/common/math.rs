//! Windowed and recursive primitives over `f64` series.
//!
//! Every rolling function returns one value per input element. Early elements
//! use a partial window of `min(period, i + 1)` values instead of being left
//! undefined.

/// First index of the trailing window ending at `i`.
pub fn window_start(i: usize, period: usize) -> usize {
    (i + 1).saturating_sub(period.max(1))
}

/// Arithmetic mean of a slice, `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the last `period` values (or all of them when fewer exist).
pub fn trailing_mean(values: &[f64], period: usize) -> Option<f64> {
    let len = values.len();
    if len == 0 {
        return None;
    }
    mean(&values[window_start(len - 1, period)..])
}

/// Simple moving average with partial leading windows.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            let window = &values[window_start(i, period)..=i];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Recursive smoothing seeded with the first value:
/// `s[0] = x[0]`, `s[i] = s[i-1] + alpha * (x[i] - s[i-1])`.
///
/// Written as an accumulator fold so no per-call state outlives the call.
pub fn smooth(values: &[f64], alpha: f64) -> Vec<f64> {
    values
        .iter()
        .scan(None::<f64>, |state, &x| {
            let next = match *state {
                Some(prev) => prev + alpha * (x - prev),
                None => x,
            };
            *state = Some(next);
            Some(next)
        })
        .collect()
}

/// Smoothing factor of an exponential moving average: `2 / (period + 1)`.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period.max(1) as f64 + 1.0)
}

/// Exponential moving average seeded with the first value.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    smooth(values, ema_alpha(period))
}

/// Rolling sample standard deviation (divides by `n - 1`).
///
/// A one-element window has no spread and yields 0.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            let window = &values[window_start(i, period)..=i];
            let n = window.len();
            if n < 2 {
                return 0.0;
            }
            let avg = window.iter().sum::<f64>() / n as f64;
            let variance = window.iter().map(|x| (x - avg).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        })
        .collect()
}

/// Rolling maximum with partial leading windows.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            values[window_start(i, period)..=i]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect()
}

/// Rolling minimum with partial leading windows.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            values[window_start(i, period)..=i]
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
