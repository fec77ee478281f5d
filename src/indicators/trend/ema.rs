//! EMA (Exponential Moving Average) indicator
//!
//! alpha = 2 / (period + 1)
//! EMA[0] = x[0]
//! EMA[i] = alpha * x[i] + (1 - alpha) * EMA[i-1]

use crate::common::math;

/// EMA series, one value per input, seeded with the first value.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    math::ema(values, period)
}
