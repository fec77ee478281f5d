//! Simple moving average of closes

use crate::common::math;
use crate::indicators::Column;
use crate::models::indicators::ma_field;
use crate::models::Bar;

/// SMA over `period` bars; the first `period - 1` values average the bars
/// available so far.
pub fn calculate_ma(values: &[f64], period: usize) -> Vec<f64> {
    math::sma(values, period)
}

/// `ma{period}` columns of the closing price
pub fn ma_columns(bars: &[Bar], periods: &[usize]) -> Vec<Column> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    periods
        .iter()
        .map(|&period| (ma_field(period), calculate_ma(&closes, period)))
        .collect()
}
