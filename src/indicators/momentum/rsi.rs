//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS  = Average Gain / Average Loss over the trailing period

use crate::common::math;
use crate::indicators::Column;
use crate::models::indicators::rsi_field;
use crate::models::Bar;

/// RSI when there are gains but no losses
pub const RSI_MAX: f64 = 100.0;
/// RSI when prices did not move at all
pub const RSI_FLAT: f64 = 50.0;

/// RSI from average gain/loss, with explicit zero-loss cases.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return RSI_FLAT;
        }
        return RSI_MAX;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI series, one value per close.
///
/// The first bar has no prior close, so its delta counts as zero movement and
/// sits inside the averaging window of the following bars.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());

    for (i, close) in closes.iter().enumerate() {
        let change = if i == 0 { 0.0 } else { close - closes[i - 1] };
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gain = math::sma(&gains, period);
    let avg_loss = math::sma(&losses, period);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| rsi_from_averages(gain, loss))
        .collect()
}

/// `rsi{period}` columns of the closing price
pub fn rsi_columns(bars: &[Bar], periods: &[usize]) -> Vec<Column> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    periods
        .iter()
        .map(|&period| (rsi_field(period), calculate_rsi(&closes, period)))
        .collect()
}
