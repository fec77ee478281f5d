//! Trend state from stacked moving averages

use crate::common::math;
use crate::config::SignalConfig;
use crate::models::signal::TrendState;
use crate::models::Bar;

/// Fewer bars than this leaves the trend unknown
pub const MIN_TREND_BARS: usize = 20;
/// Slow average of the fast > medium > slow stack
pub const TREND_SLOW_PERIOD: usize = 60;

/// `uptrend` when fast > medium > slow MA, `downtrend` when the stack is
/// inverted, otherwise `sideways`.
///
/// Fast and medium come from the signal config (5 and 20 by default). With
/// fewer than 60 bars the slow average falls back to the medium one, so the
/// stack can never be strictly ordered and the trend reads `sideways`.
pub fn detect_trend<B: AsRef<Bar>>(series: &[B], config: &SignalConfig) -> TrendState {
    if series.len() < MIN_TREND_BARS {
        return TrendState::Unknown;
    }

    let closes: Vec<f64> = series.iter().map(|b| b.as_ref().close).collect();
    let medium = math::trailing_mean(&closes, config.ma_slow);
    let slow = if closes.len() < TREND_SLOW_PERIOD {
        medium
    } else {
        math::trailing_mean(&closes, TREND_SLOW_PERIOD)
    };
    let averages = (math::trailing_mean(&closes, config.ma_fast), medium, slow);

    match averages {
        (Some(fast), Some(medium), Some(slow)) if fast > medium && medium > slow => {
            TrendState::Uptrend
        }
        (Some(fast), Some(medium), Some(slow)) if fast < medium && medium < slow => {
            TrendState::Downtrend
        }
        (Some(_), Some(_), Some(_)) => TrendState::Sideways,
        _ => TrendState::Unknown,
    }
}
