//! Support and resistance levels.
//!
//! Four interchangeable methods share the same primitives over the trailing
//! `lookback` bars: current price (last close), window high/low, pivot
//! `(high + low + price) / 3` and range `high - low`.

use crate::common::math;
use crate::config::LevelConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_series;
use crate::models::levels::{LevelMethod, LevelResult, Recommendation};
use crate::models::Bar;
use tracing::{debug, info};

/// Retracement ratios measured down from the window high
pub const FIBONACCI_RETRACEMENTS: [f64; 5] = [0.236, 0.382, 0.5, 0.618, 0.786];
/// Extension ratios measured up from the window low
pub const FIBONACCI_EXTENSIONS: [f64; 5] = [1.0, 1.236, 1.382, 1.5, 1.618];

/// Shared primitives of every level method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceWindow {
    pub current_price: f64,
    pub high: f64,
    pub low: f64,
    pub pivot: f64,
    pub range: f64,
}

impl PriceWindow {
    /// Primitives over the last `lookback` bars of a non-empty series.
    pub fn from_series<B: AsRef<Bar>>(series: &[B], lookback: usize) -> Option<Self> {
        let current_price = series.last()?.as_ref().close;
        let recent = &series[series.len().saturating_sub(lookback)..];

        let high = recent
            .iter()
            .map(|b| b.as_ref().high)
            .fold(f64::NEG_INFINITY, f64::max);
        let low = recent
            .iter()
            .map(|b| b.as_ref().low)
            .fold(f64::INFINITY, f64::min);

        Some(Self {
            current_price,
            high,
            low,
            pivot: (high + low + current_price) / 3.0,
            range: high - low,
        })
    }
}

/// Candidate levels in method order, before rounding and filtering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Levels {
    pub supports: Vec<f64>,
    pub resistances: Vec<f64>,
}

pub fn fibonacci_levels(window: &PriceWindow) -> Levels {
    Levels {
        supports: FIBONACCI_RETRACEMENTS
            .iter()
            .map(|f| window.high - f * window.range)
            .collect(),
        resistances: FIBONACCI_EXTENSIONS
            .iter()
            .map(|f| window.low + f * window.range)
            .collect(),
    }
}

/// Classic floor-trader pivots: `[S1, S2, S3]` and `[R1, R2, R3]`
pub fn pivot_levels(window: &PriceWindow) -> Levels {
    let PriceWindow {
        high,
        low,
        pivot,
        range,
        ..
    } = *window;

    Levels {
        supports: vec![
            2.0 * pivot - high,
            pivot - range,
            low - 2.0 * (high - pivot),
        ],
        resistances: vec![
            2.0 * pivot - low,
            pivot + range,
            high + 2.0 * (pivot - low),
        ],
    }
}

/// Moving averages of the full close history. All of them are supports when
/// price is above the fastest one, otherwise all are resistances.
pub fn ma_levels(closes: &[f64], current_price: f64, periods: &[usize]) -> Levels {
    let averages: Vec<f64> = periods
        .iter()
        .filter_map(|&period| math::trailing_mean(closes, period))
        .collect();

    match averages.first() {
        Some(&fastest) if current_price > fastest => Levels {
            supports: averages,
            resistances: Vec::new(),
        },
        _ => Levels {
            supports: Vec::new(),
            resistances: averages,
        },
    }
}

/// Lowest lows (descending) as supports, highest highs (ascending) as
/// resistances.
pub fn historical_levels<B: AsRef<Bar>>(recent: &[B], count: usize) -> Levels {
    let mut highs: Vec<f64> = recent.iter().map(|b| b.as_ref().high).collect();
    let mut lows: Vec<f64> = recent.iter().map(|b| b.as_ref().low).collect();

    highs.sort_by(|a, b| b.total_cmp(a));
    highs.truncate(count);
    highs.sort_by(|a, b| a.total_cmp(b));

    lows.sort_by(|a, b| a.total_cmp(b));
    lows.truncate(count);
    lows.sort_by(|a, b| b.total_cmp(a));

    Levels {
        supports: lows,
        resistances: highs,
    }
}

/// Advisory from the price against the outermost and innermost levels.
pub fn recommend(current_price: f64, supports: &[f64], resistances: &[f64]) -> Recommendation {
    if supports.last().is_some_and(|&s| current_price < s) {
        Recommendation::BrokeSupport
    } else if resistances.last().is_some_and(|&r| current_price > r) {
        Recommendation::BrokeResistance
    } else if supports.first().is_some_and(|&s| current_price < s) {
        Recommendation::ApproachingSupport
    } else if resistances.first().is_some_and(|&r| current_price > r) {
        Recommendation::ApproachingResistance
    } else {
        Recommendation::Ranging
    }
}

pub fn calculate_support_resistance<B: AsRef<Bar>>(
    symbol: &str,
    series: &[B],
    method: LevelMethod,
    lookback: usize,
    config: &LevelConfig,
) -> Result<LevelResult, IndicatorError> {
    info!(symbol, %method, lookback, bars = series.len(), "Calculating support/resistance");

    if lookback == 0 {
        return Err(IndicatorError::InvalidConfig(
            "lookback must be > 0".to_string(),
        ));
    }
    if series.len() < lookback {
        return Err(IndicatorError::InsufficientData {
            required: lookback,
            actual: series.len(),
        });
    }
    validate_series(series)?;

    let window = PriceWindow::from_series(series, lookback).ok_or(
        IndicatorError::InsufficientData {
            required: lookback,
            actual: series.len(),
        },
    )?;
    let recent = &series[series.len() - lookback..];

    let levels = match method {
        LevelMethod::Fibonacci => fibonacci_levels(&window),
        LevelMethod::Pivot => pivot_levels(&window),
        LevelMethod::Ma => {
            let closes: Vec<f64> = series.iter().map(|b| b.as_ref().close).collect();
            ma_levels(&closes, window.current_price, &config.ma_periods)
        }
        LevelMethod::Historical => historical_levels(recent, config.historical_extremes),
    };

    let precision = config.price_precision;
    let round = |values: Vec<f64>| -> Vec<f64> {
        values
            .into_iter()
            .map(|v| math::round_to(v, precision))
            .collect()
    };
    let supports = round(levels.supports);
    let resistances = round(levels.resistances);

    let recommendation = recommend(window.current_price, &supports, &resistances);

    let result = LevelResult {
        symbol: symbol.to_string(),
        method,
        lookback,
        current_price: math::round_to(window.current_price, precision),
        pivot_point: Some(math::round_to(window.pivot, precision)),
        support_levels: supports.into_iter().filter(|&s| s > 0.0).collect(),
        resistance_levels: resistances.into_iter().filter(|&r| r > 0.0).collect(),
        recommendation,
    };

    debug!(symbol, %method, recommendation = %result.recommendation, "Support/resistance calculated");
    Ok(result)
}

/// Same as [`calculate_support_resistance`] with the method given by name.
pub fn calculate_support_resistance_by_name<B: AsRef<Bar>>(
    symbol: &str,
    series: &[B],
    method: &str,
    lookback: usize,
    config: &LevelConfig,
) -> Result<LevelResult, IndicatorError> {
    let method = method.parse::<LevelMethod>()?;
    calculate_support_resistance(symbol, series, method, lookback, config)
}

/// Fibonacci levels over the default lookback (60)
pub fn calculate_support_resistance_default<B: AsRef<Bar>>(
    symbol: &str,
    series: &[B],
) -> Result<LevelResult, IndicatorError> {
    let config = LevelConfig::default();
    calculate_support_resistance(symbol, series, LevelMethod::Fibonacci, config.lookback, &config)
}
