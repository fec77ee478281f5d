//! Signal Detector: classifies the last two bars of an augmented series.

use crate::config::{EngineConfig, IndicatorConfig, SignalConfig};
use crate::indicators::engine::{augment, compute_selected};
use crate::indicators::error::IndicatorError;
use crate::indicators::registry::IndicatorKind;
use crate::models::indicators::{
    ma_field, rsi_field, BOLL_LOWER, BOLL_UPPER, KDJ_D, KDJ_K, MACD_HIST,
};
use crate::models::signal::{
    BollSignal, MaSignal, MacdSignal, OscillatorSignal, SignalSet,
};
use crate::models::{AugmentedBar, Bar};
use crate::signals::aggregation::aggregate;
use tracing::debug;

/// Bars needed to compare a previous and a current value
pub const MIN_BARS: usize = 2;

pub fn classify_macd(prev_hist: f64, hist: f64) -> MacdSignal {
    if prev_hist < 0.0 && hist > 0.0 {
        MacdSignal::GoldenCross
    } else if prev_hist > 0.0 && hist < 0.0 {
        MacdSignal::DeadCross
    } else {
        MacdSignal::None
    }
}

pub fn classify_kdj(k: f64, d: f64, config: &SignalConfig) -> OscillatorSignal {
    if k > config.kdj_overbought && d > config.kdj_overbought {
        OscillatorSignal::Overbought
    } else if k < config.kdj_oversold && d < config.kdj_oversold {
        OscillatorSignal::Oversold
    } else {
        OscillatorSignal::None
    }
}

pub fn classify_rsi(rsi: f64, config: &SignalConfig) -> OscillatorSignal {
    if rsi > config.rsi_overbought {
        OscillatorSignal::Overbought
    } else if rsi < config.rsi_oversold {
        OscillatorSignal::Oversold
    } else {
        OscillatorSignal::None
    }
}

pub fn classify_ma(close: f64, ma_fast: f64, ma_slow: f64) -> MaSignal {
    if ma_fast > ma_slow && close > ma_fast {
        MaSignal::Bullish
    } else if ma_fast < ma_slow && close < ma_fast {
        MaSignal::Bearish
    } else {
        MaSignal::Neutral
    }
}

pub fn classify_boll(close: f64, upper: f64, lower: f64) -> BollSignal {
    if close > upper {
        BollSignal::BreakoutUp
    } else if close < lower {
        BollSignal::BreakoutDown
    } else {
        BollSignal::WithinBand
    }
}

/// Indicator config guaranteed to produce every field the detector reads
pub fn detection_config(config: &EngineConfig) -> IndicatorConfig {
    let mut indicators = config.indicators.clone();
    let signals = &config.signals;

    for period in [signals.ma_fast, signals.ma_slow] {
        if !indicators.ma_periods.contains(&period) {
            indicators.ma_periods.push(period);
        }
    }
    if !indicators.rsi_periods.contains(&signals.rsi_period) {
        indicators.rsi_periods.push(signals.rsi_period);
    }
    indicators
}

/// Fields read from the last two bars
pub fn required_fields(config: &SignalConfig) -> Vec<String> {
    vec![
        MACD_HIST.to_string(),
        KDJ_K.to_string(),
        KDJ_D.to_string(),
        rsi_field(config.rsi_period),
        ma_field(config.ma_fast),
        ma_field(config.ma_slow),
        BOLL_UPPER.to_string(),
        BOLL_LOWER.to_string(),
    ]
}

fn field(bar: &AugmentedBar, name: &str) -> Result<f64, IndicatorError> {
    bar.get(name)
        .ok_or_else(|| IndicatorError::MissingField(name.to_string()))
}

pub struct SignalEngine;

impl SignalEngine {
    /// Detect signals on an augmented series.
    ///
    /// Fewer than two bars yields the all-neutral set. Indicator groups the
    /// rules need but the series lacks are computed on the fly; fields that
    /// are already present are used as-is.
    pub fn detect(
        series: &[AugmentedBar],
        config: &EngineConfig,
    ) -> Result<SignalSet, IndicatorError> {
        if series.len() < MIN_BARS {
            debug!(bars = series.len(), "Too few bars for signal detection");
            return Ok(SignalSet::default());
        }

        let indicator_config = detection_config(config);
        let required = required_fields(&config.signals);
        let tail = &series[series.len() - MIN_BARS..];

        let mut missing: Vec<IndicatorKind> = required
            .iter()
            .filter(|name| tail.iter().any(|bar| !bar.has(name)))
            .filter_map(|name| IndicatorKind::for_field(name, &indicator_config))
            .collect();
        missing.sort();
        missing.dedup();

        let augmented;
        let series = if missing.is_empty() {
            series
        } else {
            augmented = augment(series, &indicator_config, &missing)?;
            augmented.as_slice()
        };

        let last = series.len() - 1;
        let signals = Self::classify(&series[last - 1], &series[last], &config.signals)?;
        debug!(overall = %signals.overall, "Signals detected");
        Ok(signals)
    }

    /// Detect signals on a plain bar series.
    pub fn detect_bars(bars: &[Bar], config: &EngineConfig) -> Result<SignalSet, IndicatorError> {
        if bars.len() < MIN_BARS {
            return Ok(SignalSet::default());
        }
        let indicator_config = detection_config(config);
        let series = compute_selected(
            bars,
            &indicator_config,
            &[
                IndicatorKind::Ma,
                IndicatorKind::Macd,
                IndicatorKind::Kdj,
                IndicatorKind::Rsi,
                IndicatorKind::Boll,
            ],
        )?;
        Self::detect(&series, config)
    }

    /// Apply the per-indicator rules to a (previous, current) pair.
    pub fn classify(
        prev: &AugmentedBar,
        current: &AugmentedBar,
        config: &SignalConfig,
    ) -> Result<SignalSet, IndicatorError> {
        let close = current.close();

        let macd_signal = classify_macd(field(prev, MACD_HIST)?, field(current, MACD_HIST)?);
        let kdj_signal = classify_kdj(field(current, KDJ_K)?, field(current, KDJ_D)?, config);
        let rsi_signal = classify_rsi(field(current, &rsi_field(config.rsi_period))?, config);
        let ma_signal = classify_ma(
            close,
            field(current, &ma_field(config.ma_fast))?,
            field(current, &ma_field(config.ma_slow))?,
        );
        let boll_signal = classify_boll(
            close,
            field(current, BOLL_UPPER)?,
            field(current, BOLL_LOWER)?,
        );

        Ok(SignalSet {
            macd_signal,
            kdj_signal,
            rsi_signal,
            ma_signal,
            boll_signal,
            overall: aggregate(macd_signal, kdj_signal, ma_signal, boll_signal),
        })
    }
}
