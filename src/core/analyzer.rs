//! One-stop technical analysis of a symbol's bar series.

use crate::config::EngineConfig;
use crate::indicators::engine::{compute_indicators, compute_selected};
use crate::indicators::error::IndicatorError;
use crate::indicators::registry::parse_selection;
use crate::indicators::structure::calculate_support_resistance;
use crate::models::{
    AugmentedBar, Bar, IndicatorSnapshot, LevelMethod, LevelResult, SignalSet, TrendState,
};
use crate::signals::engine::SignalEngine;
use crate::signals::trend::detect_trend;
use serde::Serialize;
use tracing::{info, warn};

/// Everything the analysis layer reports for one symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReport {
    pub symbol: String,
    pub current_price: f64,
    pub trend: TrendState,
    pub signals: SignalSet,
    /// `None` when the series is shorter than the configured lookback.
    pub support_resistance: Option<LevelResult>,
    pub indicators: IndicatorSnapshot,
}

#[derive(Debug, Clone, Default)]
pub struct TechnicalAnalyzer {
    config: EngineConfig,
}

impl TechnicalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn calculate_indicators(&self, bars: &[Bar]) -> Result<Vec<AugmentedBar>, IndicatorError> {
        compute_indicators(bars, &self.config.indicators)
    }

    /// Compute only the named groups (`ma`, `macd`, `kdj`, `rsi`, `boll`, `volume`).
    pub fn calculate_selected<S: AsRef<str>>(
        &self,
        bars: &[Bar],
        groups: &[S],
    ) -> Result<Vec<AugmentedBar>, IndicatorError> {
        let selected = parse_selection(groups)?;
        compute_selected(bars, &self.config.indicators, &selected)
    }

    pub fn detect_signals(&self, series: &[AugmentedBar]) -> Result<SignalSet, IndicatorError> {
        SignalEngine::detect(series, &self.config)
    }

    pub fn detect_trend<B: AsRef<Bar>>(&self, series: &[B]) -> TrendState {
        detect_trend(series, &self.config.signals)
    }

    /// Levels over the configured lookback, method given by name.
    pub fn calculate_support_resistance<B: AsRef<Bar>>(
        &self,
        symbol: &str,
        series: &[B],
        method: &str,
    ) -> Result<LevelResult, IndicatorError> {
        let method = method.parse::<LevelMethod>()?;
        calculate_support_resistance(
            symbol,
            series,
            method,
            self.config.levels.lookback,
            &self.config.levels,
        )
    }

    /// Indicators, signals, trend and fibonacci levels in one pass.
    pub fn analyze(&self, symbol: &str, bars: &[Bar]) -> Result<TechnicalReport, IndicatorError> {
        info!(symbol, bars = bars.len(), "Running technical analysis");

        let current_price = bars
            .last()
            .map(|b| b.close)
            .ok_or(IndicatorError::InsufficientData {
                required: 1,
                actual: 0,
            })?;

        let series = self.calculate_indicators(bars)?;
        let signals = self.detect_signals(&series)?;
        let trend = self.detect_trend(&series);

        let support_resistance = match calculate_support_resistance(
            symbol,
            &series,
            LevelMethod::Fibonacci,
            self.config.levels.lookback,
            &self.config.levels,
        ) {
            Ok(levels) => Some(levels),
            Err(IndicatorError::InsufficientData { required, actual }) => {
                warn!(symbol, required, actual, "Skipping support/resistance: not enough bars");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(TechnicalReport {
            symbol: symbol.to_string(),
            current_price,
            trend,
            signals,
            support_resistance,
            indicators: IndicatorSnapshot::latest(&series),
        })
    }
}
