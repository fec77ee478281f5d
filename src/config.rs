//! Engine configuration.
//!
//! Every parameter the indicator, signal and level operations depend on lives
//! in [`EngineConfig`] and is passed in explicitly. Environment variables are
//! only consulted by [`EngineConfig::from_env`], which callers invoke at the
//! edge of the process.

use crate::indicators::error::IndicatorError;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Deployment environment, from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KdjParams {
    pub n: usize,
    pub m1: usize,
    pub m2: usize,
}

impl Default for KdjParams {
    fn default() -> Self {
        Self { n: 9, m1: 3, m2: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub period: usize,
    pub k: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            k: 2.0,
        }
    }
}

/// Periods and smoothing constants of the Indicator Engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub ma_periods: Vec<usize>,
    pub macd: MacdParams,
    pub kdj: KdjParams,
    pub rsi_periods: Vec<usize>,
    pub bollinger: BollingerParams,
    pub volume_ma_periods: Vec<usize>,
    /// Average the `volume_ratio` divides by.
    pub volume_ratio_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_periods: vec![5, 10, 20, 60, 120, 250],
            macd: MacdParams::default(),
            kdj: KdjParams::default(),
            rsi_periods: vec![6, 12, 24],
            bollinger: BollingerParams::default(),
            volume_ma_periods: vec![5, 10],
            volume_ratio_period: 5,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        check_periods("ma_periods", &self.ma_periods)?;
        check_periods("rsi_periods", &self.rsi_periods)?;
        check_periods("volume_ma_periods", &self.volume_ma_periods)?;
        if self.volume_ratio_period == 0 {
            return Err(IndicatorError::InvalidConfig(
                "volume_ratio_period must be > 0".to_string(),
            ));
        }

        let MacdParams { fast, slow, signal } = self.macd;
        if fast == 0 || slow == 0 || signal == 0 {
            return Err(IndicatorError::InvalidConfig(
                "MACD periods must be > 0".to_string(),
            ));
        }
        if fast >= slow {
            return Err(IndicatorError::InvalidConfig(format!(
                "MACD fast period ({}) must be below slow period ({})",
                fast, slow
            )));
        }

        let KdjParams { n, m1, m2 } = self.kdj;
        if n == 0 || m1 == 0 || m2 == 0 {
            return Err(IndicatorError::InvalidConfig(
                "KDJ parameters must be > 0".to_string(),
            ));
        }

        if self.bollinger.period == 0 {
            return Err(IndicatorError::InvalidConfig(
                "Bollinger period must be > 0".to_string(),
            ));
        }
        if !self.bollinger.k.is_finite() || self.bollinger.k < 0.0 {
            return Err(IndicatorError::InvalidConfig(format!(
                "Bollinger multiplier must be a non-negative number, got {}",
                self.bollinger.k
            )));
        }
        Ok(())
    }
}

fn check_periods(name: &str, periods: &[usize]) -> Result<(), IndicatorError> {
    if periods.is_empty() {
        return Err(IndicatorError::InvalidConfig(format!("{} must not be empty", name)));
    }
    if periods.contains(&0) {
        return Err(IndicatorError::InvalidConfig(format!("{} must be > 0", name)));
    }
    Ok(())
}

/// Thresholds and inputs of the Signal Detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    pub kdj_overbought: f64,
    pub kdj_oversold: f64,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    /// RSI period classified into `rsi_signal`.
    pub rsi_period: usize,
    pub ma_fast: usize,
    pub ma_slow: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            kdj_overbought: 80.0,
            kdj_oversold: 20.0,
            rsi_overbought: 80.0,
            rsi_oversold: 20.0,
            rsi_period: 6,
            ma_fast: 5,
            ma_slow: 20,
        }
    }
}

/// Parameters of the Level Calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub lookback: usize,
    /// Averages used by the `ma` method, in reporting order.
    pub ma_periods: Vec<usize>,
    /// How many extreme highs/lows the `historical` method keeps.
    pub historical_extremes: usize,
    /// Decimal places prices are rounded to.
    pub price_precision: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            lookback: 60,
            ma_periods: vec![5, 10, 20, 60],
            historical_extremes: 5,
            price_precision: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub indicators: IndicatorConfig,
    pub signals: SignalConfig,
    pub levels: LevelConfig,
}

impl EngineConfig {
    /// Defaults overridden by `KLINE_MA_PERIODS`, `KLINE_RSI_PERIODS` and
    /// `KLINE_LEVEL_LOOKBACK`. Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(periods) = env_periods("KLINE_MA_PERIODS") {
            config.indicators.ma_periods = periods;
        }
        if let Some(periods) = env_periods("KLINE_RSI_PERIODS") {
            config.indicators.rsi_periods = periods;
        }
        if let Ok(raw) = env::var("KLINE_LEVEL_LOOKBACK") {
            match raw.trim().parse::<usize>() {
                Ok(lookback) if lookback > 0 => config.levels.lookback = lookback,
                _ => warn!(value = %raw, "Ignoring invalid KLINE_LEVEL_LOOKBACK"),
            }
        }

        config
    }

    pub fn validate(&self) -> Result<(), IndicatorError> {
        self.indicators.validate()?;
        if self.levels.lookback == 0 {
            return Err(IndicatorError::InvalidConfig(
                "lookback must be > 0".to_string(),
            ));
        }
        check_periods("levels.ma_periods", &self.levels.ma_periods)
    }
}

fn env_periods(key: &str) -> Option<Vec<usize>> {
    let raw = env::var(key).ok()?;
    match parse_periods(&raw) {
        Some(periods) => Some(periods),
        None => {
            warn!(key = key, value = %raw, "Ignoring invalid period list");
            None
        }
    }
}

/// Parse a comma-separated list of positive periods, e.g. `"5,10,20"`.
pub fn parse_periods(raw: &str) -> Option<Vec<usize>> {
    let periods = raw
        .split(',')
        .map(|part| part.trim().parse::<usize>().ok().filter(|p| *p > 0))
        .collect::<Option<Vec<_>>>()?;
    if periods.is_empty() {
        None
    } else {
        Some(periods)
    }
}
