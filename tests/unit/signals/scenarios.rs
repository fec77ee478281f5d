//! End-to-end scenarios over the indicator, signal and level operations

use crate::test_utils::*;
use klinesight::common::math::ema_alpha;
use klinesight::config::{EngineConfig, IndicatorConfig, LevelConfig};
use klinesight::indicators::compute_indicators;
use klinesight::indicators::structure::calculate_support_resistance;
use klinesight::models::{BollSignal, LevelMethod, MaSignal, OscillatorSignal, OverallSignal};
use klinesight::signals::engine::SignalEngine;
use klinesight::IndicatorError;

#[test]
fn test_flat_series_indicators() {
    let series = compute_indicators(&flat_bars(30, 10.0), &IndicatorConfig::default()).unwrap();

    for bar in &series {
        assert_eq!(bar.get("rsi6"), Some(50.0));
        assert_eq!(bar.get("macd_hist"), Some(0.0));
        assert_eq!(bar.get("boll_upper"), Some(10.0));
        assert_eq!(bar.get("boll_mid"), Some(10.0));
        assert_eq!(bar.get("boll_lower"), Some(10.0));
    }
}

#[test]
fn test_rising_series_is_bullish_with_ordered_levels() {
    let bars = bars_with_wicks(&linear_closes(60, 10.0, 20.0), 0.05);
    let config = EngineConfig::default();

    let signals = SignalEngine::detect_bars(&bars, &config).unwrap();
    assert!(signals.overall.is_bullish(), "got {}", signals.overall);

    let levels =
        calculate_support_resistance("UP", &bars, LevelMethod::Fibonacci, 60, &config.levels).unwrap();
    let highest_support = levels.support_levels.iter().copied().fold(f64::MIN, f64::max);
    let lowest_resistance = levels.resistance_levels.iter().copied().fold(f64::MAX, f64::min);
    assert!(highest_support < lowest_resistance);
}

#[test]
fn test_rising_series_without_wicks_is_overbought() {
    // close == high on every bar pins RSV at 100
    let bars = bars_from_closes(&linear_closes(60, 10.0, 20.0));
    let signals = SignalEngine::detect_bars(&bars, &EngineConfig::default()).unwrap();

    assert_eq!(signals.kdj_signal, OscillatorSignal::Overbought);
    assert_eq!(signals.ma_signal, MaSignal::Bullish);
    assert_eq!(signals.boll_signal, BollSignal::WithinBand);
    assert_eq!(signals.overall, OverallSignal::Neutral);
}

#[test]
fn test_single_bar_series() {
    let series = compute_indicators(&flat_bars(1, 42.0), &IndicatorConfig::default()).unwrap();
    assert_eq!(series.len(), 1);

    let bar = &series[0];
    for field in ["ma5", "ma10", "ma20", "ma60", "ma120", "ma250"] {
        assert_eq!(bar.get(field), Some(42.0));
    }
    assert_eq!(bar.get("macd_dif"), Some(0.0));
    assert_eq!(bar.get("kdj_k"), Some(50.0));
    assert_eq!(bar.get("kdj_d"), Some(50.0));
    assert_eq!(bar.get("kdj_j"), Some(50.0));
}

#[test]
fn test_lookback_longer_than_series() {
    let result = calculate_support_resistance(
        "SHORT",
        &choppy_bars(59),
        LevelMethod::Fibonacci,
        60,
        &LevelConfig::default(),
    );
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientData {
            required: 60,
            actual: 59
        })
    );
}

#[test]
fn test_falling_series_rsi_is_zero() {
    let bars = bars_from_closes(&linear_closes(20, 30.0, 10.0));
    let series = compute_indicators(&bars, &IndicatorConfig::default()).unwrap();

    assert_eq!(series[0].get("rsi6"), Some(50.0));
    for bar in &series[1..] {
        assert_eq!(bar.get("rsi6"), Some(0.0));
    }
}

#[test]
fn test_length_and_order_preserved() {
    for count in [0, 1, 2, 25, 300] {
        let bars = choppy_bars(count);
        let series = compute_indicators(&bars, &IndicatorConfig::default()).unwrap();
        assert_eq!(series.len(), count);
        for (augmented, bar) in series.iter().zip(&bars) {
            assert_eq!(augmented.date(), bar.date);
        }
    }
}

#[test]
fn test_sma_matches_window_mean() {
    let bars = choppy_bars(80);
    let series = compute_indicators(&bars, &IndicatorConfig::default()).unwrap();

    for period in [5, 20, 60] {
        for i in 0..bars.len() {
            let start = (i + 1).saturating_sub(period);
            let window = &bars[start..=i];
            let expected = window.iter().map(|b| b.close).sum::<f64>() / window.len() as f64;
            let actual = series[i].get(&format!("ma{}", period)).unwrap();
            assert!((actual - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn test_ema_matches_closed_form() {
    let bars = choppy_bars(40);
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let ema = klinesight::indicators::trend::calculate_ema(&closes, 12);
    let alpha = ema_alpha(12);

    for i in 0..closes.len() {
        let mut expected = (1.0 - alpha).powi(i as i32) * closes[0];
        for (k, close) in closes.iter().enumerate().take(i + 1).skip(1) {
            expected += alpha * (1.0 - alpha).powi((i - k) as i32) * close;
        }
        assert!((ema[i] - expected).abs() < 1e-9, "index {}", i);
    }
}

#[test]
fn test_macd_hist_identity_and_rsi_bounds() {
    let series = compute_indicators(&choppy_bars(250), &IndicatorConfig::default()).unwrap();

    for bar in &series {
        let dif = bar.get("macd_dif").unwrap();
        let dea = bar.get("macd_dea").unwrap();
        assert_eq!(bar.get("macd_hist"), Some(2.0 * (dif - dea)));

        for field in ["rsi6", "rsi12", "rsi24"] {
            let rsi = bar.get(field).unwrap();
            assert!((0.0..=100.0).contains(&rsi));
        }
    }
}

#[test]
fn test_deterministic_output() {
    let bars = choppy_bars(150);
    let config = IndicatorConfig::default();

    let first = serde_json::to_string(&compute_indicators(&bars, &config).unwrap()).unwrap();
    let second = serde_json::to_string(&compute_indicators(&bars, &config).unwrap()).unwrap();
    assert_eq!(first, second);
}
