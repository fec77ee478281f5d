use crate::test_utils::*;
use klinesight::config::BollingerParams;
use klinesight::indicators::volatility::*;

#[test]
fn test_bollinger_partial_window() {
    let boll = calculate_bollinger_bands_default(&[1.0, 2.0, 3.0]);

    assert_close(boll.mid[0], 1.0);
    assert_close(boll.upper[0], 1.0);
    assert_close(boll.lower[0], 1.0);

    assert_close(boll.mid[2], 2.0);
    assert_close(boll.upper[2], 4.0);
    assert_close(boll.lower[2], 0.0);
}

#[test]
fn test_bollinger_band_ordering() {
    let closes: Vec<f64> = choppy_bars(120).iter().map(|b| b.close).collect();
    let boll = calculate_bollinger_bands(&closes, &BollingerParams::default());

    for i in 0..closes.len() {
        assert!(boll.lower[i] <= boll.mid[i]);
        assert!(boll.mid[i] <= boll.upper[i]);
    }
}

#[test]
fn test_bollinger_flat_series_collapses() {
    let boll = calculate_bollinger_bands_default(&[12.0; 25]);
    assert!(boll.upper.iter().all(|&v| v == 12.0));
    assert!(boll.lower.iter().all(|&v| v == 12.0));
}

#[test]
fn test_bollinger_multiplier() {
    let params = BollingerParams { period: 20, k: 1.0 };
    let boll = calculate_bollinger_bands(&[1.0, 2.0, 3.0], &params);
    assert_close(boll.upper[2], 3.0);
    assert_close(boll.lower[2], 1.0);
}
