use crate::test_utils::*;
use klinesight::config::MacdParams;
use klinesight::indicators::momentum::{calculate_macd, calculate_macd_default};

#[test]
fn test_macd_flat_series_is_zero() {
    let macd = calculate_macd_default(&[25.0; 40]);
    assert!(macd.dif.iter().all(|&v| v == 0.0));
    assert!(macd.dea.iter().all(|&v| v == 0.0));
    assert!(macd.hist.iter().all(|&v| v == 0.0));
}

#[test]
fn test_macd_second_bar() {
    let macd = calculate_macd_default(&[10.0, 20.0]);
    let dif = 10.0 * (2.0 / 13.0) - 10.0 * (2.0 / 27.0);

    assert_close(macd.dif[0], 0.0);
    assert_close(macd.dif[1], dif);
    assert_close(macd.dea[1], 0.2 * dif);
    assert_close(macd.hist[1], 2.0 * (dif - 0.2 * dif));
}

#[test]
fn test_macd_rising_series_has_positive_dif() {
    let closes = linear_closes(60, 10.0, 40.0);
    let macd = calculate_macd(&closes, &MacdParams::default());

    assert_eq!(macd.dif.len(), 60);
    assert!(macd.dif[1..].iter().all(|&v| v > 0.0));
    for i in 0..60 {
        assert_close(macd.hist[i], 2.0 * (macd.dif[i] - macd.dea[i]));
    }
}

#[test]
fn test_macd_columns() {
    let columns = calculate_macd_default(&[1.0, 2.0, 3.0]).into_columns();
    let names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["macd_dif", "macd_dea", "macd_hist"]);
}
