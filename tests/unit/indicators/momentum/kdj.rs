use crate::test_utils::*;
use klinesight::config::KdjParams;
use klinesight::indicators::momentum::{calculate_kdj, calculate_kdj_default, calculate_rsv, FLAT_RSV};
use klinesight::models::Bar;

fn ramp() -> Vec<Bar> {
    vec![
        Bar::new(day(0), 9.0, 10.0, 8.0, 9.0, 100),
        Bar::new(day(1), 9.0, 12.0, 9.0, 12.0, 100),
        Bar::new(day(2), 12.0, 14.0, 11.0, 14.0, 100),
    ]
}

#[test]
fn test_rsv_over_trailing_window() {
    let rsv = calculate_rsv(&ramp(), 9);
    assert_close(rsv[0], 50.0);
    assert_close(rsv[1], 100.0);
    assert_close(rsv[2], 100.0);
}

#[test]
fn test_rsv_flat_window() {
    let rsv = calculate_rsv(&flat_bars(5, 10.0), 9);
    assert!(rsv.iter().all(|&v| v == FLAT_RSV));
}

#[test]
fn test_kdj_smoothing() {
    let kdj = calculate_kdj_default(&ramp());

    assert_close(kdj.k[0], 50.0);
    assert_close(kdj.d[0], 50.0);
    assert_close(kdj.j[0], 50.0);

    assert_close(kdj.k[1], 200.0 / 3.0);
    assert_close(kdj.d[1], 500.0 / 9.0);
    assert_close(kdj.j[1], 800.0 / 9.0);
}

#[test]
fn test_kdj_j_is_unbounded() {
    let kdj = calculate_kdj_default(&ramp());
    assert!(kdj.j[2] > 100.0);
    assert!(kdj.k[2] <= 100.0);
}

#[test]
fn test_kdj_flat_series_stays_at_fifty() {
    let kdj = calculate_kdj(&flat_bars(30, 42.0), &KdjParams::default());
    assert!(kdj.k.iter().all(|&v| v == 50.0));
    assert!(kdj.d.iter().all(|&v| v == 50.0));
    assert!(kdj.j.iter().all(|&v| v == 50.0));
}

#[test]
fn test_kdj_m1_of_one_tracks_rsv() {
    let bars = ramp();
    let kdj = calculate_kdj(&bars, &KdjParams { n: 9, m1: 1, m2: 3 });
    assert_eq!(kdj.k, calculate_rsv(&bars, 9));
}
