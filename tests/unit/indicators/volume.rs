use crate::test_utils::*;
use klinesight::indicators::volume::*;
use klinesight::models::Bar;

fn bars_with_volumes(volumes: &[u64]) -> Vec<Bar> {
    volumes
        .iter()
        .enumerate()
        .map(|(i, &v)| Bar::new(day(i), 10.0, 10.0, 10.0, 10.0, v))
        .collect()
}

#[test]
fn test_volume_averages_and_ratio() {
    let series = calculate_volume_indicators(&bars_with_volumes(&[100, 200, 300]), &[5, 10], 5);

    assert_eq!(series.averages.len(), 2);
    assert_eq!(series.averages[0].0, 5);
    assert_eq!(series.averages[0].1, vec![100.0, 150.0, 200.0]);
    assert_close(series.ratio[0], 1.0);
    assert_close(series.ratio[1], 200.0 / 150.0);
    assert_close(series.ratio[2], 1.5);
}

#[test]
fn test_volume_ratio_zero_average() {
    assert_eq!(volume_ratio(0.0, 0.0), 0.0);
    let series = calculate_volume_indicators(&bars_with_volumes(&[0, 0, 0]), &[5], 5);
    assert!(series.ratio.iter().all(|&v| v == 0.0));
}

#[test]
fn test_volume_columns() {
    let columns = calculate_volume_indicators(&bars_with_volumes(&[1, 2]), &[5, 10], 5).into_columns();
    let names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["volume_ma5", "volume_ma10", "volume_ratio"]);
}

#[test]
fn test_volume_ratio_ignores_period_order() {
    let volumes: Vec<u64> = (1..=12).map(|i| i * 100).collect();
    let bars = bars_with_volumes(&volumes);

    let ordered = calculate_volume_indicators(&bars, &[5, 10], 5);
    let reversed = calculate_volume_indicators(&bars, &[10, 5], 5);
    assert_eq!(ordered.ratio, reversed.ratio);

    // last five volumes average 1000
    assert_close(reversed.ratio[11], 1.2);
}

#[test]
fn test_volume_ratio_period_outside_averages() {
    let series = calculate_volume_indicators(&bars_with_volumes(&[100, 300]), &[10], 1);
    assert_close(series.ratio[0], 1.0);
    assert_close(series.ratio[1], 1.0);
}
