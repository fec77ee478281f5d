//! Volume indicators: volume moving averages and volume ratio

use crate::common::math;
use crate::indicators::Column;
use crate::models::indicators::{volume_ma_field, VOLUME_RATIO};
use crate::models::Bar;

/// Volume averages, one per configured period, plus the ratio of each bar's
/// volume to its `ratio_period` average
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSeries {
    pub averages: Vec<(usize, Vec<f64>)>,
    pub ratio: Vec<f64>,
}

impl VolumeSeries {
    pub fn into_columns(self) -> Vec<Column> {
        let mut columns: Vec<Column> = self
            .averages
            .into_iter()
            .map(|(period, values)| (volume_ma_field(period), values))
            .collect();
        columns.push((VOLUME_RATIO.to_string(), self.ratio));
        columns
    }
}

/// `volume / average`, 0 when the average is 0
pub fn volume_ratio(volume: f64, average: f64) -> f64 {
    if average == 0.0 {
        0.0
    } else {
        volume / average
    }
}

pub fn calculate_volume_indicators(
    bars: &[Bar],
    periods: &[usize],
    ratio_period: usize,
) -> VolumeSeries {
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume as f64).collect();
    let averages: Vec<(usize, Vec<f64>)> = periods
        .iter()
        .map(|&period| (period, math::sma(&volumes, period)))
        .collect();

    let base = match averages.iter().find(|(period, _)| *period == ratio_period) {
        Some((_, values)) => values.clone(),
        None => math::sma(&volumes, ratio_period),
    };
    let ratio = volumes
        .iter()
        .zip(&base)
        .map(|(&v, &avg)| volume_ratio(v, avg))
        .collect();

    VolumeSeries { averages, ratio }
}
