//! KDJ stochastic oscillator
//!
//! RSV = (close - lowest low) / (highest high - lowest low) * 100 over `n` bars
//! K   = RSV smoothed with weight 1/m1, seeded with the first RSV
//! D   = K smoothed with weight 1/m2
//! J   = 3K - 2D (unbounded)

use crate::common::math;
use crate::config::KdjParams;
use crate::indicators::Column;
use crate::models::indicators::{KDJ_D, KDJ_J, KDJ_K};
use crate::models::Bar;

/// RSV reported for a flat window where high equals low
pub const FLAT_RSV: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct KdjSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
    pub j: Vec<f64>,
}

impl KdjSeries {
    pub fn into_columns(self) -> Vec<Column> {
        vec![
            (KDJ_K.to_string(), self.k),
            (KDJ_D.to_string(), self.d),
            (KDJ_J.to_string(), self.j),
        ]
    }
}

/// Raw stochastic value per bar over a trailing `n`-bar window
pub fn calculate_rsv(bars: &[Bar], n: usize) -> Vec<f64> {
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let highest = math::rolling_max(&highs, n);
    let lowest = math::rolling_min(&lows, n);

    bars.iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(bar, (&high, &low))| {
            let range = high - low;
            if range == 0.0 {
                FLAT_RSV
            } else {
                (bar.close - low) / range * 100.0
            }
        })
        .collect()
}

pub fn calculate_kdj(bars: &[Bar], params: &KdjParams) -> KdjSeries {
    let rsv = calculate_rsv(bars, params.n);
    let k = math::smooth(&rsv, 1.0 / params.m1.max(1) as f64);
    let d = math::smooth(&k, 1.0 / params.m2.max(1) as f64);
    let j = k.iter().zip(&d).map(|(k, d)| 3.0 * k - 2.0 * d).collect();

    KdjSeries { k, d, j }
}

/// Calculate KDJ with default parameters (9, 3, 3)
pub fn calculate_kdj_default(bars: &[Bar]) -> KdjSeries {
    calculate_kdj(bars, &KdjParams::default())
}
