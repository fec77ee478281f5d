//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (k * sample standard deviation)
//! Lower Band = Middle - (k * sample standard deviation)

use crate::common::math;
use crate::config::BollingerParams;
use crate::indicators::Column;
use crate::models::indicators::{BOLL_LOWER, BOLL_MID, BOLL_UPPER};

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub mid: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerSeries {
    pub fn into_columns(self) -> Vec<Column> {
        vec![
            (BOLL_UPPER.to_string(), self.upper),
            (BOLL_MID.to_string(), self.mid),
            (BOLL_LOWER.to_string(), self.lower),
        ]
    }
}

pub fn calculate_bollinger_bands(closes: &[f64], params: &BollingerParams) -> BollingerSeries {
    let mid = math::sma(closes, params.period);
    let std = math::rolling_std(closes, params.period);

    let upper = mid.iter().zip(&std).map(|(m, s)| m + params.k * s).collect();
    let lower = mid.iter().zip(&std).map(|(m, s)| m - params.k * s).collect();

    BollingerSeries { upper, mid, lower }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerSeries {
    calculate_bollinger_bands(closes, &BollingerParams::default())
}
