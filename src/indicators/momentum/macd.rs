//! MACD (Moving Average Convergence Divergence) indicator
//!
//! DIF  = EMA(fast) - EMA(slow)
//! DEA  = EMA(signal) of DIF
//! HIST = 2 * (DIF - DEA)

use crate::common::math;
use crate::config::MacdParams;
use crate::indicators::Column;
use crate::models::indicators::{MACD_DEA, MACD_DIF, MACD_HIST};

#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub dif: Vec<f64>,
    pub dea: Vec<f64>,
    pub hist: Vec<f64>,
}

impl MacdSeries {
    pub fn into_columns(self) -> Vec<Column> {
        vec![
            (MACD_DIF.to_string(), self.dif),
            (MACD_DEA.to_string(), self.dea),
            (MACD_HIST.to_string(), self.hist),
        ]
    }
}

pub fn calculate_macd(closes: &[f64], params: &MacdParams) -> MacdSeries {
    let fast = math::ema(closes, params.fast);
    let slow = math::ema(closes, params.slow);

    let dif: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let dea = math::ema(&dif, params.signal);
    let hist = dif.iter().zip(&dea).map(|(d, e)| 2.0 * (d - e)).collect();

    MacdSeries { dif, dea, hist }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, &MacdParams::default())
}
