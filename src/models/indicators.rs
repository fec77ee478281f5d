//! Indicator field names and the latest-value snapshot.
//!
//! Field names are consumed verbatim by downstream scoring code.

use crate::models::bar::AugmentedBar;
use serde::{Deserialize, Serialize};

pub const MACD_DIF: &str = "macd_dif";
pub const MACD_DEA: &str = "macd_dea";
pub const MACD_HIST: &str = "macd_hist";

pub const KDJ_K: &str = "kdj_k";
pub const KDJ_D: &str = "kdj_d";
pub const KDJ_J: &str = "kdj_j";

pub const BOLL_UPPER: &str = "boll_upper";
pub const BOLL_MID: &str = "boll_mid";
pub const BOLL_LOWER: &str = "boll_lower";

pub const VOLUME_RATIO: &str = "volume_ratio";

pub fn ma_field(period: usize) -> String {
    format!("ma{}", period)
}

pub fn rsi_field(period: usize) -> String {
    format!("rsi{}", period)
}

pub fn volume_ma_field(period: usize) -> String {
    format!("volume_ma{}", period)
}

/// Where the close sits relative to the Bollinger envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BollPosition {
    BreakoutUp,
    Upper,
    Mid,
    Lower,
    BreakoutDown,
}

impl BollPosition {
    pub fn classify(close: f64, upper: f64, mid: f64, lower: f64) -> Self {
        if close > upper {
            BollPosition::BreakoutUp
        } else if close < lower {
            BollPosition::BreakoutDown
        } else if close > mid {
            BollPosition::Upper
        } else if close < mid {
            BollPosition::Lower
        } else {
            BollPosition::Mid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BollPosition::BreakoutUp => "breakout_up",
            BollPosition::Upper => "upper",
            BollPosition::Mid => "mid",
            BollPosition::Lower => "lower",
            BollPosition::BreakoutDown => "breakout_down",
        }
    }
}

/// Typed view of the indicator values on the most recent bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub ma120: Option<f64>,
    pub ma250: Option<f64>,

    pub macd_dif: Option<f64>,
    pub macd_dea: Option<f64>,
    pub macd_hist: Option<f64>,

    pub kdj_k: Option<f64>,
    pub kdj_d: Option<f64>,
    pub kdj_j: Option<f64>,

    pub rsi6: Option<f64>,
    pub rsi12: Option<f64>,
    pub rsi24: Option<f64>,

    pub boll_upper: Option<f64>,
    pub boll_mid: Option<f64>,
    pub boll_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boll_position: Option<BollPosition>,

    pub volume_ma5: Option<f64>,
    pub volume_ma10: Option<f64>,
    pub volume_ratio: Option<f64>,
}

impl IndicatorSnapshot {
    pub fn from_bar(bar: &AugmentedBar) -> Self {
        let boll_upper = bar.get(BOLL_UPPER);
        let boll_mid = bar.get(BOLL_MID);
        let boll_lower = bar.get(BOLL_LOWER);
        let boll_position = match (boll_upper, boll_mid, boll_lower) {
            (Some(upper), Some(mid), Some(lower)) => {
                Some(BollPosition::classify(bar.close(), upper, mid, lower))
            }
            _ => None,
        };

        Self {
            ma5: bar.get("ma5"),
            ma10: bar.get("ma10"),
            ma20: bar.get("ma20"),
            ma60: bar.get("ma60"),
            ma120: bar.get("ma120"),
            ma250: bar.get("ma250"),
            macd_dif: bar.get(MACD_DIF),
            macd_dea: bar.get(MACD_DEA),
            macd_hist: bar.get(MACD_HIST),
            kdj_k: bar.get(KDJ_K),
            kdj_d: bar.get(KDJ_D),
            kdj_j: bar.get(KDJ_J),
            rsi6: bar.get("rsi6"),
            rsi12: bar.get("rsi12"),
            rsi24: bar.get("rsi24"),
            boll_upper,
            boll_mid,
            boll_lower,
            boll_position,
            volume_ma5: bar.get("volume_ma5"),
            volume_ma10: bar.get("volume_ma10"),
            volume_ratio: bar.get(VOLUME_RATIO),
        }
    }

    /// Snapshot of the last bar, empty for an empty series.
    pub fn latest(series: &[AugmentedBar]) -> Self {
        series.last().map(Self::from_bar).unwrap_or_default()
    }
}
