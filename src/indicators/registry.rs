//! Indicator groups the engine can compute, and the fields each one produces

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
}

/// A selectable group of indicator fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Ma,
    Macd,
    Kdj,
    Rsi,
    Boll,
    Volume,
}

impl IndicatorKind {
    /// Every group, in computation order
    pub const ALL: [IndicatorKind; 6] = [
        IndicatorKind::Ma,
        IndicatorKind::Macd,
        IndicatorKind::Kdj,
        IndicatorKind::Rsi,
        IndicatorKind::Boll,
        IndicatorKind::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Ma => "ma",
            IndicatorKind::Macd => "macd",
            IndicatorKind::Kdj => "kdj",
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Boll => "boll",
            IndicatorKind::Volume => "volume",
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Ma => IndicatorCategory::Trend,
            IndicatorKind::Macd | IndicatorKind::Kdj | IndicatorKind::Rsi => {
                IndicatorCategory::Momentum
            }
            IndicatorKind::Boll => IndicatorCategory::Volatility,
            IndicatorKind::Volume => IndicatorCategory::Volume,
        }
    }

    /// Output fields this group adds to every bar under `config`
    pub fn field_names(&self, config: &IndicatorConfig) -> Vec<String> {
        match self {
            IndicatorKind::Ma => config.ma_periods.iter().map(|&p| ma_field(p)).collect(),
            IndicatorKind::Macd => vec![
                MACD_DIF.to_string(),
                MACD_DEA.to_string(),
                MACD_HIST.to_string(),
            ],
            IndicatorKind::Kdj => vec![KDJ_K.to_string(), KDJ_D.to_string(), KDJ_J.to_string()],
            IndicatorKind::Rsi => config.rsi_periods.iter().map(|&p| rsi_field(p)).collect(),
            IndicatorKind::Boll => vec![
                BOLL_UPPER.to_string(),
                BOLL_MID.to_string(),
                BOLL_LOWER.to_string(),
            ],
            IndicatorKind::Volume => {
                let mut fields: Vec<String> = config
                    .volume_ma_periods
                    .iter()
                    .map(|&p| volume_ma_field(p))
                    .collect();
                fields.push(VOLUME_RATIO.to_string());
                fields
            }
        }
    }

    /// Group that produces `field` under `config`, if any
    pub fn for_field(field: &str, config: &IndicatorConfig) -> Option<IndicatorKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.field_names(config).iter().any(|f| f == field))
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ma" => Ok(IndicatorKind::Ma),
            "macd" => Ok(IndicatorKind::Macd),
            "kdj" => Ok(IndicatorKind::Kdj),
            "rsi" => Ok(IndicatorKind::Rsi),
            "boll" => Ok(IndicatorKind::Boll),
            "volume" => Ok(IndicatorKind::Volume),
            _ => Err(IndicatorError::UnknownIndicator(s.to_string())),
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a list of group names, dropping duplicates and keeping
/// computation order.
pub fn parse_selection<S: AsRef<str>>(names: &[S]) -> Result<Vec<IndicatorKind>, IndicatorError> {
    let mut kinds = names
        .iter()
        .map(|name| name.as_ref().parse::<IndicatorKind>())
        .collect::<Result<Vec<_>, _>>()?;
    kinds.sort();
    kinds.dedup();
    Ok(kinds)
}
