//! Support/resistance result model

use crate::indicators::error::IndicatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm used to project support/resistance levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelMethod {
    Fibonacci,
    Pivot,
    Ma,
    Historical,
}

impl LevelMethod {
    pub const ALL: [LevelMethod; 4] = [
        LevelMethod::Fibonacci,
        LevelMethod::Pivot,
        LevelMethod::Ma,
        LevelMethod::Historical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelMethod::Fibonacci => "fibonacci",
            LevelMethod::Pivot => "pivot",
            LevelMethod::Ma => "ma",
            LevelMethod::Historical => "historical",
        }
    }
}

impl FromStr for LevelMethod {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fibonacci" => Ok(LevelMethod::Fibonacci),
            "pivot" => Ok(LevelMethod::Pivot),
            "ma" => Ok(LevelMethod::Ma),
            "historical" => Ok(LevelMethod::Historical),
            _ => Err(IndicatorError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for LevelMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory derived from the price's position against the levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ApproachingSupport,
    ApproachingResistance,
    BrokeSupport,
    BrokeResistance,
    Ranging,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::ApproachingSupport => "approaching_support",
            Recommendation::ApproachingResistance => "approaching_resistance",
            Recommendation::BrokeSupport => "broke_support",
            Recommendation::BrokeResistance => "broke_resistance",
            Recommendation::Ranging => "ranging",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelResult {
    pub symbol: String,
    pub method: LevelMethod,
    pub lookback: usize,
    pub current_price: f64,
    pub pivot_point: Option<f64>,
    pub support_levels: Vec<f64>,
    pub resistance_levels: Vec<f64>,
    pub recommendation: Recommendation,
}
