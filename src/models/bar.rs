use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One daily price/volume bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

impl AsRef<Bar> for Bar {
    fn as_ref(&self) -> &Bar {
        self
    }
}

/// A bar plus the indicator values computed for it, keyed by field name
/// (`ma5`, `macd_hist`, `kdj_k`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentedBar {
    #[serde(flatten)]
    pub bar: Bar,
    #[serde(flatten)]
    pub indicators: BTreeMap<String, f64>,
}

impl AugmentedBar {
    pub fn new(bar: Bar) -> Self {
        Self {
            bar,
            indicators: BTreeMap::new(),
        }
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.indicators.get(field).copied()
    }

    pub fn has(&self, field: &str) -> bool {
        self.indicators.contains_key(field)
    }

    pub fn close(&self) -> f64 {
        self.bar.close
    }

    pub fn date(&self) -> NaiveDate {
        self.bar.date
    }
}

impl AsRef<Bar> for AugmentedBar {
    fn as_ref(&self) -> &Bar {
        &self.bar
    }
}

impl From<Bar> for AugmentedBar {
    fn from(bar: Bar) -> Self {
        Self::new(bar)
    }
}
