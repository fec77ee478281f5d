//! Categorical signal vocabularies and the per-call signal set

use serde::{Deserialize, Serialize};
use std::fmt;

/// MACD histogram zero-line crossover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdSignal {
    GoldenCross,
    DeadCross,
    #[default]
    None,
}

/// Overbought/oversold zone of a bounded oscillator (KDJ, RSI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OscillatorSignal {
    Overbought,
    Oversold,
    #[default]
    None,
}

/// Fast/slow moving-average alignment with the close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaSignal {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// Close relative to the Bollinger envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BollSignal {
    BreakoutUp,
    BreakoutDown,
    #[default]
    WithinBand,
}

/// Aggregate call over the individual signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallSignal {
    StrongBuy,
    Buy,
    #[default]
    Neutral,
    Sell,
    StrongSell,
}

/// Trend read from the fast/medium/slow moving averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendState {
    Uptrend,
    Downtrend,
    Sideways,
    #[default]
    Unknown,
}

impl MacdSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacdSignal::GoldenCross => "golden_cross",
            MacdSignal::DeadCross => "dead_cross",
            MacdSignal::None => "none",
        }
    }
}

impl OscillatorSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            OscillatorSignal::Overbought => "overbought",
            OscillatorSignal::Oversold => "oversold",
            OscillatorSignal::None => "none",
        }
    }
}

impl MaSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaSignal::Bullish => "bullish",
            MaSignal::Bearish => "bearish",
            MaSignal::Neutral => "neutral",
        }
    }
}

impl BollSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            BollSignal::BreakoutUp => "breakout_up",
            BollSignal::BreakoutDown => "breakout_down",
            BollSignal::WithinBand => "within_band",
        }
    }
}

impl OverallSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallSignal::StrongBuy => "strong_buy",
            OverallSignal::Buy => "buy",
            OverallSignal::Neutral => "neutral",
            OverallSignal::Sell => "sell",
            OverallSignal::StrongSell => "strong_sell",
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, OverallSignal::StrongBuy | OverallSignal::Buy)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, OverallSignal::StrongSell | OverallSignal::Sell)
    }
}

impl TrendState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendState::Uptrend => "uptrend",
            TrendState::Downtrend => "downtrend",
            TrendState::Sideways => "sideways",
            TrendState::Unknown => "unknown",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(MacdSignal, OscillatorSignal, MaSignal, BollSignal, OverallSignal, TrendState);

/// Signals derived from the last two bars of an augmented series.
///
/// `Default` is the all-neutral set returned for series shorter than two bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalSet {
    pub macd_signal: MacdSignal,
    pub kdj_signal: OscillatorSignal,
    pub rsi_signal: OscillatorSignal,
    pub ma_signal: MaSignal,
    pub boll_signal: BollSignal,
    pub overall: OverallSignal,
}
