//! Aggregate call over the individual indicator signals

use crate::models::signal::{BollSignal, MaSignal, MacdSignal, OscillatorSignal, OverallSignal};

/// Bullish and bearish vote counts over macd, kdj, ma and boll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalVotes {
    pub bullish: usize,
    pub bearish: usize,
}

impl SignalVotes {
    /// A KDJ that is merely not overbought counts as bullish.
    pub fn count(macd: MacdSignal, kdj: OscillatorSignal, ma: MaSignal, boll: BollSignal) -> Self {
        let bullish = [
            macd == MacdSignal::GoldenCross,
            kdj != OscillatorSignal::Overbought,
            ma == MaSignal::Bullish,
            boll == BollSignal::BreakoutUp,
        ];
        let bearish = [
            macd == MacdSignal::DeadCross,
            kdj == OscillatorSignal::Overbought,
            ma == MaSignal::Bearish,
            boll == BollSignal::BreakoutDown,
        ];

        Self {
            bullish: bullish.iter().filter(|&&hit| hit).count(),
            bearish: bearish.iter().filter(|&&hit| hit).count(),
        }
    }

    /// Bullish thresholds are checked first and win when both sides qualify.
    pub fn overall(&self) -> OverallSignal {
        if self.bullish >= 3 {
            OverallSignal::StrongBuy
        } else if self.bullish >= 2 {
            OverallSignal::Buy
        } else if self.bearish >= 3 {
            OverallSignal::StrongSell
        } else if self.bearish >= 2 {
            OverallSignal::Sell
        } else {
            OverallSignal::Neutral
        }
    }
}

pub fn aggregate(
    macd: MacdSignal,
    kdj: OscillatorSignal,
    ma: MaSignal,
    boll: BollSignal,
) -> OverallSignal {
    SignalVotes::count(macd, kdj, ma, boll).overall()
}
